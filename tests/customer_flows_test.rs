use httpmock::prelude::*;
use httpmock::MockServer as Server;
use powerbill_client::app::engine::{Command, Outcome, PageEngine};
use powerbill_client::{HttpBillingApi, LocalStorage, Settings};
use tempfile::TempDir;

fn engine_for(
    server: &Server,
    output: &TempDir,
) -> PageEngine<HttpBillingApi, LocalStorage, Settings> {
    let settings = Settings {
        api_base: server.base_url(),
        output_path: output.path().to_str().unwrap().to_string(),
        ..Settings::default()
    };
    let api = HttpBillingApi::new(&settings.api_base).unwrap();
    let storage = LocalStorage::new(settings.output_path.clone());
    PageEngine::new(api, storage, settings)
}

fn mock_customer_session(server: &Server) {
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200).header("Content-Type", "application/json").json_body(
            serde_json::json!({"loggedIn": true, "username": "ravi", "role": "CUSTOMER"}),
        );
    });
}

fn read_page(output: &TempDir, page: &str) -> String {
    std::fs::read_to_string(output.path().join(page)).unwrap()
}

#[tokio::test]
async fn dashboard_shows_profile_bills_and_totals() {
    let server = Server::start();
    mock_customer_session(&server);
    let profile_mock = server.mock(|when, then| {
        when.method(GET).path("/api/customer/profile");
        then.status(200).header("Content-Type", "application/json").json_body(
            serde_json::json!({"id": 3, "name": "Ravi Kumar", "email": "ravi@x.io", "address": "Pune"}),
        );
    });
    let bills_mock = server.mock(|when, then| {
        when.method(GET).path("/api/customer/bills");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "unitsConsumed": 100.0, "amount": 350.0, "billDate": "2026-06-01"},
                {"id": 2, "unitsConsumed": 150.0, "amount": 600.0, "billDate": "2026-07-01"}
            ]));
    });

    let output = TempDir::new().unwrap();
    let mut engine = engine_for(&server, &output);
    let outcome = engine.run(Command::CustomerDashboard).await.unwrap();

    profile_mock.assert();
    bills_mock.assert();
    assert_eq!(
        outcome,
        Outcome::PageWritten {
            page: "customer-dashboard.html"
        }
    );

    let page = read_page(&output, "customer-dashboard.html");
    assert!(page.contains("id=\"profileCard\""));
    assert!(page.contains("Ravi Kumar"));
    assert!(page.contains("Customer ID:"));
    assert!(page.contains("id=\"myBillsTableBody\""));
    assert!(page.contains("₹350.00"));
    assert!(page.contains("id=\"statMyBills\">2<"));
    assert!(page.contains("id=\"statMyAmount\">₹950.00<"));
    assert!(page.contains("badge-customer"));
}

#[tokio::test]
async fn empty_bill_history_renders_placeholder() {
    let server = Server::start();
    mock_customer_session(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/customer/profile");
        then.status(200).header("Content-Type", "application/json").json_body(
            serde_json::json!({"id": 3, "name": "Ravi", "email": "ravi@x.io", "address": "Pune"}),
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/customer/bills");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let output = TempDir::new().unwrap();
    let mut engine = engine_for(&server, &output);
    engine.run(Command::CustomerDashboard).await.unwrap();

    let page = read_page(&output, "customer-dashboard.html");
    assert!(page.contains("No bills yet"));
    assert!(page.contains("id=\"statMyBills\">0<"));
    assert!(page.contains("id=\"statMyAmount\">₹0.00<"));
}

#[tokio::test]
async fn profile_failure_shows_danger_banner_but_page_still_renders() {
    let server = Server::start();
    mock_customer_session(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/customer/profile");
        then.status(404).header("Content-Type", "application/json").json_body(
            serde_json::json!({"message": "Customer profile not found for your account."}),
        );
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/customer/bills");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let output = TempDir::new().unwrap();
    let mut engine = engine_for(&server, &output);
    let outcome = engine.run(Command::CustomerDashboard).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::PageWritten {
            page: "customer-dashboard.html"
        }
    );
    let page = read_page(&output, "customer-dashboard.html");
    assert!(page.contains("alert-danger"));
    assert!(page.contains("Failed to load bills:") || page.contains("Failed to load profile:"));
}

#[tokio::test]
async fn admin_session_on_customer_dashboard_is_redirected() {
    let server = Server::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200).header("Content-Type", "application/json").json_body(
            serde_json::json!({"loggedIn": true, "username": "admin", "role": "ADMIN"}),
        );
    });

    let output = TempDir::new().unwrap();
    let mut engine = engine_for(&server, &output);
    let outcome = engine.run(Command::CustomerDashboard).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Redirected {
            target: "admin-dashboard.html"
        }
    );
    assert!(!output.path().join("customer-dashboard.html").exists());
}
