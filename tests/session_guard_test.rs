use httpmock::prelude::*;
use powerbill_client::api::session::{check_session, logout, AuthResult, DeniedReason, Navigation};
use powerbill_client::domain::model::Role;
use powerbill_client::HttpBillingApi;

fn session_body(username: &str, role: &str) -> serde_json::Value {
    serde_json::json!({"loggedIn": true, "username": username, "role": role})
}

#[tokio::test]
async fn admin_session_on_admin_page_is_authorized() {
    let server = MockServer::start();
    let check_mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(session_body("admin", "ADMIN"));
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    let result = check_session(&api, Some(Role::Admin)).await;

    check_mock.assert();
    let session = result.session().unwrap();
    assert_eq!(session.username, "admin");
    assert_eq!(session.role, Role::Admin);
}

#[tokio::test]
async fn customer_session_on_admin_page_redirects_to_customer_dashboard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(session_body("ravi", "CUSTOMER"));
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    match check_session(&api, Some(Role::Admin)).await {
        AuthResult::Denied { reason, redirect } => {
            assert_eq!(
                reason,
                DeniedReason::WrongRole {
                    actual: Role::Customer
                }
            );
            assert_eq!(redirect, Navigation::CustomerDashboard);
            assert_eq!(redirect.page(), "customer-dashboard.html");
        }
        AuthResult::Authorized(_) => panic!("expected denial"),
    }
}

#[tokio::test]
async fn admin_session_on_customer_page_redirects_to_admin_dashboard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(session_body("admin", "ADMIN"));
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    match check_session(&api, Some(Role::Customer)).await {
        AuthResult::Denied { redirect, .. } => {
            assert_eq!(redirect.page(), "admin-dashboard.html");
        }
        AuthResult::Authorized(_) => panic!("expected denial"),
    }
}

#[tokio::test]
async fn rejected_check_redirects_to_login() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "No active session."}));
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    match check_session(&api, Some(Role::Admin)).await {
        AuthResult::Denied { reason, redirect } => {
            assert_eq!(reason, DeniedReason::NotLoggedIn);
            assert_eq!(redirect.page(), "login.html");
        }
        AuthResult::Authorized(_) => panic!("expected denial"),
    }
}

#[tokio::test]
async fn no_expected_role_accepts_any_session() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/check");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(session_body("ravi", "CUSTOMER"));
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    assert!(check_session(&api, None).await.session().is_some());
}

#[tokio::test]
async fn logout_posts_and_lands_on_login_even_when_it_fails() {
    let server = MockServer::start();
    let logout_mock = server.mock(|when, then| {
        when.method(POST).path("/api/logout");
        then.status(500).body("oops");
    });

    let api = HttpBillingApi::new(&server.base_url()).unwrap();
    let target = logout(&api).await;

    logout_mock.assert();
    assert_eq!(target.page(), "login.html");
}
