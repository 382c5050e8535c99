use crate::domain::model::Customer;
use crate::templates::{html_escape, layout};
use std::fmt::Write;

/// Rows for the `customersTableBody` slot. An empty list renders the
/// placeholder row, never an empty body.
pub fn render_customer_rows(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "<tr><td colspan=\"5\" class=\"text-center text-muted py-3\">No customers found</td></tr>".to_string();
    }

    let mut html = String::new();
    for c in customers {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><button class=\"btn btn-danger btn-sm\" data-customer-id=\"{}\">🗑 Delete</button></td></tr>",
            c.id,
            html_escape(&c.name),
            html_escape(&c.email),
            html_escape(&c.address),
            c.id
        )
        .ok();
    }
    html
}

/// Options for the `billCustomerSelect` control on the bills page. Fed by its
/// own customer fetch, independent of the customer table.
pub fn render_customer_options(customers: &[Customer]) -> String {
    let mut html = String::from("<option value=\"\">— Select customer —</option>\n");
    for c in customers {
        writeln!(
            html,
            "<option value=\"{}\">{} (ID: {})</option>",
            c.id,
            html_escape(&c.name),
            c.id
        )
        .ok();
    }
    html
}

pub fn render_customers_page(nav_user: &str, alert: &str, rows: &str) -> String {
    let mut main = String::new();
    writeln!(main, "<h2>Customers</h2>").ok();
    writeln!(main, "<table class=\"table\">").ok();
    writeln!(
        main,
        "<thead><tr><th>ID</th><th>Name</th><th>Email</th><th>Address</th><th></th></tr></thead>"
    )
    .ok();
    writeln!(main, "<tbody id=\"customersTableBody\">").ok();
    main.push_str(rows);
    writeln!(main, "</tbody></table>").ok();

    // 新增客戶表單
    writeln!(main, "<form id=\"customerForm\">").ok();
    writeln!(
        main,
        "  <input id=\"custName\" name=\"name\" placeholder=\"Name\">"
    )
    .ok();
    writeln!(
        main,
        "  <input id=\"custEmail\" name=\"email\" placeholder=\"Email\">"
    )
    .ok();
    writeln!(
        main,
        "  <input id=\"custAddress\" name=\"address\" placeholder=\"Address\">"
    )
    .ok();
    writeln!(
        main,
        "  <button type=\"submit\" class=\"btn btn-primary\">Add customer</button>"
    )
    .ok();
    writeln!(main, "</form>").ok();

    layout::render_page("Customers", nav_user, alert, &main)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "Pune".to_string(),
        }
    }

    #[test]
    fn empty_list_renders_placeholder_row() {
        let html = render_customer_rows(&[]);
        assert!(html.contains("No customers found"));
        assert!(html.contains("colspan=\"5\""));
    }

    #[test]
    fn rows_carry_all_four_fields_and_delete_button() {
        let html = render_customer_rows(&[customer(3, "Meera")]);
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains("<td>Meera</td>"));
        assert!(html.contains("<td>meera@example.com</td>"));
        assert!(html.contains("<td>Pune</td>"));
        assert!(html.contains("data-customer-id=\"3\""));
    }

    #[test]
    fn row_fields_are_escaped() {
        let mut c = customer(1, "Eve");
        c.name = "<script>alert(1)</script>".to_string();
        let html = render_customer_rows(&[c]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn options_start_with_empty_placeholder() {
        let html = render_customer_options(&[customer(1, "Ravi"), customer(2, "Meera")]);
        assert!(html.starts_with("<option value=\"\">— Select customer —</option>"));
        assert!(html.contains("<option value=\"1\">Ravi (ID: 1)</option>"));
        assert!(html.contains("<option value=\"2\">Meera (ID: 2)</option>"));
    }

    #[test]
    fn page_has_table_body_and_form_ids() {
        let html = render_customers_page("u", "", "<tr></tr>");
        assert!(html.contains("id=\"customersTableBody\""));
        assert!(html.contains("id=\"customerForm\""));
        assert!(html.contains("id=\"custName\""));
        assert!(html.contains("id=\"custEmail\""));
        assert!(html.contains("id=\"custAddress\""));
    }
}
