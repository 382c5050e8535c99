use crate::domain::model::Bill;
use crate::templates::{format_amount, html_escape, layout};
use std::fmt::Write;

/// Admin rows for the `billsTableBody` slot: customer name (or `N/A`), units,
/// formatted amount, date, static status badge.
pub fn render_bill_rows(bills: &[Bill], currency: &str) -> String {
    if bills.is_empty() {
        return "<tr><td colspan=\"6\" class=\"text-center text-muted py-3\">No bills found</td></tr>".to_string();
    }

    let mut html = String::new();
    for b in bills {
        let customer_name = b
            .customer
            .as_ref()
            .map(|c| html_escape(&c.name))
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><span class=\"badge bg-success\">Generated</span></td></tr>",
            b.id,
            customer_name,
            b.units_consumed,
            format_amount(currency, b.amount),
            b.bill_date
        )
        .ok();
    }
    html
}

/// Customer's own rows for the `myBillsTableBody` slot; no customer column.
pub fn render_my_bill_rows(bills: &[Bill], currency: &str) -> String {
    if bills.is_empty() {
        return "<tr><td colspan=\"5\" class=\"text-center text-muted py-3\">No bills yet</td></tr>"
            .to_string();
    }

    let mut html = String::new();
    for b in bills {
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><span class=\"badge bg-success\">Generated</span></td></tr>",
            b.id,
            b.units_consumed,
            format_amount(currency, b.amount),
            b.bill_date
        )
        .ok();
    }
    html
}

pub fn render_bills_page(nav_user: &str, alert: &str, rows: &str, options: &str) -> String {
    let mut main = String::new();
    writeln!(main, "<h2>Bills</h2>").ok();
    writeln!(main, "<table class=\"table\">").ok();
    writeln!(
        main,
        "<thead><tr><th>ID</th><th>Customer</th><th>Units</th><th>Amount</th><th>Date</th><th>Status</th></tr></thead>"
    )
    .ok();
    writeln!(main, "<tbody id=\"billsTableBody\">").ok();
    main.push_str(rows);
    writeln!(main, "</tbody></table>").ok();

    // 產生帳單表單
    writeln!(main, "<form id=\"billForm\">").ok();
    writeln!(main, "  <select id=\"billCustomerSelect\" name=\"customerId\">").ok();
    main.push_str(options);
    writeln!(main, "  </select>").ok();
    writeln!(
        main,
        "  <input id=\"billUnits\" name=\"unitsConsumed\" placeholder=\"Units consumed\">"
    )
    .ok();
    writeln!(
        main,
        "  <button type=\"submit\" class=\"btn btn-primary\">Generate bill</button>"
    )
    .ok();
    writeln!(main, "</form>").ok();

    layout::render_page("Bills", nav_user, alert, &main)
}
