use crate::domain::model::{AdminStats, CustomerStats};
use crate::templates::{format_amount, layout};
use std::fmt::Write;

fn stat_card(label: &str, value_id: &str, value: &str) -> String {
    format!(
        "<div class=\"card stat-card\"><div class=\"stat-label\">{}</div><div class=\"stat-value\" id=\"{}\">{}</div></div>",
        label, value_id, value
    )
}

/// Admin dashboard. `stats` is `None` when the aggregate fetch failed; the
/// cards then show dashes (the failure is only logged).
pub fn render_admin_dashboard_page(
    nav_user: &str,
    alert: &str,
    stats: Option<AdminStats>,
    currency: &str,
) -> String {
    let (customers, bills, revenue) = match stats {
        Some(s) => (
            s.customers.to_string(),
            s.bills.to_string(),
            format_amount(currency, s.revenue),
        ),
        None => ("—".to_string(), "—".to_string(), "—".to_string()),
    };

    let mut main = String::new();
    writeln!(main, "<h2>Admin dashboard</h2>").ok();
    writeln!(main, "<div class=\"stat-row\">").ok();
    writeln!(main, "{}", stat_card("Customers", "statCustomers", &customers)).ok();
    writeln!(main, "{}", stat_card("Bills", "statBills", &bills)).ok();
    writeln!(main, "{}", stat_card("Revenue", "statRevenue", &revenue)).ok();
    writeln!(main, "</div>").ok();

    layout::render_page("Admin dashboard", nav_user, alert, &main)
}

/// Customer dashboard: profile card, own bills table, bill count and total.
pub fn render_customer_dashboard_page(
    nav_user: &str,
    alert: &str,
    profile_card: &str,
    bill_rows: &str,
    stats: Option<CustomerStats>,
    currency: &str,
) -> String {
    let (count, total) = match stats {
        Some(s) => (s.bills.to_string(), format_amount(currency, s.total_amount)),
        None => ("—".to_string(), "—".to_string()),
    };

    let mut main = String::new();
    writeln!(main, "<h2>My account</h2>").ok();
    writeln!(main, "<div class=\"card\" id=\"profileCard\">").ok();
    main.push_str(profile_card);
    writeln!(main, "\n</div>").ok();

    writeln!(main, "<div class=\"stat-row\">").ok();
    writeln!(main, "{}", stat_card("My bills", "statMyBills", &count)).ok();
    writeln!(main, "{}", stat_card("Total amount", "statMyAmount", &total)).ok();
    writeln!(main, "</div>").ok();

    writeln!(main, "<h3>My bills</h3>").ok();
    writeln!(main, "<table class=\"table\">").ok();
    writeln!(
        main,
        "<thead><tr><th>ID</th><th>Units</th><th>Amount</th><th>Date</th><th>Status</th></tr></thead>"
    )
    .ok();
    writeln!(main, "<tbody id=\"myBillsTableBody\">").ok();
    main.push_str(bill_rows);
    writeln!(main, "</tbody></table>").ok();

    layout::render_page("My account", nav_user, alert, &main)
}
