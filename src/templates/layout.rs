use crate::domain::model::{Role, Session};
use crate::templates::html_escape;
use std::fmt::Write;

/// Navbar user line for the `navUser` slot.
pub fn render_nav_user(session: &Session) -> String {
    let badge = match session.role {
        Role::Admin => format!("<span class=\"badge-admin\">{}</span>", session.role),
        Role::Customer => format!("<span class=\"badge-customer\">{}</span>", session.role),
    };
    format!("👤 {} &nbsp;{}", html_escape(&session.username), badge)
}

/// Full page shell: navbar, alert slot, main content.
pub fn render_page(title: &str, nav_user: &str, alert: &str, main: &str) -> String {
    let mut html = String::new();
    writeln!(html, "<!DOCTYPE html>").ok();
    writeln!(html, "<html lang=\"en\">").ok();
    writeln!(
        html,
        "<head><meta charset=\"utf-8\"><title>{} — PowerBill</title><link rel=\"stylesheet\" href=\"style.css\"></head>",
        html_escape(title)
    )
    .ok();
    writeln!(html, "<body>").ok();
    writeln!(
        html,
        "<nav class=\"navbar\"><span class=\"brand\">⚡ PowerBill</span><span id=\"navUser\">{}</span></nav>",
        nav_user
    )
    .ok();
    writeln!(html, "<div id=\"alertBox\">{}</div>", alert).ok();
    writeln!(html, "<main class=\"container\">").ok();
    html.push_str(main);
    writeln!(html, "\n</main>").ok();
    writeln!(html, "</body>").ok();
    html.push_str("</html>\n");
    html
}
