use crate::domain::model::Customer;
use crate::templates::html_escape;
use std::fmt::Write;

/// Card body for the `profileCard` slot.
pub fn render_profile_card(profile: &Customer) -> String {
    let mut html = String::new();
    writeln!(html, "<div class=\"row\">").ok();
    writeln!(
        html,
        "  <div class=\"col-6\"><strong>Name:</strong></div><div class=\"col-6\">{}</div>",
        html_escape(&profile.name)
    )
    .ok();
    writeln!(
        html,
        "  <div class=\"col-6 mt-2\"><strong>Email:</strong></div><div class=\"col-6 mt-2\">{}</div>",
        html_escape(&profile.email)
    )
    .ok();
    writeln!(
        html,
        "  <div class=\"col-6 mt-2\"><strong>Address:</strong></div><div class=\"col-6 mt-2\">{}</div>",
        html_escape(&profile.address)
    )
    .ok();
    writeln!(
        html,
        "  <div class=\"col-6 mt-2\"><strong>Customer ID:</strong></div><div class=\"col-6 mt-2\">{}</div>",
        profile.id
    )
    .ok();
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_all_profile_fields() {
        let html = render_profile_card(&Customer {
            id: 12,
            name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            address: "Pune".to_string(),
        });
        assert!(html.contains("Ravi Kumar"));
        assert!(html.contains("ravi@example.com"));
        assert!(html.contains("Pune"));
        assert!(html.contains("Customer ID:"));
        assert!(html.contains("12"));
    }

    #[test]
    fn profile_fields_are_escaped() {
        let html = render_profile_card(&Customer {
            id: 1,
            name: "a&b".to_string(),
            email: "a@b.io".to_string(),
            address: "<Pune>".to_string(),
        });
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&lt;Pune&gt;"));
    }
}
