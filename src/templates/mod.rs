pub mod alerts;
pub mod bills;
pub mod customers;
pub mod dashboard;
pub mod layout;
pub mod profile;

/// Escape text for interpolation into HTML. Every dynamic value goes through
/// this before it reaches a template string.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Currency prefix plus two decimal places, e.g. `₹450.00`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
