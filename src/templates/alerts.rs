use crate::app::alerts::Alert;
use crate::templates::html_escape;

/// Dismissible banner markup for the `alertBox` slot.
pub fn render_alert(alert: &Alert) -> String {
    format!(
        "<div class=\"alert alert-{} alert-dismissible fade show shadow\" role=\"alert\">\n  {}\n  <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\"></button>\n</div>",
        alert.severity.class(),
        html_escape(&alert.message)
    )
}
