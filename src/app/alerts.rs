use std::time::{Duration, Instant};

/// How long a banner stays up before it clears itself.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
}

impl Severity {
    /// Suffix for the `alert-*` style class.
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Single alert slot. A new alert replaces whatever is showing; there is no
/// queue.
#[derive(Debug, Default)]
pub struct AlertBox {
    current: Option<(Alert, Instant)>,
}

impl AlertBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, alert: Alert) {
        tracing::info!("[{}] {}", alert.severity.class(), alert.message);
        self.current = Some((alert, Instant::now()));
    }

    /// The alert to render right now, if it has not expired.
    pub fn active(&self, now: Instant) -> Option<&Alert> {
        match &self.current {
            Some((alert, raised_at)) if now.duration_since(*raised_at) < ALERT_TTL => Some(alert),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
