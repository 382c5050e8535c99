use crate::domain::model::{Role, Session};
use crate::domain::ports::BillingApi;

/// Pages the browser flow would redirect to. The guard only ever names the
/// target; callers decide whether to follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
    AdminDashboard,
    CustomerDashboard,
}

impl Navigation {
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Admin => Navigation::AdminDashboard,
            Role::Customer => Navigation::CustomerDashboard,
        }
    }

    pub fn page(&self) -> &'static str {
        match self {
            Navigation::Login => "login.html",
            Navigation::AdminDashboard => "admin-dashboard.html",
            Navigation::CustomerDashboard => "customer-dashboard.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeniedReason {
    NotLoggedIn,
    WrongRole { actual: Role },
}

#[derive(Debug, Clone)]
pub enum AuthResult {
    Authorized(Session),
    Denied {
        reason: DeniedReason,
        redirect: Navigation,
    },
}

impl AuthResult {
    pub fn session(self) -> Option<Session> {
        match self {
            AuthResult::Authorized(session) => Some(session),
            AuthResult::Denied { .. } => None,
        }
    }
}

/// Guard for protected views. `expected = None` accepts any logged-in user.
pub async fn check_session<A: BillingApi + ?Sized>(api: &A, expected: Option<Role>) -> AuthResult {
    match api.check_session().await {
        Ok(session) => match expected {
            // 角色不符：導向該角色自己的儀表板
            Some(role) if session.role != role => AuthResult::Denied {
                reason: DeniedReason::WrongRole {
                    actual: session.role,
                },
                redirect: Navigation::dashboard(session.role),
            },
            _ => AuthResult::Authorized(session),
        },
        Err(e) => {
            tracing::debug!("Session check failed: {}", e);
            AuthResult::Denied {
                reason: DeniedReason::NotLoggedIn,
                redirect: Navigation::Login,
            }
        }
    }
}

/// Best-effort logout; the login page is the destination either way.
pub async fn logout<A: BillingApi + ?Sized>(api: &A) -> Navigation {
    if let Err(e) = api.logout().await {
        tracing::debug!("Logout request failed: {}", e);
    }
    Navigation::Login
}
