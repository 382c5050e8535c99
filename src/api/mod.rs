pub mod client;
pub mod gateway;
pub mod session;

pub use client::ApiClient;
pub use gateway::HttpBillingApi;
pub use session::{check_session, logout, AuthResult, DeniedReason, Navigation};
