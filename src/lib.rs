pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod storage;
pub mod templates;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliCommand, CliConfig};
pub use config::Settings;

pub use api::{ApiClient, HttpBillingApi};
pub use app::engine::{Command, Outcome, PageEngine};
pub use storage::LocalStorage;
pub use utils::error::{ClientError, Result};
