#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Resolved client settings after merging CLI flags over the optional profile
/// file over the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_base: String,
    pub output_path: String,
    pub currency: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080".to_string(),
            output_path: "./pages".to_string(),
            currency: "₹".to_string(),
            username: None,
            password: None,
        }
    }
}

impl ConfigProvider for Settings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("currency", &self.currency)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn bad_api_base_fails_validation() {
        let settings = Settings {
            api_base: "ftp://host".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn empty_currency_fails_validation() {
        let settings = Settings {
            currency: "  ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
