use crate::config::Settings;
use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML profile, e.g.:
///
/// ```toml
/// [server]
/// base_url = "http://localhost:8080"
///
/// [output]
/// path = "./pages"
///
/// [display]
/// currency = "₹"
///
/// [auth]
/// username = "admin"
/// password = "secret"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    pub output: Option<OutputSection>,
    pub display: Option<DisplaySection>,
    pub auth: Option<AuthSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| ClientError::InvalidConfigValueError {
            field: "config".to_string(),
            value: path.as_ref().display().to_string(),
            reason: format!("Invalid TOML: {}", e),
        })
    }

    /// Fill the gaps in `settings` the profile covers; values already present
    /// in `settings` (i.e. set on the command line) win.
    pub fn apply_defaults(self, settings: &mut Settings, cli_set: &CliOverrides) {
        if let Some(server) = self.server {
            if !cli_set.api_base {
                settings.api_base = server.base_url;
            }
        }
        if let Some(output) = self.output {
            if !cli_set.output_path {
                settings.output_path = output.path;
            }
        }
        if let Some(display) = self.display {
            if !cli_set.currency {
                settings.currency = display.currency;
            }
        }
        if let Some(auth) = self.auth {
            if !cli_set.username {
                settings.username = auth.username.or(settings.username.take());
            }
            if !cli_set.password {
                settings.password = auth.password.or(settings.password.take());
            }
        }
    }
}

/// Which fields the command line set explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub api_base: bool,
    pub output_path: bool,
    pub currency: bool,
    pub username: bool,
    pub password: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[server]
base_url = "http://billing.local:9090"

[display]
currency = "$"

[auth]
username = "admin"
password = "secret"
"#;

    #[test]
    fn parses_profile_sections() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.server.unwrap().base_url, "http://billing.local:9090");
        assert_eq!(config.display.unwrap().currency, "$");
        assert_eq!(config.auth.unwrap().username.as_deref(), Some("admin"));
    }

    #[test]
    fn profile_fills_unset_fields() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let mut settings = Settings::default();
        config.apply_defaults(&mut settings, &CliOverrides::default());

        assert_eq!(settings.api_base, "http://billing.local:9090");
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.username.as_deref(), Some("admin"));
        // untouched section keeps the default
        assert_eq!(settings.output_path, "./pages");
    }

    #[test]
    fn cli_values_win_over_profile() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let mut settings = Settings {
            api_base: "http://cli-wins:8080".to_string(),
            ..Settings::default()
        };
        config.apply_defaults(
            &mut settings,
            &CliOverrides {
                api_base: true,
                ..CliOverrides::default()
            },
        );

        assert_eq!(settings.api_base, "http://cli-wins:8080");
        assert_eq!(settings.currency, "$");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(FileConfig::from_file("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn malformed_toml_is_reported_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not [valid").unwrap();

        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));
    }
}
