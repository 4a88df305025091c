use thiserror::Error;

use crate::permissions::PRIVILEGE_ATTRIBUTE;

pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SPONSOR_LOGIN_PATH must start with '/', got {0:?}")]
    InvalidLoginPath(String),

    #[error("SPONSOR_TEST_CONTROLS must be \"true\" or \"false\", got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for API requests; empty means same origin.
    pub api_base_url: String,
    pub login_path: String,
    pub privilege_attribute: String,
    pub test_sponsor_control: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            privilege_attribute: PRIVILEGE_ATTRIBUTE.to_string(),
            test_sponsor_control: false,
        }
    }
}

impl AppConfig {
    /// Reads configuration baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SPONSOR_API_BASE_URL"),
            option_env!("SPONSOR_LOGIN_PATH"),
            option_env!("SPONSOR_TEST_CONTROLS"),
        )
    }

    pub fn from_values(
        api_base_url: Option<&str>,
        login_path: Option<&str>,
        test_controls: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let login_path = match login_path.map(str::trim) {
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => return Err(ConfigError::InvalidLoginPath(path.to_string())),
            None => defaults.login_path,
        };

        let test_sponsor_control = match test_controls.map(str::trim) {
            Some("true") => true,
            Some("false") | Some("") | None => false,
            Some(other) => return Err(ConfigError::InvalidFlag(other.to_string())),
        };

        Ok(Self {
            api_base_url,
            login_path,
            privilege_attribute: defaults.privilege_attribute,
            test_sponsor_control,
        })
    }
}
