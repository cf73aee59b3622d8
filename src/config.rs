//! Mail configuration from environment variables.
//!
//! Call `dotenvy::dotenv()` before `MailConfig::from_env()` to pick up a `.env` file.

use thiserror::Error;

pub const DEFAULT_PUBLIC_DOMAIN: &str = "http://localhost:3000";
pub const DEFAULT_API_BASE: &str = "https://api.resend.com";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Resend API key; sends fail when unset
    pub api_key: Option<String>,
    /// Public base URL, used for absolute asset links in emails
    pub public_domain: String,
    pub api_base: String,
    /// Also send a thank-you email to the submitter
    pub send_acknowledgment: bool,
}

// the key stays out of logs
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("public_domain", &self.public_domain)
            .field("api_base", &self.api_base)
            .field("send_acknowledgment", &self.send_acknowledgment)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            public_domain: DEFAULT_PUBLIC_DOMAIN.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            send_acknowledgment: false,
        }
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let public_domain = match get("PUBLIC_DOMAIN") {
            Some(value) => parse_url("PUBLIC_DOMAIN", value)?,
            None => DEFAULT_PUBLIC_DOMAIN.to_string(),
        };
        let api_base = match get("RESEND_API_BASE") {
            Some(value) => parse_url("RESEND_API_BASE", value)?,
            None => DEFAULT_API_BASE.to_string(),
        };
        let send_acknowledgment = match get("CONTACT_SEND_ACKNOWLEDGMENT") {
            Some(value) => parse_bool("CONTACT_SEND_ACKNOWLEDGMENT", value)?,
            None => false,
        };

        Ok(Self {
            api_key: get("RESEND_API_KEY"),
            public_domain,
            api_base,
            send_acknowledgment,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn logo_url(&self) -> String {
        format!("{}/kd_logo.svg", self.public_domain)
    }
}

fn parse_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = MailConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, MailConfig::default());
        assert!(!config.has_api_key());
        assert_eq!(config.logo_url(), "http://localhost:3000/kd_logo.svg");
    }

    #[test]
    fn test_all_fields() {
        let config = MailConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_123"),
            ("PUBLIC_DOMAIN", "https://khadon.dev/"),
            ("RESEND_API_BASE", "http://localhost:9999"),
            ("CONTACT_SEND_ACKNOWLEDGMENT", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("re_123"));
        assert_eq!(config.public_domain, "https://khadon.dev");
        assert_eq!(config.api_base, "http://localhost:9999");
        assert!(config.send_acknowledgment);
    }

    #[test]
    fn test_empty_key_is_unset() {
        let config = MailConfig::from_lookup(lookup(&[("RESEND_API_KEY", "  ")])).unwrap();
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_invalid_values() {
        let err = MailConfig::from_lookup(lookup(&[("CONTACT_SEND_ACKNOWLEDGMENT", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));

        let err = MailConfig::from_lookup(lookup(&[("PUBLIC_DOMAIN", "khadon.dev")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                var: "PUBLIC_DOMAIN",
                value: "khadon.dev".to_string()
            }
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = MailConfig {
            api_key: Some("re_secret".to_string()),
            ..MailConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("re_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
