use thiserror::Error;

use crate::contact::brevo::{Contact, EmailConfig};

pub const DEFAULT_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";
pub const DEFAULT_TEMPLATE_ID: u64 = 2;
pub const DEFAULT_SENDER_NAME: &str = "Portfolio Contact Form";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

impl EmailConfig {
    /// Reads the mail settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from any key lookup. Blank values count as unset.
    ///
    /// `BREVO_API_KEY` and `CONTACT_RECIPIENT_EMAIL` are required. The sender
    /// address defaults to the recipient and the recipient name to the
    /// sender name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let get = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let api_key = require("BREVO_API_KEY")?;
        let recipient_email = require("CONTACT_RECIPIENT_EMAIL")?;
        let endpoint = get("BREVO_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let template_id = match get("CONTACT_TEMPLATE_ID") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "CONTACT_TEMPLATE_ID",
                value: raw,
            })?,
            None => DEFAULT_TEMPLATE_ID,
        };
        let sender_name =
            get("CONTACT_SENDER_NAME").unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());

        Ok(Self {
            api_key,
            endpoint,
            sender: Contact {
                email: get("CONTACT_SENDER_EMAIL").unwrap_or_else(|| recipient_email.clone()),
                name: sender_name.clone(),
            },
            recipient: Contact {
                email: recipient_email,
                name: get("CONTACT_RECIPIENT_NAME").unwrap_or(sender_name),
            },
            template_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = EmailConfig::from_lookup(lookup_from(&[
            ("BREVO_API_KEY", "key"),
            ("CONTACT_RECIPIENT_EMAIL", "owner@example.com"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(config.sender.email, "owner@example.com");
        assert_eq!(config.sender.name, DEFAULT_SENDER_NAME);
        assert_eq!(config.recipient.name, DEFAULT_SENDER_NAME);
    }

    #[test]
    fn test_full_config() {
        let config = EmailConfig::from_lookup(lookup_from(&[
            ("BREVO_API_KEY", "key"),
            ("BREVO_ENDPOINT", "http://localhost:9000/send"),
            ("CONTACT_SENDER_NAME", "Form"),
            ("CONTACT_SENDER_EMAIL", "form@example.com"),
            ("CONTACT_RECIPIENT_NAME", "Owner"),
            ("CONTACT_RECIPIENT_EMAIL", "owner@example.com"),
            ("CONTACT_TEMPLATE_ID", " 7 "),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/send");
        assert_eq!(config.sender.email, "form@example.com");
        assert_eq!(config.recipient.name, "Owner");
        assert_eq!(config.template_id, 7);
    }

    #[test]
    fn test_missing_and_invalid_settings() {
        assert_eq!(
            EmailConfig::from_lookup(lookup_from(&[("CONTACT_RECIPIENT_EMAIL", "a@b.co")])),
            Err(ConfigError::Missing("BREVO_API_KEY"))
        );
        assert_eq!(
            EmailConfig::from_lookup(lookup_from(&[
                ("BREVO_API_KEY", "  "),
                ("CONTACT_RECIPIENT_EMAIL", "a@b.co")
            ])),
            Err(ConfigError::Missing("BREVO_API_KEY"))
        );
        assert!(matches!(
            EmailConfig::from_lookup(lookup_from(&[
                ("BREVO_API_KEY", "key"),
                ("CONTACT_RECIPIENT_EMAIL", "a@b.co"),
                ("CONTACT_TEMPLATE_ID", "two"),
            ])),
            Err(ConfigError::Invalid { key: "CONTACT_TEMPLATE_ID", .. })
        ));
    }
}
