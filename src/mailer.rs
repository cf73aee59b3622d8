//! Outbound email: message shape, provider seam, HTML templates.
//!
//! The JSON shape of [`OutboundEmail`] is what the Resend `/emails` endpoint
//! accepts. [`ResendMailer`] is the production provider and only exists on the
//! server.

use std::future::Future;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "templates"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
struct TemplateAssets;

pub const CONTACT_TEMPLATE: &str = "contact_form.html";
pub const THANK_YOU_TEMPLATE: &str = "thank_you.html";

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MailError {
    #[error("Email service is not configured")]
    MissingApiKey,
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Provider { status: u16, message: String },
    #[error("Couldn't render email: {0}")]
    Template(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub html: String,
}

/// Provider acknowledgment for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub id: String,
}

pub trait EmailProvider {
    fn send(
        &self,
        email: &OutboundEmail,
    ) -> impl Future<Output = Result<SendReceipt, MailError>> + Send;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderErrorBody {
    message: String,
}

/// Maps a non-2xx provider response to an error, keeping the provider's message.
pub fn provider_error(status: u16, body: &str) -> MailError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("Email provider responded with status {status}"));
    MailError::Provider { status, message }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Body of the notification sent to the site owner.
pub fn render_contact(
    message: &str,
    sender_email: &str,
    logo_url: &str,
) -> Result<String, MailError> {
    render(
        CONTACT_TEMPLATE,
        &[
            ("message", message),
            ("sender_email", sender_email),
            ("logo_url", logo_url),
        ],
    )
}

/// Body of the acknowledgment sent back to the submitter.
pub fn render_thank_you(sender_email: &str, logo_url: &str) -> Result<String, MailError> {
    render(
        THANK_YOU_TEMPLATE,
        &[("sender_email", sender_email), ("logo_url", logo_url)],
    )
}

fn render(name: &str, vars: &[(&str, &str)]) -> Result<String, MailError> {
    let file = TemplateAssets::get(name)
        .ok_or_else(|| MailError::Template(format!("missing template {name}")))?;
    let source =
        std::str::from_utf8(&file.data).map_err(|e| MailError::Template(e.to_string()))?;
    substitute(source, vars)
}

/// Single pass over `{{key}}` placeholders, so substituted text is never re-scanned.
fn substitute(source: &str, vars: &[(&str, &str)]) -> Result<String, MailError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find("}}")
            .ok_or_else(|| MailError::Template("unclosed placeholder".to_string()))?;
        let key = after[..end].trim();
        let value = vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| MailError::Template(format!("no value for {key}")))?;
        out.push_str(&escape_html(value));
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(feature = "ssr")]
pub use resend::ResendMailer;

#[cfg(feature = "ssr")]
mod resend {
    use super::*;
    use crate::config::MailConfig;

    pub struct ResendMailer {
        client: reqwest::Client,
        config: MailConfig,
    }

    impl ResendMailer {
        pub fn new(config: MailConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }

        pub fn config(&self) -> &MailConfig {
            &self.config
        }
    }

    impl EmailProvider for ResendMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, MailError> {
            let Some(api_key) = self.config.api_key.as_deref() else {
                tracing::warn!("RESEND_API_KEY is not set, dropping email to {}", email.to);
                return Err(MailError::MissingApiKey);
            };

            let url = format!("{}/emails", self.config.api_base);
            tracing::debug!("Sending email via {url}: subject={:?}", email.subject);

            let response = self
                .client
                .post(&url)
                .bearer_auth(api_key)
                .json(email)
                .send()
                .await
                .map_err(|e| {
                    tracing::error!("Email request failed: {e}");
                    MailError::Transport(e.to_string())
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let err = provider_error(status.as_u16(), &body);
                tracing::error!("Email provider rejected message: status={status}, error={err}");
                return Err(err);
            }

            let receipt = response
                .json::<SendReceipt>()
                .await
                .map_err(|e| MailError::Transport(e.to_string()))?;
            tracing::info!("Email accepted: id={}", receipt.id);
            Ok(receipt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_substitute_is_single_pass() {
        let out = substitute(
            "<p>{{message}}</p><p>{{ sender_email }}</p>",
            &[("message", "{{sender_email}}"), ("sender_email", "a@b.com")],
        )
        .unwrap();
        assert_eq!(out, "<p>{{sender_email}}</p><p>a@b.com</p>");
    }

    #[test]
    fn test_substitute_errors() {
        assert!(matches!(
            substitute("{{missing}}", &[]),
            Err(MailError::Template(_))
        ));
        assert!(matches!(
            substitute("{{open", &[("open", "x")]),
            Err(MailError::Template(_))
        ));
    }

    #[test]
    fn test_render_contact() {
        let html = render_contact(
            "hello <script>",
            "a@b.com",
            "http://localhost:3000/kd_logo.svg",
        )
        .unwrap();
        assert!(html.contains("hello &lt;script&gt;"));
        assert!(html.contains("The sender's email is: a@b.com"));
        assert!(html.contains("http://localhost:3000/kd_logo.svg"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_thank_you() {
        let html = render_thank_you("a@b.com", "https://khadon.dev/kd_logo.svg").unwrap();
        assert!(html.contains("Thank you for your contact!"));
        assert!(html.contains("a@b.com"));
    }

    #[test]
    fn test_provider_error_message() {
        let err = provider_error(
            422,
            r#"{"statusCode":422,"message":"Invalid `to` field","name":"validation_error"}"#,
        );
        assert_eq!(err.to_string(), "Invalid `to` field");
        assert_eq!(
            err,
            MailError::Provider {
                status: 422,
                message: "Invalid `to` field".to_string()
            }
        );

        let err = provider_error(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Email provider responded with status 502");
    }

    #[test]
    fn test_email_json_shape() {
        let email = OutboundEmail {
            from: "Contact Portfolio <onboarding@resend.dev>".to_string(),
            to: "owner@example.com".to_string(),
            subject: "hi".to_string(),
            reply_to: None,
            html: "<p>x</p>".to_string(),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert!(json.get("reply_to").is_none());
        assert_eq!(json["to"], "owner@example.com");
    }
}
