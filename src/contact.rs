use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::MailConfig,
    data::OWNER_EMAIL,
    mailer::{self, EmailProvider, MailError, OutboundEmail, SendReceipt},
};

pub const MAX_SENDER_EMAIL_LEN: usize = 500;
pub const MAX_MESSAGE_LEN: usize = 5000;

pub const CONTACT_FROM: &str = "Contact Portfolio <onboarding@resend.dev>";
pub const CONTACT_SUBJECT: &str = "Message from contact form KD-Portfolio";
pub const THANK_YOU_SUBJECT: &str = "Thank you for your contact!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid sender email")]
    InvalidSenderEmail,
    #[error("Invalid message")]
    InvalidMessage,
    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Present, non-empty, and at most `max_chars` characters long.
pub fn validate_string(value: Option<&str>, max_chars: usize) -> bool {
    value.is_some_and(|v| !v.is_empty() && v.chars().count() <= max_chars)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub sender_email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Sender is checked first, so a submission with both fields bad reports the sender.
    pub fn parse(sender_email: Option<&str>, message: Option<&str>) -> Result<Self, ContactError> {
        if !validate_string(sender_email, MAX_SENDER_EMAIL_LEN) {
            return Err(ContactError::InvalidSenderEmail);
        }
        if !validate_string(message, MAX_MESSAGE_LEN) {
            return Err(ContactError::InvalidMessage);
        }
        Ok(Self {
            sender_email: sender_email.unwrap_or_default().to_string(),
            message: message.unwrap_or_default().to_string(),
        })
    }

    pub fn notification(&self, config: &MailConfig) -> Result<OutboundEmail, MailError> {
        Ok(OutboundEmail {
            from: CONTACT_FROM.to_string(),
            to: OWNER_EMAIL.to_string(),
            subject: CONTACT_SUBJECT.to_string(),
            reply_to: Some(self.sender_email.clone()),
            html: mailer::render_contact(&self.message, &self.sender_email, &config.logo_url())?,
        })
    }

    pub fn acknowledgment(&self, config: &MailConfig) -> Result<OutboundEmail, MailError> {
        Ok(OutboundEmail {
            from: CONTACT_FROM.to_string(),
            to: self.sender_email.clone(),
            subject: THANK_YOU_SUBJECT.to_string(),
            reply_to: None,
            html: mailer::render_thank_you(&self.sender_email, &config.logo_url())?,
        })
    }
}

/// What the contact form gets back. Failures carry a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ContactOutcome {
    Success { data: SendReceipt },
    Failure { error: String },
}

impl ContactOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<ContactError> for ContactOutcome {
    fn from(err: ContactError) -> Self {
        Self::Failure {
            error: err.to_string(),
        }
    }
}

/// Validates and forwards a contact form submission to the site owner.
///
/// Invalid input never reaches the provider. A provider error is reported as is,
/// with no retry. When acknowledgments are enabled the submitter also gets a
/// thank-you email; if that one fails it is only logged.
pub async fn send_contact_message<P: EmailProvider>(
    provider: &P,
    config: &MailConfig,
    sender_email: Option<&str>,
    message: Option<&str>,
) -> ContactOutcome {
    match deliver(provider, config, sender_email, message).await {
        Ok(receipt) => ContactOutcome::Success { data: receipt },
        Err(err) => {
            log::warn!("Contact form submission failed: {err}");
            err.into()
        }
    }
}

async fn deliver<P: EmailProvider>(
    provider: &P,
    config: &MailConfig,
    sender_email: Option<&str>,
    message: Option<&str>,
) -> Result<SendReceipt, ContactError> {
    let submission = ContactSubmission::parse(sender_email, message)?;
    let receipt = provider.send(&submission.notification(config)?).await?;
    log::info!("Contact message delivered: id={}", receipt.id);

    if config.send_acknowledgment {
        let ack = match submission.acknowledgment(config) {
            Ok(ack) => provider.send(&ack).await.map(|_| ()),
            Err(err) => Err(err),
        };
        if let Err(err) = ack {
            log::warn!("Couldn't send acknowledgment: {err}");
        }
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeProvider {
        sent: Mutex<Vec<OutboundEmail>>,
        fail_with: Option<MailError>,
        fail_after: usize,
    }

    impl FakeProvider {
        fn failing(err: MailError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::default()
            }
        }

        fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl EmailProvider for FakeProvider {
        async fn send(&self, email: &OutboundEmail) -> Result<SendReceipt, MailError> {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            match &self.fail_with {
                Some(err) if sent.len() > self.fail_after => Err(err.clone()),
                _ => Ok(SendReceipt {
                    id: format!("email-{}", sent.len()),
                }),
            }
        }
    }

    #[test]
    fn test_validate_string() {
        assert!(validate_string(Some("a"), 1));
        assert!(!validate_string(Some(""), 10));
        assert!(!validate_string(None, 10));
        assert!(!validate_string(Some("abc"), 2));
        // characters, not bytes
        assert!(validate_string(Some("éé"), 2));
    }

    #[test]
    fn test_parse_reports_sender_first() {
        assert_eq!(
            ContactSubmission::parse(None, None),
            Err(ContactError::InvalidSenderEmail)
        );
        assert_eq!(
            ContactSubmission::parse(Some("a@b.com"), Some("")),
            Err(ContactError::InvalidMessage)
        );
        let long = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            ContactSubmission::parse(Some("a@b.com"), Some(&long)),
            Err(ContactError::InvalidMessage)
        );
        let long_sender = "x".repeat(MAX_SENDER_EMAIL_LEN + 1);
        assert_eq!(
            ContactSubmission::parse(Some(&long_sender), Some("hi")),
            Err(ContactError::InvalidSenderEmail)
        );
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_call() {
        let provider = FakeProvider::default();
        let outcome =
            send_contact_message(&provider, &MailConfig::default(), Some(""), Some("hi")).await;
        assert_eq!(
            outcome,
            ContactOutcome::Failure {
                error: "Invalid sender email".to_string()
            }
        );
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submission_sends_once() {
        let provider = FakeProvider::default();
        let outcome = send_contact_message(
            &provider,
            &MailConfig::default(),
            Some("a@b.com"),
            Some("hello"),
        )
        .await;

        assert_eq!(
            outcome,
            ContactOutcome::Success {
                data: SendReceipt {
                    id: "email-1".to_string()
                }
            }
        );
        let sent = provider.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to.as_deref(), Some("a@b.com"));
        assert_eq!(sent[0].to, OWNER_EMAIL);
        assert_eq!(sent[0].from, CONTACT_FROM);
        assert_eq!(sent[0].subject, CONTACT_SUBJECT);
        assert!(sent[0].html.contains("hello"));
    }

    #[tokio::test]
    async fn test_provider_error_is_carried() {
        let provider = FakeProvider::failing(MailError::Provider {
            status: 403,
            message: "API key is invalid".to_string(),
        });
        let outcome = send_contact_message(
            &provider,
            &MailConfig::default(),
            Some("a@b.com"),
            Some("hello"),
        )
        .await;
        assert_eq!(
            outcome,
            ContactOutcome::Failure {
                error: "API key is invalid".to_string()
            }
        );
        // no retry
        assert_eq!(provider.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_acknowledgment_failure_is_ignored() {
        let provider = FakeProvider {
            fail_with: Some(MailError::Transport("connection reset".to_string())),
            fail_after: 1,
            ..FakeProvider::default()
        };
        let config = MailConfig {
            send_acknowledgment: true,
            ..MailConfig::default()
        };
        let outcome =
            send_contact_message(&provider, &config, Some("a@b.com"), Some("hello")).await;
        assert!(outcome.is_success());

        let sent = provider.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, "a@b.com");
        assert_eq!(sent[1].subject, THANK_YOU_SUBJECT);
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_value(ContactOutcome::Failure {
            error: "Invalid message".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["error"], "Invalid message");
    }
}
