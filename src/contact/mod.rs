//! Contact form delivery.
//!
//! A submission is sent to the owner's contact template first. Only when that
//! succeeds is an auto-reply sent back to the submitter; a failed auto-reply is
//! logged but the submission still counts as delivered.

pub mod emailjs;

use crate::constants::emailjs::AUTO_REPLY_TITLE;
use crate::error::AppError;
use serde::Serialize;
use std::future::Future;
use tracing::{info, warn};

pub use emailjs::EmailJsClient;

/// Capability to send one templated email
pub trait EmailSender {
    fn send<P: Serialize + Sync>(
        &self,
        template_id: &str,
        params: &P,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Template ids and sender name for the two emails of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTemplates {
    pub contact: String,
    pub auto_reply: String,
    pub from_name: String,
}

/// Fields of the contact form; also the contact template's parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All fields are required and the email needs text on both sides of `@`
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_contact_form("name is required"));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::invalid_contact_form("message is required"));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(AppError::invalid_contact_form(format!(
                "'{email}' is not a valid email address"
            ))),
        }
    }

    /// Parameters for the confirmation sent back to the submitter
    pub fn auto_reply(&self, from_name: &str) -> AutoReply {
        AutoReply {
            to_email: self.email.trim().to_string(),
            from_name: from_name.to_string(),
            name: self.name.trim().to_string(),
            title: AUTO_REPLY_TITLE.to_string(),
        }
    }
}

/// Auto-reply template parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoReply {
    pub to_email: String,
    pub from_name: String,
    pub name: String,
    pub title: String,
}

/// Result of a submission as the user sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Contact email and auto-reply both sent
    Delivered,
    /// Contact email sent, auto-reply failed
    DeliveredWithoutAutoReply { reason: String },
    /// Contact email failed; nothing was sent
    Failed { reason: String },
}

impl ContactOutcome {
    pub fn is_delivered(&self) -> bool {
        !matches!(self, ContactOutcome::Failed { .. })
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ContactOutcome::Delivered => {
                "Message sent successfully! Check your email for confirmation."
            }
            ContactOutcome::DeliveredWithoutAutoReply { .. } => "Message sent successfully!",
            ContactOutcome::Failed { .. } => "Failed to send message, please try again.",
        }
    }
}

/// Validates and delivers a contact form submission.
///
/// # Errors
/// * `AppError::InvalidContactForm` - the form failed validation; nothing was sent
///
/// Delivery failures are reported through [`ContactOutcome`], not as errors.
pub async fn submit_contact_form<S: EmailSender>(
    sender: &S,
    templates: &ContactTemplates,
    form: &ContactForm,
) -> Result<ContactOutcome, AppError> {
    form.validate()?;

    if let Err(e) = sender.send(&templates.contact, form).await {
        if e.is_transient() {
            warn!("Contact email error (may succeed on retry): {e}");
        } else {
            warn!("Contact email error: {e}");
        }
        return Ok(ContactOutcome::Failed {
            reason: e.to_string(),
        });
    }
    info!("Contact email sent");

    let reply = form.auto_reply(&templates.from_name);
    match sender.send(&templates.auto_reply, &reply).await {
        Ok(()) => {
            info!("Auto-reply sent");
            Ok(ContactOutcome::Delivered)
        }
        Err(e) => {
            warn!("Auto-reply error: {e}");
            Ok(ContactOutcome::DeliveredWithoutAutoReply {
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_validation() {
        assert!(ContactForm::new("Ada", "ada@example.com", "Hi").validate().is_ok());
        assert!(ContactForm::new(" ", "ada@example.com", "Hi").validate().is_err());
        assert!(ContactForm::new("Ada", "ada@example.com", "").validate().is_err());
        assert!(ContactForm::new("Ada", "ada.example.com", "Hi").validate().is_err());
        assert!(ContactForm::new("Ada", "@example.com", "Hi").validate().is_err());
        assert!(ContactForm::new("Ada", "ada@", "Hi").validate().is_err());
        assert!(ContactForm::new("Ada", "a@b@c", "Hi").validate().is_err());
    }

    #[test]
    fn test_auto_reply_payload() {
        let form = ContactForm::new(" Ada ", " ada@example.com ", "Hello there");
        let reply = form.auto_reply("Yashwin");
        assert_eq!(
            reply,
            AutoReply {
                to_email: "ada@example.com".to_string(),
                from_name: "Yashwin".to_string(),
                name: "Ada".to_string(),
                title: "Contact Form Submission".to_string(),
            }
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert!(ContactOutcome::Delivered.is_delivered());
        assert!(
            ContactOutcome::DeliveredWithoutAutoReply {
                reason: "x".to_string()
            }
            .is_delivered()
        );
        let failed = ContactOutcome::Failed {
            reason: "x".to_string(),
        };
        assert!(!failed.is_delivered());
        assert_eq!(
            failed.user_message(),
            "Failed to send message, please try again."
        );
    }
}
