use crate::carousel::Carousel;
use crate::contact::{ContactForm, ContactTemplates, EmailSender};
use crate::error::AppError;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

/// Test utilities for creating carousels and contact scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Image references `img0.png .. img{n-1}.png`
    pub fn images(count: usize) -> Vec<String> {
        (0..count).map(|idx| format!("img{idx}.png")).collect()
    }

    /// Carousel over `count` generated images with default timings
    pub fn carousel(count: usize) -> Carousel {
        Carousel::new(Self::images(count), "Test carousel").expect("count must be at least 1")
    }

    /// The three-image scenario `[A, B, C]`
    pub fn abc_carousel() -> Carousel {
        Carousel::new(["A", "B", "C"], "ABC").expect("static images")
    }

    pub fn contact_form() -> ContactForm {
        ContactForm::new("Ada Lovelace", "ada@example.com", "I'd love to collaborate.")
    }

    pub fn contact_templates() -> ContactTemplates {
        ContactTemplates {
            contact: "template_contact".to_string(),
            auto_reply: "template_reply".to_string(),
            from_name: "Yashwin".to_string(),
        }
    }
}

/// Milliseconds as a `Duration`
pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// In-memory [`EmailSender`] that records every send and fails chosen templates
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(String, serde_json::Value)>>,
    failing_templates: HashSet<String>,
}

impl RecordingSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send to `template_id` fails with a 400 rejection
    pub fn failing_on(mut self, template_id: &str) -> Self {
        self.failing_templates.insert(template_id.to_string());
        self
    }

    /// Template ids and parameters of every attempted send, in order
    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

impl EmailSender for RecordingSender {
    async fn send<P: Serialize + Sync>(
        &self,
        template_id: &str,
        params: &P,
    ) -> Result<(), AppError> {
        let value = serde_json::to_value(params)?;
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((template_id.to_string(), value));
        }

        if self.failing_templates.contains(template_id) {
            Err(AppError::email_send(400, format!("template {template_id} rejected")))
        } else {
            Ok(())
        }
    }
}
