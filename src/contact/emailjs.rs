//! EmailJS REST client.

use super::EmailSender;
use crate::config::EmailJsSettings;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, emailjs};
use crate::error::AppError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Creates an HTTP client with the configured timeout and a small connection pool
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

#[derive(Debug, Serialize)]
struct SendRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

/// Sends templated emails through the EmailJS `/email/send` endpoint
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: Client,
    settings: EmailJsSettings,
}

impl EmailJsClient {
    pub fn new(settings: EmailJsSettings, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: EmailJsSettings) -> Self {
        Self { client, settings }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.api_base.trim_end_matches('/'),
            emailjs::SEND_PATH
        )
    }
}

impl EmailSender for EmailJsClient {
    async fn send<P: Serialize + Sync>(
        &self,
        template_id: &str,
        params: &P,
    ) -> Result<(), AppError> {
        let url = self.endpoint();
        let body = SendRequest {
            service_id: &self.settings.service_id,
            template_id,
            user_id: &self.settings.public_key,
            template_params: params,
        };

        info!("Sending email with template {template_id}");

        let mut attempt = 0u32;
        let mut backoff = Duration::from_millis(emailjs::RATE_LIMIT_BACKOFF_MS);
        loop {
            let response = self.client.post(&url).json(&body).send().await?;
            let status = response.status();

            if status.is_success() {
                debug!("EmailJS accepted template {template_id} ({status})");
                return Ok(());
            }

            // Only rate limiting is retried; a 5xx may already have sent the email
            if status.as_u16() == 429 && attempt < emailjs::MAX_RATE_LIMIT_RETRIES {
                let wait = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(backoff);
                warn!(
                    "EmailJS rate limited template {}. Retrying in {:?} (attempt {}/{})",
                    template_id,
                    wait,
                    attempt + 1,
                    emailjs::MAX_RATE_LIMIT_RETRIES
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
                backoff = backoff.saturating_mul(2);
                continue;
            }

            let message = response.text().await.unwrap_or_default();
            warn!("EmailJS rejected template {template_id}: {status} {message}");
            return Err(AppError::email_send(status.as_u16(), message));
        }
    }
}
