use crate::carousel::CarouselTiming;
use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECONDS, carousel as carousel_defaults, emailjs as emailjs_defaults,
    env_vars,
};
use crate::contact::ContactTemplates;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Name used as the sender of auto-replies
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for EmailJS requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// EmailJS credentials and template ids for the contact form
    #[serde(default)]
    pub emailjs: EmailJsSettings,
    /// Carousel timings and gesture tuning
    #[serde(default)]
    pub carousel: CarouselSettings,
}

/// EmailJS account settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EmailJsSettings {
    pub api_base: String,
    pub service_id: String,
    pub contact_template_id: String,
    pub auto_reply_template_id: String,
    pub public_key: String,
}

impl Default for EmailJsSettings {
    fn default() -> Self {
        Self {
            api_base: emailjs_defaults::DEFAULT_API_BASE.to_string(),
            service_id: String::new(),
            contact_template_id: String::new(),
            auto_reply_template_id: String::new(),
            public_key: String::new(),
        }
    }
}

/// Carousel timings in milliseconds and gesture tuning
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselSettings {
    pub auto_advance_ms: u64,
    pub transition_ms: u64,
    pub reenable_ms: u64,
    pub pause_cooldown_ms: u64,
    pub swipe_threshold_px: f64,
    /// Pixels per terminal column when translating mouse drags
    pub px_per_cell: f64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance_ms: carousel_defaults::AUTO_ADVANCE_MS,
            transition_ms: carousel_defaults::TRANSITION_MS,
            reenable_ms: carousel_defaults::REENABLE_MS,
            pause_cooldown_ms: carousel_defaults::PAUSE_COOLDOWN_MS,
            swipe_threshold_px: carousel_defaults::SWIPE_THRESHOLD_PX,
            px_per_cell: carousel_defaults::PX_PER_CELL,
        }
    }
}

impl CarouselSettings {
    pub fn to_timing(&self) -> CarouselTiming {
        CarouselTiming {
            auto_advance: Duration::from_millis(self.auto_advance_ms),
            transition: Duration::from_millis(self.transition_ms),
            reenable: Duration::from_millis(self.reenable_ms),
            pause_cooldown: Duration::from_millis(self.pause_cooldown_ms),
            swipe_threshold: self.swipe_threshold_px,
        }
    }
}

fn default_owner_name() -> String {
    "Yashwin".to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            owner_name: default_owner_name(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            emailjs: EmailJsSettings::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `PORTFOLIO_EMAILJS_SERVICE_ID` - Override EmailJS service id
    /// - `PORTFOLIO_EMAILJS_PUBLIC_KEY` - Override EmailJS public key
    /// - `PORTFOLIO_EMAILJS_API_BASE` - Override EmailJS API base URL
    /// - `PORTFOLIO_LOG_FILE` - Override log file path
    /// - `PORTFOLIO_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values
    pub fn apply_env_overrides(&mut self) {
        if let Ok(service_id) = std::env::var(env_vars::EMAILJS_SERVICE_ID) {
            self.emailjs.service_id = service_id;
        }

        if let Ok(public_key) = std::env::var(env_vars::EMAILJS_PUBLIC_KEY) {
            self.emailjs.public_key = public_key;
        }

        if let Ok(api_base) = std::env::var(env_vars::EMAILJS_API_BASE) {
            self.emailjs.api_base = api_base;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.emailjs,
            &self.log_file_path,
            self.http_timeout_seconds,
            &self.carousel,
        )
    }

    /// Template ids and sender name used by the contact form
    pub fn contact_templates(&self) -> ContactTemplates {
        ContactTemplates {
            contact: self.emailjs.contact_template_id.clone(),
            auto_reply: self.emailjs.auto_reply_template_id.clone(),
            from_name: self.owner_name.clone(),
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The public key is masked
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Owner Name:");
        println!("{}", config.owner_name);
        println!("────────────────────────────────────");
        println!("EmailJS:");
        println!("API base:            {}", config.emailjs.api_base);
        println!("Service ID:          {}", display_or_unset(&config.emailjs.service_id));
        println!(
            "Contact template:    {}",
            display_or_unset(&config.emailjs.contact_template_id)
        );
        println!(
            "Auto-reply template: {}",
            display_or_unset(&config.emailjs.auto_reply_template_id)
        );
        println!("Public key:          {}", mask_secret(&config.emailjs.public_key));
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Carousel:");
        println!(
            "Auto-advance {}ms, slide {}ms, pause {}ms, swipe {}px",
            config.carousel.auto_advance_ms,
            config.carousel.transition_ms,
            config.carousel.pause_cooldown_ms,
            config.carousel.swipe_threshold_px
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/portfolio_carousel.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the EmailJS API base.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut normalized = self.clone();
        normalized.emailjs.api_base = self.emailjs.api_base.trim_end_matches('/').to_string();

        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path, without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

fn mask_secret(value: &str) -> String {
    match value.chars().count() {
        0 => "(not set)".to_string(),
        n if n <= 4 => "*".repeat(n),
        n => {
            let visible: String = value.chars().take(4).collect();
            format!("{visible}{}", "*".repeat(n - 4))
        }
    }
}
