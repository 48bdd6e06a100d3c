use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Carousel preconditions
    #[error("Carousel needs at least one image")]
    EmptyImageList,

    #[error("Image index {index} is out of range for a carousel of {len} images")]
    IndexOutOfRange { index: usize, len: usize },

    // Contact form delivery
    #[error("Invalid contact form: {0}")]
    InvalidContactForm(String),

    #[error("Email service rejected the request ({status}): {message}")]
    EmailSend { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid contact form error
    pub fn invalid_contact_form(msg: impl Into<String>) -> Self {
        Self::InvalidContactForm(msg.into())
    }

    /// Create an email service rejection error (non-2xx response)
    pub fn email_send(status: u16, message: impl Into<String>) -> Self {
        Self::EmailSend {
            status,
            message: message.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Whether retrying the same request later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::EmailSend { status, .. } => *status == 429 || *status >= 500,
            AppError::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
