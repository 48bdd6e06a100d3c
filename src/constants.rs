//! Application-wide constants and configuration values
//!
//! Carousel timings here are the defaults; every one of them can be overridden
//! through the `[carousel]` table of the config file.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Carousel timing and gesture defaults
pub mod carousel {
    /// Interval between automatic advances
    pub const AUTO_ADVANCE_MS: u64 = 2000;

    /// Duration of the slide animation (0.5s ease-out)
    pub const TRANSITION_MS: u64 = 500;

    /// Delay before animations are re-enabled after an instant reposition
    pub const REENABLE_MS: u64 = 50;

    /// How long auto-advance stays paused after a gesture or dot click
    pub const PAUSE_COOLDOWN_MS: u64 = 3000;

    /// Horizontal distance a gesture must exceed to count as a swipe
    pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

    /// Pixels represented by one terminal column for pointer gestures
    pub const PX_PER_CELL: f64 = 8.0;
}

/// UI polling intervals in milliseconds
pub mod polling {
    /// Polling interval while the user is interacting or a slide is animating
    pub const ACTIVE_MS: u64 = 50;

    /// Polling interval when nothing has happened for a while
    pub const IDLE_MS: u64 = 200;

    /// Time without input after which the UI is considered idle (seconds)
    pub const IDLE_THRESHOLD_SECONDS: u64 = 5;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Rows used by the frame strip of a carousel
    pub const FRAME_HEIGHT: usize = 5;

    /// Rows used by one carousel panel: title, subtitle, frame strip, dots, description, spacer
    pub const PANEL_HEIGHT: usize = FRAME_HEIGHT + 5;

    /// Rows taken by the page header above the first panel
    pub const HEADER_HEIGHT: usize = 2;

    /// Narrowest frame strip that is still rendered
    pub const MIN_STRIP_WIDTH: usize = 12;

    /// Width used for snapshots when the terminal size is unknown
    pub const DEFAULT_SNAPSHOT_WIDTH: u16 = 80;
}

/// EmailJS REST API constants
pub mod emailjs {
    /// Public API endpoint host
    pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

    /// Path of the send endpoint, relative to the API base
    pub const SEND_PATH: &str = "/api/v1.0/email/send";

    /// Subject line of the auto-reply sent to whoever submitted the form
    pub const AUTO_REPLY_TITLE: &str = "Contact Form Submission";

    /// Retries for rate-limited (429) requests
    pub const MAX_RATE_LIMIT_RETRIES: u32 = 2;

    /// Initial backoff before retrying a rate-limited request
    pub const RATE_LIMIT_BACKOFF_MS: u64 = 500;
}

/// Environment variable names for configuration overrides
pub mod env_vars {
    /// EmailJS service id override
    pub const EMAILJS_SERVICE_ID: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";

    /// EmailJS public key override
    pub const EMAILJS_PUBLIC_KEY: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";

    /// EmailJS API base override
    pub const EMAILJS_API_BASE: &str = "PORTFOLIO_EMAILJS_API_BASE";

    /// Log file path override
    pub const LOG_FILE: &str = "PORTFOLIO_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "PORTFOLIO_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_timing_relationships() {
        // The slide must finish well before the next automatic advance
        assert!(carousel::TRANSITION_MS < carousel::AUTO_ADVANCE_MS);
        assert!(carousel::REENABLE_MS < carousel::TRANSITION_MS);
        assert!(carousel::PAUSE_COOLDOWN_MS > carousel::AUTO_ADVANCE_MS);
    }

    #[test]
    fn test_polling_intervals() {
        assert!(polling::ACTIVE_MS < polling::IDLE_MS);
    }

    #[test]
    fn test_emailjs_constants() {
        assert!(emailjs::DEFAULT_API_BASE.starts_with("https://"));
        assert!(emailjs::SEND_PATH.starts_with('/'));
    }
}
