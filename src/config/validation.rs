use super::{CarouselSettings, EmailJsSettings};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - EmailJS API base must be an http(s) URL
/// - HTTP timeout must be at least one second
/// - Carousel timings must be nonzero and the swipe threshold positive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    emailjs: &EmailJsSettings,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    carousel: &CarouselSettings,
) -> Result<(), AppError> {
    validate_api_base(&emailjs.api_base)?;
    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }
    validate_carousel_settings(carousel)?;

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_api_base(api_base: &str) -> Result<(), AppError> {
    let host = api_base
        .strip_prefix("https://")
        .or_else(|| api_base.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error("EmailJS API base must start with http:// or https://")
        })?;

    if host.trim_end_matches('/').is_empty() {
        return Err(AppError::config_error("EmailJS API base has no host"));
    }

    Ok(())
}

fn validate_carousel_settings(carousel: &CarouselSettings) -> Result<(), AppError> {
    let timings = [
        ("auto_advance_ms", carousel.auto_advance_ms),
        ("transition_ms", carousel.transition_ms),
        ("reenable_ms", carousel.reenable_ms),
        ("pause_cooldown_ms", carousel.pause_cooldown_ms),
    ];
    if let Some((name, _)) = timings.iter().find(|(_, value)| *value == 0) {
        return Err(AppError::config_error(format!(
            "carousel.{name} must be greater than zero"
        )));
    }

    if !(carousel.swipe_threshold_px.is_finite() && carousel.swipe_threshold_px > 0.0) {
        return Err(AppError::config_error(
            "carousel.swipe_threshold_px must be a positive number",
        ));
    }

    if !(carousel.px_per_cell.is_finite() && carousel.px_per_cell > 0.0) {
        return Err(AppError::config_error(
            "carousel.px_per_cell must be a positive number",
        ));
    }

    Ok(())
}

/// Checks that everything needed to send through EmailJS is present.
/// Only required when the contact form is used.
pub fn validate_emailjs_credentials(emailjs: &EmailJsSettings) -> Result<(), AppError> {
    let required = [
        ("service_id", &emailjs.service_id),
        ("contact_template_id", &emailjs.contact_template_id),
        ("auto_reply_template_id", &emailjs.auto_reply_template_id),
        ("public_key", &emailjs.public_key),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::config_error(format!(
                "emailjs.{name} is not configured"
            )));
        }
    }

    validate_api_base(&emailjs.api_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> EmailJsSettings {
        EmailJsSettings {
            service_id: "service_test".to_string(),
            contact_template_id: "template_contact".to_string(),
            auto_reply_template_id: "template_reply".to_string(),
            public_key: "public".to_string(),
            ..EmailJsSettings::default()
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(
            validate_config(
                &EmailJsSettings::default(),
                &None,
                30,
                &CarouselSettings::default()
            )
            .is_ok()
        );
    }

    #[test]
    fn test_api_base_validation() {
        assert!(validate_api_base("https://api.emailjs.com").is_ok());
        assert!(validate_api_base("http://localhost:8080").is_ok());
        assert!(validate_api_base("api.emailjs.com").is_err());
        assert!(validate_api_base("https://").is_err());
    }

    #[test]
    fn test_zero_http_timeout_is_rejected() {
        let err = validate_config(
            &EmailJsSettings::default(),
            &None,
            0,
            &CarouselSettings::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("http_timeout_seconds"));
    }

    #[test]
    fn test_zero_timing_is_rejected() {
        let carousel = CarouselSettings {
            reenable_ms: 0,
            ..CarouselSettings::default()
        };
        let err = validate_carousel_settings(&carousel).unwrap_err();
        assert!(err.to_string().contains("reenable_ms"));
    }

    #[test]
    fn test_swipe_threshold_must_be_positive() {
        let carousel = CarouselSettings {
            swipe_threshold_px: -5.0,
            ..CarouselSettings::default()
        };
        assert!(validate_carousel_settings(&carousel).is_err());

        let carousel = CarouselSettings {
            px_per_cell: f64::NAN,
            ..CarouselSettings::default()
        };
        assert!(validate_carousel_settings(&carousel).is_err());
    }

    #[test]
    fn test_empty_log_path_is_rejected() {
        let result = validate_config(
            &EmailJsSettings::default(),
            &Some(String::new()),
            30,
            &CarouselSettings::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("viewer.log");
        let result = validate_config(
            &EmailJsSettings::default(),
            &Some(log_path.to_string_lossy().to_string()),
            30,
            &CarouselSettings::default(),
        );
        assert!(result.is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_emailjs_credentials() {
        assert!(validate_emailjs_credentials(&credentials()).is_ok());

        let missing_key = EmailJsSettings {
            public_key: "  ".to_string(),
            ..credentials()
        };
        let err = validate_emailjs_credentials(&missing_key).unwrap_err();
        assert!(err.to_string().contains("public_key"));

        assert!(validate_emailjs_credentials(&EmailJsSettings::default()).is_err());
    }
}
