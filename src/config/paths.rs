use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("portfolio_carousel")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("portfolio_carousel")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_app_directory() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        assert!(config_path.ends_with("config.toml"));
        assert!(config_path.contains("portfolio_carousel"));
        assert!(log_dir.contains("portfolio_carousel"));
        assert!(log_dir.ends_with("logs"));
    }
}
