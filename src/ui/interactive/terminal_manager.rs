//! Terminal management for interactive UI
//!
//! Raw mode, the alternate screen and mouse capture are switched on together
//! and always switched off together, even when the main loop fails.

use crate::error::AppError;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

/// Configuration for terminal management operations
#[derive(Debug, Clone, Default)]
pub struct TerminalConfig {
    /// Leaves the terminal untouched so log output stays readable
    pub debug_mode: bool,
}

/// Terminal manager responsible for setup and cleanup operations
pub struct TerminalManager {
    config: TerminalConfig,
}

impl TerminalManager {
    pub fn with_config(config: TerminalConfig) -> Self {
        Self { config }
    }

    /// Setup terminal for interactive mode
    /// Returns a handle to stdout that can be used for rendering
    pub fn setup_terminal(&self) -> Result<std::io::Stdout, AppError> {
        let mut stdout = stdout();

        if !self.config.debug_mode {
            enable_raw_mode()?;
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        }

        Ok(stdout)
    }

    /// Restores the terminal to its original state
    pub fn cleanup_terminal(&self, mut stdout: std::io::Stdout) -> Result<(), AppError> {
        if !self.config.debug_mode {
            disable_raw_mode()?;
            execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_leaves_terminal_alone() {
        let manager = TerminalManager::with_config(TerminalConfig { debug_mode: true });
        let stdout = manager.setup_terminal().unwrap();
        assert!(manager.cleanup_terminal(stdout).is_ok());
    }
}
