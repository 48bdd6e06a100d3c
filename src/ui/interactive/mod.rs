//! Interactive UI module
//!
//! This module is organized into focused submodules:
//! - `terminal_manager`: raw mode, alternate screen and mouse capture
//! - `state_manager`: panels, focus and render bookkeeping
//! - `event_handler`: keyboard and mouse routing, adaptive polling
//! - `core`: main interactive UI loop

mod core;
mod event_handler;
mod state_manager;
mod terminal_manager;

pub use self::core::{InteractiveOptions, run_interactive_ui};
