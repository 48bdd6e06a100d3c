//! Main interactive UI loop.
//!
//! Every iteration runs the carousel clocks up to the session time, renders
//! when something visible changed, then waits for input for one poll interval.

use super::event_handler::{EventHandler, EventResult};
use super::state_manager::InteractiveState;
use super::terminal_manager::{TerminalConfig, TerminalManager};
use crate::constants::ui::DEFAULT_SNAPSHOT_WIDTH;
use crate::error::AppError;
use crate::ui::{CarouselPanel, ScreenLayout, compose_screen, header_lines};
use chrono::Local;
use crossterm::{execute, style::Print};
use std::io::{Stdout, Write};

/// Options for the interactive session
#[derive(Debug, Clone, Default)]
pub struct InteractiveOptions {
    /// Keep the terminal in cooked mode so log output stays readable
    pub debug_mode: bool,
    /// Sender name shown in the header
    pub owner_name: String,
}

/// Runs the interactive carousel viewer until the user quits
pub async fn run_interactive_ui(
    panels: Vec<CarouselPanel>,
    options: InteractiveOptions,
) -> Result<(), AppError> {
    let terminal = TerminalManager::with_config(TerminalConfig {
        debug_mode: options.debug_mode,
    });
    let mut stdout = terminal.setup_terminal()?;

    tracing::info!("Starting interactive UI with {} carousel(s)", panels.len());
    let mut state = InteractiveState::new(panels);
    let result = event_loop(&mut stdout, &mut state, &options).await;

    // Restore the terminal before reporting any loop error
    terminal.cleanup_terminal(stdout)?;
    result
}

async fn event_loop(
    stdout: &mut Stdout,
    state: &mut InteractiveState,
    options: &InteractiveOptions,
) -> Result<(), AppError> {
    let event_handler = EventHandler::new();
    let mut last_clock = String::new();

    loop {
        let layout = current_layout();
        state.tick();

        // Header clock ticks once per second
        let clock = Local::now().format("%H:%M:%S").to_string();
        if clock != last_clock {
            last_clock.clone_from(&clock);
            state.request_render();
        }

        if state.needs_render() {
            let header = header_lines(&options.owner_name, layout.width, &clock);
            let buffer = compose_screen(
                &state.panels,
                state.focused(),
                layout,
                state.now(),
                &header,
            );
            execute!(stdout, Print(buffer))?;
            stdout.flush()?;
            state.clear_render_flag();
        }

        match event_handler.process_events(state, layout).await? {
            EventResult::Exit => {
                tracing::info!("Exit requested through event handler");
                break;
            }
            EventResult::Handled | EventResult::Continue => {}
        }
    }

    Ok(())
}

/// Terminal width, falling back to the snapshot width when it cannot be read
fn current_layout() -> ScreenLayout {
    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(DEFAULT_SNAPSHOT_WIDTH);
    ScreenLayout::new(width)
}
