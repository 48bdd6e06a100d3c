//! Event handling coordination for interactive UI
//!
//! Keyboard events drive the focused carousel; mouse events are resolved to
//! the panel under the cursor and routed to its pointer adapter.

use super::state_manager::InteractiveState;
use crate::carousel::PointerInput;
use crate::constants::polling;
use crate::error::AppError;
use crate::ui::{PanelRegion, ScreenLayout};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of processing an event
#[derive(Debug, PartialEq)]
pub enum EventResult {
    /// Nothing happened
    Continue,
    /// Exit the application
    Exit,
    /// Event was handled, continue processing
    Handled,
}

/// Polls quickly while the user is active or a slide is moving
pub(super) fn calculate_poll_interval(time_since_activity: Duration, animating: bool) -> Duration {
    if animating || time_since_activity < Duration::from_secs(polling::IDLE_THRESHOLD_SECONDS) {
        Duration::from_millis(polling::ACTIVE_MS)
    } else {
        Duration::from_millis(polling::IDLE_MS)
    }
}

/// Main event handler for interactive UI
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to one poll interval for a terminal event and applies it
    pub async fn process_events(
        &self,
        state: &mut InteractiveState,
        layout: ScreenLayout,
    ) -> Result<EventResult, AppError> {
        let poll_interval =
            calculate_poll_interval(state.time_since_activity(), state.is_animating());

        if event::poll(poll_interval)? {
            state.update_activity();
            let event = event::read()?;
            Ok(self.handle_event(state, event, layout))
        } else {
            Ok(EventResult::Continue)
        }
    }

    /// Applies one terminal event to the state
    pub fn handle_event(
        &self,
        state: &mut InteractiveState,
        event: Event,
        layout: ScreenLayout,
    ) -> EventResult {
        match event {
            Event::Key(key_event) => self.handle_key_event(state, &key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(state, &mouse_event, layout),
            Event::Resize(width, height) => {
                tracing::debug!("Resize event received: {width}x{height}");
                state.handle_resize();
                EventResult::Handled
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key_event(&self, state: &mut InteractiveState, key_event: &KeyEvent) -> EventResult {
        if key_event.kind != KeyEventKind::Press {
            return EventResult::Continue;
        }

        let now = state.now();
        let changed = match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                tracing::info!("Quit requested");
                return EventResult::Exit;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                tracing::info!("Quit requested with Ctrl+C");
                return EventResult::Exit;
            }
            KeyCode::Left | KeyCode::Char('h') => state
                .focused_panel_mut()
                .is_some_and(|panel| panel.prev(now)),
            KeyCode::Right | KeyCode::Char('l') => state
                .focused_panel_mut()
                .is_some_and(|panel| panel.next(now)),
            KeyCode::Tab | KeyCode::Down => {
                state.cycle_focus(1);
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.cycle_focus(-1);
                true
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                match state.focused_panel_mut().map(|panel| panel.select(index, now)) {
                    Some(Ok(changed)) => changed,
                    Some(Err(e)) => {
                        tracing::debug!("Ignoring dot key: {e}");
                        false
                    }
                    None => false,
                }
            }
            _ => return EventResult::Continue,
        };

        if changed {
            state.request_render();
        }
        EventResult::Handled
    }

    fn handle_mouse_event(
        &self,
        state: &mut InteractiveState,
        mouse_event: &MouseEvent,
        layout: ScreenLayout,
    ) -> EventResult {
        let now = state.now();
        let hit = layout.hit(mouse_event.column, mouse_event.row, state.panels.len());

        let changed = match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(hit) = hit else {
                    return EventResult::Continue;
                };
                state.set_focus(hit.panel);
                let panel = &mut state.panels[hit.panel];
                match hit.region {
                    PanelRegion::Dots => match panel.dot_at(hit.column, layout.content_width()) {
                        Some(index) => panel.select(index, now).unwrap_or(false),
                        None => false,
                    },
                    PanelRegion::Strip => {
                        let column = u16::try_from(hit.column).unwrap_or(u16::MAX);
                        let changed = panel.pointer(PointerInput::Down { column }, now);
                        state.begin_drag(hit.panel);
                        changed
                    }
                    _ => false,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(owner) = state.active_drag() else {
                    return EventResult::Continue;
                };
                match hit {
                    Some(hit) if hit.panel == owner && hit.region == PanelRegion::Strip => {
                        let column = u16::try_from(hit.column).unwrap_or(u16::MAX);
                        state.panels[owner].pointer(PointerInput::Drag { column }, now)
                    }
                    _ => {
                        tracing::debug!("Pointer left panel {owner} mid-drag");
                        state.end_drag();
                        state.panels[owner].pointer(PointerInput::Leave, now)
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => match state.end_drag() {
                Some(owner) => state.panels[owner].pointer(PointerInput::Up, now),
                None => false,
            },
            _ => return EventResult::Continue,
        };

        if changed {
            state.request_render();
        }
        EventResult::Handled
    }
}
