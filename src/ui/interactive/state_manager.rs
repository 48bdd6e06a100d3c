//! State management for interactive UI
//!
//! Groups the carousel panels with focus, drag ownership and render/activity
//! bookkeeping so the event handler and main loop share one view of the screen.

use crate::ui::CarouselPanel;
use std::time::{Duration, Instant};

/// Timer state for the interactive loop
#[derive(Debug)]
pub struct TimerState {
    /// Start of the session; carousel clocks count from here
    pub started: Instant,
    pub last_activity: Instant,
}

impl TimerState {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_activity: now,
        }
    }

    /// Time on the carousel clock
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn update_activity(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.last_activity.elapsed()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the interactive loop mutates
#[derive(Debug)]
pub struct InteractiveState {
    pub panels: Vec<CarouselPanel>,
    pub timers: TimerState,
    focused: usize,
    /// Panel that owns the current mouse drag
    active_drag: Option<usize>,
    needs_render: bool,
}

impl InteractiveState {
    pub fn new(panels: Vec<CarouselPanel>) -> Self {
        Self {
            panels,
            timers: TimerState::new(),
            focused: 0,
            active_drag: None,
            needs_render: true,
        }
    }

    pub fn now(&self) -> Duration {
        self.timers.elapsed()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn focused_panel_mut(&mut self) -> Option<&mut CarouselPanel> {
        self.panels.get_mut(self.focused)
    }

    /// Moves focus by `step` panels, wrapping around
    pub fn cycle_focus(&mut self, step: isize) {
        if self.panels.is_empty() {
            return;
        }
        let len = self.panels.len() as isize;
        self.focused = (self.focused as isize + step).rem_euclid(len) as usize;
        tracing::debug!("Focus moved to panel {}", self.focused);
        self.request_render();
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.panels.len() && index != self.focused {
            self.focused = index;
            self.request_render();
        }
    }

    pub fn active_drag(&self) -> Option<usize> {
        self.active_drag
    }

    pub fn begin_drag(&mut self, panel: usize) {
        self.active_drag = Some(panel);
    }

    pub fn end_drag(&mut self) -> Option<usize> {
        self.active_drag.take()
    }

    /// Runs every carousel clock to now; requests a render when anything moved
    pub fn tick(&mut self) {
        let now = self.now();
        let mut changed = false;
        for panel in &mut self.panels {
            changed |= panel.advance_to(now);
            changed |= panel.is_animating(now);
        }
        if changed {
            self.request_render();
        }
    }

    pub fn is_animating(&self) -> bool {
        let now = self.now();
        self.panels.iter().any(|panel| panel.is_animating(now))
    }

    pub fn update_activity(&mut self) {
        self.timers.update_activity();
    }

    pub fn time_since_activity(&self) -> Duration {
        self.timers.time_since_activity()
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_render_flag(&mut self) {
        self.needs_render = false;
    }

    /// The layout is recomputed each frame; a resize only needs a redraw
    pub fn handle_resize(&mut self) {
        self.request_render();
    }
}
