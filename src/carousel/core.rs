//! Carousel state machine.
//!
//! The carousel never reads a wall clock. Callers drive it with
//! [`Carousel::advance_to`], which fires every due timer in deadline order and
//! reports what changed as [`CarouselEvent`]s.

use super::timeline::{TimerKind, Timers};
use crate::constants::carousel::{
    AUTO_ADVANCE_MS, PAUSE_COOLDOWN_MS, REENABLE_MS, SWIPE_THRESHOLD_PX, TRANSITION_MS,
};
use crate::error::AppError;
use std::time::Duration;

/// Timing and gesture parameters for one carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    /// Interval between automatic advances
    pub auto_advance: Duration,
    /// Slide animation length; also how long the wrap frame is held before the reset
    pub transition: Duration,
    /// Delay before animations come back after an instant reposition
    pub reenable: Duration,
    /// Pause window after a gesture or dot click
    pub pause_cooldown: Duration,
    /// Distance (px) a gesture must exceed to navigate
    pub swipe_threshold: f64,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            auto_advance: Duration::from_millis(AUTO_ADVANCE_MS),
            transition: Duration::from_millis(TRANSITION_MS),
            reenable: Duration::from_millis(REENABLE_MS),
            pause_cooldown: Duration::from_millis(PAUSE_COOLDOWN_MS),
            swipe_threshold: SWIPE_THRESHOLD_PX,
        }
    }
}

/// Progress of the seamless-loop dance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Nothing pending
    Idle,
    /// Sliding into the duplicate first frame; snaps back to 0 when the slide ends
    Settling,
    /// Snapped back to 0 with animations off; waiting to turn them on again
    Resetting,
    /// Jumped to the duplicate frame to go backwards from 0; waiting to slide to the last image
    Rewinding,
}

/// The three mutually exclusive interaction modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    AutoAdvancing,
    Paused,
    Dragging,
}

/// How a finished gesture was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged left past the threshold, goes to the next image
    Left,
    /// Dragged right past the threshold, goes to the previous image
    Right,
    /// Moved, but not far enough to navigate
    BelowThreshold,
    /// Released without moving
    Tap,
}

/// State changes reported by carousel operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// Position changed, with or without the slide animation
    Moved { from: usize, to: usize, animated: bool },
    /// Instant reset from the duplicate frame back to the first image
    LoopReset,
    /// Slide animations were turned back on
    TransitionsEnabled,
    /// Automatic advance stopped
    Paused,
    /// Automatic advance restarted
    Resumed,
    DragStarted { position: f64 },
    DragEnded { outcome: SwipeOutcome },
}

/// Transient state of a gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start: f64,
    pub last: Option<f64>,
}

impl DragState {
    /// Offset from the start position; zero until the first move
    pub fn offset(&self) -> f64 {
        self.last.map_or(0.0, |last| last - self.start)
    }
}

/// Auto-advancing image carousel with a seamless forward loop
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    label: String,
    timing: CarouselTiming,
    now: Duration,
    current_index: usize,
    paused: bool,
    transitions_enabled: bool,
    drag: Option<DragState>,
    phase: LoopPhase,
    timers: Timers,
}

impl Carousel {
    /// Creates a carousel with the default timings.
    ///
    /// # Errors
    /// * `AppError::EmptyImageList` - `images` is empty
    pub fn new<I, S>(images: I, label: impl Into<String>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_timing(images, label, CarouselTiming::default())
    }

    /// Creates a carousel with custom timings. Auto-advance is armed immediately.
    pub fn with_timing<I, S>(
        images: I,
        label: impl Into<String>,
        timing: CarouselTiming,
    ) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return Err(AppError::EmptyImageList);
        }

        let mut timers = Timers::default();
        timers.auto_advance.arm(timing.auto_advance);

        Ok(Self {
            images,
            label: label.into(),
            timing,
            now: Duration::ZERO,
            current_index: 0,
            paused: false,
            transitions_enabled: true,
            drag: None,
            phase: LoopPhase::Idle,
            timers,
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn timing(&self) -> &CarouselTiming {
        &self.timing
    }

    /// Number of real images (N)
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; a carousel cannot be built without images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images followed by the first image again
    pub fn extended_images(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .chain(self.images.first())
            .map(String::as_str)
    }

    /// Position in the extended sequence, `0..=len()`
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Real image shown, used for the dot indicators
    pub fn display_index(&self) -> usize {
        self.current_index % self.len()
    }

    /// The carousel's own clock
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Live drag offset in pixels, zero when no gesture is active
    pub fn drag_offset(&self) -> f64 {
        self.drag.as_ref().map_or(0.0, DragState::offset)
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn mode(&self) -> CarouselMode {
        if self.drag.is_some() {
            CarouselMode::Dragging
        } else if self.paused {
            CarouselMode::Paused
        } else {
            CarouselMode::AutoAdvancing
        }
    }

    /// Next time anything will happen on its own, if ever
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// When paused auto-advance resumes, if a cooldown is pending
    pub fn resume_deadline(&self) -> Option<Duration> {
        self.timers.cooldown.deadline()
    }

    /// When the next automatic advance is due, if auto-advance is running
    pub fn auto_advance_deadline(&self) -> Option<Duration> {
        self.timers.auto_advance.deadline()
    }

    /// Moves the clock forward to `now`, firing due timers in order.
    /// A `now` earlier than the current clock is ignored.
    pub fn advance_to(&mut self, now: Duration) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        if now < self.now {
            return events;
        }

        while let Some((kind, deadline)) = self.timers.next_due(now) {
            self.now = deadline;
            match kind {
                TimerKind::Phase => self.fire_phase_timer(&mut events),
                TimerKind::Cooldown => {
                    self.timers.cooldown.cancel();
                    // A gesture start cancels the cooldown, but never resume under a finger
                    if self.drag.is_none() {
                        self.resume(&mut events);
                    }
                }
                TimerKind::AutoAdvance => {
                    self.timers
                        .auto_advance
                        .arm(deadline + self.timing.auto_advance);
                    self.step_forward(false, &mut events);
                }
            }
        }

        self.now = now;
        events
    }

    /// Moves the clock forward by `elapsed`
    pub fn advance_by(&mut self, elapsed: Duration) -> Vec<CarouselEvent> {
        self.advance_to(self.now + elapsed)
    }

    /// Slides to the next image, looping through the duplicate first frame
    pub fn go_to_next(&mut self) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        self.step_forward(true, &mut events);
        events
    }

    /// Slides to the previous image. From the first image this lands on the last one.
    pub fn go_to_prev(&mut self) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        self.step_backward(&mut events);
        events
    }

    /// Dot navigation: jumps to real image `index` and pauses auto-advance for the cooldown.
    ///
    /// # Errors
    /// * `AppError::IndexOutOfRange` - `index >= len()`; state is left untouched
    pub fn go_to(&mut self, index: usize) -> Result<Vec<CarouselEvent>, AppError> {
        if index >= self.len() {
            return Err(AppError::index_out_of_range(index, self.len()));
        }

        let mut events = Vec::new();
        self.settle_rewind(&mut events);
        self.enable_transitions(&mut events);
        self.leave_wrap_frame();
        self.move_to(index, &mut events);
        self.pause(&mut events);
        self.timers.cooldown.arm(self.now + self.timing.pause_cooldown);
        Ok(events)
    }

    /// Gesture start: pauses auto-advance and starts tracking from `position`
    pub fn drag_start(&mut self, position: f64) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        self.timers.cooldown.cancel();
        self.drag = Some(DragState {
            start: position,
            last: None,
        });
        self.pause(&mut events);
        events.push(CarouselEvent::DragStarted { position });
        events
    }

    /// Gesture move: records the latest position. Ignored when no gesture is active.
    pub fn drag_move(&mut self, position: f64) -> Vec<CarouselEvent> {
        if let Some(drag) = self.drag.as_mut() {
            drag.last = Some(position);
        }
        Vec::new()
    }

    /// Gesture end: classifies the swipe, navigates, and schedules the resume cooldown
    pub fn drag_end(&mut self) -> Vec<CarouselEvent> {
        let mut events = Vec::new();
        let Some(drag) = self.drag.take() else {
            return events;
        };

        let outcome = match drag.last {
            None => SwipeOutcome::Tap,
            Some(end) => {
                let distance = drag.start - end;
                if distance > self.timing.swipe_threshold {
                    SwipeOutcome::Left
                } else if distance < -self.timing.swipe_threshold {
                    SwipeOutcome::Right
                } else {
                    SwipeOutcome::BelowThreshold
                }
            }
        };
        events.push(CarouselEvent::DragEnded { outcome });

        match outcome {
            SwipeOutcome::Left => self.step_forward(true, &mut events),
            SwipeOutcome::Right => self.step_backward(&mut events),
            SwipeOutcome::BelowThreshold | SwipeOutcome::Tap => {}
        }

        self.timers.cooldown.arm(self.now + self.timing.pause_cooldown);
        events
    }

    /// Pointer left the widget: finishes an active gesture as if released
    pub fn drag_cancel(&mut self) -> Vec<CarouselEvent> {
        if self.drag.is_some() {
            self.drag_end()
        } else {
            Vec::new()
        }
    }

    fn step_forward(&mut self, enable_transitions: bool, events: &mut Vec<CarouselEvent>) {
        self.settle_rewind(events);
        if self.current_index == self.len() {
            // Still on the duplicate frame; it is visually index 0
            self.snap_to_start(events);
        }
        if enable_transitions {
            self.enable_transitions(events);
        }
        self.move_to(self.current_index + 1, events);
        if self.current_index == self.len() {
            self.phase = LoopPhase::Settling;
            self.timers.phase.arm(self.now + self.timing.transition);
        }
    }

    fn step_backward(&mut self, events: &mut Vec<CarouselEvent>) {
        self.settle_rewind(events);
        if self.current_index == 0 {
            // Duplicate of the first frame sits right after the last image
            self.transitions_enabled = false;
            self.move_to(self.len(), events);
            self.phase = LoopPhase::Rewinding;
            self.timers.phase.arm(self.now + self.timing.reenable);
        } else {
            self.enable_transitions(events);
            self.leave_wrap_frame();
            self.move_to(self.current_index - 1, events);
        }
    }

    fn fire_phase_timer(&mut self, events: &mut Vec<CarouselEvent>) {
        self.timers.phase.cancel();
        match self.phase {
            LoopPhase::Settling => self.snap_to_start(events),
            LoopPhase::Resetting => {
                self.phase = LoopPhase::Idle;
                self.enable_transitions(events);
            }
            LoopPhase::Rewinding => self.finish_rewind(events),
            LoopPhase::Idle => {}
        }
    }

    fn snap_to_start(&mut self, events: &mut Vec<CarouselEvent>) {
        self.transitions_enabled = false;
        self.current_index = 0;
        self.phase = LoopPhase::Resetting;
        self.timers.phase.arm(self.now + self.timing.reenable);
        events.push(CarouselEvent::LoopReset);
    }

    fn finish_rewind(&mut self, events: &mut Vec<CarouselEvent>) {
        self.phase = LoopPhase::Idle;
        self.timers.phase.cancel();
        self.enable_transitions(events);
        self.move_to(self.len() - 1, events);
    }

    /// A pending rewind step is applied before any other navigation
    fn settle_rewind(&mut self, events: &mut Vec<CarouselEvent>) {
        if self.phase == LoopPhase::Rewinding {
            self.finish_rewind(events);
        }
    }

    fn leave_wrap_frame(&mut self) {
        if self.phase == LoopPhase::Settling {
            self.phase = LoopPhase::Idle;
            self.timers.phase.cancel();
        }
    }

    fn enable_transitions(&mut self, events: &mut Vec<CarouselEvent>) {
        if self.phase == LoopPhase::Resetting {
            self.phase = LoopPhase::Idle;
            self.timers.phase.cancel();
        }
        if !self.transitions_enabled {
            self.transitions_enabled = true;
            events.push(CarouselEvent::TransitionsEnabled);
        }
    }

    fn move_to(&mut self, to: usize, events: &mut Vec<CarouselEvent>) {
        debug_assert!(to <= self.len());
        let from = self.current_index;
        if from == to {
            return;
        }
        self.current_index = to;
        events.push(CarouselEvent::Moved {
            from,
            to,
            animated: self.transitions_enabled,
        });
    }

    fn pause(&mut self, events: &mut Vec<CarouselEvent>) {
        if !self.paused {
            self.paused = true;
            self.timers.auto_advance.cancel();
            events.push(CarouselEvent::Paused);
        }
    }

    fn resume(&mut self, events: &mut Vec<CarouselEvent>) {
        if self.paused {
            self.paused = false;
            self.timers
                .auto_advance
                .arm(self.now + self.timing.auto_advance);
            events.push(CarouselEvent::Resumed);
        }
    }
}
