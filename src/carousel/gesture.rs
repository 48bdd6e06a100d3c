//! Unified gesture input.
//!
//! Pointer and touch events both reduce to start/move/end on a horizontal
//! position. The carousel implements [`GestureTarget`] once; the two adapters
//! below translate their device's events onto it.

use super::core::{Carousel, CarouselEvent};
use crate::constants::carousel::PX_PER_CELL;

/// Receiver of start/move/end gestures on a horizontal axis
pub trait GestureTarget {
    fn gesture_start(&mut self, position: f64) -> Vec<CarouselEvent>;
    fn gesture_move(&mut self, position: f64) -> Vec<CarouselEvent>;
    fn gesture_end(&mut self) -> Vec<CarouselEvent>;
    /// The pointer left the target mid-gesture
    fn gesture_cancel(&mut self) -> Vec<CarouselEvent>;
}

impl GestureTarget for Carousel {
    fn gesture_start(&mut self, position: f64) -> Vec<CarouselEvent> {
        self.drag_start(position)
    }

    fn gesture_move(&mut self, position: f64) -> Vec<CarouselEvent> {
        self.drag_move(position)
    }

    fn gesture_end(&mut self) -> Vec<CarouselEvent> {
        self.drag_end()
    }

    fn gesture_cancel(&mut self) -> Vec<CarouselEvent> {
        self.drag_cancel()
    }
}

/// Mouse input in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Down { column: u16 },
    Drag { column: u16 },
    Up,
    /// Pointer moved outside the widget
    Leave,
}

/// Maps mouse events onto a [`GestureTarget`]
#[derive(Debug, Clone)]
pub struct PointerAdapter {
    px_per_cell: f64,
    pressed: bool,
}

impl PointerAdapter {
    pub fn new(px_per_cell: f64) -> Self {
        Self {
            px_per_cell,
            pressed: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn position(&self, column: u16) -> f64 {
        f64::from(column) * self.px_per_cell
    }

    pub fn handle<T: GestureTarget>(
        &mut self,
        target: &mut T,
        input: PointerInput,
    ) -> Vec<CarouselEvent> {
        match input {
            PointerInput::Down { column } => {
                self.pressed = true;
                target.gesture_start(self.position(column))
            }
            PointerInput::Drag { column } if self.pressed => {
                target.gesture_move(self.position(column))
            }
            PointerInput::Up if self.pressed => {
                self.pressed = false;
                target.gesture_end()
            }
            PointerInput::Leave if self.pressed => {
                self.pressed = false;
                target.gesture_cancel()
            }
            // Hover moves and stray releases
            _ => Vec::new(),
        }
    }
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new(PX_PER_CELL)
    }
}

/// One active touch point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput<'a> {
    Start(&'a [TouchPoint]),
    Move(&'a [TouchPoint]),
    End,
}

/// Maps touch events onto a [`GestureTarget`], following the first finger only
#[derive(Debug, Clone, Default)]
pub struct TouchAdapter {
    tracking: Option<u64>,
}

impl TouchAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle<T: GestureTarget>(
        &mut self,
        target: &mut T,
        input: TouchInput<'_>,
    ) -> Vec<CarouselEvent> {
        match input {
            TouchInput::Start(points) => match (self.tracking, points.first()) {
                (None, Some(first)) => {
                    self.tracking = Some(first.id);
                    target.gesture_start(first.x)
                }
                _ => Vec::new(),
            },
            TouchInput::Move(points) => {
                let tracked = self
                    .tracking
                    .and_then(|id| points.iter().find(|point| point.id == id));
                match tracked {
                    Some(point) => target.gesture_move(point.x),
                    None => Vec::new(),
                }
            }
            TouchInput::End => match self.tracking.take() {
                Some(_) => target.gesture_end(),
                None => Vec::new(),
            },
        }
    }
}
