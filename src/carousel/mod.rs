//! Image carousel with automatic advance, drag-to-swipe, dot navigation and a
//! seamless forward loop.
//!
//! This module is organized into focused submodules:
//! - `core`: the carousel state machine and its operations
//! - `timeline`: single-slot timers on the carousel's virtual clock
//! - `gesture`: pointer and touch adapters over one gesture interface
//! - `render`: translation, transition, frame and dot description for views
//!
//! The display sequence is the image list with its first image appended. Sliding
//! forward past the last image animates into that duplicate, and once the slide
//! ends the carousel snaps back to index 0 with animations off, so the loop
//! never visibly jumps.

mod core;
pub mod gesture;
pub mod render;
mod timeline;

pub use self::core::{
    Carousel, CarouselEvent, CarouselMode, CarouselTiming, DragState, LoopPhase, SwipeOutcome,
};
pub use gesture::{
    GestureTarget, PointerAdapter, PointerInput, TouchAdapter, TouchInput, TouchPoint,
};
pub use render::{Easing, Frame, RenderState, Transition};
