//! Portfolio experience carousels for the terminal.
//!
//! The core of this library is [`carousel::Carousel`], an auto-advancing image
//! carousel that loops seamlessly by appending a copy of the first image and
//! snapping back to it without animation. It runs on a caller-driven clock, so
//! the same state machine backs the interactive viewer and the tests.
//!
//! # Examples
//!
//! ```rust
//! use portfolio_carousel::carousel::Carousel;
//! use portfolio_carousel::error::AppError;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), AppError> {
//!     let mut carousel = Carousel::new(["a.png", "b.png", "c.png"], "Trip")?;
//!
//!     // Two auto-advances later the third image is shown
//!     carousel.advance_to(Duration::from_millis(4000));
//!     assert_eq!(carousel.display_index(), 2);
//!
//!     let state = carousel.render_state();
//!     assert_eq!(state.transform(), "translateX(calc(-200% + 0px))");
//!     Ok(())
//! }
//! ```

pub mod carousel;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod portfolio;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use carousel::{Carousel, CarouselEvent, CarouselTiming, RenderState};
pub use config::Config;
pub use contact::{ContactForm, ContactOutcome, EmailJsClient, EmailSender, submit_contact_form};
pub use error::AppError;
pub use portfolio::{Experience, experiences};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
