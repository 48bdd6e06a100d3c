//! Render contract for a carousel: where the strip sits, whether it animates,
//! and what each frame and dot shows.

use super::core::Carousel;
use std::time::Duration;

/// Easing curve for the slide animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// CSS `ease-out`, cubic-bezier(0, 0, 0.58, 1)
    EaseOut,
    Linear,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::Linear => "linear",
        }
    }
}

/// Solves the x curve for `x` by bisection and returns the matching y
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let curve = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    let (mut low, mut high) = (0.0_f64, 1.0_f64);
    let mut s = x;
    for _ in 0..32 {
        s = (low + high) / 2.0;
        if curve(x1, x2, s) < x {
            low = s;
        } else {
            high = s;
        }
    }
    curve(y1, y2, s)
}

/// Slide animation applied to the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn css(&self) -> String {
        format!(
            "transform {}s {}",
            self.duration.as_secs_f64(),
            self.easing.css_name()
        )
    }
}

/// One entry of the extended sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub image: String,
    pub alt: String,
}

/// Everything a view needs to draw a carousel
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub current_index: usize,
    pub display_index: usize,
    /// Strip translation as a percentage of one frame width, always `<= 0`
    pub translate_percent: f64,
    /// Extra pixel translation while dragging
    pub drag_offset_px: f64,
    /// `None` while dragging or during an instant reposition
    pub transition: Option<Transition>,
    pub frames: Vec<Frame>,
    /// One entry per real image, `true` for the highlighted dot
    pub dots: Vec<bool>,
}

impl RenderState {
    /// CSS transform for the strip
    pub fn transform(&self) -> String {
        format!(
            "translateX(calc({}% + {}px))",
            self.translate_percent, self.drag_offset_px
        )
    }

    /// CSS transition property for the strip
    pub fn transition_css(&self) -> String {
        self.transition
            .as_ref()
            .map_or_else(|| "none".to_string(), Transition::css)
    }

    /// Strip position in frame widths, `-translate_percent / 100`
    pub fn position(&self) -> f64 {
        -self.translate_percent / 100.0
    }
}

impl Carousel {
    pub fn render_state(&self) -> RenderState {
        let dragging = self.is_dragging();
        let transition = (!dragging && self.transitions_enabled()).then(|| Transition {
            duration: self.timing().transition,
            easing: Easing::EaseOut,
        });

        let frames = self
            .extended_images()
            .enumerate()
            .map(|(idx, image)| Frame {
                image: image.to_string(),
                alt: format!("{} image {}", self.label(), idx + 1),
            })
            .collect();

        let display_index = self.display_index();
        RenderState {
            current_index: self.current_index(),
            display_index,
            translate_percent: 0.0 - self.current_index() as f64 * 100.0,
            drag_offset_px: if dragging { self.drag_offset() } else { 0.0 },
            transition,
            frames,
            dots: (0..self.len()).map(|idx| idx == display_index).collect(),
        }
    }
}
