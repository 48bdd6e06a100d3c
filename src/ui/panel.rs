//! Terminal view of one experience entry and its carousel.

use super::animation::StripAnimator;
use super::colors::*;
use crate::carousel::{Carousel, CarouselEvent, CarouselMode, PointerAdapter, PointerInput};
use crate::config::CarouselSettings;
use crate::constants::ui::{FRAME_HEIGHT, MIN_STRIP_WIDTH};
use crate::error::AppError;
use crate::portfolio::Experience;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows of a panel, relative to its top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRegion {
    Title,
    Status,
    Strip,
    Dots,
    Description,
    Spacer,
}

impl PanelRegion {
    pub fn from_row(row: usize) -> Self {
        match row {
            0 => PanelRegion::Title,
            1 => PanelRegion::Status,
            r if r < 2 + FRAME_HEIGHT => PanelRegion::Strip,
            r if r == 2 + FRAME_HEIGHT => PanelRegion::Dots,
            r if r == 3 + FRAME_HEIGHT => PanelRegion::Description,
            _ => PanelRegion::Spacer,
        }
    }
}

/// An experience entry, its carousel, and the drawing state for the strip
#[derive(Debug, Clone)]
pub struct CarouselPanel {
    experience: Experience,
    carousel: Carousel,
    pointer: PointerAdapter,
    animator: StripAnimator,
    px_per_cell: f64,
}

impl CarouselPanel {
    pub fn new(experience: Experience, settings: &CarouselSettings) -> Result<Self, AppError> {
        let carousel = experience.carousel(settings.to_timing())?;
        Ok(Self {
            experience,
            carousel,
            pointer: PointerAdapter::new(settings.px_per_cell),
            animator: StripAnimator::at_rest(0.0),
            px_per_cell: settings.px_per_cell,
        })
    }

    pub fn experience(&self) -> &Experience {
        &self.experience
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Runs the carousel clock up to `now`
    pub fn advance_to(&mut self, now: Duration) -> bool {
        let events = self.carousel.advance_to(now);
        self.record(events, now)
    }

    pub fn next(&mut self, now: Duration) -> bool {
        let advanced = self.advance_to(now);
        let events = self.carousel.go_to_next();
        self.record(events, now) || advanced
    }

    pub fn prev(&mut self, now: Duration) -> bool {
        let advanced = self.advance_to(now);
        let events = self.carousel.go_to_prev();
        self.record(events, now) || advanced
    }

    /// Dot navigation
    pub fn select(&mut self, index: usize, now: Duration) -> Result<bool, AppError> {
        let advanced = self.advance_to(now);
        let events = self.carousel.go_to(index)?;
        Ok(self.record(events, now) || advanced)
    }

    pub fn pointer(&mut self, input: PointerInput, now: Duration) -> bool {
        let advanced = self.advance_to(now);
        let events = self.pointer.handle(&mut self.carousel, input);
        // Moves report no events but still shift the strip under the pointer
        let dragging = self.carousel.is_dragging();
        self.record(events, now) || dragging || advanced
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.animator.is_animating(now)
    }

    /// Returns whether anything visible changed
    fn record(&mut self, events: Vec<CarouselEvent>, now: Duration) -> bool {
        if events.is_empty() {
            return false;
        }
        let len = self.carousel.len();
        for event in &events {
            tracing::debug!(carousel = %self.carousel.label(), ?event, "carousel event");
            // Instant moves inside a batch are applied before the final state is followed
            match *event {
                CarouselEvent::LoopReset => self.animator.shift(-(len as f64)),
                CarouselEvent::Moved {
                    from,
                    to,
                    animated: false,
                } => {
                    if from.abs_diff(to) == len {
                        self.animator.shift(to as f64 - from as f64);
                    } else {
                        self.animator = StripAnimator::at_rest(to as f64);
                    }
                }
                _ => {}
            }
        }
        self.animator.follow(&self.carousel.render_state(), now);
        true
    }

    /// Dot index under `column`, for a strip drawn `width` columns wide from column 0
    pub fn dot_at(&self, column: usize, width: usize) -> Option<usize> {
        let start = dots_start(self.carousel.len(), width);
        let offset = column.checked_sub(start)?;
        (offset % 2 == 0)
            .then_some(offset / 2)
            .filter(|idx| *idx < self.carousel.len())
    }

    /// The panel as styled lines, `width` columns wide
    pub fn lines(&self, width: usize, now: Duration, focused: bool) -> Vec<String> {
        let width = width.max(MIN_STRIP_WIDTH);
        let mut lines = Vec::with_capacity(FRAME_HEIGHT + 5);

        let marker = if focused { "▶ " } else { "  " };
        let heading = fit(&self.experience.title, width.saturating_sub(2));
        let details = [self.experience.role.as_str(), self.experience.duration.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" · ");
        lines.push(format!(
            "{}{marker}{RESET}{}{}{RESET}",
            fg(focus_fg()),
            fg(title_fg()),
            heading.trim_end()
        ));
        lines.push(format!(
            "{}{}{RESET}  {}{}{RESET}",
            fg(subtitle_fg()),
            details,
            fg(status_fg()),
            self.status_text()
        ));

        let offset_cells = self.animator.position(now) * width as f64
            - self.carousel.drag_offset() / self.px_per_cell;
        for (row, line) in self.strip_rows(width, offset_cells).into_iter().enumerate() {
            let color = if row == 0 || row == FRAME_HEIGHT - 1 {
                frame_border_fg()
            } else {
                frame_text_fg()
            };
            lines.push(format!("{}{line}{RESET}", fg(color)));
        }

        lines.push(self.dots_line(width));
        lines.push(self.description_line(width));
        lines.push(String::new());
        lines
    }

    /// Entry description on one line, cut with an ellipsis when it does not fit
    fn description_line(&self, width: usize) -> String {
        let text = self.experience.description.trim();
        if text.is_empty() {
            return String::new();
        }
        let shown = if text.width() > width {
            format!("{}…", fit(text, width.saturating_sub(1)).trim_end())
        } else {
            text.to_string()
        };
        format!("{}{shown}{RESET}", fg(subtitle_fg()))
    }

    fn status_text(&self) -> String {
        let mode = match self.carousel.mode() {
            CarouselMode::AutoAdvancing => "auto",
            CarouselMode::Paused => "paused",
            CarouselMode::Dragging => "dragging",
        };
        format!(
            "[{mode}] {}/{}",
            self.carousel.display_index() + 1,
            self.carousel.len()
        )
    }

    /// Frame strip rows as seen through a `width`-wide window at `offset_cells`
    fn strip_rows(&self, width: usize, offset_cells: f64) -> Vec<String> {
        let state = self.carousel.render_state();
        let frames: Vec<Vec<Vec<char>>> = state
            .frames
            .iter()
            .enumerate()
            .map(|(idx, frame)| {
                frame_rows(
                    &frame.image,
                    &frame.alt,
                    idx % self.carousel.len() + 1,
                    self.carousel.len(),
                    width,
                )
            })
            .collect();

        let start = offset_cells.round() as isize;
        let width_i = width as isize;
        (0..FRAME_HEIGHT)
            .map(|row| {
                (0..width_i)
                    .map(|column| {
                        let strip_column = start + column;
                        let frame = strip_column.div_euclid(width_i);
                        let inner = strip_column.rem_euclid(width_i) as usize;
                        usize::try_from(frame)
                            .ok()
                            .and_then(|frame| frames.get(frame))
                            .and_then(|rows| rows[row].get(inner))
                            .copied()
                            .unwrap_or(' ')
                    })
                    .collect()
            })
            .collect()
    }

    fn dots_line(&self, width: usize) -> String {
        let mut line = " ".repeat(dots_start(self.carousel.len(), width));
        for (idx, active) in self.carousel.render_state().dots.iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            if *active {
                line.push_str(&format!("{}●{RESET}", fg(dot_active_fg())));
            } else {
                line.push_str(&format!("{}○{RESET}", fg(dot_inactive_fg())));
            }
        }
        line
    }
}

/// First column of the centered dot row
fn dots_start(count: usize, width: usize) -> usize {
    let dots_width = count * 2 - 1;
    width.saturating_sub(dots_width) / 2
}

/// One bordered frame, `width` columns wide and `FRAME_HEIGHT` rows tall
fn frame_rows(image: &str, alt: &str, number: usize, total: usize, width: usize) -> Vec<Vec<char>> {
    let inner = width.saturating_sub(2);
    let bordered = |text: &str| -> Vec<char> {
        let mut row = vec!['│'];
        row.extend(center(text, inner).chars());
        row.push('│');
        row
    };

    let mut rows = Vec::with_capacity(FRAME_HEIGHT);
    rows.push(
        std::iter::once('┌')
            .chain(std::iter::repeat_n('─', inner))
            .chain(std::iter::once('┐'))
            .collect(),
    );
    rows.push(bordered(image));
    rows.push(bordered(alt));
    rows.push(bordered(&format!("{number}/{total}")));
    rows.push(
        std::iter::once('└')
            .chain(std::iter::repeat_n('─', inner))
            .chain(std::iter::once('┘'))
            .collect(),
    );
    rows
}

/// Truncates `text` to `width` display columns, padding with spaces
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        // Wide glyphs would break the one-char-per-column strip layout
        let ch = if ch.width().unwrap_or(0) == 1 { ch } else { '?' };
        if used + 1 > width {
            break;
        }
        out.push(ch);
        used += 1;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Centers `text` in `width` columns, truncating when too long
fn center(text: &str, width: usize) -> String {
    let text_width = text.width().min(width);
    let left = (width - text_width) / 2;
    let fitted = fit(text, width - left);
    format!("{}{}", " ".repeat(left), fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_panel(images: usize) -> CarouselPanel {
        let experience = Experience::custom(
            "Panel",
            (0..images).map(|idx| format!("img{idx}.png")).collect(),
        );
        CarouselPanel::new(experience, &CarouselSettings::default()).unwrap()
    }

    fn strip(panel: &CarouselPanel, width: usize, now: Duration) -> Vec<String> {
        let offset = panel.animator.position(now) * width as f64
            - panel.carousel.drag_offset() / panel.px_per_cell;
        panel.strip_rows(width, offset)
    }

    #[test]
    fn test_region_from_row() {
        assert_eq!(PanelRegion::from_row(0), PanelRegion::Title);
        assert_eq!(PanelRegion::from_row(1), PanelRegion::Status);
        assert_eq!(PanelRegion::from_row(2), PanelRegion::Strip);
        assert_eq!(PanelRegion::from_row(1 + FRAME_HEIGHT), PanelRegion::Strip);
        assert_eq!(PanelRegion::from_row(2 + FRAME_HEIGHT), PanelRegion::Dots);
        assert_eq!(PanelRegion::from_row(3 + FRAME_HEIGHT), PanelRegion::Description);
        assert_eq!(PanelRegion::from_row(4 + FRAME_HEIGHT), PanelRegion::Spacer);
    }

    #[test]
    fn test_strip_shows_current_frame() {
        let panel = make_panel(3);
        let rows = strip(&panel, 30, Duration::ZERO);
        assert_eq!(rows.len(), FRAME_HEIGHT);
        assert!(rows[1].contains("img0.png"));
        assert!(rows[2].contains("Panel image 1"));
        assert!(rows[0].starts_with('┌') && rows[0].ends_with('┐'));
        assert!(rows.iter().all(|row| row.chars().count() == 30));
    }

    #[test]
    fn test_strip_follows_navigation() {
        let mut panel = make_panel(3);
        assert!(panel.next(Duration::ZERO));
        let settled = Duration::from_millis(500);
        let rows = strip(&panel, 30, settled);
        assert!(rows[1].contains("img1.png"));

        // Halfway through the slide both frames are partly visible
        let mut panel = make_panel(3);
        panel.next(Duration::ZERO);
        let rows = strip(&panel, 30, Duration::from_millis(100));
        assert!(!rows[1].contains("img0.png") || !rows[1].contains("img1.png"));
        assert!(panel.is_animating(Duration::from_millis(100)));
    }

    #[test]
    fn test_drag_shifts_strip() {
        let mut panel = make_panel(2);
        panel.pointer(PointerInput::Down { column: 20 }, Duration::ZERO);
        assert!(panel.pointer(PointerInput::Drag { column: 15 }, Duration::ZERO));
        // 5 columns left at 8px per cell is a -40px drag: not yet a swipe
        assert_eq!(panel.carousel().drag_offset(), -40.0);
        let rows = strip(&panel, 30, Duration::ZERO);
        assert!(rows[0].contains('┐') && rows[0].contains('┌'));

        panel.pointer(PointerInput::Up, Duration::ZERO);
        assert_eq!(panel.carousel().current_index(), 0);
    }

    #[test]
    fn test_dot_hit_testing() {
        let panel = make_panel(3);
        // 3 dots take 5 columns, centered in 15 → start at 5
        assert_eq!(panel.dot_at(5, 15), Some(0));
        assert_eq!(panel.dot_at(6, 15), None);
        assert_eq!(panel.dot_at(7, 15), Some(1));
        assert_eq!(panel.dot_at(9, 15), Some(2));
        assert_eq!(panel.dot_at(11, 15), None);
        assert_eq!(panel.dot_at(2, 15), None);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut panel = make_panel(2);
        assert!(panel.select(5, Duration::ZERO).is_err());
        assert!(panel.select(1, Duration::ZERO).unwrap());
        assert_eq!(panel.carousel().display_index(), 1);
    }

    #[test]
    fn test_lines_layout() {
        let panel = make_panel(2);
        let lines = panel.lines(40, Duration::ZERO, true);
        assert_eq!(lines.len(), FRAME_HEIGHT + 5);
        assert!(lines[3 + FRAME_HEIGHT].is_empty());
        assert!(lines[0].contains("▶"));
        assert!(lines[1].contains("[auto] 1/2"));
        assert!(lines[2 + FRAME_HEIGHT].contains('●'));
    }

    #[test]
    fn test_description_row() {
        let entry = crate::portfolio::experiences().remove(0);
        let panel = CarouselPanel::new(entry, &CarouselSettings::default()).unwrap();

        let wide = panel.lines(200, Duration::ZERO, false);
        assert!(wide[3 + FRAME_HEIGHT].contains("supporting event logistics and coordination."));

        let narrow = panel.lines(30, Duration::ZERO, false);
        assert!(narrow[3 + FRAME_HEIGHT].contains("Volunteered with the IX25 tea…"));
        assert!(!narrow[3 + FRAME_HEIGHT].contains("coordination"));
    }

    /// Drawn strip position, in frame widths
    fn drawn(panel: &CarouselPanel, now: Duration) -> f64 {
        panel.animator.position(now)
    }

    #[test]
    fn test_next_on_wrap_frame_slides_forward_from_start() {
        let mut panel = make_panel(3);
        for _ in 0..3 {
            panel.next(Duration::ZERO);
        }
        assert_eq!(panel.carousel().current_index(), 3);

        // Still on the duplicate frame when the next press lands
        panel.next(Duration::from_millis(450));
        assert_eq!(panel.carousel().current_index(), 1);

        let mut last = drawn(&panel, Duration::from_millis(450));
        assert!(last.abs() < 0.1, "starts at {last}");
        for at in (460..=1000).step_by(10) {
            let position = drawn(&panel, Duration::from_millis(at));
            assert!(position >= last - 1e-9, "moved back to {position} at {at}ms");
            assert!(position <= 1.0 + 1e-9);
            last = position;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_loop_reset_and_reenable_in_one_tick() {
        let mut panel = make_panel(3);
        panel.advance_to(Duration::from_millis(6000));
        panel.advance_to(Duration::from_millis(6480));
        // Crosses both the snap at 6500 and the re-enable at 6550
        panel.advance_to(Duration::from_millis(6555));

        assert_eq!(panel.carousel().current_index(), 0);
        assert_eq!(drawn(&panel, Duration::from_millis(6600)), 0.0);
        assert!(!panel.is_animating(Duration::from_millis(6600)));
    }

    #[test]
    fn test_drawn_position_is_continuous_through_auto_cycles() {
        for count in 1..=4usize {
            for step in [10u64, 55, 90] {
                let mut panel = make_panel(count);
                let len = count as f64;
                let mut last = 0.0;
                let end = 2 * count as u64 * 2000 + 600;

                for at in (step..=end).step_by(step as usize) {
                    let now = Duration::from_millis(at);
                    panel.advance_to(now);
                    let position = drawn(&panel, now);
                    // A slide still finishing when the snap lands continues just below 0
                    assert!(
                        (-0.1..=len + 1e-9).contains(&position),
                        "N={count} step={step}: drawn at {position} at {at}ms"
                    );

                    // Jumping between the duplicate and the first frame is seamless
                    let mut delta = position - last;
                    if delta < -len / 2.0 {
                        delta += len;
                    }
                    assert!(
                        delta >= -1e-9,
                        "N={count} step={step}: slid back from {last} to {position} at {at}ms"
                    );
                    last = position;
                }
            }
        }
    }

    #[test]
    fn test_rewind_jumps_then_slides_back_one_frame() {
        let mut panel = make_panel(3);
        panel.prev(Duration::ZERO);
        assert_eq!(drawn(&panel, Duration::ZERO), 3.0);

        panel.advance_to(Duration::from_millis(60));
        assert_eq!(panel.carousel().current_index(), 2);
        let mut last = drawn(&panel, Duration::from_millis(60));
        assert!((last - 3.0).abs() < 1e-9);
        for at in (70..=600).step_by(10) {
            let position = drawn(&panel, Duration::from_millis(at));
            assert!(position <= last + 1e-9 && position >= 2.0 - 1e-9);
            last = position;
        }
        assert_eq!(last, 2.0);
    }

    #[test]
    fn test_fit_and_center() {
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abcdefgh", 4), "abcd");
    }
}
