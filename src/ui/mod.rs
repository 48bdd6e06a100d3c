pub mod animation;
pub mod colors;
pub mod interactive;
pub mod panel;

pub use interactive::{InteractiveOptions, run_interactive_ui};
pub use panel::{CarouselPanel, PanelRegion};

use crate::constants::ui::{CONTENT_MARGIN, HEADER_HEIGHT, PANEL_HEIGHT};
use crate::error::AppError;
use colors::*;
use std::io::Write;
use std::time::Duration;

/// Screen position of a mouse event, resolved to a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelHit {
    pub panel: usize,
    pub region: PanelRegion,
    /// Column relative to the panel's content area
    pub column: usize,
}

/// Vertical stacking of panels below the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: usize,
}

impl ScreenLayout {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width),
        }
    }

    /// Width available to a panel's strip
    pub fn content_width(&self) -> usize {
        self.width.saturating_sub(CONTENT_MARGIN * 2)
    }

    /// First screen row (0-based) of panel `index`
    pub fn panel_top(&self, index: usize) -> usize {
        HEADER_HEIGHT + index * PANEL_HEIGHT
    }

    /// Resolves a 0-based screen cell to the panel underneath it
    pub fn hit(&self, column: u16, row: u16, panel_count: usize) -> Option<PanelHit> {
        let row = usize::from(row).checked_sub(HEADER_HEIGHT)?;
        let panel = row / PANEL_HEIGHT;
        if panel >= panel_count {
            return None;
        }
        let column = usize::from(column).saturating_sub(CONTENT_MARGIN);
        Some(PanelHit {
            panel,
            region: PanelRegion::from_row(row % PANEL_HEIGHT),
            column,
        })
    }
}

/// Styled page header: title bar and subheader
pub fn header_lines(owner: &str, width: usize, clock: &str) -> Vec<String> {
    let title = format!(" {owner} · Portfolio");
    let right_width = width.saturating_sub(title.chars().count());
    vec![
        format!(
            "{}{}{title}{clock:>right_width$}{RESET}",
            bg(header_bg()),
            fg(header_fg())
        ),
        format!("{}  Experience{RESET}", fg(subtitle_fg())),
    ]
}

/// Full screen as one buffer with absolute cursor positioning
pub fn compose_screen(
    panels: &[CarouselPanel],
    focused: usize,
    layout: ScreenLayout,
    now: Duration,
    header: &[String],
) -> String {
    let rows = HEADER_HEIGHT + PANEL_HEIGHT * panels.len();
    let mut buffer = String::with_capacity(layout.width * rows * 4);
    buffer.push_str("\x1b[H\x1b[0J");

    for (row, line) in header.iter().enumerate() {
        buffer.push_str(&format!("\x1b[{};1H{line}", row + 1));
    }

    let margin = " ".repeat(CONTENT_MARGIN);
    for (idx, panel) in panels.iter().enumerate() {
        let top = layout.panel_top(idx);
        for (offset, line) in panel
            .lines(layout.content_width(), now, idx == focused)
            .iter()
            .enumerate()
        {
            buffer.push_str(&format!("\x1b[{};1H{margin}{line}", top + offset + 1));
        }
    }
    buffer
}

/// Writes every panel once, top to bottom, without cursor control
pub fn render_snapshot<W: Write>(
    out: &mut W,
    owner: &str,
    panels: &[CarouselPanel],
    width: u16,
) -> Result<(), AppError> {
    let layout = ScreenLayout::new(width);
    let margin = " ".repeat(CONTENT_MARGIN);

    for line in header_lines(owner, layout.width, "") {
        writeln!(out, "{line}")?;
    }
    for panel in panels {
        for line in panel.lines(layout.content_width(), Duration::ZERO, false) {
            writeln!(out, "{margin}{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}
