use crossterm::style::Color;

// Portfolio palette (256-color)
pub fn header_bg() -> Color {
    Color::AnsiValue(54)
} // Deep purple
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn title_fg() -> Color {
    Color::AnsiValue(141)
} // Lavender
pub fn subtitle_fg() -> Color {
    Color::AnsiValue(218)
} // Pink
pub fn frame_border_fg() -> Color {
    Color::AnsiValue(135)
} // Purple
pub fn frame_text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn dot_active_fg() -> Color {
    Color::AnsiValue(141)
} // Lavender
pub fn dot_inactive_fg() -> Color {
    Color::AnsiValue(245)
} // Grey
pub fn status_fg() -> Color {
    Color::AnsiValue(250)
} // Light grey
pub fn focus_fg() -> Color {
    Color::AnsiValue(213)
} // Bright pink

/// Extracts the 256-color index, falling back for non-indexed colors
pub fn ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Foreground escape sequence for a palette color
pub fn fg(color: Color) -> String {
    format!("\x1b[38;5;{}m", ansi_code(color, 231))
}

/// Background escape sequence for a palette color
pub fn bg(color: Color) -> String {
    format!("\x1b[48;5;{}m", ansi_code(color, 16))
}

pub const RESET: &str = "\x1b[0m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_code_fallback() {
        assert_eq!(ansi_code(Color::AnsiValue(54), 0), 54);
        assert_eq!(ansi_code(Color::Red, 9), 9);
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(fg(frame_border_fg()), "\x1b[38;5;135m");
        assert_eq!(bg(header_bg()), "\x1b[48;5;54m");
    }
}
