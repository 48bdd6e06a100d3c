use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const BORDER_COLOR: Color = Color::AnsiValue(141);
const TEXT_COLOR: Color = Color::AnsiValue(231);

/// Prints `lines` inside a double-line box; the first line is a title row
pub fn print_status_box(lines: &[(String, Option<Color>)]) {
    let max_content_width = lines
        .iter()
        .map(|(line, _)| line.chars().count())
        .max()
        .unwrap_or(0);
    let inner = max_content_width + 2;
    let border = format!("╔{:═<inner$}╗", "");
    let sep = format!("╠{:═<inner$}╣", "");
    let bottom = format!("╚{:═<inner$}╝", "");

    execute!(
        stdout(),
        SetForegroundColor(BORDER_COLOR),
        Print(format!("{border}\n"))
    )
    .ok();
    for (i, (line, color)) in lines.iter().enumerate() {
        execute!(
            stdout(),
            SetForegroundColor(BORDER_COLOR),
            Print("║ "),
            SetForegroundColor(color.unwrap_or(TEXT_COLOR)),
            Print(format!("{line:<max_content_width$}")),
            SetForegroundColor(BORDER_COLOR),
            Print(" ║\n"),
        )
        .ok();
        if i == 0 && lines.len() > 1 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }
    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

/// Name and version of this build
pub fn print_version() {
    print_status_box(&[
        ("Portfolio Carousel".to_string(), None),
        (
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Some(Color::AnsiValue(218)),
        ),
    ]);
}
