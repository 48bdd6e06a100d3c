use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print a snapshot and exit)
/// - a contact form submission is requested
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.wants_contact()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}

/// Portfolio carousel viewer
///
/// Shows each portfolio experience as an auto-advancing image carousel that
/// loops seamlessly from the last image back to the first.
///
/// In interactive mode (default):
/// - Drag a strip with the mouse to swipe between images
/// - Use arrow keys (←/→) to move the focused carousel
/// - Press Tab to move focus, 1-9 to jump to an image
/// - Press 'q' to quit
///
/// Auto-advance pauses while you interact and resumes 3 seconds later.
#[derive(Parser, Debug, Default)]
#[command(author = "Yashwin", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print every carousel once and exit. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Show a single carousel over these images instead of the portfolio entries.
    /// Repeat the flag to add more images, in display order.
    #[arg(long = "image", short = 'i', value_name = "REF", help_heading = "Display Options")]
    pub images: Vec<String>,

    /// Label for the custom carousel; frames get alt text "<label> image <n>"
    #[arg(
        long = "label",
        value_name = "TEXT",
        default_value = "Gallery",
        help_heading = "Display Options"
    )]
    pub label: String,

    /// Contact form: your name
    #[arg(long = "contact-name", value_name = "NAME", help_heading = "Contact")]
    pub contact_name: Option<String>,

    /// Contact form: your email address, used for the auto-reply
    #[arg(long = "contact-email", value_name = "EMAIL", help_heading = "Contact")]
    pub contact_email: Option<String>,

    /// Contact form: the message to send
    #[arg(long = "contact-message", value_name = "TEXT", help_heading = "Contact")]
    pub contact_message: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which leaves the terminal in normal mode while drawing the UI.
    /// Logs also go to stdout in non-interactive modes.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path.
    /// If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Whether any contact form field was given
    pub fn wants_contact(&self) -> bool {
        self.contact_name.is_some()
            || self.contact_email.is_some()
            || self.contact_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let args = Args::parse_from(["portfolio_carousel"]);
        assert!(!is_noninteractive_mode(&args));
        assert!(args.images.is_empty());
        assert_eq!(args.label, "Gallery");
    }

    #[test]
    fn test_repeated_images_keep_order() {
        let args = Args::parse_from([
            "portfolio_carousel",
            "--image",
            "a.png",
            "-i",
            "b.png",
            "--label",
            "Trip",
        ]);
        assert_eq!(args.images, vec!["a.png", "b.png"]);
        assert_eq!(args.label, "Trip");
    }

    #[test]
    fn test_noninteractive_flags() {
        for flags in [
            vec!["--once"],
            vec!["--contact-name", "Ada"],
            vec!["--list-config"],
            vec!["--clear-log-file"],
            vec!["--set-log-file", "/tmp/app.log"],
            vec!["-V"],
        ] {
            let args = Args::parse_from(std::iter::once("portfolio_carousel").chain(flags.clone()));
            assert!(is_noninteractive_mode(&args), "{flags:?}");
        }
    }

    #[test]
    fn test_debug_alone_stays_interactive() {
        let args = Args::parse_from(["portfolio_carousel", "--debug"]);
        assert!(!is_noninteractive_mode(&args));
    }
}
