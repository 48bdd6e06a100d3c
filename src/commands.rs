use crate::cli::Args;
use crate::version;
use crossterm::{execute, style::Color, terminal::SetTitle};
use portfolio_carousel::config::{Config, validation::validate_emailjs_credentials};
use portfolio_carousel::constants::ui::DEFAULT_SNAPSHOT_WIDTH;
use portfolio_carousel::contact::{
    ContactForm, ContactOutcome, EmailJsClient, submit_contact_form,
};
use portfolio_carousel::error::AppError;
use portfolio_carousel::portfolio::{Experience, experiences};
use portfolio_carousel::ui::{self, CarouselPanel, InteractiveOptions};
use std::io::stdout;

const TERMINAL_TITLE: &str = "Portfolio";

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.wants_contact() && (args.once || !args.images.is_empty()) {
        return Err(AppError::config_error(
            "Contact form flags cannot be combined with --once or --image",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    version::print_version();
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_else(|e| {
        tracing::warn!("Could not load config, starting from defaults: {e}");
        Config::default()
    });

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles a contact form submission from the --contact-* flags.
///
/// Prints the same confirmation or retry message the web form shows.
pub async fn handle_contact_command(
    args: &Args,
    config: &Config,
) -> Result<ContactOutcome, AppError> {
    let form = ContactForm::new(
        args.contact_name.clone().unwrap_or_default(),
        args.contact_email.clone().unwrap_or_default(),
        args.contact_message.clone().unwrap_or_default(),
    );
    form.validate()?;
    validate_emailjs_credentials(&config.emailjs)?;

    let client = EmailJsClient::new(config.emailjs.clone(), config.http_timeout_seconds)?;
    let outcome = submit_contact_form(&client, &config.contact_templates(), &form).await?;

    let color = if outcome.is_delivered() {
        Color::AnsiValue(120)
    } else {
        Color::AnsiValue(203)
    };
    let mut lines = vec![
        ("Contact".to_string(), None),
        (outcome.user_message().to_string(), Some(color)),
    ];
    match &outcome {
        ContactOutcome::Delivered => {}
        ContactOutcome::DeliveredWithoutAutoReply { reason }
        | ContactOutcome::Failed { reason } => {
            lines.push((format!("Details: {reason}"), None));
        }
    }
    version::print_status_box(&lines);

    Ok(outcome)
}

/// Builds one panel per portfolio entry, or a single panel for --image
pub fn build_panels(args: &Args, config: &Config) -> Result<Vec<CarouselPanel>, AppError> {
    let entries = if args.images.is_empty() {
        experiences()
    } else {
        vec![Experience::custom(args.label.clone(), args.images.clone())]
    };

    entries
        .into_iter()
        .map(|entry| CarouselPanel::new(entry, &config.carousel))
        .collect()
}

/// Handles the --once command: prints every carousel at rest and exits.
pub fn handle_once_command(panels: &[CarouselPanel], config: &Config) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    let width = crossterm::terminal::size()
        .map(|(width, _)| width)
        .unwrap_or(DEFAULT_SNAPSHOT_WIDTH);
    ui::render_snapshot(&mut stdout(), &config.owner_name, panels, width)
}

/// Runs the interactive viewer.
pub async fn handle_interactive_mode(
    panels: Vec<CarouselPanel>,
    args: &Args,
    config: &Config,
) -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    ui::run_interactive_ui(
        panels,
        InteractiveOptions {
            debug_mode: args.debug,
            owner_name: config.owner_name.clone(),
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("portfolio_carousel").chain(flags.iter().copied()))
    }

    #[test]
    fn test_validate_args() {
        assert!(validate_args(&args(&[])).is_ok());
        assert!(validate_args(&args(&["--contact-name", "Ada"])).is_ok());
        assert!(validate_args(&args(&["--contact-name", "Ada", "--once"])).is_err());
        assert!(validate_args(&args(&["--contact-email", "a@b.c", "-i", "x.png"])).is_err());
    }

    #[test]
    fn test_build_panels_defaults_to_portfolio() {
        let panels = build_panels(&args(&[]), &Config::default()).unwrap();
        assert_eq!(panels.len(), experiences().len());
        assert_eq!(panels[0].carousel().label(), "IX25");
    }

    #[test]
    fn test_build_panels_custom_images() {
        let panels = build_panels(
            &args(&["-i", "one.png", "-i", "two.png", "--label", "Trip"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].carousel().images(), ["one.png", "two.png"]);
        assert_eq!(panels[0].carousel().label(), "Trip");
    }

    #[tokio::test]
    async fn test_contact_command_rejects_invalid_form() {
        let result = handle_contact_command(
            &args(&["--contact-name", "Ada", "--contact-email", "nope"]),
            &Config::default(),
        )
        .await;
        assert!(matches!(result, Err(AppError::InvalidContactForm(_))));
    }

    #[tokio::test]
    async fn test_contact_command_requires_credentials() {
        let result = handle_contact_command(
            &args(&[
                "--contact-name",
                "Ada",
                "--contact-email",
                "ada@example.com",
                "--contact-message",
                "Hi",
            ]),
            &Config::default(),
        )
        .await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
