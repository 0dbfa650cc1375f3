use anyhow::Context;
use inquire::{Password, PasswordDisplayMode, Text};
use weather_core::{Config, config::OPENWEATHER_CURRENT_URL};

/// Interactively store the base URL and API key.
///
/// Values from `WEATHER_URL` / `WEATHER_API_KEY` still take precedence at run time.
pub fn run() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let current_url = config.base_url.as_deref().unwrap_or(OPENWEATHER_CURRENT_URL);
    let base_url = Text::new("Weather API base URL:")
        .with_default(current_url)
        .prompt()
        .context("Failed to read base URL")?;

    let api_key = Password::new("API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;

    config.base_url = Some(base_url.trim().to_string());
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let path = config.save()?;
    tracing::info!(path = %path.display(), "saved configuration");
    println!("Configuration saved to {}", path.display());

    Ok(())
}
