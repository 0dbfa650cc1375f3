use std::io::{self, Write};

use clap::Parser;
use weather_core::{Config, UnitSystem, WeatherClient, WeatherError, WeatherQuery};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "gets weather and temperature information for a city"
)]
pub struct Cli {
    /// enter a city name
    #[arg(required_unless_present = "configure", num_args = 1..)]
    pub city: Vec<String>,

    /// display the temperature in imperial units
    #[arg(short, long)]
    pub imperial: bool,

    /// Store the API endpoint and key in the config file.
    #[arg(long, conflicts_with_all = ["city", "imperial"])]
    pub configure: bool,
}

impl Cli {
    pub fn units(&self) -> UnitSystem {
        UnitSystem::from_imperial_flag(self.imperial)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.configure {
            return crate::configure::run();
        }

        let query = match WeatherQuery::new(&self.city, self.units()) {
            Ok(query) => query,
            Err(err) => exit_with(err),
        };
        let endpoint = Config::load()?.with_env().endpoint();
        let client = WeatherClient::with_reqwest();

        let line = match weather_core::report(&client, &query, &endpoint).await {
            Ok(line) => line,
            Err(err) => exit_with(err),
        };

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;

        Ok(())
    }
}

/// Print the error and terminate; lookups never return a partial result.
fn exit_with(err: WeatherError) -> ! {
    tracing::debug!(error = ?err, "weather lookup failed");
    eprintln!("{err}");
    std::process::exit(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn city_tokens_are_collected() {
        let cli = Cli::try_parse_from(["weather", "New", "York"]).unwrap();

        assert_eq!(cli.city, vec!["New", "York"]);
        assert_eq!(cli.units(), UnitSystem::Metric);
    }

    #[test]
    fn imperial_flag_short_and_long() {
        let short = Cli::try_parse_from(["weather", "-i", "Boston"]).unwrap();
        let long = Cli::try_parse_from(["weather", "Boston", "--imperial"]).unwrap();

        assert_eq!(short.units(), UnitSystem::Imperial);
        assert_eq!(long.units(), UnitSystem::Imperial);
        assert_eq!(long.city, vec!["Boston"]);
    }

    #[test]
    fn city_is_required() {
        let err = Cli::try_parse_from(["weather", "-i"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn configure_needs_no_city() {
        let cli = Cli::try_parse_from(["weather", "--configure"]).unwrap();

        assert!(cli.configure);
        assert!(cli.city.is_empty());
    }

    #[test]
    fn configure_conflicts_with_city() {
        let err = Cli::try_parse_from(["weather", "--configure", "Paris"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
