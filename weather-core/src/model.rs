use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Temperature unit system requested from the API and shown in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial { UnitSystem::Imperial } else { UnitSystem::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Letter printed after the degree sign.
    pub fn symbol(&self) -> char {
        match self {
            UnitSystem::Metric => 'C',
            UnitSystem::Imperial => 'F',
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
    units: UnitSystem,
}

impl WeatherQuery {
    /// Joins the city tokens with single spaces.
    pub fn new<I, S>(city_tokens: I, units: UnitSystem) -> Result<Self, WeatherError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let city = city_tokens
            .into_iter()
            .map(|token| token.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");

        if city.trim().is_empty() {
            return Err(WeatherError::EmptyCity);
        }

        Ok(Self { city, units })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }
}

/// Current conditions for one city, as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city_name: String,
    pub condition_code: i64,
    pub description: String,
    pub temperature: f64,
}
