use thiserror::Error;

/// Failures of a single weather lookup. The CLI treats every variant as fatal.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Access denied. Check your API key.")]
    AccessDenied,

    #[error("Can't find weather data for this city 😔")]
    CityNotFound,

    #[error("Something went wrong... ({status})")]
    RequestFailed { status: u16 },

    #[error("Unexpected response from the weather service: {0}")]
    MalformedResponse(String),

    #[error("Failed to reach the weather service: {0:#}")]
    Transport(anyhow::Error),

    #[error("City name must not be empty")]
    EmptyCity,
}

impl WeatherError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => WeatherError::AccessDenied,
            404 => WeatherError::CityNotFound,
            _ => WeatherError::RequestFailed { status },
        }
    }

    /// Process exit status used when the CLI terminates on this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
