//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration (config file plus `WEATHER_URL` / `WEATHER_API_KEY`)
//! - Query URL construction
//! - The HTTP client and its error taxonomy
//! - Condition-code classification and terminal rendering
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod render;

pub use client::{HttpResponse, HttpTransport, ReqwestTransport, WeatherClient};
pub use condition::{ColorToken, ConditionCategory, DisplayParams};
pub use config::{Config, Endpoint};
pub use error::WeatherError;
pub use model::{UnitSystem, WeatherQuery, WeatherRecord};

/// Fetch current conditions for `query` and format the output line.
pub async fn report<T: HttpTransport>(
    client: &WeatherClient<T>,
    query: &WeatherQuery,
    endpoint: &Endpoint,
) -> Result<String, WeatherError> {
    let record = client.fetch(&query.to_url(endpoint)).await?;
    let params = ConditionCategory::from_code(record.condition_code).display_params();

    Ok(render::format_line(&record, query.units(), params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::StubTransport;

    fn endpoint() -> Endpoint {
        Endpoint { base_url: "http://stub/weather".into(), api_key: "KEY".into() }
    }

    #[tokio::test]
    async fn paris_report_renders_clear_sky() {
        let body =
            r#"{"name":"Paris","weather":[{"id":800,"description":"clear sky"}],"main":{"temp":21.5}}"#;
        let client = WeatherClient::new(StubTransport::responding(200, body));
        let query = WeatherQuery::new(["Paris"], UnitSystem::Metric).unwrap();

        let line = report(&client, &query, &endpoint()).await.unwrap();

        assert!(line.contains("Paris"));
        assert!(line.contains("🌞"));
        assert!(line.contains("Clear sky"));
        assert!(line.contains("21.5°C"));
    }

    #[tokio::test]
    async fn report_requests_the_built_url() {
        let body = r#"{"name":"New York","weather":[{"id":501,"description":"moderate rain"}],"main":{"temp":55.4}}"#;
        let client = WeatherClient::new(StubTransport::responding(200, body));
        let query = WeatherQuery::new(["New", "York"], UnitSystem::Imperial).unwrap();

        let line = report(&client, &query, &endpoint()).await.unwrap();

        assert!(line.contains("🌧️"));
        assert!(line.contains(ColorToken::Blue.escape()));
        assert!(line.ends_with("55.4°F"));

        let requests = client.transport().requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec!["http://stub/weather?q=New%20York&units=imperial&appid=KEY".to_string()]
        );
    }

    #[tokio::test]
    async fn access_denied_yields_no_line() {
        let client = WeatherClient::new(StubTransport::responding(401, ""));
        let query = WeatherQuery::new(["Paris"], UnitSystem::Metric).unwrap();

        let err = report(&client, &query, &endpoint()).await.unwrap_err();
        assert!(err.to_string().contains("Access denied"));
    }
}
