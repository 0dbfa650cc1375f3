use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{error::WeatherError, model::WeatherRecord, query::redact_api_key};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET capability the weather client needs.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send request to the weather service")?;

        let status = res.status().as_u16();
        let body = res.text().await.context("Failed to read weather response body")?;

        Ok(HttpResponse { status, body })
    }
}

/// Fetches current conditions through an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct WeatherClient<T> {
    transport: T,
}

impl<T: HttpTransport> WeatherClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One GET, no retry. Any non-2xx status becomes a [`WeatherError`].
    pub async fn fetch(&self, url: &str) -> Result<WeatherRecord, WeatherError> {
        tracing::debug!(url = %redact_api_key(url), "requesting current weather");

        let res = self.transport.get(url).await.map_err(WeatherError::Transport)?;

        if !res.is_success() {
            tracing::debug!(
                status = res.status,
                body = %truncate_body(&res.body),
                "weather request failed"
            );
            return Err(WeatherError::from_status(res.status));
        }

        parse_record(&res.body)
    }
}

impl WeatherClient<ReqwestTransport> {
    pub fn with_reqwest() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwWeather>,
    main: OwMain,
}

/// Parse a current-weather body. Only `name`, `weather[0]` and `main.temp`
/// are read.
pub fn parse_record(body: &str) -> Result<WeatherRecord, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

    let condition = parsed.weather.into_iter().next().ok_or_else(|| {
        WeatherError::MalformedResponse("`weather` array is empty".to_string())
    })?;

    Ok(WeatherRecord {
        city_name: parsed.name,
        condition_code: condition.id,
        description: condition.description,
        temperature: parsed.main.temp,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
