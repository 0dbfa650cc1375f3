use crate::{config::Endpoint, model::WeatherQuery};

impl WeatherQuery {
    /// Full request URL against `endpoint`:
    /// `<base>?q=<city>&units=<metric|imperial>&appid=<key>`.
    pub fn to_url(&self, endpoint: &Endpoint) -> String {
        format!(
            "{}?q={}&units={}&appid={}",
            endpoint.base_url,
            urlencoding::encode(self.city()),
            self.units(),
            endpoint.api_key,
        )
    }
}

/// Replace the `appid` value so URLs can be logged.
pub(crate) fn redact_api_key(url: &str) -> String {
    match url.find("appid=") {
        Some(pos) => {
            let start = pos + "appid=".len();
            let end = url[start..].find('&').map_or(url.len(), |i| start + i);
            format!("{}***{}", &url[..start], &url[end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::WeatherError, model::UnitSystem};

    fn endpoint() -> Endpoint {
        Endpoint {
            base_url: "https://api.example.test/data/2.5/weather".into(),
            api_key: "KEY".into(),
        }
    }

    #[test]
    fn metric_query_encodes_space() {
        let query = WeatherQuery::new(["New York"], UnitSystem::Metric).unwrap();
        let url = query.to_url(&endpoint());

        assert!(url.contains("q=New%20York"));
        assert!(url.contains("units=metric"));
        assert_eq!(
            url,
            "https://api.example.test/data/2.5/weather?q=New%20York&units=metric&appid=KEY"
        );
    }

    #[test]
    fn tokens_are_joined_before_encoding() {
        let query = WeatherQuery::new(["New", "York"], UnitSystem::Metric).unwrap();
        assert_eq!(query.city(), "New York");
        assert!(query.to_url(&endpoint()).contains("q=New%20York&"));
    }

    #[test]
    fn non_ascii_city_is_percent_encoded() {
        let query = WeatherQuery::new(["Å", "City"], UnitSystem::Imperial).unwrap();
        let url = query.to_url(&endpoint());

        assert!(url.contains("q=%C3%85%20City"));
        assert!(url.contains("units=imperial"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let query = WeatherQuery::new(["Paris&units=imperial"], UnitSystem::Metric).unwrap();
        let url = query.to_url(&endpoint());

        assert!(url.contains("q=Paris%26units%3Dimperial&units=metric"));
        assert_eq!(url.matches("units=").count(), 1);
    }

    #[test]
    fn blank_city_is_rejected() {
        let err = WeatherQuery::new(["  ", ""], UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));

        let err = WeatherQuery::new(Vec::<String>::new(), UnitSystem::Metric).unwrap_err();
        assert!(matches!(err, WeatherError::EmptyCity));
    }

    #[test]
    fn redaction_hides_only_the_key() {
        let url = "http://x/w?q=Oslo&units=metric&appid=SECRET";
        assert_eq!(redact_api_key(url), "http://x/w?q=Oslo&units=metric&appid=***");

        let url = "http://x/w?appid=SECRET&q=Oslo";
        assert_eq!(redact_api_key(url), "http://x/w?appid=***&q=Oslo");

        assert_eq!(redact_api_key("http://x/w?q=Oslo"), "http://x/w?q=Oslo");
    }
}
