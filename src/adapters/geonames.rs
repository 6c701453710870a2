use crate::config::toml_config::GeoNamesConfig;
use crate::domain::ports::CountryResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// GeoNames 回傳 "no country code found" 時的狀態碼
const STATUS_NO_COUNTRY: i64 = 15;

pub struct GeoNamesClient {
    client: Client,
    config: GeoNamesConfig,
}

impl GeoNamesClient {
    pub fn new(client: Client, config: GeoNamesConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl CountryResolver for GeoNamesClient {
    async fn resolve_country(&self, latitude: f64, longitude: f64) -> Result<Option<String>> {
        tracing::debug!("Resolving country for ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("lat", latitude.to_string()),
                ("lng", longitude.to_string()),
                ("type", "JSON".to_string()),
                ("username", self.config.username.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;

        if let Some(status) = body.get("status") {
            let code = status.get("value").and_then(Value::as_i64);
            let message = status.get("message").and_then(Value::as_str).unwrap_or("");
            if code == Some(STATUS_NO_COUNTRY) {
                tracing::debug!("No country at ({}, {}): {}", latitude, longitude, message);
            } else {
                tracing::warn!("GeoNames status {:?}: {}", code, message);
            }
        }

        Ok(normalize_country_code(
            body.get("countryCode").and_then(Value::as_str),
        ))
    }
}

/// Upper-cases an ISO 3166-1 alpha-2 code; anything else becomes `None`.
pub fn normalize_country_code(code: Option<&str>) -> Option<String> {
    let code = code.map(str::trim).filter(|code| !code.is_empty())?;
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        tracing::warn!("Ignoring malformed country code '{}'", code);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn client_for(server: &MockServer) -> GeoNamesClient {
        let config = GeoNamesConfig {
            endpoint: server.url("/countryCode"),
            username: "demo".to_string(),
        };
        let http = crate::adapters::http::build_client(Duration::from_secs(5)).unwrap();
        GeoNamesClient::new(http, config)
    }

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_country_code(Some("FR")), Some("FR".to_string()));
        assert_eq!(normalize_country_code(Some(" it ")), Some("IT".to_string()));
        assert_eq!(normalize_country_code(Some("")), None);
        assert_eq!(normalize_country_code(Some("fra")), None);
        assert_eq!(normalize_country_code(Some("F1")), None);
        assert_eq!(normalize_country_code(None), None);
    }

    #[tokio::test]
    async fn test_resolve_country_code() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/countryCode")
                .query_param("lat", "48.85837")
                .query_param("lng", "2.29448")
                .query_param("type", "JSON")
                .query_param("username", "demo");
            then.status(200).json_body(json!({
                "languages": "fr-FR,frp,br,co,ca,eu,oc",
                "distance": "0",
                "countryCode": "FR",
                "countryName": "France"
            }));
        });

        let code = client_for(&server)
            .resolve_country(48.85837, 2.29448)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(code, Some("FR".to_string()));
    }

    #[tokio::test]
    async fn test_international_waters_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/countryCode");
            then.status(200).json_body(json!({
                "status": {"message": "no country code found", "value": 15}
            }));
        });

        let code = client_for(&server).resolve_country(0.0, -30.0).await.unwrap();
        assert_eq!(code, None);
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/countryCode");
            then.status(503);
        });

        let result = client_for(&server).resolve_country(41.89021, 12.49223).await;
        assert!(matches!(
            result,
            Err(crate::utils::error::EtlError::NetworkError(_))
        ));
    }
}
