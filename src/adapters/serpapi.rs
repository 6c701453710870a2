use crate::config::toml_config::MapsConfig;
use crate::domain::model::{round_coordinate, MapsPlace};
use crate::domain::ports::MapsLookup;
use crate::domain::selection::{CandidateSelector, FirstCandidate};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// Google Maps search through SerpApi.
pub struct SerpApiMapsClient {
    client: Client,
    config: MapsConfig,
    selector: Arc<dyn CandidateSelector<Value>>,
}

impl SerpApiMapsClient {
    pub fn new(client: Client, config: MapsConfig) -> Self {
        Self {
            client,
            config,
            selector: Arc::new(FirstCandidate),
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn CandidateSelector<Value>>) -> Self {
        self.selector = selector;
        self
    }
}

#[async_trait]
impl MapsLookup for SerpApiMapsClient {
    async fn lookup(&self, search_term: &str) -> Result<MapsPlace> {
        tracing::debug!("Searching maps for '{}'", search_term);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("engine", self.config.engine.as_str()),
                ("type", "search"),
                ("google_domain", self.config.google_domain.as_str()),
                ("hl", self.config.language.as_str()),
                ("api_key", self.config.api_key.as_str()),
                ("q", search_term),
            ])
            .send()
            .await?
            .error_for_status()?;

        let mut body: Value = response.json().await?;

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            tracing::warn!("Maps service reported an error for '{}': {}", search_term, message);
        }

        let candidates = match body.get_mut("local_results").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        tracing::debug!("Maps returned {} candidates", candidates.len());

        let first = self
            .selector
            .select(candidates)
            .ok_or_else(|| missing(search_term, "local_results[0]"))?;

        parse_local_result(search_term, &first)
    }
}

fn missing(query: &str, field: &str) -> EtlError {
    EtlError::LookupError {
        query: query.to_string(),
        field: field.to_string(),
    }
}

fn text(query: &str, result: &Value, field: &str) -> Result<String> {
    result
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(query, field))
}

fn number(query: &str, result: &Value, pointer: &str, field: &str) -> Result<f64> {
    result
        .pointer(pointer)
        .and_then(Value::as_f64)
        .ok_or_else(|| missing(query, field))
}

/// Maps one SerpApi `local_results` entry. Only `type_ids` may be absent.
pub fn parse_local_result(query: &str, result: &Value) -> Result<MapsPlace> {
    let type_ids = match result.get("type_ids") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| missing(query, "type_ids"))
            })
            .collect::<Result<Vec<_>>>()?,
        Some(_) => return Err(missing(query, "type_ids")),
    };

    let latitude = number(query, result, "/gps_coordinates/latitude", "gps_coordinates.latitude")?;
    let longitude = number(query, result, "/gps_coordinates/longitude", "gps_coordinates.longitude")?;

    Ok(MapsPlace {
        name: text(query, result, "title")?,
        place_id: text(query, result, "place_id")?,
        description: text(query, result, "description")?,
        type_ids,
        latitude: round_coordinate(latitude),
        longitude: round_coordinate(longitude),
        rating: number(query, result, "/rating", "rating")?,
        num_reviews: result
            .get("reviews")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing(query, "reviews"))?,
        address: text(query, result, "address")?,
    })
}
