use crate::adapters::http::build_client;
use crate::adapters::{GeoNamesClient, SerpApiMapsClient, WikimediaClient};
use crate::config::toml_config::EnrichmentConfig;
use crate::core::aggregator::Aggregator;
use crate::core::exporter::JsonExporter;
use crate::core::{
    CountryResolver, EncyclopediaResolver, MapsLookup, Pipeline, PlaceQuery, ResultSet, Storage,
};
use crate::utils::error::Result;

pub type HttpPipeline<S> = EnrichmentPipeline<S, SerpApiMapsClient, GeoNamesClient, WikimediaClient>;

/// Aggregates the catalog on extract and writes the JSON document on load.
pub struct EnrichmentPipeline<S: Storage, M, C, W> {
    catalog: Vec<PlaceQuery>,
    aggregator: Aggregator<M, C, W>,
    exporter: JsonExporter<S>,
    output_path: String,
}

impl<S, M, C, W> EnrichmentPipeline<S, M, C, W>
where
    S: Storage,
    M: MapsLookup,
    C: CountryResolver,
    W: EncyclopediaResolver,
{
    pub fn new(
        catalog: Vec<PlaceQuery>,
        aggregator: Aggregator<M, C, W>,
        exporter: JsonExporter<S>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            aggregator,
            exporter,
            output_path: output_path.into(),
        }
    }
}

impl<S: Storage> HttpPipeline<S> {
    /// 依設定建立三個 HTTP 客戶端，共用同一個 reqwest Client
    pub fn from_config(config: &EnrichmentConfig, storage: S) -> Result<Self> {
        let client = build_client(config.http.timeout())?;

        let aggregator = Aggregator::new(
            SerpApiMapsClient::new(client.clone(), config.maps.clone()),
            GeoNamesClient::new(client.clone(), config.geonames.clone()),
            WikimediaClient::new(client, config.wikimedia.clone()),
        );

        Ok(Self::new(
            config.places.clone(),
            aggregator,
            JsonExporter::new(storage, config.output.pretty),
            config.output.path.clone(),
        ))
    }
}

#[async_trait::async_trait]
impl<S, M, C, W> Pipeline for EnrichmentPipeline<S, M, C, W>
where
    S: Storage,
    M: MapsLookup,
    C: CountryResolver,
    W: EncyclopediaResolver,
{
    async fn extract(&self) -> Result<ResultSet> {
        self.aggregator.build_catalog(&self.catalog).await
    }

    async fn load(&self, results: ResultSet) -> Result<String> {
        self.exporter.export(&results, &self.output_path).await?;
        Ok(self.output_path.clone())
    }
}
