pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use config::EnrichmentConfig;
pub use core::{
    aggregator::Aggregator,
    etl::EtlEngine,
    exporter::JsonExporter,
    pipeline::{EnrichmentPipeline, HttpPipeline},
};
pub use domain::model::{PlaceQuery, PlaceRecord, ResultSet};
pub use utils::error::{EtlError, Result};
