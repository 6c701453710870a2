pub mod aggregator;
pub mod etl;
pub mod exporter;
pub mod pipeline;

pub use crate::domain::model::{PlaceQuery, PlaceRecord, ResultSet};
pub use crate::domain::ports::{
    CountryResolver, EncyclopediaResolver, MapsLookup, Pipeline, Storage,
};
pub use crate::utils::error::Result;
