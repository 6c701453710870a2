// Adapters layer: concrete implementations for external systems (http services, storage).

pub mod geonames;
pub mod http;
pub mod serpapi;
pub mod storage;
pub mod wikimedia;

pub use geonames::GeoNamesClient;
pub use serpapi::SerpApiMapsClient;
pub use storage::LocalStorage;
pub use wikimedia::WikimediaClient;
