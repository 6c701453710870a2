use crate::domain::model::{MapsPlace, ResultSet, WikiArticle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait MapsLookup: Send + Sync {
    async fn lookup(&self, search_term: &str) -> Result<MapsPlace>;
}

/// `Ok(None)` means the point lies outside every country.
#[async_trait]
pub trait CountryResolver: Send + Sync {
    async fn resolve_country(&self, latitude: f64, longitude: f64) -> Result<Option<String>>;
}

#[async_trait]
pub trait EncyclopediaResolver: Send + Sync {
    async fn resolve_wiki(&self, query: &str) -> Result<WikiArticle>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ResultSet>;
    async fn load(&self, results: ResultSet) -> Result<String>;
}
