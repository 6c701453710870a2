use crate::core::{
    CountryResolver, EncyclopediaResolver, MapsLookup, PlaceQuery, PlaceRecord, ResultSet,
};
use crate::utils::error::Result;

/// Drives the three resolvers over the catalog, one place at a time.
pub struct Aggregator<M, C, W> {
    maps: M,
    countries: C,
    wiki: W,
}

impl<M, C, W> Aggregator<M, C, W>
where
    M: MapsLookup,
    C: CountryResolver,
    W: EncyclopediaResolver,
{
    pub fn new(maps: M, countries: C, wiki: W) -> Self {
        Self {
            maps,
            countries,
            wiki,
        }
    }

    /// maps → country → wiki. The wiki search reuses the catalog term, not the maps title.
    pub async fn enrich(&self, place: &PlaceQuery) -> Result<PlaceRecord> {
        let found = self.maps.lookup(&place.search_term).await?;
        let country_iso = self
            .countries
            .resolve_country(found.latitude, found.longitude)
            .await?;
        let article = self.wiki.resolve_wiki(&place.search_term).await?;

        Ok(PlaceRecord::merge(found, country_iso, article))
    }

    /// 任一地標失敗即中止，不回傳部分結果
    pub async fn build_catalog(&self, catalog: &[PlaceQuery]) -> Result<ResultSet> {
        let mut results = ResultSet::new();

        for (index, place) in catalog.iter().enumerate() {
            tracing::info!(
                "📍 [{}/{}] Enriching '{}' (query: '{}')",
                index + 1,
                catalog.len(),
                place.display_key,
                place.search_term
            );

            let record = self.enrich(place).await.inspect_err(|e| {
                tracing::error!("❌ Failed to enrich '{}': {}", place.display_key, e);
            })?;

            tracing::debug!(
                "'{}' → {} ({:?}, {})",
                place.display_key,
                record.name,
                record.country_iso,
                record.wiki_url
            );
            results.insert(place.display_key.clone(), record);
        }

        Ok(results)
    }
}
