use crate::core::{ResultSet, Storage};
use crate::utils::error::Result;

/// Writes the result set as one UTF-8 JSON document.
pub struct JsonExporter<S: Storage> {
    storage: S,
    pretty: bool,
}

impl<S: Storage> JsonExporter<S> {
    pub fn new(storage: S, pretty: bool) -> Self {
        Self { storage, pretty }
    }

    pub fn render(&self, results: &ResultSet) -> Result<Vec<u8>> {
        let data = if self.pretty {
            serde_json::to_vec_pretty(results)?
        } else {
            serde_json::to_vec(results)?
        };
        Ok(data)
    }

    /// 覆寫既有檔案，不詢問
    pub async fn export(&self, results: &ResultSet, destination: &str) -> Result<()> {
        let data = self.render(results)?;
        for (key, record) in results.iter() {
            tracing::debug!("  {} → {} ({})", key, record.place_id, record.wiki_url);
        }
        tracing::debug!(
            "Writing {} records ({} bytes) to {}",
            results.len(),
            data.len(),
            destination
        );
        self.storage.write_file(destination, &data).await
    }
}
