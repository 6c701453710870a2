use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Nothing is written unless every place was enriched.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("🚀 Starting landmark enrichment");

        // Extract
        let results = self.pipeline.extract().await?;
        tracing::info!("✅ Enriched {} places in {:?}", results.len(), started.elapsed());

        // Load
        let output_path = self.pipeline.load(results).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
