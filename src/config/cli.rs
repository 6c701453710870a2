use crate::config::toml_config::EnrichmentConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "landmark-etl")]
#[command(about = "Enrich landmarks with maps, country and Wikipedia metadata")]
pub struct CliConfig {
    /// Path to a TOML configuration file (credentials otherwise come from the environment)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output JSON path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the per-request timeout
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Pretty-print the output document
    #[arg(long)]
    pub pretty: bool,

    /// Show the configuration and catalog without calling any service
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔或環境變數，再套用命令列覆蓋
    pub fn resolve(&self) -> Result<EnrichmentConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                EnrichmentConfig::from_file(path)?
            }
            None => {
                tracing::debug!("No configuration file given, reading the environment");
                EnrichmentConfig::from_env()
            }
        };

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.http.timeout_seconds = timeout;
        }
        if self.pretty {
            config.output.pretty = true;
        }

        Ok(config)
    }
}
