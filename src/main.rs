use clap::Parser;
use landmark_etl::utils::{logger, validation::Validate};
use landmark_etl::{CliConfig, EnrichmentConfig, EtlEngine, HttpPipeline, LocalStorage};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting landmark-etl");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if cli.dry_run {
        display_dry_run(&config);
        return;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let storage = LocalStorage::new(".");
    let pipeline = match HttpPipeline::from_config(&config, storage) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };

    let engine = EtlEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Enriched {} places", config.places.len());
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Enrichment failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(e: &landmark_etl::EtlError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn display_dry_run(config: &EnrichmentConfig) {
    println!("🔍 DRY RUN - no request will be sent");
    println!(
        "  Maps:      {} (engine={}, hl={})",
        config.maps.endpoint, config.maps.engine, config.maps.language
    );
    println!("  Countries: {}", config.geonames.endpoint);
    println!(
        "  Wikipedia: {} ({})",
        config.wikimedia.endpoint, config.wikimedia.language
    );
    println!("  Timeout:   {}s", config.http.timeout_seconds);
    println!("  Output:    {}", config.output.path);
    println!("  Catalog ({} places):", config.places.len());
    for place in &config.places {
        println!("    {} ← \"{}\"", place.display_key, place.search_term);
    }
}
