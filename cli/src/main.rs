use anyhow::{Context, Result};
use clap::Parser;
use errscan_core::{
    load_rules_from_dir, ErrorSearcher, FileProcessor, PatternCatalog, ScanReport,
};
use std::fs;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{usage, Cli, Config};

fn main() -> Result<()> {
    // .env 中的 ERRSCAN_* 变量作为参数默认值
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(config) = Config::from_cli(cli) else {
        println!("{}", usage());
        std::process::exit(1);
    };

    let report = run(&config)?;

    println!("Found {} error messages", report.message_count());
    println!("Report saved to {}", config.output.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "errscan=debug,errscan_core=debug"
    } else {
        "errscan=info,errscan_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_catalog(config: &Config) -> Result<PatternCatalog> {
    let catalog = match &config.rules_dir {
        Some(dir) => {
            let extra = load_rules_from_dir(dir)
                .with_context(|| format!("Failed to load rules from {}", dir.display()))?;
            tracing::info!("Loaded {} custom rules from {}", extra.len(), dir.display());
            PatternCatalog::with_extra_rules(extra)
        }
        None => PatternCatalog::builtin(),
    };

    for skipped in catalog.skipped() {
        tracing::warn!("Rule {} dropped: {}", skipped.id, skipped.reason);
    }
    tracing::debug!("Catalog holds {} rules", catalog.len());

    Ok(catalog)
}

fn run(config: &Config) -> Result<ScanReport> {
    if let Some(jobs) = config.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    // 确保输出目录存在
    if let Some(output_dir) = config.output.parent() {
        if !output_dir.as_os_str().is_empty() {
            fs::create_dir_all(output_dir).with_context(|| {
                format!("Failed to create output directory {}", output_dir.display())
            })?;
        }
    }

    let searcher = Arc::new(ErrorSearcher::with_catalog(build_catalog(config)?));
    let processor = FileProcessor::new(&config.base_dir, searcher);

    let source = config.source();
    let outcome = processor
        .process_source(&source)
        .with_context(|| format!("Failed to collect files from {:?}", source))?;

    if !outcome.skipped.is_empty() {
        tracing::warn!("{} listed files could not be read", outcome.skipped.len());
    }

    let report = ScanReport::new(
        config.codebase.clone(),
        config.feature.clone(),
        outcome,
        config.full_line,
    );
    let rendered = report
        .render(config.format)
        .context("Failed to render report")?;
    fs::write(&config.output, rendered)
        .with_context(|| format!("Failed to write report {}", config.output.display()))?;

    tracing::info!(
        "Wrote {} messages from {} files to {}",
        report.message_count(),
        report.files_scanned,
        config.output.display()
    );
    Ok(report)
}
