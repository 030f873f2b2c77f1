//! civic-cal main entry point
//!
//! Command-line interface for the multi-tenant meeting calendar scraper.

use anyhow::{bail, Context};
use chrono::Local;
use civic_cal::crawler::{CrawlStats, CrawlerHandle, Fetcher};
use civic_cal::config::load_config_with_hash;
use civic_cal::output::{JsonlSink, RecordSink};
use civic_cal::request::plan_list_request;
use civic_cal::Registry;
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

/// civic-cal: a multi-tenant meeting calendar scraper
///
/// Crawls government meeting schedules from a shared calendar platform,
/// one crawler per configured tenant, and writes normalized records as
/// JSON lines.
#[derive(Parser, Debug)]
#[command(name = "civic-cal")]
#[command(version)]
#[command(about = "Multi-tenant meeting calendar scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl only the named tenant(s); may be repeated
    #[arg(long, value_name = "NAME")]
    tenant: Vec<String>,

    /// Validate config and show planned requests without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Override the records output path from the config
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    let registry = Registry::build(&config)?;
    if registry.is_empty() {
        bail!("no tenants configured");
    }

    let selected = select_handles(&registry, &cli.tenant)?;

    if cli.dry_run {
        handle_dry_run(&config, &selected)?;
        return Ok(());
    }

    let records_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.output.records_path));
    let mut sink = JsonlSink::create(&records_path)
        .with_context(|| format!("failed to create {}", records_path.display()))?;

    let fetcher = Fetcher::new(&config.crawler)?;
    let (tx, mut rx) = mpsc::channel(64);

    let mut tasks: JoinSet<(String, civic_cal::Result<CrawlStats>)> = JoinSet::new();
    for handle in selected {
        let fetcher = fetcher.clone();
        let tx = tx.clone();
        tasks.spawn(async move {
            let name = handle.tenant().name.clone();
            let result = handle.run(&fetcher, tx).await;
            (name, result)
        });
    }
    drop(tx);

    // Drain records as the tenant crawls produce them
    while let Some(meeting) = rx.recv().await {
        sink.emit(&meeting)?;
    }

    let mut failed_tenants = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((name, Ok(stats))) => {
                tracing::info!(
                    tenant = %name,
                    pages = stats.pages_visited,
                    records = stats.records_emitted,
                    dropped = stats.extraction_failures,
                    "Tenant crawl complete"
                );
            }
            Ok((name, Err(e))) => {
                failed_tenants += 1;
                tracing::error!(tenant = %name, error = %e, "Tenant crawl failed");
            }
            Err(e) => {
                failed_tenants += 1;
                tracing::error!(error = %e, "Tenant task panicked");
            }
        }
    }

    sink.finalize()?;
    tracing::info!(
        "Wrote {} record(s) to {}",
        sink.records_written(),
        records_path.display()
    );

    if failed_tenants > 0 {
        bail!("{} tenant crawl(s) failed", failed_tenants);
    }
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("civic_cal=info,warn"),
            1 => EnvFilter::new("civic_cal=debug,info"),
            2 => EnvFilter::new("civic_cal=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the `--tenant` filters against the registry
fn select_handles(registry: &Registry, names: &[String]) -> anyhow::Result<Vec<CrawlerHandle>> {
    if names.is_empty() {
        return Ok(registry.handles().cloned().collect());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match registry.get(name) {
            Some(handle) => selected.push(handle.clone()),
            None => bail!(
                "unknown tenant '{}' (configured: {})",
                name,
                registry.names().collect::<Vec<_>>().join(", ")
            ),
        }
    }
    Ok(selected)
}

/// Handles --dry-run: prints each selected tenant and its planned request
fn handle_dry_run(
    config: &civic_cal::Config,
    selected: &[CrawlerHandle],
) -> anyhow::Result<()> {
    let today = Local::now().date_naive();

    println!("=== civic-cal Dry Run ===\n");
    println!("Platform: {}{}", config.platform.base_url, config.platform.list_path);
    println!(
        "Crawler: {} concurrent detail fetch(es), {}s timeout\n",
        config.crawler.max_concurrent_details, config.crawler.request_timeout_secs
    );

    println!("Tenants ({}):", selected.len());
    for handle in selected {
        let tenant = handle.tenant();
        let request = plan_list_request(tenant, &config.platform, today)?;
        println!("  - {} ({})", tenant.name, tenant.agency);
        println!("    token:  {}", tenant.filter_token);
        println!(
            "    window: {} .. {}",
            request.window_start, request.window_end
        );
        println!("    list:   {}", request.url);
    }

    println!("\n✓ Configuration is valid");
    Ok(())
}
