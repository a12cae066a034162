use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dinerank_config::{ConfigSource, EngineConfig, PositionConfig, load_catalog};
use dinerank_core::{ItemRepository, RankingEngine};
use dinerank_model::Entry;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dinerank", about = "Rank a dining catalog and print the list")]
struct Cli {
    /// Config file (TOML or JSON). Defaults to the environment, then ./dinerank.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON catalog, overriding `catalog_path` from the config
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Packed sort state, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_state)]
    state: Option<u32>,
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Print legacy signed ids (markers are negative) instead of rows
    #[arg(long)]
    raw: bool,
}

fn parse_state(raw: &str) -> std::result::Result<u32, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|err| format!("invalid sort state {raw:?}: {err}"))
}

fn render<R: ItemRepository>(engine: &RankingEngine<R>, raw: bool) -> Vec<String> {
    engine
        .order()
        .iter()
        .map(|entry| match entry {
            _ if raw => entry.to_raw().to_string(),
            Entry::Marker(kind) => format!("== {} ==", kind.label()),
            Entry::Item(id) => {
                let name = engine
                    .repository()
                    .attributes(*id)
                    .map(|attributes| attributes.name.as_str())
                    .unwrap_or_default();
                let special = engine.special_text(*id).unwrap_or_default();
                let right = engine.special_right_text(*id).unwrap_or_default();
                format!("{name}  {special}  {right}").trim_end().to_string()
            }
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (mut config, source) = match cli.config {
        Some(path) => (EngineConfig::load_from_file(&path)?, ConfigSource::File(path)),
        None => EngineConfig::load_from_env()?,
    };
    info!(?source, "loaded configuration");

    if let Some(bits) = cli.state {
        config.sort.packed = Some(bits);
    }
    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        config.position = Some(PositionConfig { lat, lon });
    }

    let catalog_path = cli
        .catalog
        .or_else(|| config.catalog_path.clone())
        .context("no catalog given; pass --catalog or set catalog_path in the config")?;
    let catalog = load_catalog(&catalog_path)?;
    let engine = config.build_engine(catalog);

    for line in render(&engine, cli.raw) {
        println!("{line}");
    }
    Ok(())
}
