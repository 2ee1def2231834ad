use anyhow::{bail, Context, Result};
use fakebook::{AnalyticsConfig, AnalyticsEngine, InMemoryStore, RawEntities};
use tracing::info;

const USAGE: &str = "usage: fakebook [snapshot.json] [config.yaml]";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Fakebook Analytics v{}", fakebook::version());

    let mut args = std::env::args().skip(1);
    let snapshot_arg = args.next();
    let config = match args.next() {
        Some(path) => AnalyticsConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration {}", path))?,
        None => AnalyticsConfig::default(),
    };

    let snapshot_path = match snapshot_arg.map(Into::into).or(config.snapshot_path.clone()) {
        Some(path) => path,
        None => bail!(USAGE),
    };

    let raw = RawEntities::from_json_file(&snapshot_path)
        .with_context(|| format!("failed to load snapshot {:?}", snapshot_path))?;
    let engine = AnalyticsEngine::new(InMemoryStore::from_raw(raw))
        .context("failed to index snapshot")?;

    let report = engine.run_all(&config.params);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
