use anyhow::{Context, bail};
use family_table::{FamilyTable, FamilyTableConfig, JsonFileSource, TreeId, render_rows};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(tree_arg) = args.next() else {
        bail!("usage: family-table <tree_id> [data_dir]");
    };
    let tree_id: TreeId = tree_arg
        .parse()
        .with_context(|| format!("tree id must be an integer, got '{tree_arg}'"))?;

    let config = FamilyTableConfig::from_env().context("reading configuration")?;
    let data_dir = args
        .next()
        .map(PathBuf::from)
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    if !data_dir.is_dir() {
        warn!("Data directory not found: {}", data_dir.display());
    }

    info!("Loading tree {tree_id} from: {}", data_dir.display());
    let start = Instant::now();

    let source = JsonFileSource::new(&data_dir, config.date_format_config.clone());
    let mut table = FamilyTable::new(source, config);
    table
        .set_tree(tree_id)
        .await
        .with_context(|| format!("loading tree {tree_id}"))?;

    let rows = table.rows();
    info!("Prepared {} rows in {:?}", rows.len(), start.elapsed());

    print!("{}", render_rows(&rows));
    Ok(())
}
