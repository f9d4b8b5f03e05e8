use libmetas::pipeline::build_once;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let summary = build_once()?;
    info!(projects = summary.projects.len(), "done");

    Ok(())
}
