// Courtside batch entry point.
//
// 1. Initialize tracing (stderr)
// 2. Load config
// 3. Load inputs, aggregate, build and write all datasets

use courtside_app::config;
use courtside_app::pipeline;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Courtside pipeline starting");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: data_dir={}, output_dir={}, min_season={}",
        config.paths.data_dir, config.paths.output_dir, config.seasons.min_season
    );

    pipeline::run(&config).context("pipeline run failed")?;

    info!("Courtside pipeline finished");
    Ok(())
}

/// Initialize tracing to stderr so stdout stays clean for callers.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courtside_app=info,courtside_core=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
