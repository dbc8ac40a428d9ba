use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{
    Training,
    config::{DriverConfig, OutputFormat, Package},
};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(package: &Package, output: OutputFormat) -> anyhow::Result<String> {
    let summary = package.reading()?.summary();
    Ok(match output {
        OutputFormat::Text => summary.message(),
        OutputFormat::Json => serde_json::to_string(&summary)?,
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = DriverConfig::from_env()?;

    tracing::info!("Processing {} packages", config.packages.len());

    let mut failed = 0;
    for package in &config.packages {
        match render(package, config.output) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::error!(code = package.code(), "Skipping package: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} packages failed", config.packages.len());
    }
    Ok(())
}
