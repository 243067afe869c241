use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use provisioner_converter::{InputConverter, RandomUuidGenerator, ReleaseCatalog};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod cli;
mod commands;
mod config;
mod db;

use cli::{Args, Mode};
use config::Config;

/// Initialize tracing on stderr so stdout only carries command output.
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// until the program exits.
fn initialize_tracing() -> WorkerGuard {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "info,\
         provisioner_converter=debug,\
         sqlx::query=warn"
            .into()
    });

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let stderr_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let _guard = initialize_tracing();

    let config = Config::load()?;
    let catalog = Arc::new(catalog::load_catalog(&config).await?);

    match args.mode {
        Mode::Convert {
            input,
            tenant,
            sub_account,
            runtime_id,
            output,
        } => commands::convert::run_convert(
            &build_converter(&config, catalog),
            &input,
            &tenant,
            sub_account.as_deref(),
            runtime_id,
            &output,
        ),
        Mode::Validate { input } => {
            commands::convert::run_validate(&build_converter(&config, catalog), &input)
        }
        Mode::Releases { output } => commands::releases::run_list(&catalog, &output),
    }
}

fn build_converter(config: &Config, catalog: Arc<ReleaseCatalog>) -> InputConverter {
    InputConverter::new(
        Arc::new(RandomUuidGenerator),
        catalog,
        config.gardener_project.clone(),
    )
}
