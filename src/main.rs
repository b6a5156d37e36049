use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tasklist::infrastructure::{AppConfig, CliArgs, LoadedConfig, StorageManager};
use tasklist::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to ratatui, so without a file there is no output.
    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<LoadedConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut loaded = storage.load_config(args.config.as_deref())?;
    loaded.config.merge_with_args(args);
    Ok(loaded)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let loaded = load_config()?;
    init_logging(&loaded.config)?;

    info!(version = tasklist::VERSION, "Starting tasklist");
    loaded.log_status();

    let app = App::new(&loaded.config);

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
