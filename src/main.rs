use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use summadesk::api::ApiClient;
use summadesk::config::Config;
use summadesk::logging;
use summadesk::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "summadesk", version, about = "Terminal client for a text summarization service")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Path to a config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Text file to load into the input panel on startup
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Where to write the log file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    if let Some(log_path) = cli.log_file.clone().or_else(logging::default_log_path) {
        if let Err(err) = logging::init_tracing(&log_path) {
            eprintln!(
                "Warning: failed to open log file {}: {}",
                log_path.display(),
                err
            );
        }
    }

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = ApiClient::new(&config.server).context("failed to build HTTP client")?;

    runtime::run(
        &config,
        tokio_runtime.handle(),
        client,
        cli.input.as_deref(),
    )?;

    // In-flight calls are abandoned on exit.
    tokio_runtime.shutdown_background();
    Ok(())
}

/// Load the config file and apply CLI overrides on top of it.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &cli.url {
        config.server.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}
