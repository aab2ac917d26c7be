//! Txboard main entry point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use txboard_api::start_server;
use txboard_config::Config;
use txboard_source::HttpDatasetSource;

#[derive(Parser, Debug)]
#[command(name = "txboard")]
#[command(version = "0.1.0")]
#[command(about = "A transaction browsing dashboard backend", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_missing) = if args.config.exists() {
        (Config::load(args.config.clone())?, false)
    } else {
        (Config::default(), true)
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if config_missing {
        log::warn!(
            "Config file not found: {}, falling back to defaults",
            args.config.display()
        );
    }

    log::info!(
        "Config loaded: source url={}, listen={}:{}",
        config.source.url,
        config.server.host,
        config.server.port
    );

    let source = Arc::new(HttpDatasetSource::new(
        config.source.url.clone(),
        config.source_timeout(),
    )?);

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, source))
}
