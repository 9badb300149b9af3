//! magnet-watch - clipboard magnet link collector
//!
//! Entry point for the binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magnet_watch::config::Config;

/// Command-line arguments for magnet-watch
#[derive(Parser, Debug)]
#[command(name = "magnet-watch")]
#[command(version, about = "Collect magnet links copied to the clipboard", long_about = None)]
pub struct Args {
    /// Configuration file path (defaults to the user config directory)
    #[arg(short, long, env = "MAGNET_WATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Clipboard poll interval in milliseconds
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to file (in addition to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run without a window, printing links to stdout
    #[arg(long)]
    pub headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, load_error) = load_config(&args);
    let config = config.with_overrides(
        args.interval_ms,
        args.log_format.clone(),
        args.log_file.clone(),
    );
    config.validate()?;

    init_logging(&config, args.verbose)?;

    info!("magnet-watch v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config: {:#}, using defaults", e);
    }
    info!("Polling clipboard every {:?}", config.poll_interval());
    debug!("Config: {:?}", config);

    if args.headless {
        magnet_watch::headless::run(&config)?;
        return Ok(());
    }

    run_gui(config)
}

/// Load the config file, falling back to defaults.
///
/// A missing file at the default location is not an error. The load error is
/// returned rather than logged because logging is not initialized yet.
fn load_config(args: &Args) -> (Config, Option<anyhow::Error>) {
    let (path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (Config::default_path(), false),
    };

    if !explicit && !path.exists() {
        return (Config::default_config(), None);
    }

    match Config::load(&path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default_config(), Some(e)),
    }
}

#[cfg(feature = "gui")]
fn run_gui(config: Config) -> Result<()> {
    use magnet_watch::clipboard::SystemClipboard;
    use magnet_watch::watcher;

    let (tx, rx) = crossbeam_channel::unbounded();
    let handle = watcher::spawn(config.poll_interval(), SystemClipboard::new, tx)
        .context("Failed to start clipboard watcher")?;

    let result = magnet_watch::gui::run(config, handle.clone(), rx);

    // No-op when the close request already stopped it
    handle.stop();
    result.context("Window error")?;

    info!("magnet-watch shut down");
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: Config) -> Result<()> {
    anyhow::bail!("Built without the `gui` feature; run with --headless")
}

fn init_logging(config: &Config, verbose: u8) -> Result<()> {
    use std::fs::File;

    let log_level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep wgpu/winit chatter out of our own debug output
        tracing_subscriber::EnvFilter::new(format!(
            "magnet_watch={level},iced=warn,wgpu=warn,winit=warn,warn",
            level = log_level
        ))
    });

    // If log file is specified, write to both stderr and file
    if let Some(log_file_path) = &config.logging.log_file {
        let file = File::create(log_file_path)
            .with_context(|| format!("Failed to create log file: {}", log_file_path.display()))?;

        match config.logging.format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_ansi(false),
                    )
                    .init();
            }
        }
        info!("Logging to file: {}", log_file_path.display());
    } else {
        // Console only; stderr so headless stdout carries nothing but links
        match config.logging.format.as_str() {
            "json" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            }
            "compact" => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .init();
            }
        }
    }

    Ok(())
}
