//! Gantry - Release preparation CLI

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();

    let cli = Cli::parse();
    cli.execute()
}

/// Console logging is filtered by RUST_LOG (default: warn) so it stays out
/// of the way of the styled step output. Every run additionally appends
/// debug-level JSON traces to a daily file under `~/.gantry/logs/`.
fn init_tracing() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")));

    let file = dirs::home_dir()
        .map(|home| home.join(".gantry").join("logs"))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "gantry.log")));

    match file {
        Some((writer, guard)) => {
            tracing_subscriber::registry()
                .with(console)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_filter(EnvFilter::new("debug")),
                )
                .init();
            Some(guard)
        }
        None => {
            // No writable home directory; console only.
            tracing_subscriber::registry().with(console).init();
            None
        }
    }
}
