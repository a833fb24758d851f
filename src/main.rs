//! SkiErg Calc - Ski-Ergometer Power and Start Group Calculator
//!
//! Main entry point for the command line front end.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> ExitCode {
    // Logs go to stderr so results on stdout stay pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting SkiErg Calc v{}", env!("CARGO_PKG_VERSION"));

    let cli = app::Cli::parse();
    let config_path = skiergcalc::storage::config::get_config_path();

    match app::run(cli, &config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(input) = err.downcast_ref::<app::InputError>() {
                eprintln!("Invalid input: {}", input);
                ExitCode::from(2)
            } else {
                tracing::error!("{:#}", err);
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        }
    }
}
