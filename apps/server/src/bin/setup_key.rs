//! Standalone Gemini API key setup tool (`jobfit-setup`).
//!
//! Writes the same `~/.jobfit/config.json` the server reads at startup, so a
//! key configured here is picked up on the next launch.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobfit_server::credentials::{self, TerminalPrompt};

fn main() -> ExitCode {
    // Quiet by default; save failures still surface as error logs
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("jobfit_server=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(path) = credentials::config_path() else {
        eprintln!("Could not determine a home directory; nowhere to store the key.");
        return ExitCode::FAILURE;
    };

    let Some(prompt) = TerminalPrompt::detect() else {
        eprintln!("jobfit-setup requires an interactive terminal.");
        return ExitCode::FAILURE;
    };

    match credentials::run_setup(&path, &prompt) {
        Some(_) => {
            println!("API key configured. JobFit is ready to use.");
            ExitCode::SUCCESS
        }
        None => {
            println!("No API key configured.");
            ExitCode::FAILURE
        }
    }
}
