use std::path::PathBuf;

use anyhow::{Context, Result};

/// How the process was launched.
///
/// The packaged desktop build serves the bundled frontend and opens a browser
/// window on startup; a development build does neither (the Vite dev server
/// owns the frontend). Supplied explicitly via `JOBFIT_MODE`, never inferred
/// from the executable environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Packaged,
}

impl RuntimeMode {
    /// Parses `JOBFIT_MODE`. Only `"packaged"` (any case) selects the packaged
    /// build; everything else, including an unset variable, is development.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("packaged") {
            RuntimeMode::Packaged
        } else {
            RuntimeMode::Development
        }
    }

    pub fn is_packaged(self) -> bool {
        self == RuntimeMode::Packaged
    }
}

/// Application configuration loaded from environment variables.
/// Every field has a default; only a malformed `PORT` fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mode: RuntimeMode,
    /// Directory holding the prebuilt frontend bundle (packaged mode only).
    pub assets_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5050".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            mode: RuntimeMode::parse(&std::env::var("JOBFIT_MODE").unwrap_or_default()),
            assets_dir: std::env::var("JOBFIT_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("frontend").join("dist")),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
