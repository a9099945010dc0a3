//! Credential store and resolution for the Gemini API key.
//!
//! One secret string, kept in a JSON object at `~/.jobfit/config.json` under
//! `gemini_api_key`. The environment variable wins over the file; the file is
//! written with read-merge-write so keys other tools put there survive a key
//! update. Read failures never propagate; resolution logs and moves on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

pub mod prompt;

pub use prompt::{run_setup, CredentialPrompt, TerminalPrompt};

/// Environment variable consulted before the config file.
pub const ENV_VAR: &str = "GEMINI_API_KEY";

/// JSON field holding the key inside the config file.
const CONFIG_KEY: &str = "gemini_api_key";

/// `~/.jobfit/config.json`, or `None` when no home directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jobfit").join("config.json"))
}

/// Reads the stored key. Returns `None` for a missing file, unreadable file,
/// unparseable JSON, or a missing/empty field. Failures are logged, never
/// fatal. Unknown fields in the file are ignored.
pub fn load_stored_key(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }

    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            error!("Error reading config file {}: {e}", path.display());
            return None;
        }
    };

    let parsed: Value = match serde_json::from_str(&contents) {
        Ok(v) => v,
        Err(e) => {
            error!("Error parsing config file {}: {e}", path.display());
            return None;
        }
    };

    parsed
        .get(CONFIG_KEY)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
}

/// Persists the key with read-merge-write: existing fields in the config file
/// are kept, only `gemini_api_key` is replaced. A file that no longer parses
/// is replaced by a fresh single-key object.
pub fn save_key(path: &Path, key: &str) -> Result<()> {
    let mut object = fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<Value>(&contents).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_else(Map::new);

    object.insert(CONFIG_KEY.to_string(), Value::String(key.to_string()));

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let serialized = serde_json::to_string_pretty(&Value::Object(object))
        .context("Failed to serialize config")?;
    fs::write(path, serialized)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(())
}

/// Masks a key for display: first 4 and last 4 characters visible, the middle
/// replaced by one `*` per hidden character. Keys of 8 characters or fewer
/// are fully masked.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

/// Resolves the credential, stopping at the first source that yields one:
/// environment value, stored config file, then the interactive setup flow when
/// a prompt capability is available. Returns `None` when every source comes up
/// empty; the caller decides whether that is fatal.
///
/// The environment value is passed in rather than read here so the chain is
/// testable without mutating process environment.
pub fn resolve_key(
    env_value: Option<String>,
    path: Option<&Path>,
    prompt: Option<&dyn CredentialPrompt>,
) -> Option<String> {
    if let Some(key) = env_value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        info!("Using Gemini API key from {ENV_VAR}");
        return Some(key);
    }

    if let Some(path) = path {
        if let Some(key) = load_stored_key(path) {
            info!("Loaded Gemini API key from {}", path.display());
            return Some(key);
        }
    }

    match (path, prompt) {
        (Some(path), Some(prompt)) => {
            info!("No Gemini API key found. Prompting for setup...");
            run_setup(path, prompt)
        }
        (None, Some(_)) => {
            warn!("No home directory available; skipping interactive key setup");
            None
        }
        _ => None,
    }
}
