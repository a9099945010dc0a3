//! Interactive credential setup.
//!
//! `CredentialPrompt` is the capability seam: the setup flow only knows how to
//! ask for a key, not where the question appears. The server ships the
//! line-oriented terminal implementation; a desktop shell can plug a native
//! dialog in behind the same trait.

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use tracing::{error, info};

use crate::credentials::{load_stored_key, mask_key, save_key};

/// Where to obtain a Gemini API key; shown to the user during setup.
pub const KEY_PROVISIONING_URL: &str = "https://aistudio.google.com/app/apikey";

/// Asks the user for an API key.
///
/// `existing_masked` is the masked form of any currently stored key, for
/// display only; implementations never see the real secret. Returns the
/// entered key, or `None` on cancellation/empty input.
pub trait CredentialPrompt {
    fn ask(&self, existing_masked: Option<&str>) -> Option<String>;
}

/// Line-oriented prompt on stdin/stdout. The server binary has no windowing
/// toolkit, so this is the implementation it ships.
pub struct TerminalPrompt;

impl TerminalPrompt {
    /// Returns a prompt only when stdin is attached to a terminal; a detached
    /// process (service manager, CI) gets `None` and setup is skipped.
    pub fn detect() -> Option<Self> {
        std::io::stdin().is_terminal().then_some(TerminalPrompt)
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn ask(&self, existing_masked: Option<&str>) -> Option<String> {
        let mut out = std::io::stdout();

        let _ = writeln!(out, "\n===== JobFit Setup =====");
        let _ = writeln!(out, "Please enter your Gemini API key:");
        if let Some(masked) = existing_masked {
            let _ = writeln!(out, "(Current key: {masked}; press Enter to keep it)");
        }
        let _ = writeln!(out, "(You can get one from: {KEY_PROVISIONING_URL})");
        let _ = write!(out, "> ");
        let _ = out.flush();

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return None;
        }

        let entered = line.trim();
        if entered.is_empty() {
            None
        } else {
            Some(entered.to_string())
        }
    }
}

/// Runs the setup flow: show the masked existing key, ask, persist a non-empty
/// answer, and return the key now in effect. Cancellation keeps whatever was
/// already stored. A failed save is logged but the entered key is still
/// returned, so the running session can use it even when the write failed.
pub fn run_setup(path: &Path, prompt: &dyn CredentialPrompt) -> Option<String> {
    let existing = load_stored_key(path);
    let masked = existing.as_deref().map(mask_key);

    match prompt.ask(masked.as_deref()) {
        Some(entered) => {
            match save_key(path, &entered) {
                Ok(()) => info!("Gemini API key saved to {}", path.display()),
                Err(e) => error!("Failed to save API key: {e:#}"),
            }
            Some(entered)
        }
        None => {
            if existing.is_some() {
                info!("Setup cancelled; keeping the existing key");
            } else {
                info!("Setup cancelled; no API key configured");
            }
            existing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::credentials::testing::ScriptedPrompt;

    fn temp_config(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join(".jobfit").join("config.json")
    }

    #[test]
    fn test_setup_persists_confirmed_key() {
        let dir = TempDir::new().unwrap();
        let path = temp_config(&dir);
        let prompt = ScriptedPrompt::answering(Some("entered-key"));

        let result = run_setup(&path, &prompt);

        assert_eq!(result, Some("entered-key".to_string()));
        assert_eq!(load_stored_key(&path), Some("entered-key".to_string()));
    }

    #[test]
    fn test_setup_cancelled_keeps_existing_key() {
        let dir = TempDir::new().unwrap();
        let path = temp_config(&dir);
        save_key(&path, "already-there").unwrap();
        let prompt = ScriptedPrompt::answering(None);

        let result = run_setup(&path, &prompt);

        assert_eq!(result, Some("already-there".to_string()));
        assert_eq!(load_stored_key(&path), Some("already-there".to_string()));
    }

    #[test]
    fn test_setup_cancelled_with_no_existing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let prompt = ScriptedPrompt::answering(None);

        assert_eq!(run_setup(&temp_config(&dir), &prompt), None);
    }

    #[test]
    fn test_setup_shows_masked_existing_key() {
        let dir = TempDir::new().unwrap();
        let path = temp_config(&dir);
        save_key(&path, "AB1234567890CD").unwrap();
        let prompt = ScriptedPrompt::answering(Some("replacement"));

        run_setup(&path, &prompt);

        assert_eq!(prompt.first_shown(), Some("AB12******90CD".to_string()));
    }

    #[test]
    fn test_setup_with_no_existing_key_shows_nothing() {
        let dir = TempDir::new().unwrap();
        let prompt = ScriptedPrompt::answering(Some("k-1234567890"));

        run_setup(&temp_config(&dir), &prompt);

        assert_eq!(prompt.times_asked(), 1);
        assert_eq!(prompt.first_shown(), None);
    }
}
