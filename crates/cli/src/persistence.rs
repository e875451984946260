use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAVE_SCHEMA_VERSION: u32 = 1;

/// One recorded intent. Saves are the seed plus this log; loading replays
/// the log against a fresh run, which reproduces the exact RNG stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAction {
    pub action: String,
    #[serde(default)]
    pub indices: Vec<usize>,
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRunState {
    pub version: u32,
    pub seed: u64,
    pub actions: Vec<SavedAction>,
}

pub fn default_state_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DECKRUN_SAVE") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".deckrun_state.json"))
}

pub fn save_state_file(seed: u64, actions: &[SavedAction], path: &Path) -> Result<()> {
    let payload = SavedRunState {
        version: SAVE_SCHEMA_VERSION,
        seed,
        actions: actions.to_vec(),
    };
    let body = serde_json::to_string_pretty(&payload)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn load_state_file(path: &Path) -> Result<SavedRunState> {
    let body =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let payload: SavedRunState = serde_json::from_str(&body)?;
    if payload.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            payload.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(payload)
}
