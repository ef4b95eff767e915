#![cfg(feature = "std")]
//! Save and load of [`SavedGame`] snapshots using bincode.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::game::{GameEngine, SavedGame};
use crate::session::Session;

pub fn encode(saved: &SavedGame) -> anyhow::Result<Vec<u8>> {
    bincode::serialize(saved).context("serializing saved game")
}

/// Decoding also re-validates both boards.
pub fn decode(bytes: &[u8]) -> anyhow::Result<SavedGame> {
    bincode::deserialize(bytes).context("deserializing saved game")
}

/// Write a snapshot, creating parent directories as needed.
pub fn save_to_path(path: &Path, saved: &SavedGame) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let bytes = encode(saved)?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("game saved to {}", path.display());
    Ok(())
}

/// `Ok(None)` when no save exists yet.
pub fn load_from_path(path: &Path) -> anyhow::Result<Option<SavedGame>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    decode(&bytes).map(Some)
}

/// Resume from `path` when possible. Missing or unreadable saves start a
/// fresh game.
pub fn resume_or_new(path: &Path, session: Session) -> GameEngine {
    match load_from_path(path) {
        Ok(Some(saved)) => {
            info!("resuming game from {}", path.display());
            GameEngine::restore(saved, session)
        }
        Ok(None) => GameEngine::new(session),
        Err(e) => {
            warn!("could not load {}: {:#}; starting fresh", path.display(), e);
            GameEngine::new(session)
        }
    }
}
