use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use super::format::SavedGame;
use crate::error::SaveError;
use crate::game::GameState;

/// Configuration for saving unfinished games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub path: PathBuf,
    pub enabled: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            path: PathBuf::from("save_game.json"),
            enabled: true,
        }
    }
}

/// Writes, reads and discards the single saved game.
pub struct SaveManager {
    config: SaveConfig,
}

impl SaveManager {
    pub fn new(config: SaveConfig) -> Self {
        SaveManager { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Save `state` if it is still in progress; a finished game clears any
    /// previous save instead. Returns whether a file was written.
    pub fn save(&self, state: &GameState) -> Result<bool, SaveError> {
        if !self.config.enabled {
            return Ok(false);
        }
        if state.is_terminal() {
            self.discard()?;
            return Ok(false);
        }

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let json = serde_json::to_string_pretty(&SavedGame::from_state(state, timestamp))?;

        // Write next to the target, then rename over it
        let path = &self.config.path;
        let tmp = tmp_path(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SaveError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&tmp, json).map_err(|e| SaveError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(SaveError::Write {
                path: path.clone(),
                source: e,
            });
        }

        info!(path = %path.display(), "game saved");
        Ok(true)
    }

    /// Load the saved game, or `None` if there is none.
    pub fn load(&self) -> Result<Option<GameState>, SaveError> {
        if !self.config.enabled {
            return Ok(None);
        }

        let path = &self.config.path;
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved game");
                return Ok(None);
            }
            Err(e) => {
                return Err(SaveError::Read {
                    path: path.clone(),
                    source: e,
                })
            }
        };

        let saved: SavedGame = serde_json::from_str(&json).map_err(|e| SaveError::Parse {
            path: path.clone(),
            source: e,
        })?;
        let state = saved.to_state()?;
        if state.is_terminal() {
            return Err(SaveError::Format("saved game is already over".into()));
        }

        info!(path = %path.display(), "restored saved game");
        Ok(Some(state))
    }

    /// Remove the saved game if there is one.
    pub fn discard(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.config.path) {
            Ok(()) => {
                debug!(path = %self.config.path.display(), "saved game discarded");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SaveError::Io(e)),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
