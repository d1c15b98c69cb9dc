//! Save/load persistence
//!
//! Saves are a versioned JSON envelope so a future state layout can refuse
//! (or migrate) old files instead of silently misreading them. `SaveSlots`
//! is the in-memory layer: a keyed store of named runs with an
//! insert-if-absent accessor.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GameState;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

/// Envelope wrapping a serialized game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub state: GameState,
}

/// Errors from save/load
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("unsupported save version {0} (expected {SAVE_VERSION})")]
    UnsupportedVersion(u32),
}

/// Encode a game state into a versioned envelope
pub fn encode(state: &GameState) -> Result<String, SaveError> {
    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        state: state.clone(),
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Decode a versioned envelope back into a game state
pub fn decode(json: &str) -> Result<GameState, SaveError> {
    let envelope: SaveEnvelope = serde_json::from_str(json)?;
    if envelope.version != SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion(envelope.version));
    }
    Ok(envelope.state)
}

/// Default quicksave location under the user's data directory
pub fn quicksave_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("brick-pong");
    path.push("quicksave.json");
    path
}

/// Write a save file, creating parent directories as needed
pub fn save_to(path: &Path, state: &GameState) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encode(state)?)?;
    Ok(())
}

/// Read a save file
pub fn load_from(path: &Path) -> Result<GameState, SaveError> {
    decode(&fs::read_to_string(path)?)
}

/// Delete a save file; missing files are not an error
pub fn remove_save(path: &Path) {
    let _ = fs::remove_file(path);
}

/// Keyed in-memory store of named runs: insert-if-absent, return reference.
#[derive(Debug, Default)]
pub struct SaveSlots {
    slots: HashMap<String, GameState>,
}

impl SaveSlots {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Get-or-create accessor: unknown names are populated via `create`,
    /// existing slots are returned untouched.
    pub fn slot_mut(
        &mut self,
        name: &str,
        create: impl FnOnce() -> GameState,
    ) -> &mut GameState {
        self.slots.entry(name.to_owned()).or_insert_with(create)
    }

    pub fn insert(&mut self, name: &str, state: GameState) {
        self.slots.insert(name.to_owned(), state);
    }

    pub fn get(&self, name: &str) -> Option<&GameState> {
        self.slots.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<GameState> {
        self.slots.remove(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trip() {
        let mut state = GameState::new(1234);
        state.score = 70;
        state.time_ticks = 999;

        let json = encode(&state).unwrap();
        let back = decode(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.score, 70);
        assert_eq!(back.time_ticks, 999);
        assert_eq!(back.ball.pos, state.ball.pos);
        assert_eq!(back.bricks.remaining(), state.bricks.remaining());
    }

    #[test]
    fn test_quit_then_resume_is_runnable() {
        use crate::sim::{GamePhase, TickInput, tick};

        let mut state = GameState::new(77);
        tick(&mut state, &TickInput::default());
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(!state.running);

        // Saving a quit run must not freeze the quit flag into the file
        let json = encode(&state).unwrap();
        let resumed = decode(&json).unwrap();
        assert_eq!(resumed.phase, GamePhase::Running);
        assert!(resumed.running);
        assert_eq!(resumed.time_ticks, state.time_ticks);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let state = GameState::new(1);
        let json = encode(&state).unwrap();
        let bumped = json.replacen(
            &format!("\"version\":{SAVE_VERSION}"),
            "\"version\":99",
            1,
        );
        match decode(&bumped) {
            Err(SaveError::UnsupportedVersion(99)) => {}
            other => panic!("expected version error, got {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_json_is_an_error() {
        assert!(matches!(
            decode("{not json"),
            Err(SaveError::Corrupt(_))
        ));
    }

    #[test]
    fn test_slots_insert_if_absent() {
        let mut slots = SaveSlots::new();
        assert!(slots.is_empty());

        slots.slot_mut("quicksave", || GameState::new(7)).score = 40;
        assert_eq!(slots.len(), 1);

        // Second access returns the same run, not a fresh one
        let again = slots.slot_mut("quicksave", || GameState::new(8));
        assert_eq!(again.score, 40);
        assert_eq!(again.seed, 7);

        // A different key creates a separate run
        let other = slots.slot_mut("practice", || GameState::new(8));
        assert_eq!(other.score, 0);
        assert_eq!(slots.len(), 2);

        assert!(slots.remove("practice").is_some());
        assert!(slots.get("practice").is_none());
    }
}
