//! Flat key-value storage and the typed game store built on it.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{board::Board, game::GameState};

pub const BOARDS_KEY: &str = "keys/boards";
pub const STEP_KEY: &str = "keys/step";

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes every key.
    fn clear(&mut self) -> Result<()>;
}

/// Volatile store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Reads and writes [`GameState`] as JSON under fixed keys.
pub struct GameStore<S> {
    inner: S,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Loads the stored state, falling back to a fresh game on any problem.
    pub fn load(&self) -> GameState {
        match self.try_load() {
            Ok(Some(state)) => {
                debug!(
                    "Loaded {} board(s) at step {}",
                    state.history().len(),
                    state.current_step()
                );
                state
            }
            Ok(None) => {
                debug!("No stored game, starting fresh");
                GameState::new()
            }
            Err(e) => {
                warn!("Discarding stored game: {:#}", e);
                GameState::new()
            }
        }
    }

    fn try_load(&self) -> Result<Option<GameState>> {
        let Some(boards_json) = self.inner.get(BOARDS_KEY)? else {
            return Ok(None);
        };
        let history: Vec<Board> =
            serde_json::from_str(&boards_json).context("malformed board history")?;

        let step = match self.inner.get(STEP_KEY)? {
            Some(step_json) => {
                serde_json::from_str::<usize>(&step_json).context("malformed current step")?
            }
            None => history.len().saturating_sub(1),
        };

        let len = history.len();
        GameState::from_parts(history, step)
            .map(Some)
            .with_context(|| format!("step {} is outside a history of {} board(s)", step, len))
    }

    pub fn save_history(&mut self, state: &GameState) -> Result<()> {
        let json = serde_json::to_string(state.history()).context("failed to encode history")?;
        self.inner.set(BOARDS_KEY, &json)
    }

    pub fn save_step(&mut self, state: &GameState) -> Result<()> {
        let json =
            serde_json::to_string(&state.current_step()).context("failed to encode step")?;
        self.inner.set(STEP_KEY, &json)
    }

    pub fn save(&mut self, state: &GameState) -> Result<()> {
        self.save_history(state)?;
        self.save_step(state)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.inner.clear()
    }
}
