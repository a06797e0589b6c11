//! A game state paired with the store that persists it.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
    game::{GameState, MoveOutcome},
    persistence::{GameStore, KeyValueStore},
};

/// Owns the live [`GameState`] and writes every change through to storage.
pub struct GameSession<S> {
    state: GameState,
    store: GameStore<S>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Opens a session from whatever the store holds, or a fresh game.
    pub fn open(store: S) -> Self {
        let store = GameStore::new(store);
        let state = store.load();
        info!(
            "Session opened at step {} of {}",
            state.current_step(),
            state.history().len() - 1
        );
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome> {
        let outcome = self.state.apply_move(cell);

        match outcome {
            MoveOutcome::Applied { mark, step } => {
                info!("{} played cell {} (step {})", mark, cell, step);
                self.store
                    .save(&self.state)
                    .context("failed to persist move")?;
            }
            MoveOutcome::GameOver(winner) => {
                debug!("Ignoring cell {}: {} already won", cell, winner);
            }
            MoveOutcome::Occupied => {
                debug!("Ignoring cell {}: occupied", cell);
            }
            MoveOutcome::OutOfRange => {
                warn!("Ignoring cell {}: not on the board", cell);
            }
        }

        Ok(outcome)
    }

    pub fn jump_to_step(&mut self, step: usize) -> Result<bool> {
        if !self.state.jump_to(step) {
            warn!(
                "Ignoring jump to step {}: history has {} board(s)",
                step,
                self.state.history().len()
            );
            return Ok(false);
        }

        info!("Jumped to step {}", step);
        self.store
            .save_step(&self.state)
            .context("failed to persist step")?;
        Ok(true)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.state.reset();
        info!("Game reset");
        self.store.clear().context("failed to clear stored game")
    }
}
