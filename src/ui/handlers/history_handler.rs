//! History panel navigation.

use crate::persistence::KeyValueStore;

use super::super::app::App;

/// Helper struct for selecting and jumping between history entries.
pub struct HistoryHandler<'a, S> {
    app: &'a mut App<S>,
}

impl<'a, S: KeyValueStore> HistoryHandler<'a, S> {
    pub fn new(app: &'a mut App<S>) -> Self {
        Self { app }
    }

    fn last_index(&self) -> usize {
        self.app.session.state().history().len() - 1
    }

    pub fn select_prev(&mut self) {
        self.app.history_selected = self.app.history_selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.app.history_selected = (self.app.history_selected + 1).min(self.last_index());
    }

    pub fn select_first(&mut self) {
        self.app.history_selected = 0;
    }

    pub fn select_last(&mut self) {
        self.app.history_selected = self.last_index();
    }

    /// Jump to the highlighted entry. The current entry is inert.
    pub fn jump_to_selected(&mut self) {
        let step = self.app.history_selected;
        if step == self.app.session.state().current_step() {
            return;
        }
        self.jump(step);
    }

    pub fn step_back(&mut self) {
        let current = self.app.session.state().current_step();
        if current > 0 {
            self.jump(current - 1);
        }
    }

    pub fn step_forward(&mut self) {
        let current = self.app.session.state().current_step();
        if current < self.last_index() {
            self.jump(current + 1);
        }
    }

    fn jump(&mut self, step: usize) {
        match self.app.session.jump_to_step(step) {
            Ok(true) => {
                self.app.history_selected = step;
                let label = if step == 0 {
                    "game start".to_string()
                } else {
                    format!("move #{}", step)
                };
                self.app.log(format!(
                    "Viewing {} | {}",
                    label,
                    self.app.session.state().status()
                ));
            }
            Ok(false) => {}
            Err(e) => {
                self.app.history_selected = self.app.session.state().current_step();
                self.app.log(format!("Error: {:#}", e));
            }
        }
    }
}
