mod board;
mod history;
mod logs;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use crate::{
    persistence::KeyValueStore,
    ui::{app::App, types::Focus},
};

impl<S: KeyValueStore> App<S> {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(5),
            ])
            .split(main_layout[0]);

        let right_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(8), // logs panel
            ])
            .split(main_layout[1]);

        self.draw_status(f, left_layout[0]);
        self.draw_board(f, left_layout[1]);
        self.draw_help(f, left_layout[2]);
        self.draw_history(f, right_layout[0]);
        self.draw_logs(f, right_layout[1]);
    }

    /// Border style for a panel, highlighted while it has focus.
    pub(in crate::ui) fn panel_style(&self, panel: Focus) -> Style {
        if self.focus == panel {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }
}
