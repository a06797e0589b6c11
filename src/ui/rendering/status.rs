use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{game::Status, persistence::KeyValueStore, ui::app::App};

impl<S: KeyValueStore> App<S> {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let status = self.session.state().status();

        let style = match status {
            Status::Winner(_) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Status::NextPlayer(_) => Style::default().fg(Color::White),
        };

        f.render_widget(
            Paragraph::new(status.to_string())
                .style(style)
                .block(Block::default().borders(Borders::ALL).title("Status")),
            area,
        );
    }

    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("1-9: place mark | arrows/hjkl: move cursor"),
            Line::from("Enter/Space: place or jump | Tab: switch panel"),
            Line::from("[ ]: step back/forward | r: reset | q: quit"),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Keys")),
            area,
        );
    }
}
