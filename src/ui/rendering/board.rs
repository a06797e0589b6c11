//! 3x3 grid rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    board::{Mark, winning_line},
    persistence::KeyValueStore,
    ui::{app::App, types::Focus},
};

const ROW_SEPARATOR: &str = "───┼───┼───";

impl<S: KeyValueStore> App<S> {
    pub(in crate::ui) fn draw_board(&self, f: &mut Frame, area: Rect) {
        let board = self.session.state().current_board();
        let winning = winning_line(board);

        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(Line::from(Span::styled(
                    ROW_SEPARATOR,
                    Style::default().fg(Color::DarkGray),
                )));
            }

            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }

                let cell = row * 3 + col;
                let (text, mut style) = match board.get(cell) {
                    Some(Mark::X) => ("X".to_string(), Style::default().fg(Color::Cyan)),
                    Some(Mark::O) => ("O".to_string(), Style::default().fg(Color::Magenta)),
                    None => ((cell + 1).to_string(), Style::default().fg(Color::DarkGray)),
                };

                if winning.is_some_and(|line| line.contains(&cell)) {
                    style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                }
                if self.focus == Focus::Board && self.cursor == cell {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                spans.push(Span::styled(format!(" {} ", text), style));
            }
            lines.push(Line::from(spans));
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.panel_style(Focus::Board))
                    .title("Board"),
            ),
            area,
        );
    }
}
