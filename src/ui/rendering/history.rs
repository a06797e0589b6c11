//! Move history panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::{
    persistence::KeyValueStore,
    ui::{app::App, types::Focus},
};

impl<S: KeyValueStore> App<S> {
    pub(in crate::ui) fn draw_history(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .session
            .state()
            .history_entries()
            .iter()
            .map(|entry| {
                // The current entry is shown disabled.
                let style = if entry.is_current {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                ListItem::new(entry.label()).style(style)
            })
            .collect();

        let selected = if self.focus == Focus::History {
            self.history_selected
        } else {
            self.session.state().current_step()
        };
        let mut state = ListState::default().with_selected(Some(selected));

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.panel_style(Focus::History))
                    .title("History"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut state);
    }
}
