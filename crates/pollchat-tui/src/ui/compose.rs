//! Compose form — name and message fields side by side.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Field};

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // name
            Constraint::Min(20),    // text
        ])
        .split(area);

    let fields = [
        (Field::Name, " Name ", app.draft.name.as_str(), layout[0]),
        (Field::Text, " Message ", app.draft.text.as_str(), layout[1]),
    ];

    for (field, title, value, rect) in fields {
        let focused = app.focus == field;
        let block = field_block(title, focused);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        // Keep the tail visible when the text outgrows the box
        let width = inner.width as usize;
        let len = value.chars().count();
        let visible: String = value.chars().skip(len.saturating_sub(width.saturating_sub(1))).collect();
        frame.render_widget(
            Paragraph::new(visible.as_str()).style(Style::default().fg(Color::White)),
            inner,
        );

        if focused {
            frame.set_cursor_position(Position::new(
                inner.x + visible.chars().count() as u16,
                inner.y,
            ));
        }
    }
}
