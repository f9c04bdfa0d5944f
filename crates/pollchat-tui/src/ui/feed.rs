//! Scrollable message feed, newest at the bottom.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Messages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.feed.is_empty() {
        let empty = Paragraph::new("No messages yet.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Bottom-up window with scroll offset
    let visible_height = inner.height as usize;
    let total = app.feed.len();
    let end = total.saturating_sub(app.scroll_offset);
    let start = end.saturating_sub(visible_height);

    let lines: Vec<Line> = app.feed[start..end]
        .iter()
        .map(|msg| {
            Line::from(vec![
                Span::styled(format!("{} ", msg.time), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    msg.name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::raw(msg.text.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
