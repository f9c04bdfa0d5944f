//! Key hint bar.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn draw(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(" Enter ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" send  "),
        Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
        Span::raw(" switch field  "),
        Span::styled(" PgUp/PgDn ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
        Span::raw(" scroll  "),
        Span::styled(" Ctrl+C ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
        Span::raw(" quit"),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
