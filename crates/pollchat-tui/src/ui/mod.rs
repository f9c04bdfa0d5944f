//! TUI layout compositing — assembles all UI panels.

mod compose;
mod feed;
mod hint;

use ratatui::prelude::*;

use crate::app::App;

/// Render the full TUI layout.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // ┌──────────────────────────────────┐
    // │ Messages                         │
    // │                                  │
    // ├───────────┬──────────────────────┤
    // │ Name      │ Message              │
    // ├───────────┴──────────────────────┤
    // │ Hint bar                         │
    // └──────────────────────────────────┘

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // feed
            Constraint::Length(3), // compose
            Constraint::Length(1), // hint
        ])
        .split(area);

    feed::draw(frame, app, main_layout[0]);
    compose::draw(frame, app, main_layout[1]);
    hint::draw(frame, main_layout[2]);
}
