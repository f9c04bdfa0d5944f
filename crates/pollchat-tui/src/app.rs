//! App state, feed updates, compose form.

use tokio::sync::mpsc::UnboundedSender;

use pollchat_core::draft::Draft;
use pollchat_core::render::local_time_of_day;
use pollchat_core::types::Message;
use pollchat_core::view::MessageView;

/// One rendered message in the feed.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedLine {
    pub time: String,
    pub name: String,
    pub text: String,
}

/// Sent from the session (poller or submit task) to the draw loop.
#[derive(Debug, PartialEq)]
pub enum UiEvent {
    Rebuilt(Vec<FeedLine>),
    PinToBottom,
    ClearText,
}

/// The session's view: formats lines and hands them to the draw loop.
pub struct FeedView {
    tx: UnboundedSender<UiEvent>,
    time_format: String,
}

impl FeedView {
    pub fn new(tx: UnboundedSender<UiEvent>, time_format: impl Into<String>) -> Self {
        Self {
            tx,
            time_format: time_format.into(),
        }
    }
}

impl MessageView for FeedView {
    fn rebuild(&mut self, messages: &[Message]) {
        let lines = messages
            .iter()
            .map(|m| FeedLine {
                time: local_time_of_day(m.timestamp, &self.time_format),
                name: m.name.clone(),
                text: m.text.clone(),
            })
            .collect();
        let _ = self.tx.send(UiEvent::Rebuilt(lines));
    }

    fn scroll_to_bottom(&mut self) {
        let _ = self.tx.send(UiEvent::PinToBottom);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Text,
}

/// The main application state.
pub struct App {
    pub feed: Vec<FeedLine>,
    /// Lines scrolled up from the bottom; 0 is pinned.
    pub scroll_offset: usize,
    pub draft: Draft,
    pub focus: Field,
    pub should_quit: bool,
}

impl App {
    pub fn new(default_name: Option<String>) -> Self {
        let focus = if default_name.is_some() {
            Field::Text
        } else {
            Field::Name
        };
        App {
            feed: Vec::new(),
            scroll_offset: 0,
            draft: Draft::new(default_name.unwrap_or_default(), ""),
            focus,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Rebuilt(lines) => self.feed = lines,
            UiEvent::PinToBottom => self.scroll_offset = 0,
            UiEvent::ClearText => self.draft.clear_text(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Text,
            Field::Text => Field::Name,
        };
    }

    pub fn type_char(&mut self, ch: char) {
        match self.focus {
            Field::Name => self.draft.push_name(ch),
            Field::Text => self.draft.push_text(ch),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Name => self.draft.name.pop(),
            Field::Text => self.draft.text.pop(),
        };
    }

    pub fn scroll_up(&mut self) {
        let max = self.feed.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(3).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn msg(id: u64, name: &str, text: &str) -> Message {
        Message {
            id,
            name: name.into(),
            text: text.into(),
            timestamp: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_feed_view_forwards_rebuild_and_pin() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut view = FeedView::new(tx, "%H");
        view.rebuild(&[msg(1, "Ann", "hi")]);
        view.scroll_to_bottom();

        match rx.try_recv().unwrap() {
            UiEvent::Rebuilt(lines) => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].name, "Ann");
                assert_eq!(lines[0].text, "hi");
                assert_eq!(lines[0].time.len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(rx.try_recv().unwrap(), UiEvent::PinToBottom);
    }

    #[test]
    fn test_events_update_app() {
        let mut app = App::new(Some("Bob".into()));
        app.scroll_offset = 6;
        app.draft.text = "yo".into();

        app.handle_event(UiEvent::Rebuilt(vec![FeedLine {
            time: "1:00:00".into(),
            name: "Bob".into(),
            text: "yo".into(),
        }]));
        app.handle_event(UiEvent::PinToBottom);
        app.handle_event(UiEvent::ClearText);

        assert_eq!(app.feed.len(), 1);
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(app.draft.text, "");
        assert_eq!(app.draft.name, "Bob");
    }

    #[test]
    fn test_typing_follows_focus() {
        let mut app = App::new(None);
        assert_eq!(app.focus, Field::Name);
        app.type_char('A');
        app.toggle_focus();
        app.type_char('h');
        app.type_char('i');
        app.backspace();
        assert_eq!(app.draft, Draft::new("A", "h"));
    }
}
