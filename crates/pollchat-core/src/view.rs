//! Render step — the render cursor and the view it rebuilds.

use crate::types::{last_id, Message};

/// A scrolling message list that can only be rebuilt wholesale.
pub trait MessageView {
    /// Replace everything shown with `messages`, oldest first.
    fn rebuild(&mut self, messages: &[Message]);

    /// Pin the list to its maximum scroll offset.
    fn scroll_to_bottom(&mut self);
}

/// What a render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Last id matched the cursor; the view was not touched.
    Unchanged,
    /// The view was rebuilt and the cursor moved to `last_id`.
    Rebuilt { last_id: u64 },
}

/// Owns a view and the id of the last message rendered into it.
pub struct Renderer<V> {
    view: V,
    latest_rendered_id: u64,
}

impl<V: MessageView> Renderer<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            latest_rendered_id: 0,
        }
    }

    pub fn latest_rendered_id(&self) -> u64 {
        self.latest_rendered_id
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Rebuild the view only when the newest id differs from the cursor.
    ///
    /// Ids are server-assigned and increasing, so a changed last id means new
    /// messages. An empty list has last id 0 and never rebuilds a fresh view.
    pub fn render(&mut self, messages: &[Message]) -> RenderOutcome {
        let current = last_id(messages);
        if current == self.latest_rendered_id {
            return RenderOutcome::Unchanged;
        }

        self.view.rebuild(messages);
        self.view.scroll_to_bottom();
        self.latest_rendered_id = current;
        RenderOutcome::Rebuilt { last_id: current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every mutation so tests can count rebuilds.
    #[derive(Default)]
    struct CountingView {
        rebuilds: usize,
        scrolls: usize,
        shown: Vec<u64>,
        pinned: bool,
    }

    impl MessageView for CountingView {
        fn rebuild(&mut self, messages: &[Message]) {
            self.rebuilds += 1;
            self.pinned = false;
            self.shown = messages.iter().map(|m| m.id).collect();
        }

        fn scroll_to_bottom(&mut self) {
            self.scrolls += 1;
            self.pinned = true;
        }
    }

    fn msg(id: u64) -> Message {
        Message {
            id,
            name: "Ann".into(),
            text: format!("message {}", id),
            timestamp: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_empty_list_leaves_cursor_at_zero() {
        let mut renderer = Renderer::new(CountingView::default());
        assert_eq!(renderer.render(&[]), RenderOutcome::Unchanged);
        assert_eq!(renderer.latest_rendered_id(), 0);
        assert_eq!(renderer.view().rebuilds, 0);
    }

    #[test]
    fn test_first_message_renders_once() {
        let mut renderer = Renderer::new(CountingView::default());
        let list = vec![msg(1)];

        assert_eq!(renderer.render(&list), RenderOutcome::Rebuilt { last_id: 1 });
        assert_eq!(renderer.render(&list), RenderOutcome::Unchanged);

        assert_eq!(renderer.latest_rendered_id(), 1);
        assert_eq!(renderer.view().rebuilds, 1);
        assert_eq!(renderer.view().shown, vec![1]);
    }

    #[test]
    fn test_rebuild_then_scroll() {
        let mut renderer = Renderer::new(CountingView::default());
        renderer.render(&[msg(1), msg(2)]);
        assert!(renderer.view().pinned);
        assert_eq!(renderer.view().scrolls, 1);
    }

    #[test]
    fn test_cursor_never_decreases_with_growing_lists() {
        let mut renderer = Renderer::new(CountingView::default());
        let mut list = Vec::new();
        let mut previous = 0;
        for id in 1..=5 {
            list.push(msg(id));
            renderer.render(&list);
            renderer.render(&list);
            assert!(renderer.latest_rendered_id() >= previous);
            previous = renderer.latest_rendered_id();
        }
        assert_eq!(previous, 5);
        assert_eq!(renderer.view().rebuilds, 5);
    }

    #[test]
    fn test_full_rebuild_shows_whole_list() {
        let mut renderer = Renderer::new(CountingView::default());
        renderer.render(&[msg(1)]);
        renderer.render(&[msg(1), msg(2), msg(3)]);
        assert_eq!(renderer.view().shown, vec![1, 2, 3]);
    }
}
