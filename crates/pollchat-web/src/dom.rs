//! DOM-backed message list — escaped markup into a container element.

use pollchat_core::render::list_markup;
use pollchat_core::types::Message;
use pollchat_core::view::MessageView;

pub struct DomView {
    element_id: &'static str,
    time_format: String,
}

impl DomView {
    pub fn new(element_id: &'static str, time_format: impl Into<String>) -> Self {
        Self {
            element_id,
            time_format: time_format.into(),
        }
    }

    fn element(&self) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(self.element_id)
    }
}

impl MessageView for DomView {
    fn rebuild(&mut self, messages: &[Message]) {
        if let Some(el) = self.element() {
            el.set_inner_html(&list_markup(messages, &self.time_format));
        }
    }

    fn scroll_to_bottom(&mut self) {
        if let Some(el) = self.element() {
            el.set_scroll_top(el.scroll_height());
        }
    }
}
