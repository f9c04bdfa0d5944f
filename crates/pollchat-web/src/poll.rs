//! Poll cycle and its repeating timer on the browser event loop.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use pollchat_core::render::DEFAULT_TIME_FORMAT;
use pollchat_core::view::Renderer;

use crate::api;
use crate::dom::DomView;

pub const MESSAGES_ELEMENT_ID: &str = "messages";
pub const POLL_INTERVAL_MS: u32 = 1000;

/// Render cursor + DOM view, shared by the timer and the form.
pub type SharedRenderer = Rc<RefCell<Renderer<DomView>>>;

pub fn shared_renderer() -> SharedRenderer {
    Rc::new(RefCell::new(Renderer::new(DomView::new(
        MESSAGES_ELEMENT_ID,
        DEFAULT_TIME_FORMAT,
    ))))
}

pub async fn poll_cycle(renderer: SharedRenderer) {
    match api::fetch_messages().await {
        Ok(messages) => {
            renderer.borrow_mut().render(&messages);
        }
        // Intermittent failures are ignored; the next tick tries again.
        Err(e) => tracing::debug!("poll skipped: {}", e),
    }
}

/// Poll now, then every second. Dropping the returned timer stops it.
pub fn start(renderer: SharedRenderer) -> Interval {
    spawn_local(poll_cycle(renderer.clone()));
    Interval::new(POLL_INTERVAL_MS, move || {
        spawn_local(poll_cycle(renderer.clone()));
    })
}
