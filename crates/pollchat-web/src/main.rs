//! pollchat WASM frontend — Dioxus app root.

mod api;
mod components;
mod dom;
mod poll;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Interval;

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    let renderer = use_context_provider(poll::shared_renderer);
    let timer = use_hook(|| Rc::new(RefCell::new(None::<Interval>)));

    // Start polling once the message container is mounted
    {
        let timer = timer.clone();
        use_effect(move || {
            *timer.borrow_mut() = Some(poll::start(renderer.clone()));
        });
    }

    use_drop(move || {
        timer.borrow_mut().take();
    });

    rsx! {
        div { id: "main",
            components::chat_feed::ChatFeed {}
            components::chat_form::ChatForm {}
        }
    }
}
