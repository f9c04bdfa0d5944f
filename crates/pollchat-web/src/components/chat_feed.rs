//! Chat feed component — the container the poll cycle renders into.
//!
//! Children are written as escaped markup by `DomView`, never by Dioxus, so
//! the element stays empty in the virtual DOM.

use dioxus::prelude::*;

use crate::poll::MESSAGES_ELEMENT_ID;

pub fn ChatFeed() -> Element {
    rsx! {
        div { id: MESSAGES_ELEMENT_ID, class: "messages" }
    }
}
