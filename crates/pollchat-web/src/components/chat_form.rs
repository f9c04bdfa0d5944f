//! Chat form component — name + text inputs, submit posts then re-polls.

use dioxus::prelude::*;

use pollchat_core::draft::Draft;
use pollchat_core::types::{MAX_NAME_CHARS, MAX_TEXT_CHARS};

use crate::api;
use crate::poll::{self, SharedRenderer};

pub fn ChatForm() -> Element {
    let renderer = use_context::<SharedRenderer>();
    let mut name = use_signal(String::new);
    let mut text = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(msg) = Draft::new(name(), text()).ready() else {
            return;
        };
        let renderer = renderer.clone();
        spawn(async move {
            match api::post_message(&msg).await {
                Ok(()) => {
                    text.set(String::new());
                    poll::poll_cycle(renderer).await;
                }
                // No retry: the message shows up on a later poll only if the server kept it.
                Err(e) => tracing::debug!("submit failed: {}", e),
            }
        });
    };

    rsx! {
        form { id: "chat-form", onsubmit: submit,
            input {
                id: "name",
                r#type: "text",
                placeholder: "Name",
                maxlength: MAX_NAME_CHARS as i64,
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }
            input {
                id: "text",
                r#type: "text",
                placeholder: "Say something...",
                maxlength: MAX_TEXT_CHARS as i64,
                value: "{text}",
                oninput: move |e| text.set(e.value()),
            }
            button { r#type: "submit", "Send" }
        }
    }
}
