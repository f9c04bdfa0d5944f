//! Chat session — poll cycle, render step and submit, sharing one render cursor.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::client::ChatClient;
use crate::draft::Draft;
use crate::error::ChatError;
use crate::poller::Poller;
use crate::types::Message;
use crate::view::{MessageView, RenderOutcome, Renderer};

/// Result of one GET-and-conditionally-render iteration.
#[derive(Debug)]
pub enum PollOutcome {
    /// New messages arrived; the view was rebuilt up to `last_id`.
    Rendered { last_id: u64 },
    /// Same last id as already shown; nothing touched.
    Unchanged,
    /// Fetch failed. Ignored; the next tick is the retry.
    Skipped(ChatError),
}

/// Result of a form submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Name or text blank after trimming. No request was made.
    Rejected,
    /// Server accepted the post; carries the follow-up poll.
    Sent(PollOutcome),
    /// Post failed. Nothing is retried or shown.
    Failed(ChatError),
}

/// One client instance: an HTTP client plus the view it renders into.
pub struct ChatSession<V> {
    client: ChatClient,
    renderer: Mutex<Renderer<V>>,
}

impl<V: MessageView + Send> ChatSession<V> {
    pub fn new(client: ChatClient, view: V) -> Self {
        Self {
            client,
            renderer: Mutex::new(Renderer::new(view)),
        }
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    /// The renderer, for inspecting the view and cursor.
    pub fn renderer(&self) -> &Mutex<Renderer<V>> {
        &self.renderer
    }

    pub async fn latest_rendered_id(&self) -> u64 {
        self.renderer.lock().await.latest_rendered_id()
    }

    /// Fetch the list and render it if the last id moved.
    pub async fn poll_cycle(&self) -> PollOutcome {
        let messages = match self.client.fetch_messages().await {
            Ok(messages) => messages,
            Err(e) => {
                // Silent by contract: no banner, no reschedule.
                debug!("poll skipped: {}", e);
                return PollOutcome::Skipped(e);
            }
        };

        match self.render(&messages).await {
            RenderOutcome::Unchanged => PollOutcome::Unchanged,
            RenderOutcome::Rebuilt { last_id } => {
                debug!("rendered {} message(s), last id {}", messages.len(), last_id);
                PollOutcome::Rendered { last_id }
            }
        }
    }

    /// Render step. The lock is never held across a network call.
    pub async fn render(&self, messages: &[Message]) -> RenderOutcome {
        self.renderer.lock().await.render(messages)
    }

    /// Post the draft. On success `clear_text` runs, then one poll cycle so the
    /// sender sees their own message without waiting for the timer.
    pub async fn submit<F: FnOnce()>(&self, draft: &Draft, clear_text: F) -> SubmitOutcome {
        let Some(msg) = draft.ready() else {
            return SubmitOutcome::Rejected;
        };

        if let Err(e) = self.client.post_message(&msg).await {
            // Known limitation: a failed post is lost unless the user resends.
            debug!("submit failed: {}", e);
            return SubmitOutcome::Failed(e);
        }

        clear_text();
        SubmitOutcome::Sent(self.poll_cycle().await)
    }
}

impl<V: MessageView + Send + 'static> ChatSession<V> {
    /// Start the repeating poll task. The first cycle runs immediately.
    pub fn start_polling(self: &Arc<Self>, every: Duration) -> Poller {
        info!(
            "polling {} every {}ms",
            self.client.messages_url(),
            every.as_millis()
        );
        let session = Arc::clone(self);
        Poller::spawn(every, move || {
            let session = Arc::clone(&session);
            async move {
                session.poll_cycle().await;
            }
        })
    }
}
