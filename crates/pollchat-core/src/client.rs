//! HTTP calls to the chat server — one GET and one POST on `/api/messages`.

use reqwest::Client;

use crate::config::Config;
use crate::error::ChatError;
use crate::types::{Message, MessageList, NewMessage};

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    messages_url: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Result<Self, ChatError> {
        let mut builder = Client::builder().user_agent("pollchat/0.1");
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            messages_url: config.messages_url(),
        })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// Fetch the full message list, oldest first.
    pub async fn fetch_messages(&self) -> Result<Vec<Message>, ChatError> {
        let resp = self.http.get(&self.messages_url).send().await?;
        if !resp.status().is_success() {
            return Err(ChatError::Status(resp.status()));
        }
        let body = resp.bytes().await?;
        let list: MessageList = serde_json::from_slice(&body)?;
        Ok(list.into_messages())
    }

    /// Post a message. Any 2xx counts as accepted.
    pub async fn post_message(&self, msg: &NewMessage) -> Result<(), ChatError> {
        // `json` sets Content-Type: application/json
        let resp = self.http.post(&self.messages_url).json(msg).send().await?;
        if !resp.status().is_success() {
            return Err(ChatError::Status(resp.status()));
        }
        Ok(())
    }
}
