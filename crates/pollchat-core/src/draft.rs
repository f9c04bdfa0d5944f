//! Compose form state — what the user has typed but not yet sent.

use crate::types::{NewMessage, MAX_NAME_CHARS, MAX_TEXT_CHARS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub text: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Trimmed message, or `None` when either field is blank.
    pub fn ready(&self) -> Option<NewMessage> {
        let name = self.name.trim();
        let text = self.text.trim();
        if name.is_empty() || text.is_empty() {
            return None;
        }
        Some(NewMessage {
            name: name.to_string(),
            text: text.to_string(),
        })
    }

    /// Append to the name, stopping at the server's limit.
    pub fn push_name(&mut self, ch: char) {
        if self.name.chars().count() < MAX_NAME_CHARS {
            self.name.push(ch);
        }
    }

    /// Append to the text, stopping at the server's limit.
    pub fn push_text(&mut self, ch: char) {
        if self.text.chars().count() < MAX_TEXT_CHARS {
            self.text.push(ch);
        }
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
    }
}
