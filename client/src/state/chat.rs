//! Pending chat transcript for the AI assistant widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard's chat widget owns one [`ChatTranscript`] while it is open.
//! Nothing here is persisted; closing the widget drops the transcript.
//!
//! DESIGN
//! ======
//! The transcript is append-only. A send is split into [`ChatTranscript::begin`]
//! (records the user's entry and marks a reply pending) and
//! [`ChatTranscript::settle`] (records exactly one assistant entry for the
//! outcome), so the entry order always matches the order of user actions.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::{GatewayError, NETWORK_FALLBACK_MESSAGE};
use crate::net::types::ChatReply;

pub const GREETING: &str = "Hello! I'm your AI finance assistant. Ask me anything about your expenses!";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const RATE_LIMIT_FALLBACK_MESSAGE: &str = "You have reached your daily chat limit. Upgrade for more.";

/// Who wrote an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// One line of the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub origin: Origin,
    pub text: String,
    /// Render an upgrade call to action under this entry.
    pub upgrade_prompt: bool,
}

impl ChatEntry {
    fn user(text: String) -> Self {
        Self { origin: Origin::User, text, upgrade_prompt: false }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self { origin: Origin::Assistant, text: text.into(), upgrade_prompt: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    pending: bool,
    remaining_chats: Option<i64>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self { entries: vec![ChatEntry::assistant(GREETING)], pending: false, remaining_chats: None }
    }
}

impl ChatTranscript {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Daily quota left, as last reported by the backend.
    pub fn remaining_chats(&self) -> Option<i64> {
        self.remaining_chats
    }

    /// Record the user's query and mark a reply pending.
    ///
    /// Returns the trimmed query to send, or `None` when it is blank or a reply
    /// is already pending; in that case nothing is appended.
    pub fn begin(&mut self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() || self.pending {
            return None;
        }
        self.entries.push(ChatEntry::user(query.to_owned()));
        self.pending = true;
        Some(query.to_owned())
    }

    /// Append the assistant entry for a finished call and clear the pending
    /// flag.
    pub fn settle(&mut self, result: Result<ChatReply, GatewayError>) {
        self.pending = false;
        let entry = match result {
            Ok(reply) => {
                if reply.remaining_chats.is_some() {
                    self.remaining_chats = reply.remaining_chats;
                }
                ChatEntry::assistant(reply.response)
            }
            Err(err @ GatewayError::RateLimited { .. }) => {
                log::warn!("chat: {err}");
                self.remaining_chats = Some(0);
                ChatEntry {
                    origin: Origin::Assistant,
                    text: err.user_message(RATE_LIMIT_FALLBACK_MESSAGE),
                    upgrade_prompt: true,
                }
            }
            Err(GatewayError::Network(err)) => {
                log::warn!("chat: backend unreachable: {err}");
                ChatEntry::assistant(NETWORK_FALLBACK_MESSAGE)
            }
            Err(err) => {
                log::warn!("chat: request failed: {err}");
                ChatEntry::assistant(GENERIC_FAILURE_MESSAGE)
            }
        };
        self.entries.push(entry);
    }
}
