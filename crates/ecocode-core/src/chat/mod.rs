//! Chat session with a simulated assistant
//!
//! Sending appends the user message immediately and schedules one canned
//! assistant reply. Copying a message writes it to the [`Clipboard`] and shows a
//! per-message "copied" indicator for a fixed time.

use crate::config::WorkbenchConfig;
use crate::error::Result;
use crate::timer::TimerScope;
use crate::types::{Message, Sender};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

/// Id of the assistant greeting present in every new session
pub const WELCOME_MESSAGE_ID: &str = "1";

/// System clipboard collaborator
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug)]
enum ChatEvent {
    AssistantReply,
    CopyExpired { id: String, generation: u64 },
}

/// Message history, composing buffer and copy indicators
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    canned_reply: String,
    reply_delay: std::time::Duration,
    copy_indicator: std::time::Duration,
    clipboard: Arc<dyn Clipboard>,
    /// Copied message id -> generation of its latest copy
    copied: HashMap<String, u64>,
    copy_generation: u64,
    replies_due: usize,
    timers: TimerScope<ChatEvent>,
}

impl ChatSession {
    pub fn new(config: &WorkbenchConfig, runtime: Handle, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            messages: vec![Message::with_id(
                WELCOME_MESSAGE_ID,
                config.welcome_message.clone(),
                Sender::Assistant,
            )],
            input: String::new(),
            canned_reply: config.canned_reply.clone(),
            reply_delay: config.reply_delay(),
            copy_indicator: config.copy_indicator(),
            clipboard,
            copied: HashMap::new(),
            copy_generation: 0,
            replies_due: 0,
            timers: TimerScope::new("chat", runtime),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Whether the composing buffer holds anything to send
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Number of assistant replies still on their way
    pub fn pending_replies(&self) -> usize {
        self.replies_due
    }

    /// Send the composing buffer.
    ///
    /// Blank input is ignored. Otherwise the user message is appended, the
    /// buffer cleared and one assistant reply scheduled.
    pub fn send(&mut self) -> Option<&Message> {
        if !self.can_send() {
            return None;
        }

        let content = std::mem::take(&mut self.input);
        info!("Sending chat message ({} chars)", content.len());
        self.messages.push(Message::user(content));
        self.timers.schedule(self.reply_delay, ChatEvent::AssistantReply);
        self.replies_due += 1;

        self.messages.last()
    }

    /// Copy a message to the clipboard and flag it as copied.
    ///
    /// Returns `Ok(false)` if no message has this id.
    pub fn copy(&mut self, id: &str) -> Result<bool> {
        let Some(message) = self.messages.iter().find(|m| m.id == id) else {
            return Ok(false);
        };
        self.clipboard.write_text(&message.content)?;

        self.copy_generation += 1;
        let generation = self.copy_generation;
        self.copied.insert(id.to_string(), generation);
        self.timers.schedule(
            self.copy_indicator,
            ChatEvent::CopyExpired {
                id: id.to_string(),
                generation,
            },
        );
        debug!("Copied message {}", id);
        Ok(true)
    }

    /// Whether the copy indicator is showing for `id`
    pub fn is_copied(&self, id: &str) -> bool {
        self.copied.contains_key(id)
    }

    /// Apply fired timers. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for event in self.timers.drain() {
            match event {
                ChatEvent::AssistantReply => {
                    self.replies_due = self.replies_due.saturating_sub(1);
                    self.messages.push(Message::assistant(self.canned_reply.clone()));
                    changed = true;
                }
                ChatEvent::CopyExpired { id, generation } => {
                    // A newer copy of the same message keeps its own window
                    if self.copied.get(&id) == Some(&generation) {
                        self.copied.remove(&id);
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    /// Drop scheduled replies and indicators
    pub fn cancel_pending(&mut self) {
        self.timers.cancel_all();
        self.copied.clear();
        self.replies_due = 0;
    }
}
