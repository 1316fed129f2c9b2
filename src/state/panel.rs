//! Per-panel conversation state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Transcript` is the view model the message list renders: messages only
//! ever get appended, and the one placeholder is removed by id rather than
//! edited. `PanelState` adds the input draft, the model choice and the
//! in-flight flag that the submission controller toggles.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use std::fmt;

/// Handle to a rendered message, returned by [`Transcript::append`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(uuid::Uuid);

impl MessageId {
    fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS modifier on `.chat-message`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Label shown above the bubble.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "나",
            Role::Assistant => "AI",
        }
    }
}

/// Visual treatment of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    /// The transient "thinking" placeholder.
    Loading,
    Error,
}

/// One rendered chat bubble. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub meta: Option<String>,
    pub tone: Tone,
}

impl ChatMessage {
    /// Space-separated classes for the outer `.chat-message` element.
    pub fn css_class(&self) -> String {
        match self.tone {
            Tone::Normal => format!("chat-message {}", self.role.as_str()),
            Tone::Loading => format!("chat-message {} loading", self.role.as_str()),
            Tone::Error => format!("chat-message {} error", self.role.as_str()),
        }
    }
}

/// Ordered message list for one chat window. Order is chronological.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Append a message and return its handle.
    pub fn append(&mut self, role: Role, text: impl Into<String>, meta: Option<String>, tone: Tone) -> MessageId {
        let id = MessageId::new();
        self.messages.push(ChatMessage { id, role, text: text.into(), meta, tone });
        id
    }

    /// Remove the message with `id`. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

/// State owned by one assistant panel.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub transcript: Transcript,
    /// Current contents of the question input.
    pub draft: String,
    /// Selected model id; empty when the server default is selected.
    pub model: String,
    /// True from submission start until the request settles. Also disables
    /// the send button and the input.
    pub in_flight: bool,
}

impl PanelState {
    /// Selected model, or `None` when the server should pick.
    pub fn model_choice(&self) -> Option<String> {
        (!self.model.is_empty()).then(|| self.model.clone())
    }
}
