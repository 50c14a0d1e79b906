//! Conversation panel: one send/response cycle per user submission.

use crate::endpoint::{ChatEndpoint, ChatError, ChatResult, EndpointReply};
use crate::types::ChatMessage;

/// Text shown when the endpoint could not be reached or replied with garbage.
pub const NETWORK_ERROR_TEXT: &str = "Network error occurred.";
pub const ERROR_PREFIX: &str = "Error: ";

/// The display side of the panel: input field, send control, message list.
pub trait ConversationSurface {
    fn input_text(&self) -> String;
    fn clear_input(&mut self);
    /// Disables (or re-enables) both the input field and the send control.
    fn set_busy(&mut self, busy: bool);
    fn focus_input(&mut self);
    fn append_message(&mut self, message: ChatMessage);
    fn scroll_to_bottom(&mut self);
}

/// How a send settled.
#[derive(Debug)]
pub enum ChatOutcome {
    Replied(String),
    Rejected(String),
    Failed(ChatError),
}

impl From<ChatResult<EndpointReply>> for ChatOutcome {
    fn from(result: ChatResult<EndpointReply>) -> Self {
        match result {
            Ok(EndpointReply::Response(text)) => ChatOutcome::Replied(text),
            Ok(EndpointReply::Error(error)) => ChatOutcome::Rejected(error),
            Err(err) => ChatOutcome::Failed(err),
        }
    }
}

impl ChatOutcome {
    /// The message this outcome renders as. Failure detail stays out of it.
    pub fn to_message(&self) -> ChatMessage {
        match self {
            ChatOutcome::Replied(text) => ChatMessage::assistant(text.clone()),
            ChatOutcome::Rejected(error) => {
                ChatMessage::system_error(format!("{ERROR_PREFIX}{error}"))
            }
            ChatOutcome::Failed(_) => ChatMessage::system_error(NETWORK_ERROR_TEXT),
        }
    }
}

pub struct ConversationPanel<S, E> {
    surface: S,
    endpoint: E,
}

impl<S, E> ConversationPanel<S, E>
where
    S: ConversationSurface,
    E: ChatEndpoint,
{
    pub fn new(surface: S, endpoint: E) -> Self {
        Self { surface, endpoint }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Sends the current input. Returns `None` when the input is blank.
    ///
    /// Nothing guards against a second call while one is in flight; the
    /// disabled controls are the only protection.
    pub async fn send_message(&mut self) -> Option<ChatOutcome> {
        let text = self.surface.input_text().trim().to_string();
        if text.is_empty() {
            return None;
        }

        self.append(ChatMessage::user(text.clone()));
        self.surface.clear_input();
        self.surface.set_busy(true);

        let outcome = ChatOutcome::from(self.endpoint.send(&text).await);
        if let ChatOutcome::Failed(err) = &outcome {
            tracing::error!(error = %err, "chat endpoint call failed");
        }
        self.append(outcome.to_message());

        self.surface.set_busy(false);
        self.surface.focus_input();
        Some(outcome)
    }

    fn append(&mut self, message: ChatMessage) {
        self.surface.append_message(message);
        self.surface.scroll_to_bottom();
    }
}
