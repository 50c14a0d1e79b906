//! Message presentation rules.
//!
//! Layout depends only on the role and the error flag. Text is never turned
//! into markup here; hosts insert it as escaped text nodes.

use crate::types::{ChatMessage, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageStyle {
    pub align: Align,
    pub row_class: &'static str,
    pub bubble_class: &'static str,
}

pub fn message_style(role: Role, is_error: bool) -> MessageStyle {
    let is_user = matches!(role, Role::User);
    let bubble_class = if is_error {
        "chat-message-bubble system"
    } else if is_user {
        "chat-message-bubble user"
    } else {
        "chat-message-bubble ai"
    };
    MessageStyle {
        align: if is_user { Align::End } else { Align::Start },
        row_class: if is_user {
            "chat-message user-message"
        } else {
            "chat-message ai-message"
        },
        bubble_class,
    }
}

impl ChatMessage {
    pub fn style(&self) -> MessageStyle {
        message_style(self.role, self.is_error)
    }
}
