//! Chat endpoint collaborator
//!
//! The conversation panel talks to the server through the [`ChatEndpoint`]
//! trait. One call sends one user message and yields either the assistant's
//! reply or the error the server reported.
//!
//! # Layout
//!
//! - `http` - reqwest-backed endpoint posting `{ "message": ... }` as JSON
//!
//! # Usage
//!
//! ```rust,no_run
//! use paydesk::endpoint::{ChatEndpoint, HttpChatEndpoint};
//!
//! # async fn example() -> Result<(), paydesk::endpoint::ChatError> {
//! let endpoint = HttpChatEndpoint::new("http://127.0.0.1:5000/api/chat");
//! let reply = endpoint.send("How is PF computed?").await?;
//! # Ok(())
//! # }
//! ```

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use http::HttpChatEndpoint;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid reply body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    #[error("{0}")]
    Other(String),
}

impl ChatError {
    pub fn new(message: impl Into<String>) -> Self {
        ChatError::Other(message.into())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Body posted to the endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// A well-formed reply: exactly one of `response` or `error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointReply {
    Response(String),
    Error(String),
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a reply body. Anything but exactly one of the two fields is rejected.
pub fn parse_reply(body: &str) -> ChatResult<EndpointReply> {
    let parsed: ReplyBody = serde_json::from_str(body)?;
    match (parsed.response, parsed.error) {
        (Some(response), None) => Ok(EndpointReply::Response(response)),
        (None, Some(error)) => Ok(EndpointReply::Error(error)),
        (Some(_), Some(_)) => Err(ChatError::MalformedReply(
            "both `response` and `error` present".to_string(),
        )),
        (None, None) => Err(ChatError::MalformedReply(
            "neither `response` nor `error` present".to_string(),
        )),
    }
}

#[async_trait]
pub trait ChatEndpoint: Send + Sync {
    async fn send(&self, message: &str) -> ChatResult<EndpointReply>;
}

#[async_trait]
impl<T: ChatEndpoint + ?Sized> ChatEndpoint for Arc<T> {
    async fn send(&self, message: &str) -> ChatResult<EndpointReply> {
        (**self).send(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_reply_shapes() {
        assert_eq!(
            parse_reply(r#"{"response":"Hi there"}"#).unwrap(),
            EndpointReply::Response("Hi there".to_string())
        );
        assert_eq!(
            parse_reply(r#"{"error":"rate limited"}"#).unwrap(),
            EndpointReply::Error("rate limited".to_string())
        );
    }

    #[test]
    fn null_fields_count_as_absent() {
        assert_eq!(
            parse_reply(r#"{"response":null,"error":"Unauthorized"}"#).unwrap(),
            EndpointReply::Error("Unauthorized".to_string())
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(
            parse_reply(r#"{"content":"hi"}"#),
            Err(ChatError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"response":"a","error":"b"}"#),
            Err(ChatError::MalformedReply(_))
        ));
        assert!(matches!(
            parse_reply("<html>502 Bad Gateway</html>"),
            Err(ChatError::Decode(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"response":42}"#),
            Err(ChatError::Decode(_))
        ));
    }

    #[test]
    fn request_serializes_message_field() {
        let body = serde_json::to_value(ChatRequest { message: "Hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hello" }));
    }
}
