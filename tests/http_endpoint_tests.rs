//! End-to-end sends through the HTTP endpoint against a mock server

mod common;

use common::{RecordingSurface, entries, journal};
use httpmock::prelude::*;
use paydesk::endpoint::{ChatEndpoint, ChatError, EndpointReply, HttpChatEndpoint};
use paydesk::panel::{ChatOutcome, ConversationPanel, NETWORK_ERROR_TEXT};
use paydesk::types::{ChatMessage, Role};
use serde_json::json;
use std::net::TcpListener;

fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/chat")
}

#[tokio::test]
async fn posts_message_and_renders_reply() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .header("content-type", "application/json")
            .json_body(json!({ "message": "Hello" }));
        then.status(200).json_body(json!({ "response": "Hi there" }));
    });

    let log = journal();
    let surface = RecordingSurface::new("Hello", log.clone());
    let mut panel = ConversationPanel::new(surface, HttpChatEndpoint::new(server.url("/api/chat")));
    let outcome = panel.send_message().await;

    mock.assert();
    assert!(matches!(outcome, Some(ChatOutcome::Replied(_))));
    assert_eq!(
        panel.surface().messages,
        vec![ChatMessage::user("Hello"), ChatMessage::assistant("Hi there")]
    );
    assert!(!panel.surface().busy);
    assert_eq!(entries(&log).last().map(String::as_str), Some("focus"));
}

#[tokio::test]
async fn error_body_on_failure_status_is_shown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(429).json_body(json!({ "error": "rate limited" }));
    });

    let log = journal();
    let surface = RecordingSurface::new("Bad", log.clone());
    let mut panel = ConversationPanel::new(surface, HttpChatEndpoint::new(server.url("/api/chat")));
    panel.send_message().await;

    let messages = &panel.surface().messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], ChatMessage::user("Bad"));
    assert_eq!(messages[1].role, Role::System);
    assert_eq!(messages[1].text, "Error: rate limited");
    assert!(messages[1].is_error);
    assert!(!panel.surface().busy);
}

#[tokio::test]
async fn non_json_reply_is_a_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let endpoint = HttpChatEndpoint::new(server.url("/api/chat"));
    assert!(matches!(
        endpoint.send("hi").await,
        Err(ChatError::Decode(_))
    ));

    let log = journal();
    let mut panel = ConversationPanel::new(RecordingSurface::new("hi", log), endpoint);
    panel.send_message().await;
    assert_eq!(
        panel.surface().messages[1],
        ChatMessage::system_error(NETWORK_ERROR_TEXT)
    );
}

#[tokio::test]
async fn unexpected_shape_is_a_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(200).json_body(json!({ "content": "hello" }));
    });

    let endpoint = HttpChatEndpoint::new(server.url("/api/chat"));
    assert!(matches!(
        endpoint.send("hi").await,
        Err(ChatError::MalformedReply(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_reports_network_error() {
    let endpoint = HttpChatEndpoint::new(unreachable_url());
    assert!(matches!(
        endpoint.send("hi").await,
        Err(ChatError::Transport(_))
    ));

    let log = journal();
    let surface = RecordingSurface::new("Are you there?", log.clone());
    let mut panel = ConversationPanel::new(surface, endpoint);
    let outcome = panel.send_message().await;

    assert!(matches!(outcome, Some(ChatOutcome::Failed(_))));
    let messages = &panel.surface().messages;
    assert_eq!(messages[0], ChatMessage::user("Are you there?"));
    assert_eq!(messages[1], ChatMessage::system_error(NETWORK_ERROR_TEXT));
    assert!(!panel.surface().busy);
    assert!(entries(&log).contains(&"busy:false".to_string()));
}

#[tokio::test]
async fn structured_reply_is_returned_as_is() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(401).json_body(json!({ "error": "Unauthorized" }));
    });

    let endpoint = HttpChatEndpoint::new(server.url("/api/chat"));
    assert_eq!(
        endpoint.send("hi").await.unwrap(),
        EndpointReply::Error("Unauthorized".to_string())
    );
}
