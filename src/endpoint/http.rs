use super::{ChatEndpoint, ChatRequest, ChatResult, EndpointReply, parse_reply};
use async_trait::async_trait;
use reqwest::Client;

/// Posts chat messages to the server's JSON endpoint.
pub struct HttpChatEndpoint {
    client: Client,
    endpoint: String,
}

impl HttpChatEndpoint {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ChatEndpoint for HttpChatEndpoint {
    async fn send(&self, message: &str) -> ChatResult<EndpointReply> {
        tracing::debug!(endpoint = %self.endpoint, "posting chat message");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        // The server reports failures as `{ "error" }` bodies on 4xx/5xx,
        // so the body decides the outcome, not the status.
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "chat endpoint replied");
        parse_reply(&body)
    }
}
