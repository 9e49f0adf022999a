//! Network Layer
//!
//! Sends operations to the GraphQL endpoint and unwraps the response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::mutation::Operation;

/// Body of a request to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub operation_name: String,
    pub query: String,
    pub variables: Value,
}

impl OperationRequest {
    pub fn new(operation: &Operation, variables: Value) -> Self {
        Self {
            operation_name: operation.name.to_string(),
            query: operation.text.to_string(),
            variables,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorMessage {
    pub message: String,
}

/// Body of a response from the GraphQL endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQLErrorMessage>,
}

impl GraphQLResponse {
    /// The `data` member, or the reported errors
    pub fn into_result(self) -> Result<Value, NetworkError> {
        if !self.errors.is_empty() {
            let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();
            return Err(NetworkError::Server(messages.join("; ")));
        }
        self.data.ok_or(NetworkError::EmptyResponse)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("response carried no data")]
    EmptyResponse,
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        NetworkError::Decode(e.to_string())
    }
}

impl From<JsValue> for NetworkError {
    fn from(e: JsValue) -> Self {
        NetworkError::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

/// Executes operations against a server
#[async_trait(?Send)]
pub trait Network {
    async fn execute(&self, request: OperationRequest) -> Result<Value, NetworkError>;
}

/// `fetch`-based network posting JSON to a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct HttpNetwork {
    endpoint: String,
}

impl HttpNetwork {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl Network for HttpNetwork {
    async fn execute(&self, request: OperationRequest) -> Result<Value, NetworkError> {
        let body = serde_json::to_string(&request)?;

        let headers = web_sys::Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        headers.set("Accept", "application/json")?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let js_request = web_sys::Request::new_with_str_and_init(&self.endpoint, &init)?;
        let window = web_sys::window().ok_or_else(|| NetworkError::Transport("no window".to_string()))?;

        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(NetworkError::Status(response.status()));
        }

        let text = JsFuture::from(response.text()?).await?;
        let text = text
            .as_string()
            .ok_or_else(|| NetworkError::Decode("response body is not text".to_string()))?;
        let parsed: GraphQLResponse = serde_json::from_str(&text)?;
        parsed.into_result()
    }
}
