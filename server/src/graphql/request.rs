//! GraphQL Wire Types
//!
//! Request and response bodies of the `/graphql` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    /// `operationName`, or the name declared in the query text
    pub fn resolved_operation_name(&self) -> Option<String> {
        self.operation_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.query.as_deref().and_then(operation_name_from_query))
    }
}

/// Name of the first `query`/`mutation` declared in a document
fn operation_name_from_query(query: &str) -> Option<String> {
    let mut words = query.split(|c: char| c.is_whitespace() || c == '(' || c == '{');
    while let Some(word) = words.next() {
        if word == "query" || word == "mutation" {
            return words
                .find(|candidate| !candidate.is_empty())
                .map(str::to_string);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLErrorBody>,
}

impl GraphQLResponse {
    pub fn data(data: Value) -> Self {
        Self { data: Some(data), errors: Vec::new() }
    }

    pub fn error(error: &GraphQLError) -> Self {
        Self {
            data: None,
            errors: vec![GraphQLErrorBody { message: error.to_string() }],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum GraphQLError {
    #[error("Must provide an operation name")]
    MissingOperationName,
    #[error("Unknown operation named \"{0}\"")]
    UnknownOperation(String),
    #[error("Variables are invalid: {0}")]
    InvalidVariables(#[from] serde_json::Error),
    #[error("Invalid {expected} id \"{id}\"")]
    InvalidId { expected: &'static str, id: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_operation_name_wins() {
        let request = GraphQLRequest {
            operation_name: Some("RenameTodoMutation".to_string()),
            query: Some("mutation Other { x }".to_string()),
            variables: None,
        };
        assert_eq!(request.resolved_operation_name().as_deref(), Some("RenameTodoMutation"));
    }

    #[test]
    fn test_name_from_query_text() {
        let request = GraphQLRequest {
            operation_name: None,
            query: Some("mutation RenameTodoMutation($input: RenameTodoInput!) { x }".to_string()),
            variables: None,
        };
        assert_eq!(request.resolved_operation_name().as_deref(), Some("RenameTodoMutation"));

        let request = GraphQLRequest {
            operation_name: Some(String::new()),
            query: Some("query   TodoAppQuery{ viewer { id } }".to_string()),
            variables: None,
        };
        assert_eq!(request.resolved_operation_name().as_deref(), Some("TodoAppQuery"));
    }

    #[test]
    fn test_anonymous_query_has_no_name() {
        let request = GraphQLRequest {
            operation_name: None,
            query: Some("{ viewer { id } }".to_string()),
            variables: None,
        };
        assert_eq!(request.resolved_operation_name(), None);
    }

    #[test]
    fn test_error_response_shape() {
        let response = GraphQLResponse::error(&GraphQLError::UnknownOperation("Nope".to_string()));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "data": null, "errors": [{ "message": "Unknown operation named \"Nope\"" }] })
        );
    }

    #[test]
    fn test_data_response_omits_errors() {
        let response = GraphQLResponse::data(json!({ "ok": true }));
        assert!(response.is_ok());
        assert_eq!(serde_json::to_value(&response).unwrap(), json!({ "data": { "ok": true } }));
    }
}
