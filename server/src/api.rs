//! GraphQL HTTP API.

use axum::{extract::State, routing::get, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::graphql::{self, GraphQLRequest, GraphQLResponse};
use crate::repository::TodoRepository;

/// Shared state of the GraphQL server
#[derive(Debug, Clone)]
pub struct AppState {
    pub repo: TodoRepository,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(repo: TodoRepository) -> Self {
        Self {
            repo,
            started_at: Utc::now(),
        }
    }
}

/// Build the GraphQL router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/graphql", post(graphql_handler))
        .layer(cors)
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    started_at: DateTime<Utc>,
    todo_count: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        started_at: state.started_at,
        todo_count: state.repo.total_count().await,
    })
}

async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<GraphQLRequest>,
) -> Json<GraphQLResponse> {
    Json(graphql::execute(&state.repo, &request).await)
}
