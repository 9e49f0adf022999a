//! Todo Relay Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: In-memory todo storage
//! - graphql: Relay object identification, connections and operations
//! - api / dev_server: HTTP servers

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

pub mod api;
pub mod config;
pub mod dev_server;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod repository;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

use api::AppState;
use repository::TodoRepository;

/// Add the two demo todos
pub async fn seed_demo_todos(repo: &TodoRepository) {
    repo.add_todo("Taste JavaScript".to_string(), true).await;
    repo.add_todo("Buy a unicorn".to_string(), false).await;
}

/// Run the GraphQL server and the development server until either stops
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let repo = TodoRepository::new();
    if config.seed {
        seed_demo_todos(&repo).await;
        log::info!("Seeded {} demo todos", repo.total_count().await);
    }

    let graphql = serve("GraphQL", config.graphql_port, api::build_router(AppState::new(repo)));
    let app = serve(
        "App",
        config.app_port,
        dev_server::build_router(&config.public_dir, config.graphql_port),
    );
    tokio::try_join!(graphql, app)?;
    Ok(())
}

async fn serve(name: &'static str, port: u16, router: Router) -> ServerResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { name, port, source })?;
    log::info!("{} server running on http://localhost:{}", name, port);
    axum::serve(listener, router)
        .await
        .map_err(|source| ServerError::Serve { name, source })
}
