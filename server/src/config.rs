//! Server Configuration

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "todo-relay")]
#[command(about = "GraphQL todo server and development server for the todo frontend")]
#[command(version)]
pub struct ServerConfig {
    /// Port of the development server serving the frontend bundle
    #[arg(long, env = "TODO_APP_PORT", default_value_t = 3000)]
    pub app_port: u16,

    /// Port of the GraphQL server
    #[arg(long, env = "TODO_GRAPHQL_PORT", default_value_t = 8080)]
    pub graphql_port: u16,

    /// Directory holding the built frontend
    #[arg(long, env = "TODO_PUBLIC_DIR", value_name = "PATH", default_value = "dist")]
    pub public_dir: PathBuf,

    #[arg(long, env = "TODO_LOG_DIR", value_name = "PATH", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with two demo todos
    #[arg(long)]
    pub seed: bool,
}
