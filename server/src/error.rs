//! Server Errors

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {name} server on port {port}: {source}")]
    Bind {
        name: &'static str,
        port: u16,
        source: io::Error,
    },
    #[error("{name} server stopped: {source}")]
    Serve { name: &'static str, source: io::Error },
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
