//! Startup errors for the catalog service.

use repository_framework::FrameworkError;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can stop the catalog from starting or serving.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A seed collection broke a repository invariant.
    #[error(transparent)]
    Repository(#[from] FrameworkError),

    /// A seed record carries a calendar date that does not exist.
    #[error("invalid seed date {year:04}-{month:02}-{day:02}")]
    InvalidSeedDate { year: i32, month: u32, day: u32 },

    /// The HTTP listener could not be bound.
    #[error("could not bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
