use crate::api;
use crate::error::CatalogError;
use crate::queries::{ProductQuery, UserQuery};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tracing::{error, info};

/// The runtime orchestrator for the catalog service.
///
/// `CatalogSystem` is responsible for:
/// - **Loading**: Building every repository once, from its seed data
/// - **Dependency Wiring**: Handing each query translator to the routes that need it
/// - **Serving**: Running the HTTP server until shutdown is requested
///
/// # Example
///
/// ```rust
/// use catalog_service::lifecycle::CatalogSystem;
/// use repository_framework::EntityQuery;
///
/// let system = CatalogSystem::new().unwrap();
/// assert_eq!(system.product_query.all().len(), 5);
/// assert_eq!(system.user_query.active().len(), 4);
/// ```
#[derive(Clone)]
pub struct CatalogSystem {
    /// Queries over the product repository
    pub product_query: ProductQuery,

    /// Queries over the user repository
    pub user_query: UserQuery,
}

impl CatalogSystem {
    /// Loads every repository and wires its query translator.
    ///
    /// # Errors
    ///
    /// Fails if any seed collection breaks a repository invariant.
    pub fn new() -> Result<Self, CatalogError> {
        let product_query = crate::product_repo::new()?;
        let user_query = crate::user_repo::new()?;

        info!("Catalog loaded");
        Ok(Self {
            product_query,
            user_query,
        })
    }

    /// Builds the HTTP router over this system's repositories.
    pub fn router(&self) -> Router {
        api::router(self.product_query.clone(), self.user_query.clone())
    }

    /// Serves the HTTP API on `address` until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Bind`] if the address cannot be bound and
    /// [`CatalogError::Serve`] if the server stops with an I/O error.
    pub async fn serve<F>(self, address: SocketAddr, shutdown: F) -> Result<(), CatalogError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|source| CatalogError::Bind { address, source })?;
        let local_address = listener.local_addr().unwrap_or(address);

        info!(bind_address = %local_address, "Catalog API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                error!(error = %e, "Catalog API terminated unexpectedly");
                CatalogError::Serve(e)
            })?;

        info!("Catalog API shutdown complete.");
        Ok(())
    }
}

/// Resolves when the process receives Ctrl-C.
///
/// If the signal handler cannot be installed the future never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down catalog...");
}
