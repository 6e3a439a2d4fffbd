use tracing::{error, info};

use crate::actors::{QueryActor, StoreActor};
use crate::api::{HttpUserSource, UserSource};
use crate::clients::{QueryClient, StoreClient};
use crate::config::AdminConfig;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up the query and store services, wiring them
/// together, and handling shutdown.
pub struct AdminSystem {
    pub query_client: QueryClient,
    pub store_client: StoreClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AdminSystem {
    pub fn new(config: AdminConfig) -> Self {
        Self::with_source(HttpUserSource::new(config.base_url))
    }

    /// Builds the system around an arbitrary user source. Tests use this
    /// to substitute stubs for the HTTP boundary.
    pub fn with_source<S: UserSource>(source: S) -> Self {
        let (query_actor, query_client) = QueryActor::new(32, source);
        let query_handle = tokio::spawn(query_actor.run());

        let (store_actor, store_client) = StoreActor::new(32, query_client.clone());
        let store_handle = tokio::spawn(store_actor.run());

        Self {
            query_client,
            store_client,
            handles: vec![query_handle, store_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // The store service holds a query client, so it goes first.
        self.store_client.shutdown().await;
        self.query_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
