use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{DisplayedUser, FormPayload, UserRecord};
use crate::error::{QueryError, StoreError};
use crate::messages::{QueryRequest, QuerySnapshot, StoreRequest};
use crate::store::UsersView;

/// Generates an instrumented request/response client method for a message
/// enum variant carrying a `respond_to` oneshot channel.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// 1. Query Client
// =============================================================================

/// Client for the user query service.
#[derive(Clone)]
pub struct QueryClient {
    sender: mpsc::Sender<QueryRequest>,
}

impl QueryClient {
    pub fn new(sender: mpsc::Sender<QueryRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) {
        let _ = self.sender.send(QueryRequest::Shutdown).await;
    }
}

client_method!(QueryClient => fn get_users() -> Arc<Vec<UserRecord>> as QueryRequest::GetUsers, Error = QueryError);
client_method!(QueryClient => fn snapshot() -> QuerySnapshot as QueryRequest::Snapshot, Error = QueryError);

// =============================================================================
// 2. Store Client
// =============================================================================

/// Client for the user store service.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    pub async fn shutdown(&self) {
        let _ = self.sender.send(StoreRequest::Shutdown).await;
    }
}

client_method!(StoreClient => fn merged_view() -> Vec<DisplayedUser> as StoreRequest::MergedView, Error = StoreError);
client_method!(StoreClient => fn filtered_view(query: String) -> UsersView as StoreRequest::FilteredView, Error = StoreError);
client_method!(StoreClient => fn toggle_status(id: u64) -> () as StoreRequest::ToggleStatus, Error = StoreError);
client_method!(StoreClient => fn submit(editing: Option<DisplayedUser>, payload: FormPayload) -> () as StoreRequest::Submit, Error = StoreError);
