use std::sync::Arc;

use tokio::sync::oneshot;

use crate::domain::{DisplayedUser, FormPayload, UserRecord};
use crate::error::{ApiError, QueryError, StoreError};
use crate::store::UsersView;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Point-in-time state of the user query cache.
#[derive(Debug, Clone)]
pub enum QuerySnapshot {
    /// No fetch has completed yet (idle or in flight).
    Loading,
    /// The fetch succeeded; the cached list is shared with all consumers.
    Ready(Arc<Vec<UserRecord>>),
    /// The fetch failed; the message is terminal for the session.
    Failed(String),
}

/// Typed message enums for actor communication. Each variant includes
/// parameters and a oneshot channel for responses.

#[derive(Debug)]
pub enum QueryRequest {
    GetUsers {
        respond_to: ServiceResponse<Arc<Vec<UserRecord>>, QueryError>,
    },
    Snapshot {
        respond_to: ServiceResponse<QuerySnapshot, QueryError>,
    },
    /// Internal: delivered by the spawned fetch task when the request settles.
    FetchCompleted(Result<Vec<UserRecord>, ApiError>),
    Shutdown,
}

#[derive(Debug)]
pub enum StoreRequest {
    MergedView {
        respond_to: ServiceResponse<Vec<DisplayedUser>, StoreError>,
    },
    FilteredView {
        query: String,
        respond_to: ServiceResponse<UsersView, StoreError>,
    },
    ToggleStatus {
        id: u64,
        respond_to: ServiceResponse<(), StoreError>,
    },
    Submit {
        editing: Option<DisplayedUser>,
        payload: FormPayload,
        respond_to: ServiceResponse<(), StoreError>,
    },
    Shutdown,
}
