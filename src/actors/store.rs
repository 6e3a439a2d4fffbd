//! User store service: the reconciliation engine behind an actor facade.
//!
//! One request is processed to completion before the next is received,
//! which is the whole concurrency story for session state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::{QueryClient, StoreClient};
use crate::domain::{DisplayedUser, FormPayload, UserRecord};
use crate::error::StoreError;
use crate::messages::{QuerySnapshot, ServiceResponse, StoreRequest};
use crate::store::{UserStore, UsersView};

pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    store: UserStore,
    query_client: QueryClient,
}

impl StoreActor {
    pub fn new(buffer_size: usize, query_client: QueryClient) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: UserStore::new(),
            query_client,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "user_store", skip(self))]
    pub async fn run(mut self) {
        info!("UserStore service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::MergedView { respond_to } => {
                    self.handle_merged_view(respond_to).await;
                }
                StoreRequest::FilteredView { query, respond_to } => {
                    self.handle_filtered_view(query, respond_to).await;
                }
                StoreRequest::ToggleStatus { id, respond_to } => {
                    self.handle_toggle_status(id, respond_to).await;
                }
                StoreRequest::Submit {
                    editing,
                    payload,
                    respond_to,
                } => {
                    self.handle_submit(editing, payload, respond_to);
                }
                StoreRequest::Shutdown => {
                    info!("UserStore service shutting down");
                    break;
                }
            }
        }
        info!("UserStore service stopped");
    }

    /// Current remote contribution: the cached list when the query has
    /// succeeded, nothing while it is loading or failed.
    async fn remote_users(&self) -> Result<Option<Arc<Vec<UserRecord>>>, StoreError> {
        match self.query_client.snapshot().await {
            Ok(QuerySnapshot::Ready(users)) => Ok(Some(users)),
            Ok(QuerySnapshot::Loading) | Ok(QuerySnapshot::Failed(_)) => Ok(None),
            Err(e) => Err(StoreError::ActorCommunicationError(e.to_string())),
        }
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_merged_view(
        &self,
        respond_to: ServiceResponse<Vec<DisplayedUser>, StoreError>,
    ) {
        debug!("Processing merged_view request");
        let result = self
            .remote_users()
            .await
            .map(|remote| self.store.merged_view(remote.as_deref().map(Vec::as_slice)));
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_filtered_view(
        &self,
        query: String,
        respond_to: ServiceResponse<UsersView, StoreError>,
    ) {
        debug!("Processing filtered_view request");
        let result = self.remote_users().await.map(|remote| {
            let merged = self.store.merged_view(remote.as_deref().map(Vec::as_slice));
            let users = UserStore::filtered_view(&merged, &query);
            UsersView {
                total: merged.len(),
                users,
            }
        });
        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = id), skip(self, respond_to))]
    async fn handle_toggle_status(&mut self, id: u64, respond_to: ServiceResponse<(), StoreError>) {
        debug!("Processing toggle_status request");
        let result = self.remote_users().await.map(|remote| {
            self.store
                .toggle_status(id, remote.as_deref().map(Vec::as_slice));
        });
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, editing, payload, respond_to))]
    fn handle_submit(
        &mut self,
        editing: Option<DisplayedUser>,
        payload: FormPayload,
        respond_to: ServiceResponse<(), StoreError>,
    ) {
        info!(
            editing_id = editing.as_ref().map(DisplayedUser::id),
            user_name = %payload.name,
            "Processing submit request"
        );
        self.store.create_or_update(editing.as_ref(), payload);
        let _ = respond_to.send(Ok(()));
    }
}
