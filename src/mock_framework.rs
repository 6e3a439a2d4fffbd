//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_store_client`] or [`create_mock_query_client`] to get a
//! client and a receiver, then the `expect_*` helpers to assert behavior.
//!
//! Instead of spinning up a full actor, the mock client sends messages to a
//! channel the test controls. The test inspects the messages arriving on
//! that channel and plays the actor's side (success, failure, delays)
//! deterministically.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::clients::{QueryClient, StoreClient};
use crate::domain::{DisplayedUser, FormPayload, UserRecord};
use crate::error::{QueryError, StoreError};
use crate::messages::{QueryRequest, StoreRequest};

pub fn create_mock_store_client(
    buffer_size: usize,
) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

pub fn create_mock_query_client(
    buffer_size: usize,
) -> (QueryClient, mpsc::Receiver<QueryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (QueryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ToggleStatus request
pub async fn expect_toggle(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(u64, oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::ToggleStatus { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Submit request
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(
    Option<DisplayedUser>,
    FormPayload,
    oneshot::Sender<Result<(), StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Submit {
            editing,
            payload,
            respond_to,
        }) => Some((editing, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetUsers request
pub async fn expect_get_users(
    receiver: &mut mpsc::Receiver<QueryRequest>,
) -> Option<oneshot::Sender<Result<Arc<Vec<UserRecord>>, QueryError>>> {
    match receiver.recv().await {
        Some(QueryRequest::GetUsers { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormPayload;

    #[tokio::test]
    async fn mock_store_client_round_trip() {
        let (client, mut receiver) = create_mock_store_client(10);

        let submit_task = tokio::spawn(async move {
            let payload = FormPayload {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
            };
            client.submit(None, payload).await
        });

        let (editing, payload, responder) =
            expect_submit(&mut receiver).await.expect("Expected Submit request");
        assert!(editing.is_none());
        assert_eq!(payload.name, "Ada Lovelace");
        responder.send(Ok(())).unwrap();

        let result = submit_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn mock_store_client_toggle() {
        let (client, mut receiver) = create_mock_store_client(10);

        let toggle_task = tokio::spawn(async move { client.toggle_status(7).await });

        let (id, responder) = expect_toggle(&mut receiver)
            .await
            .expect("Expected ToggleStatus request");
        assert_eq!(id, 7);
        responder.send(Ok(())).unwrap();

        assert!(toggle_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn mock_query_client_round_trip() {
        let (client, mut receiver) = create_mock_query_client(10);

        let get_task = tokio::spawn(async move { client.get_users().await });

        let responder = expect_get_users(&mut receiver)
            .await
            .expect("Expected GetUsers request");
        responder.send(Ok(Arc::new(Vec::new()))).unwrap();

        let users = get_task.await.unwrap().unwrap();
        assert!(users.is_empty());
    }
}
