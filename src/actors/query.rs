//! User query service: caches the remote fetch for the session and
//! de-duplicates concurrent requests.

use std::mem;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::api::UserSource;
use crate::clients::QueryClient;
use crate::domain::UserRecord;
use crate::error::{ApiError, QueryError};
use crate::messages::{QueryRequest, QuerySnapshot, ServiceResponse};

/// Cache key for the one query this service answers.
pub const USERS_QUERY_KEY: &str = "users";

type Waiter = ServiceResponse<Arc<Vec<UserRecord>>, QueryError>;

enum CacheState {
    /// No fetch has been triggered yet.
    Idle,
    /// A fetch is in flight; waiters are answered when it settles.
    Fetching(Vec<Waiter>),
    /// Session-lived success result.
    Ready(Arc<Vec<UserRecord>>),
    /// Session-lived failure; only a restart re-runs the fetch.
    Failed(ApiError),
}

pub struct QueryActor<S: UserSource> {
    receiver: mpsc::Receiver<QueryRequest>,
    /// Clone handed to the spawned fetch task so completion re-enters the
    /// actor loop as a message.
    sender: mpsc::Sender<QueryRequest>,
    source: Arc<S>,
    state: CacheState,
}

impl<S: UserSource> QueryActor<S> {
    pub fn new(buffer_size: usize, source: S) -> (Self, QueryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sender: sender.clone(),
            source: Arc::new(source),
            state: CacheState::Idle,
        };
        let client = QueryClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "user_query", skip(self))]
    pub async fn run(mut self) {
        info!(key = USERS_QUERY_KEY, "UserQuery service starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                QueryRequest::GetUsers { respond_to } => {
                    self.handle_get_users(respond_to);
                }
                QueryRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.snapshot()));
                }
                QueryRequest::FetchCompleted(result) => {
                    self.handle_fetch_completed(result);
                }
                QueryRequest::Shutdown => {
                    info!("UserQuery service shutting down");
                    break;
                }
            }
        }
        info!("UserQuery service stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_users(&mut self, respond_to: Waiter) {
        match &mut self.state {
            CacheState::Ready(users) => {
                let _ = respond_to.send(Ok(users.clone()));
            }
            CacheState::Failed(err) => {
                let _ = respond_to.send(Err(QueryError::Fetch(err.clone())));
            }
            CacheState::Fetching(waiters) => {
                waiters.push(respond_to);
            }
            CacheState::Idle => {
                self.state = CacheState::Fetching(vec![respond_to]);
                let source = self.source.clone();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = source.fetch().await;
                    let _ = sender.send(QueryRequest::FetchCompleted(result)).await;
                });
            }
        }
    }

    #[instrument(skip(self, result))]
    fn handle_fetch_completed(&mut self, result: Result<Vec<UserRecord>, ApiError>) {
        let waiters = match mem::replace(&mut self.state, CacheState::Idle) {
            CacheState::Fetching(waiters) => waiters,
            other => {
                // Completion without an in-flight fetch; keep prior state.
                self.state = other;
                return;
            }
        };

        match result {
            Ok(users) => {
                info!(count = users.len(), "Users fetched");
                let users = Arc::new(users);
                for waiter in waiters {
                    let _ = waiter.send(Ok(users.clone()));
                }
                self.state = CacheState::Ready(users);
            }
            Err(err) => {
                error!(error = %err, "User fetch failed");
                for waiter in waiters {
                    let _ = waiter.send(Err(QueryError::Fetch(err.clone())));
                }
                self.state = CacheState::Failed(err);
            }
        }
    }

    fn snapshot(&self) -> QuerySnapshot {
        match &self.state {
            CacheState::Idle | CacheState::Fetching(_) => QuerySnapshot::Loading,
            CacheState::Ready(users) => QuerySnapshot::Ready(users.clone()),
            CacheState::Failed(err) => QuerySnapshot::Failed(err.to_string()),
        }
    }
}
