//! User reconciliation engine.
//!
//! Owns the three pieces of session state behind the users page: the status
//! overlay for remote records, the list of locally created or re-homed
//! records, and the next-local-id counter. Remote records are never mutated;
//! every edit lands in the local list.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    derive_username, DisplayedUser, FormPayload, Provenance, UserRecord, UserWithStatus,
};

/// First id handed to a client-created record. Chosen above the small fixed
/// remote dataset, but not guaranteed collision-free against arbitrary
/// remote id ranges.
pub const FIRST_LOCAL_ID: u64 = 100;

/// A filtered slice of the merged view together with the unfiltered total,
/// for "N of M users" style summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersView {
    pub users: Vec<DisplayedUser>,
    pub total: usize,
}

/// Session state for the users page.
#[derive(Debug)]
pub struct UserStore {
    /// Activation overrides for remote records; absent means active.
    statuses: HashMap<u64, bool>,
    /// Records owned by this session, in insertion order.
    local: Vec<UserWithStatus>,
    next_local_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
            local: Vec::new(),
            next_local_id: FIRST_LOCAL_ID,
        }
    }

    /// Resolves which store owns `id`, or `None` when neither does.
    ///
    /// The local list wins: a re-homed remote record keeps its original id
    /// but is locally owned from that point on.
    fn provenance_of(&self, id: u64, remote: Option<&[UserRecord]>) -> Option<Provenance> {
        if self.local.iter().any(|u| u.record.id == id) {
            return Some(Provenance::Local);
        }
        if remote.is_some_and(|users| users.iter().any(|u| u.id == id)) {
            return Some(Provenance::Remote);
        }
        None
    }

    /// Combines remote and local records into one logical list.
    ///
    /// Remote records come first, each annotated from the overlay
    /// (default active); local records are appended as-is. While the cache
    /// is still loading or has failed, `remote` is `None` and the view is
    /// the local list alone.
    pub fn merged_view(&self, remote: Option<&[UserRecord]>) -> Vec<DisplayedUser> {
        let mut view: Vec<DisplayedUser> = remote
            .unwrap_or_default()
            .iter()
            .map(|user| DisplayedUser {
                record: user.clone(),
                is_active: self.statuses.get(&user.id).copied().unwrap_or(true),
                provenance: Provenance::Remote,
            })
            .collect();

        view.extend(self.local.iter().map(|user| DisplayedUser {
            record: user.record.clone(),
            is_active: user.is_active,
            provenance: Provenance::Local,
        }));

        view
    }

    /// Stable free-text filter over a merged view.
    ///
    /// A blank (empty or whitespace-only) query is the identity. Otherwise
    /// keeps, in order, exactly the rows whose name or email contains the
    /// query case-insensitively.
    pub fn filtered_view(view: &[DisplayedUser], query: &str) -> Vec<DisplayedUser> {
        if query.trim().is_empty() {
            return view.to_vec();
        }
        let query = query.to_lowercase();
        view.iter()
            .filter(|user| {
                user.record.name.to_lowercase().contains(&query)
                    || user.record.email.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Flips the activation state of `id`, dispatching on provenance.
    ///
    /// Local records flip their own flag; remote records flip their overlay
    /// entry (created on first toggle, prior value defaulting to active).
    /// An id in neither store is a silent no-op.
    pub fn toggle_status(&mut self, id: u64, remote: Option<&[UserRecord]>) {
        match self.provenance_of(id, remote) {
            Some(Provenance::Local) => {
                if let Some(user) = self.local.iter_mut().find(|u| u.record.id == id) {
                    user.is_active = !user.is_active;
                }
            }
            Some(Provenance::Remote) => {
                let current = self.statuses.get(&id).copied().unwrap_or(true);
                self.statuses.insert(id, !current);
            }
            None => {
                debug!(user_id = id, "Toggle ignored for unknown id");
            }
        }
    }

    /// Applies a validated form submission.
    ///
    /// - `editing == None`: creates a local record under the next client id,
    ///   username derived from the name, remaining fields blank, active.
    /// - Editing a local record: replaces its name and email in place.
    /// - Editing a remote record: re-homes it into the local list under its
    ///   original remote id with name and email replaced, and drops its
    ///   overlay entry since the record now carries its flag directly.
    ///   A refetch of the remote source would reintroduce the same id and
    ///   duplicate it in the merged view; the cache never refetches within
    ///   a session, so the hazard is latent.
    pub fn create_or_update(&mut self, editing: Option<&DisplayedUser>, payload: FormPayload) {
        match editing {
            None => {
                let record = UserRecord {
                    id: self.next_local_id,
                    username: derive_username(&payload.name),
                    name: payload.name,
                    email: payload.email,
                    ..UserRecord::default()
                };
                self.local.push(UserWithStatus {
                    record,
                    is_active: true,
                });
                self.next_local_id += 1;
            }
            Some(editing) => {
                let id = editing.record.id;
                if let Some(user) = self.local.iter_mut().find(|u| u.record.id == id) {
                    user.record.name = payload.name;
                    user.record.email = payload.email;
                } else {
                    let mut record = editing.record.clone();
                    record.name = payload.name;
                    record.email = payload.email;
                    self.local.push(UserWithStatus {
                        record,
                        is_active: editing.is_active,
                    });
                    self.statuses.remove(&id);
                }
            }
        }
    }

    #[cfg(test)]
    fn overlay_entry(&self, id: u64) -> Option<bool> {
        self.statuses.get(&id).copied()
    }

    #[cfg(test)]
    fn local_count(&self) -> usize {
        self.local.len()
    }
}
