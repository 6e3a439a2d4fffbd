use serde::Deserialize;

/// Postal address as served by the remote users endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// Company affiliation as served by the remote users endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

/// A user record in the shape the remote source serves it.
///
/// Remote records are immutable once fetched and are never written back.
/// Locally created records reuse the same shape with a client-assigned id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

/// A session-owned user record with its activation flag carried directly.
///
/// Remote records keep their activation state in the status overlay instead;
/// only records owned by the local list use this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithStatus {
    pub record: UserRecord,
    pub is_active: bool,
}

/// Which store owns the authoritative mutable state for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Fetched from the remote source; activation lives in the overlay.
    Remote,
    /// Created or re-homed in this session; activation lives on the record.
    Local,
}

/// One row of the merged view: a record annotated with its resolved
/// activation state and an explicit provenance tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedUser {
    pub record: UserRecord,
    pub is_active: bool,
    pub provenance: Provenance,
}

impl DisplayedUser {
    pub fn id(&self) -> u64 {
        self.record.id
    }
}

/// Sanitized form output. Only produced by a successful validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
}

/// Derives a username for a client-created record: the display name
/// lowercased with runs of whitespace collapsed to dots.
pub fn derive_username(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
}
