pub mod query;
pub mod store;

pub use query::QueryActor;
pub use store::StoreActor;
