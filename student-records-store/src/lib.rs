//! In-memory implementation of the student records coordination services,
//! optionally seeded from a JSON fixture.

pub mod error;
pub mod fixture;
pub mod repositories;
pub mod store;
pub mod table;

pub use error::{StoreError, StoreResult};
pub use fixture::{Fixture, ResourceMetadata};
pub use store::InMemoryStore;
pub use table::Table;
