//! Child persistence lifecycle for statecraft entities.
//!
//! The [`ChildLifecycleController`] mediates between managed entities and
//! an external [`DataAccess`] backend, enforcing the CRUD protocol:
//! factory construction (create/fetch), precondition-gated insert/update/
//! delete, and optimistic concurrency via the opaque token the backend
//! assigns on every successful write.
//!
//! The controller never issues queries itself and never retries a
//! concurrency conflict — a stale token is surfaced to the caller, whose
//! recommended resolution is reload-and-reapply.
//!
//! [`InMemoryDataAccess`] ships as the reference backend: real token
//! versioning with no I/O, suitable for tests and in-process hosts.

mod controller;
mod data_access;
mod error;
mod memory;

pub use controller::ChildLifecycleController;
pub use data_access::DataAccess;
pub use error::{PersistError, PersistResult};
pub use memory::InMemoryDataAccess;
