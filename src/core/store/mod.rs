//! Credential store collaborator.
//!
//! The resolver never reads global state: every operation receives a
//! `&dyn Store` built by the caller.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::ServerRecord;
use crate::error::Result;

mod backend;
mod jfrog;
mod memory;

pub use backend::default_backend;
pub use jfrog::JfrogCli;
pub use memory::{MemoryStore, Mutation};

/// Server record storage.
pub trait Store {
    /// All stored records, in the store's iteration order.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreUnavailable` if the store cannot be read.
    fn get_all(&self) -> Result<Vec<ServerRecord>>;

    /// Fetch one record by server id.
    ///
    /// The default scans [`Store::get_all`]; backends with an index may do better.
    fn get_one(&self, id: &str) -> Result<Option<ServerRecord>> {
        Ok(self.get_all()?.into_iter().find(|r| r.id() == id))
    }

    /// Create or replace the record stored under `id`.
    ///
    /// With `interactive` set, the backend may block on a user-driven
    /// authentication flow that fills in the username and secret.
    fn upsert(&self, id: &str, record: &ServerRecord, interactive: bool) -> Result<()>;

    /// Remove the record stored under `id`.
    fn delete(&self, id: &str) -> Result<()>;
}
