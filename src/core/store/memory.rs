//! In-memory store.
//!
//! Holds records in insertion order and remembers every mutation, so callers
//! can check exactly what was written.

use std::cell::RefCell;

use super::Store;
use crate::core::domain::ServerRecord;
use crate::error::{Error, Result};

/// A write that reached the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert { id: String, interactive: bool },
    Delete { id: String },
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<ServerRecord>>,
    mutations: RefCell<Vec<Mutation>>,
    unavailable: Option<String>,
}

impl MemoryStore {
    pub fn new(records: Vec<ServerRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Self::default()
        }
    }

    /// A store whose every call fails with `StoreUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Mutations applied so far, oldest first.
    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }

    fn check(&self) -> Result<()> {
        match &self.unavailable {
            Some(reason) => Err(Error::StoreUnavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl Store for MemoryStore {
    fn get_all(&self) -> Result<Vec<ServerRecord>> {
        self.check()?;
        Ok(self.records.borrow().clone())
    }

    fn upsert(&self, id: &str, record: &ServerRecord, interactive: bool) -> Result<()> {
        self.check()?;
        let stored = ServerRecord::new(id, record.base_url(), record.username(), record.secret());

        let mut records = self.records.borrow_mut();
        match records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = stored,
            None => records.push(stored),
        }

        self.mutations.borrow_mut().push(Mutation::Upsert {
            id: id.to_string(),
            interactive,
        });
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.check()?;
        self.records.borrow_mut().retain(|r| r.id() != id);
        self.mutations
            .borrow_mut()
            .push(Mutation::Delete { id: id.to_string() });
        Ok(())
    }
}
