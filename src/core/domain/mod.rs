//! Domain types.

mod record;

pub use record::ServerRecord;
