//! Core library components.
//!
//! Hostname normalization, server id resolution, credential lookup and the
//! store collaborator they read from.

pub mod config;
pub mod constants;
pub mod domain;
pub mod host;
pub mod identity;
pub mod lookup;
pub mod store;
pub mod types;
