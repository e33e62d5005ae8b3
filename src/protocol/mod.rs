//! Protocol adapters.
//!
//! Each adapter formats lookup results for one external client and is built
//! only on the core normalizer, resolver and lookup.

pub mod bazel;
pub mod docker;
