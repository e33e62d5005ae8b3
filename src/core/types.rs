//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A JFrog CLI server id (e.g., `acme` for `acme.jfrog.io`).
pub type ServerId = String;

/// A bare hostname with scheme, port and path stripped.
pub type Hostname = String;

/// The user name stored alongside a server's access token.
pub type Username = String;
