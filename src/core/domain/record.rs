//! Stored server record.
//!
//! One authenticated server as the credential store knows it.

use zeroize::Zeroizing;

use crate::core::types::{ServerId, Username};

/// A stored (id, URL, username, secret) tuple.
///
/// The secret is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerRecord {
    id: ServerId,
    base_url: String,
    username: Username,
    secret: Zeroizing<String>,
}

impl ServerRecord {
    /// Create a record. `base_url` is kept as-is, even if it does not parse.
    pub fn new(
        id: impl Into<ServerId>,
        base_url: impl Into<String>,
        username: impl Into<Username>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            base_url: base_url.into(),
            username: username.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Unique, stable identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full server URL as stored.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Opaque access token.
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }
}

impl std::fmt::Debug for ServerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerRecord")
            .field("id", &self.id)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for ServerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.base_url)
    }
}
