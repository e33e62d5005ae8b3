//! Bazel credential-helper adapter.
//!
//! See <https://github.com/EngFlow/credential-helper-spec>. Bazel sends a
//! `get` request carrying a URI and expects the HTTP headers to attach.

use std::collections::BTreeMap;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::constants::AUTHORIZATION;
use crate::core::lookup;
use crate::core::store::Store;
use crate::error::Result;

/// Body of a `get` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCredentialsRequest {
    pub uri: String,
}

/// Body of a `get` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCredentialsResponse {
    /// RFC 3339 expiry; omitted when credentials don't expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// Header name to ordered values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, Vec<String>>,
}

/// Anything able to answer Bazel `get` requests.
pub trait CredentialProvider {
    fn get(&self, request: &GetCredentialsRequest) -> Result<GetCredentialsResponse>;
}

/// `Basic` Authorization value for a username and secret.
///
/// Encodes with the URL-safe base64 alphabet (with padding), not the
/// standard alphabet of RFC 7617. Servers already accepting these values
/// must keep seeing the same bytes.
pub fn basic_auth(username: &str, secret: &str) -> String {
    format!("Basic {}", URL_SAFE.encode(format!("{}:{}", username, secret)))
}

/// Answers requests from the servers configured in a [`Store`].
pub struct ArtifactoryProvider<'a> {
    store: &'a dyn Store,
}

impl<'a> ArtifactoryProvider<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }
}

impl CredentialProvider for ArtifactoryProvider<'_> {
    /// Build the Authorization header for `request.uri`.
    ///
    /// # Errors
    ///
    /// Never returns an empty response: an unknown server is
    /// `Error::NotFound`, so Bazel doesn't silently fall back to anonymous
    /// access.
    fn get(&self, request: &GetCredentialsRequest) -> Result<GetCredentialsResponse> {
        let records = self.store.get_all()?;
        let record = lookup::find(&request.uri, &records)?;
        info!(uri = %request.uri, id = %record.id(), "providing credentials");

        let mut headers = BTreeMap::new();
        headers.insert(
            AUTHORIZATION.to_string(),
            vec![basic_auth(record.username(), record.secret())],
        );

        Ok(GetCredentialsResponse {
            expires: None,
            headers,
        })
    }
}
