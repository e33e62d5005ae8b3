//! Docker credential-helper keychain.
//!
//! Implements the keychain operations behind `docker-credential-*` helpers,
//! plus `login`/`logout`, which drive `jf` to (re)configure a server.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::core::constants::URL_SCHEMES;
use crate::core::domain::ServerRecord;
use crate::core::identity;
use crate::core::lookup;
use crate::core::store::Store;
use crate::core::types::{Hostname, Username};
use crate::error::{Error, Result};

/// Credentials as exchanged with Docker on stdin/stdout.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "ServerURL")]
    pub server_url: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Secret")]
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("server_url", &self.server_url)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// The Docker helper contract, plus the login/logout extension.
pub trait Keychain {
    /// Store new credentials.
    fn add(&self, credentials: &Credentials) -> Result<()>;
    /// Remove credentials for a server.
    fn delete(&self, server_url: &str) -> Result<()>;
    /// Username and secret for a server.
    fn get(&self, server_url: &str) -> Result<(Username, Zeroizing<String>)>;
    /// Known hostnames and their usernames.
    fn list(&self) -> Result<BTreeMap<Hostname, Username>>;
    /// Configure a server through the interactive login flow.
    fn login(&self, server_url: &str) -> Result<()>;
    /// Forget a configured server.
    fn logout(&self, server_url: &str) -> Result<()>;
}

/// Keychain over the servers configured in a [`Store`].
pub struct ArtifactoryKeychain<'a> {
    store: &'a dyn Store,
}

impl<'a> ArtifactoryKeychain<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }
}

/// URL to hand to `jf` for a login request; bare hosts get `https://`.
fn login_url(server_url: &str) -> String {
    if URL_SCHEMES.iter().any(|scheme| server_url.starts_with(scheme)) {
        server_url.to_string()
    } else {
        format!("https://{}", server_url)
    }
}

impl Keychain for ArtifactoryKeychain<'_> {
    fn add(&self, credentials: &Credentials) -> Result<()> {
        info!(url = %credentials.server_url, "rejecting add");
        Err(Error::Unsupported("adding credentials: use login instead"))
    }

    fn delete(&self, server_url: &str) -> Result<()> {
        info!(url = %server_url, "rejecting delete");
        Err(Error::Unsupported("deleting credentials: use logout instead"))
    }

    fn get(&self, server_url: &str) -> Result<(Username, Zeroizing<String>)> {
        let records = self.store.get_all()?;
        let record = lookup::find(server_url, &records)?;
        info!(url = %server_url, id = %record.id(), "providing credentials");

        Ok((
            record.username().to_string(),
            Zeroizing::new(record.secret().to_string()),
        ))
    }

    fn list(&self) -> Result<BTreeMap<Hostname, Username>> {
        let records = self.store.get_all()?;
        Ok(lookup::list_all(&records))
    }

    fn login(&self, server_url: &str) -> Result<()> {
        let id = identity::resolve_id(server_url)?;
        info!(url = %server_url, id = %id, "logging in");

        let record = ServerRecord::new(id.as_str(), login_url(server_url), "", "");
        self.store.upsert(&id, &record, true)
    }

    fn logout(&self, server_url: &str) -> Result<()> {
        let id = match identity::resolve_id(server_url) {
            Ok(id) => id,
            Err(e) if e.is_invalid_domain() => {
                // Hosts outside the convention can't have been logged into here.
                warn!(url = %server_url, "skipping logout from invalid domain");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        info!(url = %server_url, id = %id, "logging out");
        self.store.delete(&id)
    }
}
