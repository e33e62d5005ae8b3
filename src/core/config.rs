//! JFrog CLI configuration file.
//!
//! The `jf` CLI keeps every configured server in
//! `~/.jfrog/jfrog-cli.conf.v6`. The helpers only read it; writes go through
//! `jf` itself (see [`crate::core::store::JfrogCli`]).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::ServerRecord;
use crate::error::{Error, Result};

/// Top-level document of the JFrog CLI config file.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Configured servers in file order.
    #[serde(default)]
    pub servers: Vec<ServerDetails>,
}

/// One `servers[]` entry. Fields the helpers don't use are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerDetails {
    #[serde(default)]
    pub server_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub access_token: String,
}

impl From<ServerDetails> for ServerRecord {
    fn from(details: ServerDetails) -> Self {
        ServerRecord::new(
            details.server_id,
            details.url,
            details.user,
            details.access_token,
        )
    }
}

impl CliConfig {
    /// JFrog home directory: `$JFROG_CLI_HOME_DIR`, else `~/.jfrog`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreUnavailable` if neither is available.
    pub fn home_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(constants::ENV_HOME_DIR).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().ok_or_else(|| {
            Error::StoreUnavailable("unable to determine home directory".to_string())
        })?;
        Ok(home.join(constants::HOME_DIR))
    }

    /// Path of the config file inside the JFrog home directory.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join(constants::CONFIG_FILE))
    }

    /// Load the config file at `path`.
    ///
    /// A missing file means no server was ever configured and yields an
    /// empty config.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreUnavailable` if the file exists but cannot be
    /// read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading jf config");

        if !path.exists() {
            debug!(path = %path.display(), "jf config not found, no servers configured");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::StoreUnavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::StoreUnavailable(format!("failed to parse {}: {}", path.display(), e))
        })?;

        debug!(servers = config.servers.len(), "jf config loaded");
        Ok(config)
    }

    /// Convert into store records, preserving file order.
    pub fn into_records(self) -> Vec<ServerRecord> {
        self.servers.into_iter().map(ServerRecord::from).collect()
    }
}
