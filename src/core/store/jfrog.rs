//! JFrog CLI backed store.
//!
//! Reads go straight to the `jf` config file. Writes are delegated to the
//! `jf config` command so that its own encryption, web-login flow and file
//! locking stay in charge of the file.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use super::Store;
use crate::core::config::CliConfig;
use crate::core::constants;
use crate::core::domain::ServerRecord;
use crate::error::{Error, Result};

/// Store backed by the JFrog CLI configuration.
///
/// Credentials never go on the `jf` command line: `upsert` names the server
/// and its URL and lets `jf` collect the rest.
#[derive(Debug, Clone)]
pub struct JfrogCli {
    config_path: PathBuf,
    cli_bin: Option<PathBuf>,
}

impl JfrogCli {
    /// Build from the environment (`JFROG_CLI_HOME_DIR`, `JFROG_CLI_BIN`).
    ///
    /// The `jf` executable is only looked up when a write is requested.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            config_path: CliConfig::default_path()?,
            cli_bin: std::env::var_os(constants::ENV_CLI_BIN)
                .filter(|b| !b.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Build with explicit locations.
    pub fn new(config_path: impl Into<PathBuf>, cli_bin: Option<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            cli_bin,
        }
    }

    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    fn cli_bin(&self) -> Result<PathBuf> {
        if let Some(bin) = &self.cli_bin {
            return Ok(bin.clone());
        }
        which::which(constants::CLI_BIN).map_err(|e| {
            Error::StoreUnavailable(format!("`{}` not found on PATH: {}", constants::CLI_BIN, e))
        })
    }

    /// Run `jf` with `args` for server `id`.
    ///
    /// Interactive runs keep stdin and stderr attached to the terminal and
    /// send the child's stdout to our stderr, leaving stdout to the protocol.
    fn run(&self, id: &str, args: &[String], interactive: bool) -> Result<()> {
        let bin = self.cli_bin()?;
        debug!(bin = %bin.display(), args = ?args, "running jf");

        let mut cmd = Command::new(&bin);
        cmd.args(args)
            .env(constants::ENV_HOME_DIR, self.home_dir());

        let (status, detail) = if interactive {
            let status = cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::from(std::io::stderr()))
                .stderr(Stdio::inherit())
                .status()?;
            (status, String::new())
        } else {
            let output = cmd.stdin(Stdio::null()).output()?;
            let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
            (output.status, detail)
        };

        if status.success() {
            return Ok(());
        }

        let reason = if detail.is_empty() {
            format!("jf exited with {}", status)
        } else {
            detail
        };
        warn!(id = %id, reason = %reason, "jf config command failed");
        Err(Error::Login {
            id: id.to_string(),
            reason,
        })
    }

    fn home_dir(&self) -> PathBuf {
        self.config_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default()
    }
}

impl Store for JfrogCli {
    fn get_all(&self) -> Result<Vec<ServerRecord>> {
        Ok(CliConfig::load_from(&self.config_path)?.into_records())
    }

    fn upsert(&self, id: &str, record: &ServerRecord, interactive: bool) -> Result<()> {
        info!(id = %id, url = %record.base_url(), interactive, "configuring server");

        let args = vec![
            "config".to_string(),
            "add".to_string(),
            id.to_string(),
            format!("--url={}", record.base_url()),
            format!("--interactive={}", interactive),
            "--overwrite".to_string(),
        ];
        self.run(id, &args, interactive)
    }

    fn delete(&self, id: &str) -> Result<()> {
        info!(id = %id, "removing server");

        let args = vec![
            "config".to_string(),
            "remove".to_string(),
            id.to_string(),
            "--quiet".to_string(),
        ];
        self.run(id, &args, false)
    }
}
