//! Test support utilities for the helper integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own home and JFrog home directory. Nothing touches
/// process-global state; child commands receive paths through env vars so
/// tests can safely run in parallel.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
    /// Temporary JFrog home (`JFROG_CLI_HOME_DIR`)
    pub jfrog_home: TempDir,
}

impl Test {
    /// Create a new environment with no jf configuration at all.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        let jfrog_home = TempDir::new().expect("failed to create temp jfrog home");

        Self { home, jfrog_home }
    }

    /// Create an environment whose jf config lists `servers`
    /// as `(server_id, url, user, access_token)`.
    pub fn with_servers(servers: &[(&str, &str, &str, &str)]) -> Self {
        let t = Self::new();
        t.write_config(&servers_json(servers));
        t
    }

    /// Path of the jf config file.
    pub fn config_path(&self) -> PathBuf {
        self.jfrog_home.path().join("jfrog-cli.conf.v6")
    }

    /// Overwrite the jf config file with raw contents.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("failed to write jf config");
    }

    /// Install a fake `jf` that appends its arguments to `jf.log`
    /// and exits with `exit_code`.
    #[cfg(unix)]
    pub fn fake_jf(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.home.path().join("jf");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> {}\nexit {}\n",
            self.jf_log().display(),
            exit_code
        );
        std::fs::write(&bin, script).expect("failed to write fake jf");
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake jf");
        bin
    }

    /// Invocations recorded by the fake `jf`, one per line.
    pub fn jf_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.jf_log())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn jf_log(&self) -> PathBuf {
        self.home.path().join("jf.log")
    }
}

/// Render a jf config document for `(server_id, url, user, access_token)` tuples.
pub fn servers_json(servers: &[(&str, &str, &str, &str)]) -> String {
    let servers: Vec<serde_json::Value> = servers
        .iter()
        .map(|(id, url, user, token)| {
            serde_json::json!({
                "serverId": id,
                "url": url,
                "user": user,
                "accessToken": token,
            })
        })
        .collect();
    serde_json::json!({ "servers": servers, "version": "6" }).to_string()
}
