//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

pub const BAZEL_BIN: &str = "bazel-credential-jfrog";
pub const DOCKER_BIN: &str = "docker-credential-jfrog";

impl Test {
    /// Create a helper command with the test's environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - JFROG_CLI_HOME_DIR set to the temporary JFrog home
    /// - JFROG_CLI_BIN pointing at a path that doesn't exist
    /// - JFROG_HELPER_LOG and NO_COLOR cleared of surprises
    pub fn cmd(&self, bin: &str) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin(bin).expect("failed to find helper binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("JFROG_CLI_HOME_DIR", self.jfrog_home.path());
        cmd.env("JFROG_CLI_BIN", self.home.path().join("missing-jf"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("JFROG_HELPER_LOG");
        cmd
    }

    /// Run `bazel-credential-jfrog get` with a JSON request on stdin.
    pub fn bazel_get(&self, request: &str) -> Output {
        self.cmd(BAZEL_BIN)
            .arg("get")
            .write_stdin(request)
            .output()
            .expect("failed to run bazel helper get")
    }

    /// Run a `docker-credential-jfrog` action with `stdin`.
    pub fn docker(&self, action: &str, stdin: &str) -> Output {
        self.cmd(DOCKER_BIN)
            .arg(action)
            .write_stdin(stdin)
            .output()
            .expect("failed to run docker helper")
    }

    /// Run `docker-credential-jfrog <action> <server_url>` using a fake `jf`.
    #[cfg(unix)]
    pub fn docker_with_jf(&self, action: &str, server_url: &str, jf_exit: i32) -> Output {
        let jf = self.fake_jf(jf_exit);
        self.cmd(DOCKER_BIN)
            .env("JFROG_CLI_BIN", jf)
            .args([action, server_url])
            .write_stdin("")
            .output()
            .expect("failed to run docker helper")
    }
}
