//! Constants used throughout the helpers.
//!
//! Centralizes magic strings and configuration values.

/// The only domain whose hosts can be logged into by server id.
pub const JFROG_DOMAIN: &str = "jfrog.io";

/// URL schemes that mark an input as a full URL rather than a bare host.
pub const URL_SCHEMES: &[&str] = &["https://", "http://"];

/// JFrog CLI configuration file name inside the JFrog home directory.
pub const CONFIG_FILE: &str = "jfrog-cli.conf.v6";

/// JFrog home directory relative to HOME (~/.jfrog).
pub const HOME_DIR: &str = ".jfrog";

/// Overrides the JFrog home directory.
pub const ENV_HOME_DIR: &str = "JFROG_CLI_HOME_DIR";

/// Overrides the `jf` executable used for login and logout.
pub const ENV_CLI_BIN: &str = "JFROG_CLI_BIN";

/// Log filter for both helper binaries.
pub const ENV_LOG: &str = "JFROG_HELPER_LOG";

/// Name of the JFrog CLI executable looked up on PATH.
pub const CLI_BIN: &str = "jf";

/// HTTP header carrying the Basic-Auth value in Bazel responses.
pub const AUTHORIZATION: &str = "Authorization";
