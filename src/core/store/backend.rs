//! Backend selection for the credential store.

use tracing::debug;

use super::{JfrogCli, Store};
use crate::error::Result;

/// The store used by the helper binaries: the JFrog CLI configuration
/// located from the environment.
pub fn default_backend() -> Result<Box<dyn Store>> {
    let store = JfrogCli::from_env()?;
    debug!(path = %store.config_path().display(), "using JFrog CLI store");
    Ok(Box::new(store))
}
