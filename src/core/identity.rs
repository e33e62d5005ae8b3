//! Server identity resolution.
//!
//! JFrog CLI names a SaaS server after the first label of its hostname, so
//! `https://acme.jfrog.io` is stored under the id `acme`. Only login and
//! logout go through this; lookups match stored URLs by hostname instead.

use tracing::debug;

use crate::core::constants::JFROG_DOMAIN;
use crate::core::host;
use crate::error::{Error, Result};

/// Derive the server id for a URL or bare host.
///
/// # Errors
///
/// Returns `Error::InvalidDomain` unless the host is exactly
/// `<label>.jfrog.io`, or `Error::MalformedUrl` if the URL does not parse.
pub fn resolve_id(input: &str) -> Result<String> {
    let hostname = host::normalize(input)?;

    match hostname.split_once('.') {
        Some((label, domain)) if domain == JFROG_DOMAIN => {
            debug!(input = %input, id = %label, "resolved server id");
            Ok(label.to_string())
        }
        _ => Err(Error::InvalidDomain(hostname)),
    }
}
