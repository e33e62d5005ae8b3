//! Credential store lookup.
//!
//! Matches a query against the hostname of each stored record's own URL.
//! The `<label>.jfrog.io` id convention plays no part here: any server `jf`
//! knows about can be looked up.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use crate::core::domain::ServerRecord;
use crate::core::host;
use crate::core::types::{Hostname, Username};
use crate::error::{Error, Result};

/// Hostname of a record's base URL.
///
/// Returns `None` (after logging a warning) for URLs that don't parse,
/// carry a bad percent-escape or have no host, so a bad entry never aborts
/// a scan.
fn record_hostname(record: &ServerRecord) -> Option<Hostname> {
    let url = match host::parse_url(record.base_url()) {
        Ok(url) => url,
        Err(e) => {
            warn!(id = %record.id(), url = %record.base_url(), error = %e, "skipping record: unable to parse as URL");
            return None;
        }
    };

    let hostname = host::hostname(&url);
    if hostname.is_empty() {
        warn!(id = %record.id(), url = %record.base_url(), "skipping record: URL has no host");
        return None;
    }
    Some(hostname)
}

/// Find the record serving `target`, a URL or bare host.
///
/// Records are scanned in order and the first whose URL hostname equals the
/// normalized target wins. Hostnames compare ASCII case-insensitively, since
/// parsed record hosts come back lowercased.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if `target` is an unparseable URL, or
/// `Error::NotFound` (naming `target`) if no record matches.
pub fn find<'a>(target: &str, records: &'a [ServerRecord]) -> Result<&'a ServerRecord> {
    let hostname = host::normalize(target)?;
    debug!(target = %target, hostname = %hostname, records = records.len(), "looking up credentials");

    match records
        .iter()
        .find(|record| {
            record_hostname(record).is_some_and(|h| h.eq_ignore_ascii_case(&hostname))
        })
    {
        Some(record) => {
            debug!(id = %record.id(), "matched stored server");
            Ok(record)
        }
        None => Err(Error::NotFound(target.to_string())),
    }
}

/// Map every parseable stored hostname to its username.
///
/// When two records share a hostname the first one wins, matching [`find`].
pub fn list_all(records: &[ServerRecord]) -> BTreeMap<Hostname, Username> {
    let mut listing = BTreeMap::new();
    for record in records {
        if let Some(hostname) = record_hostname(record) {
            listing
                .entry(hostname)
                .or_insert_with(|| record.username().to_string());
        }
    }
    listing
}
