//! Hostname normalization.
//!
//! Callers hand us either a full URL (`https://acme.jfrog.io/v2/`) or an
//! already-bare host (`acme.jfrog.io`). Both collapse to the bare hostname.

use url::Url;

use crate::core::constants::URL_SCHEMES;
use crate::error::{Error, Result};

/// Extract the bare hostname from a URL or host string.
///
/// Inputs starting with `http://` or `https://` are parsed as URLs and
/// reduced to their host component; scheme, credentials, port and path are
/// dropped. Anything else is returned verbatim.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if the URL branch is taken and the input
/// does not parse.
pub fn normalize(input: &str) -> Result<String> {
    if !URL_SCHEMES.iter().any(|scheme| input.starts_with(scheme)) {
        return Ok(input.to_string());
    }

    Ok(hostname(&parse_url(input)?))
}

/// Parse `input` as a URL, rejecting malformed percent-escapes.
///
/// The WHATWG parser passes `%zz` through untouched; a URL carrying one
/// is treated as malformed here.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` naming `input`.
pub(crate) fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| Error::MalformedUrl {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    if let Some(offset) = bad_escape(input) {
        return Err(Error::MalformedUrl {
            input: input.to_string(),
            reason: format!("invalid percent-encoding at byte {}", offset),
        });
    }
    Ok(url)
}

/// Offset of the first `%` not followed by two hex digits.
fn bad_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        let valid = b != b'%'
            || matches!(bytes.get(i + 1..i + 3), Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
        (!valid).then_some(i)
    })
}

/// Hostname of a parsed URL, without IPv6 brackets.
///
/// URLs without a host yield an empty string, which never matches a lookup.
pub(crate) fn hostname(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_is_verbatim() {
        assert_eq!(normalize("acme.jfrog.io").unwrap(), "acme.jfrog.io");
        assert_eq!(normalize("not a url").unwrap(), "not a url");
    }

    #[test]
    fn test_url_is_reduced_to_host() {
        assert_eq!(
            normalize("https://acme.jfrog.io/artifactory/api/v2").unwrap(),
            "acme.jfrog.io"
        );
        assert_eq!(
            normalize("http://user:pw@acme.jfrog.io:8081/x?y=1").unwrap(),
            "acme.jfrog.io"
        );
    }

    #[test]
    fn test_ipv6_host_drops_brackets() {
        assert_eq!(normalize("https://[::1]:8443/v2").unwrap(), "::1");
    }

    #[test]
    fn test_malformed_url_fails() {
        let err = normalize("https://exa mple.com").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));

        let err = normalize("http://").unwrap_err();
        assert!(matches!(err, Error::MalformedUrl { .. }));
    }

    #[test]
    fn test_invalid_percent_encoding_fails() {
        for input in [
            "https://acme.jfrog.io/%zz",
            "https://acme.jfrog.io/v2/%4",
            "https://acme.jfrog.io/%",
            "http://acme.jfrog.io/?q=%g1",
        ] {
            let err = normalize(input).unwrap_err();
            assert!(matches!(err, Error::MalformedUrl { .. }), "{input} should fail, got {err:?}");
            assert!(err.to_string().contains("percent-encoding"));
        }
    }

    #[test]
    fn test_valid_percent_encoding_passes() {
        assert_eq!(
            normalize("https://acme.jfrog.io/a%20b/%2Fc%7e").unwrap(),
            "acme.jfrog.io"
        );
        // Bare hosts are never parsed.
        assert_eq!(normalize("acme%zz").unwrap(), "acme%zz");
    }

    #[test]
    fn test_scheme_prefix_is_case_sensitive() {
        // Mirrors the prefix check: upper-case schemes are treated as hosts.
        assert_eq!(normalize("HTTPS://acme.jfrog.io").unwrap(), "HTTPS://acme.jfrog.io");
    }
}
