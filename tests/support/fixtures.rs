//! Test fixtures and constants.

/// The canonical logged-in server.
pub const ACME: (&str, &str, &str, &str) = ("acme", "https://acme.jfrog.io", "u", "p");

/// A self-hosted server outside the jfrog.io convention.
pub const CORP: (&str, &str, &str, &str) = (
    "corp",
    "https://artifacts.corp.example/artifactory/",
    "svc",
    "corp-token",
);

/// A stale entry whose URL doesn't parse.
pub const BROKEN: (&str, &str, &str, &str) = ("broken", "acme.jfrog.io", "stale", "stale");

/// URL-safe base64 of `u:p`.
pub const ACME_BASIC: &str = "Basic dTpw";
