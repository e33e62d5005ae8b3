//! Diagnostic output for the helper binaries.
//!
//! Stdout carries protocol payloads, so everything here goes to stderr.
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ not logged into https://acme.jfrog.io from JFrog CLI`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check JFROG_CLI_HOME_DIR and the jf CLI setup`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Report a fatal error: the diagnostic line plus its hint, if any.
pub fn fatal(err: &crate::error::Error) {
    error(&err.to_string());
    if let Some(hint) = err.hint() {
        self::hint(hint);
    }
}
