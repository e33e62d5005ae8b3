//! `docker-credential-jfrog` command line.
//!
//! Docker runs the helper as `docker-credential-jfrog <action>`, with the
//! action's input on stdin. `login` and `logout` are helper extensions that
//! also accept the server URL as an argument.

use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::store::Store;
use crate::error::{Error, Result};
use crate::protocol::docker::{ArtifactoryKeychain, Credentials, Keychain};

/// Docker credential helper for JFrog servers configured with `jf`.
#[derive(Parser)]
#[command(name = "docker-credential-jfrog", version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store credentials read from stdin (unsupported)
    Store,

    /// Print credentials for the server URL read from stdin
    Get,

    /// Erase credentials for the server URL read from stdin (unsupported)
    Erase,

    /// Print known hosts and their usernames
    List,

    /// Log into a server with the interactive jf web login
    Login {
        /// Server URL; read from stdin when omitted
        server_url: Option<String>,
    },

    /// Remove a server from the jf configuration
    Logout {
        /// Server URL; read from stdin when omitted
        server_url: Option<String>,
    },

    /// Print the helper version
    Version,
}

/// Execute a command against `store`.
pub fn execute<R: Read, W: Write>(
    command: Command,
    store: &dyn Store,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let keychain = ArtifactoryKeychain::new(store);

    match command {
        Command::Store => {
            // Rejected regardless of what arrives on stdin.
            let credentials = serde_json::from_reader(input).unwrap_or_else(|e| {
                debug!(error = %e, "undecodable store request");
                Credentials::default()
            });
            keychain.add(&credentials)
        }
        Command::Get => {
            let server_url = read_server_url(&mut input)?;
            let (username, secret) = keychain.get(&server_url)?;
            let credentials = Credentials {
                server_url,
                username,
                secret: secret.as_str().to_string(),
            };
            write_json(&mut output, &credentials)
        }
        Command::Erase => {
            let mut buf = String::new();
            if let Err(e) = input.read_to_string(&mut buf) {
                debug!(error = %e, "unreadable erase request");
            }
            keychain.delete(buf.trim())
        }
        Command::List => write_json(&mut output, &keychain.list()?),
        Command::Login { server_url } => {
            let server_url = arg_or_stdin(server_url, &mut input)?;
            keychain.login(&server_url)
        }
        Command::Logout { server_url } => {
            let server_url = arg_or_stdin(server_url, &mut input)?;
            keychain.logout(&server_url)
        }
        Command::Version => {
            writeln!(output, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
    }
}

/// Read a server URL from stdin, trimming surrounding whitespace.
fn read_server_url<R: Read>(input: &mut R) -> Result<String> {
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;

    let server_url = buf.trim();
    if server_url.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug!(url = %server_url, "read server url");
    Ok(server_url.to_string())
}

fn arg_or_stdin<R: Read>(arg: Option<String>, input: &mut R) -> Result<String> {
    match arg {
        Some(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
        Some(_) => Err(Error::EmptyInput),
        None => read_server_url(input),
    }
}

fn write_json<W: Write, T: serde::Serialize>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, value)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
