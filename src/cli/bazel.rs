//! `bazel-credential-jfrog` command line.
//!
//! Bazel runs the helper as `<helper> get`, writes a JSON request to stdin
//! and reads a JSON response from stdout.

use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::store::Store;
use crate::error::Result;
use crate::protocol::bazel::{ArtifactoryProvider, CredentialProvider, GetCredentialsRequest};

/// Bazel credential helper for JFrog servers configured with `jf`.
#[derive(Parser)]
#[command(name = "bazel-credential-jfrog", version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read a {"uri": ...} request from stdin and print the headers to attach
    Get,
}

/// Execute a command against `store`.
pub fn execute<R: Read, W: Write>(
    command: Command,
    store: &dyn Store,
    input: R,
    output: W,
) -> Result<()> {
    match command {
        Command::Get => serve_get(&ArtifactoryProvider::new(store), input, output),
    }
}

/// Decode one request, answer it, and encode the response as a JSON line.
pub fn serve_get<R: Read, W: Write>(
    provider: &dyn CredentialProvider,
    input: R,
    mut output: W,
) -> Result<()> {
    let request: GetCredentialsRequest = serde_json::from_reader(input)?;
    debug!(uri = %request.uri, "decoded get request");

    let response = provider.get(&request)?;

    serde_json::to_writer(&mut output, &response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
