//! Bazel credential helper backed by the JFrog CLI configuration.

use clap::Parser;

use jfrog_credential_helpers::cli::bazel::{execute, Cli};
use jfrog_credential_helpers::cli::{init_tracing, output};
use jfrog_credential_helpers::core::store;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = store::default_backend().and_then(|store| {
        execute(
            cli.command,
            store.as_ref(),
            std::io::stdin().lock(),
            std::io::stdout().lock(),
        )
    });

    if let Err(e) = result {
        output::fatal(&e);
        std::process::exit(1);
    }
}
