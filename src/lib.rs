//! Credential helpers for JFrog servers configured with the `jf` CLI.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── bin/                  # bazel-credential-jfrog, docker-credential-jfrog
//! ├── cli/                  # Command-line interface
//! │   ├── bazel             # Bazel `get` over stdin/stdout
//! │   ├── docker            # Docker helper actions over stdin/stdout
//! │   └── output            # Diagnostics on stderr
//! ├── protocol/             # Response builders per client
//! │   ├── bazel             # Authorization header map
//! │   └── docker            # Username/secret pairs, host listing, login/logout
//! └── core/                 # Core library components
//!     ├── host              # URL or host -> bare hostname
//!     ├── identity          # <label>.jfrog.io -> server id
//!     ├── lookup            # hostname match over stored records
//!     ├── config            # jf config file model
//!     └── store/            # Store trait, jf and in-memory backends
//! ```
//!
//! Get and List match stored servers by hostname, whatever their domain.
//! Login and Logout address servers by id and only accept `<label>.jfrog.io`.

pub mod cli;
pub mod core;
pub mod error;
pub mod protocol;
