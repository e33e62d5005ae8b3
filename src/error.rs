//! Error types for credential resolution and the helper transports.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed url '{input}': {reason}")]
    MalformedUrl { input: String, reason: String },

    #[error("invalid domain '{0}': must be <server>.jfrog.io")]
    InvalidDomain(String),

    #[error("not logged into {0} from JFrog CLI")]
    NotFound(String),

    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("operation not supported: {0}")]
    Unsupported(&'static str),

    #[error("no server url provided")]
    EmptyInput,

    #[error("jf config for '{id}' failed: {reason}")]
    Login { id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for the ordinary "not logged in" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// True when a host falls outside the `<label>.jfrog.io` convention.
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, Error::InvalidDomain(_))
    }

    /// A short follow-up suggestion shown under the diagnostic, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::NotFound(_) => Some("log in with jf: jf login, or jf config add <server-id>"),
            Error::Unsupported(_) => Some("use the login/logout commands instead"),
            Error::StoreUnavailable(_) => Some("check JFROG_CLI_HOME_DIR and the jf CLI setup"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
