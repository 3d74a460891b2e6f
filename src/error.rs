//! Unified error type.

use std::fmt;

/// The error type returned by route registration.
///
/// Recognition and URL generation never fail with an `Error`: a path no
/// route accepts is `None`, not a fault. This type surfaces misconfigured
/// route tables, which are programmer errors caught at startup.
#[derive(Debug)]
pub enum Error {
    /// The path template was rejected by the radix tree.
    InvalidTemplate {
        template: String,
        source: matchit::InsertError,
    },
    /// Two routes were registered under the same name.
    DuplicateName(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemplate { template, source } => {
                write!(f, "invalid route `{template}`: {source}")
            }
            Self::DuplicateName(name) => write!(f, "duplicate route name `{name}`"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTemplate { source, .. } => Some(source),
            Self::DuplicateName(_) => None,
        }
    }
}
