//! Adapter error types

use thiserror::Error;

/// Errors surfaced by the adapter pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Required top-level fields are absent or ill-typed. The turn is not
    /// handled by this adapter; the host routes it elsewhere and nothing
    /// is surfaced to the end user.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// No resolvable intent name. Non-fatal: classification yields
    /// `RequestType::Undefined` and the host's default handling applies.
    #[error("unrecognized intent")]
    UnrecognizedIntent,

    /// The external request/response codec collaborator failed. Propagated
    /// unchanged to the caller; the host's error channel reports it.
    #[error("codec failure: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an external codec error
    pub fn codec<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Codec(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
