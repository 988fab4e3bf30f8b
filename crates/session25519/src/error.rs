/// Derivation error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or internally inconsistent KDF / hash parameters.
    /// Always fatal, never user-recoverable; with the canonical fixed
    /// parameters this should only ever surface from tests.
    #[error("invalid derivation configuration: {0}")]
    Configuration(String),

    /// The keypair primitive rejected the derived seed or produced a
    /// degenerate key. Retrying with identical inputs would fail
    /// identically, so this is never retried.
    #[error("keypair primitive rejected derived seed: {0}")]
    InvalidSeed(String),

    /// Textual input was not valid UTF-8. Raised before any
    /// cryptographic work begins.
    #[error("input text is not valid utf-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A pending derivation was abandoned before completion.
    /// No partial key bundle is ever observable.
    #[error("derivation cancelled")]
    Cancelled,
}

impl Error {
    /// Configuration error from anything displayable.
    pub(crate) fn config(e: impl std::fmt::Display) -> Self {
        Self::Configuration(e.to_string())
    }
}

/// Derivation result type.
pub type SessionResult<T> = Result<T, Error>;
