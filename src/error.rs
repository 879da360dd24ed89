use thiserror::Error;

/// Unified error type for the fallible edges of the crate.
///
/// The matching engine itself never fails: every `(agents, path)` query
/// produces a boolean, and parsing drops malformed lines instead of
/// erroring. Only file I/O and the optional binary cache can go wrong.
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "binary-cache")]
    #[error(transparent)]
    Serialize(#[from] crate::serial::SerializeError),

    #[cfg(feature = "binary-cache")]
    #[error(transparent)]
    Deserialize(#[from] crate::serial::DeserializeError),
}
