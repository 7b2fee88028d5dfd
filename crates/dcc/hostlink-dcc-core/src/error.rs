//! Error types surfaced by the dispatch layer.
//!
//! Only two conditions originate here: an operation the active provider does
//! not implement (surfaced as [`DccError::Unsupported`]) and malformed node
//! paths. Everything else is whatever the concrete backend raised, carried
//! through untransformed as [`DccError::Backend`].

use hostlink_api_core::PathError;
use thiserror::Error;

pub type DccResult<T> = Result<T, DccError>;

#[derive(Debug, Error)]
pub enum DccError {
    /// The resolved provider does not implement the requested operation.
    /// Distinct from "no provider registered", which never errors and falls
    /// back to the default provider instead.
    #[error("operation `{operation}` is not implemented by the active provider")]
    Unsupported { operation: &'static str },

    #[error(transparent)]
    Path(#[from] PathError),

    /// Failure raised inside a concrete backend; propagated verbatim.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl DccError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DccError::Unsupported { .. })
    }
}

/// Default body for every catalogue operation a provider leaves unimplemented.
#[inline]
pub fn unsupported<T>(operation: &'static str) -> DccResult<T> {
    Err(DccError::Unsupported { operation })
}
