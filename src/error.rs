use thiserror::Error;

/// Errors raised while resolving a citation.
///
/// Only `parse_cv` hands these to its caller; the aggregate entry points
/// drop the failing entry and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    /// Book name could not be resolved by the canon
    #[error("unknown book: {0}")]
    UnknownBook(String),

    /// Marker shape is not one of the recognized chapter/verse forms
    #[error("badly formed chapter/verse reference: {0}")]
    BadlyFormed(String),
}
