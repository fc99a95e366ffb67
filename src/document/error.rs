//! Errors raised while reading options from a document

/// The document could not be used at all
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Options document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Why a single field of an otherwise usable document was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldErrorKind {
    #[error("expecting {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0:?} is not an integer")]
    NotAnInteger(String),

    #[error("{0} does not fit in a 32-bit integer")]
    OutOfRange(String),

    #[error("element {index}: expecting string, found {found}")]
    WrongElementType { index: usize, found: &'static str },
}

/// A field that could not be read, and why
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {key:?}: {kind}")]
pub struct FieldError {
    /// Document key of the rejected field
    pub key: &'static str,

    pub kind: FieldErrorKind,
}

impl FieldError {
    pub(crate) fn new(key: &'static str, kind: FieldErrorKind) -> Self {
        Self { key, kind }
    }
}
