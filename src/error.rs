pub type Result<T> = std::result::Result<T, JavadocError>;

/// Failures produced while locating javadoc content or extracting
/// parameter names from it.
///
/// Construction-time failures (`RootInvalid`) are always hard errors.
/// Lookup-time failures are subject to the caller's missing-names policy.
#[derive(Debug, thiserror::Error)]
pub enum JavadocError {
    #[error("not a javadoc root ({root}): {reason}")]
    RootInvalid { root: String, reason: String },

    #[error("no documentation page at {path}: {reason}")]
    ContentNotFound { path: String, reason: String },

    #[error("no declaration matching {member}: {reason}")]
    SignatureNotFound { member: String, reason: String },

    #[error("cannot extract parameter names for {member}: {reason}")]
    ExtractionFailed { member: String, reason: String },

    #[error("nested types have no standalone documentation page: {type_name}")]
    UnsupportedType { type_name: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl JavadocError {
    /// True for the "names not found" family of failures that a graceful
    /// caller folds into an empty result.
    pub fn is_missing(&self) -> bool {
        !matches!(self, JavadocError::RootInvalid { .. })
    }
}
