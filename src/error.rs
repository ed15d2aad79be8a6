use thiserror::Error;

/// Failures that abort a table operation. The table is left unmodified.
///
/// A headword that is non-empty but badly shaped is not an error: the
/// operation returns `Ok(false)` instead.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("headword must not be empty")]
    EmptyHeadword,
    #[error("translation must not be empty")]
    EmptyTranslation,
    #[error("failed to write translations to output sink: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// True for the caller-contract violations (empty arguments).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TableError::EmptyHeadword | TableError::EmptyTranslation)
    }
}
