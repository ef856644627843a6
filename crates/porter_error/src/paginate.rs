//! Paginator error types.

use derive_getters::Getters;

/// Paginator error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PaginateErrorKind {
    /// A single line exceeds the per-page character budget.
    ///
    /// This is a content-authoring bug, not a runtime condition to recover
    /// from.
    #[display("Line of {length} characters exceeds the page budget of {budget}")]
    LineTooLong {
        /// Length of the offending line
        length: usize,
        /// Character budget available for content on one page
        budget: usize,
    },
}

/// Paginator error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Paginate Error: {} at line {} in {}", kind, line, file)]
pub struct PaginateError {
    kind: PaginateErrorKind,
    line: u32,
    file: &'static str,
}

impl PaginateError {
    /// Create a new PaginateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PaginateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
