//! String catalog error types.

/// Catalog error with source location tracking.
///
/// Raised when the string catalog fails schema validation at load time, so a
/// missing key aborts startup instead of surfacing at first access.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", message, line, file)]
pub struct CatalogError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use porter_error::CatalogError;
    ///
    /// let err = CatalogError::new("missing section [help]");
    /// assert!(err.message.contains("[help]"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
