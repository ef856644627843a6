//! Interactive session error types.

use crate::{GatewayError, PaginateError};
use derive_getters::Getters;

/// Session error variants.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum SessionErrorKind {
    /// The session query did not match any known subject.
    ///
    /// Reported to the user as a visible error message; the session is never
    /// started.
    #[display("{_0}")]
    QueryNotFound(String),

    /// Page building failed.
    #[display("Page building failed: {_0}")]
    #[from(PaginateError)]
    Paginate(PaginateError),

    /// An outbound platform request failed.
    #[display("Gateway request failed: {_0}")]
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Session error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    kind: SessionErrorKind,
    line: u32,
    file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use porter_error::{SessionError, SessionErrorKind};
    ///
    /// let err = SessionError::new(SessionErrorKind::QueryNotFound(
    ///     "no command named `blep`".into(),
    /// ));
    /// ```
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error should be shown to the invoking user rather than
    /// propagated to the top-level handler.
    pub fn is_user_facing(&self) -> bool {
        matches!(self.kind, SessionErrorKind::QueryNotFound(_))
    }
}

impl From<PaginateError> for SessionError {
    #[track_caller]
    fn from(err: PaginateError) -> Self {
        SessionError::new(SessionErrorKind::Paginate(err))
    }
}

impl From<GatewayError> for SessionError {
    #[track_caller]
    fn from(err: GatewayError) -> Self {
        SessionError::new(SessionErrorKind::Gateway(err))
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
