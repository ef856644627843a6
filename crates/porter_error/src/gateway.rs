//! Chat platform gateway error types.
//!
//! These errors cover the outbound side of the platform adapter: sending,
//! editing and deleting messages, reaction management and channel edits.

use derive_getters::Getters;

/// Gateway error variants.
///
/// Represents different error conditions that can occur while talking to the
/// chat platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum GatewayErrorKind {
    /// The target message, channel or user no longer exists.
    #[display("Not found: {_0}")]
    NotFound(String),

    /// The bot lacks permission for the requested operation.
    #[display("Forbidden: {_0}")]
    Forbidden(String),

    /// Transport-level failure (HTTP error, gateway disconnect, rate limit).
    #[display("Transport error: {_0}")]
    Transport(String),

    /// The configured bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,

    /// The adapter is not connected to a guild yet.
    #[display("No guild available: {_0}")]
    NoGuild(String),
}

/// Gateway error with source location tracking.
///
/// Captures the error kind along with the file and line where the error
/// occurred.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    line: u32,
    file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use porter_error::{GatewayError, GatewayErrorKind};
    ///
    /// let err = GatewayError::new(GatewayErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the target of the request is already gone or out of reach.
    ///
    /// Cleanup paths treat these as success: deleting an already-deleted
    /// message reaches the same terminal state.
    pub fn is_gone(&self) -> bool {
        matches!(
            self.kind,
            GatewayErrorKind::NotFound(_) | GatewayErrorKind::Forbidden(_)
        )
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
