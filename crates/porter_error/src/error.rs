//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, GatewayError, PaginateError, SessionError};

/// This is the foundation error enum for the Porter workspace. Each member
/// crate converts its own error type into a variant here at the facade
/// boundary.
///
/// # Examples
///
/// ```
/// use porter_error::{ConfigError, PorterError};
///
/// let config_err = ConfigError::new("missing field `prefix`");
/// let err: PorterError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PorterErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// String catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Paginator error
    #[from(PaginateError)]
    Paginate(PaginateError),
    /// Interactive session error
    #[from(SessionError)]
    Session(SessionError),
    /// Chat platform gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
}

/// Porter error with kind discrimination.
///
/// # Examples
///
/// ```
/// use porter_error::{CatalogError, PorterResult};
///
/// fn might_fail() -> PorterResult<()> {
///     Err(CatalogError::new("missing section [apply]"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Porter Error: {}", _0)]
pub struct PorterError(Box<PorterErrorKind>);

impl PorterError {
    /// Create a new error from a kind.
    pub fn new(kind: PorterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PorterErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PorterErrorKind
impl<T> From<T> for PorterError
where
    T: Into<PorterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Porter operations.
///
/// # Examples
///
/// ```
/// use porter_error::{ConfigError, PorterResult};
///
/// fn read_config() -> PorterResult<String> {
///     Err(ConfigError::new("porter.toml not found"))?
/// }
/// ```
pub type PorterResult<T> = std::result::Result<T, PorterError>;
