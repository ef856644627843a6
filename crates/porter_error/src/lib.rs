//! Error types for the Porter community bot.
//!
//! This crate provides the foundation error types used throughout the Porter
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use porter_error::{ConfigError, PorterResult};
//!
//! fn load_token() -> PorterResult<String> {
//!     Err(ConfigError::new("DISCORD_TOKEN is not set"))?
//! }
//!
//! match load_token() {
//!     Ok(token) => println!("Got token of length {}", token.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod gateway;
mod paginate;
mod session;

pub use catalog::CatalogError;
pub use config::ConfigError;
pub use error::{PorterError, PorterErrorKind, PorterResult};
pub use gateway::{GatewayError, GatewayErrorKind, GatewayResult};
pub use paginate::{PaginateError, PaginateErrorKind};
pub use session::{SessionError, SessionErrorKind, SessionResult};
