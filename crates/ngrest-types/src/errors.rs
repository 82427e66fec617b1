//! Error types for ngrest configuration

use thiserror::Error;

/// Configuration error type
///
/// Every error is raised synchronously by the call that violated its
/// precondition. The message names the offending section, field, or
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// A required identifier was missing or malformed
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// An operation was attempted without the cursor state it requires
	#[error("Invalid state: {0}")]
	InvalidState(String),

	/// A referenced section, field, or registration does not exist
	#[error("Key not found: {0}")]
	KeyNotFound(String),

	/// A registration with the same content hash already exists
	#[error("Already registered: {0}")]
	AlreadyRegistered(String),

	/// A plugin keyword has no entry in the plugin registry
	#[error("Unknown plugin: {0}")]
	UnknownPlugin(String),

	/// The options bag could not be loaded
	#[error("Invalid options: {0}")]
	InvalidOptions(String),
}

/// Coarse error classification
///
/// Groups the variants of [`ConfigError`] into the three failure kinds a
/// configuration pass distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Missing or malformed input
	InvalidArgument,
	/// Cursor precondition not met
	InvalidState,
	/// Lookup of a section, field, registration, or plugin failed
	Key,
}

impl ConfigError {
	/// Get the coarse kind of this error
	///
	/// # Examples
	///
	/// ```
	/// use ngrest_types::{ConfigError, ErrorKind};
	///
	/// let err = ConfigError::AlreadyRegistered("abc".into());
	/// assert_eq!(err.kind(), ErrorKind::Key);
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			ConfigError::InvalidArgument(_) | ConfigError::InvalidOptions(_) => {
				ErrorKind::InvalidArgument
			}
			ConfigError::InvalidState(_) => ErrorKind::InvalidState,
			ConfigError::KeyNotFound(_)
			| ConfigError::AlreadyRegistered(_)
			| ConfigError::UnknownPlugin(_) => ErrorKind::Key,
		}
	}
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
