//! Configuration builder, model description trait, and plugin registry.
//!
//! # Examples
//!
//! ```rust
//! use ngrest::builder::{Config, Options};
//!
//! let config = Config::new("api-admin-user", "id", Options::new()).unwrap();
//! assert_eq!(config.rest_url(), "admin/api-admin-user");
//! ```

#[cfg(feature = "builder")]
pub use ngrest_core::*;
