//! Declarative configuration tree and error types.
//!
//! # Examples
//!
//! ```rust
//! use ngrest::types::{ConfigTree, Section};
//!
//! let mut tree = ConfigTree::new();
//! assert!(tree.insert_if_absent("list", Section::new()));
//! ```

#[cfg(feature = "types")]
pub use ngrest_types::*;
