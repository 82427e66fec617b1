//! # ngrest
//!
//! Declarative admin configuration for ngrest models.
//!
//! A model describes, at runtime, which fields appear in its list, create,
//! update, and delete views, which UI plugins render each field, and which
//! active windows attach to its records. The description is captured into an
//! ordered tree that a downstream generator serializes and renders.
//!
//! ## Feature Flags
//!
//! - `types` - Declarative tree and error types ([`types`])
//! - `builder` - Fluent configuration builder and model trait ([`builder`])
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use ngrest::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> ConfigResult<()> {
//! let mut config = Config::new("api-admin-user", "id", Options::new())?;
//! config
//!     .list()
//!     .field("firstname", "Vorname")?
//!     .dropdown(json!({"source": "titles"}))?;
//!
//! let list = config.get_key("list");
//! assert_eq!(list.field("firstname").unwrap().plugins[0].class, "Dropdown");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "builder")]
pub mod builder;
#[cfg(feature = "types")]
pub mod types;

/// Commonly used items
pub mod prelude {
	#[cfg(feature = "builder")]
	pub use crate::builder::{
		ActiveWindow, ActiveWindowSpec, AttributeType, Config, NgRestModel, Options,
		PluginRegistry, Scope, SortDirection,
	};
	#[cfg(feature = "types")]
	pub use crate::types::{
		ConfigError, ConfigResult, ConfigTree, FieldDescriptor, PluginArgs, PluginDescriptor,
		Registration, Section,
	};
}
