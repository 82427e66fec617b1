//! # ngrest-core
//!
//! Configuration builder for the ngrest admin generator.
//!
//! A model declares, at configuration time, which fields appear in its
//! list/create/update/delete views, which plugins render each field, and
//! which active windows attach to its records. The result is an ordered,
//! declarative [`ConfigTree`](ngrest_types::ConfigTree) that a downstream
//! generator serializes and renders.
//!
//! - [`config`]: the fluent [`Config`] builder and its cursor
//! - [`model`]: the [`NgRestModel`] description trait
//! - [`window`]: active windows registered on a configuration
//! - [`registry`]: keyword to plugin lookup for generators
//! - [`options`]: the read-only options bag
//! - [`hash`]: model and registration fingerprints
//!
//! ## Examples
//!
//! ```
//! use ngrest_core::{Config, Options};
//! use ngrest_core::registry::PluginRegistry;
//!
//! # fn main() -> ngrest_types::ConfigResult<()> {
//! let mut config = Config::new("api-admin-user", "id", Options::new())?;
//! config.list().field("email", "E-Mail")?.text()?;
//! config.update().copy_from("list", &["id"])?;
//!
//! PluginRegistry::with_builtin().validate(config.get())?;
//! assert_eq!(config.get_key("update").field_names(), vec!["email"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod hash;
pub mod model;
pub mod options;
pub mod registry;
pub mod window;

pub use config::{
	ACTIVE_WINDOWS, CREATE, Config, Cursor, DELETE, LIST, PRIMARY_KEY_ALIAS, REST_URL_PREFIX,
	UPDATE,
};
pub use model::{AttributeType, NgRestModel, Scope, SortDirection};
pub use options::Options;
pub use registry::{PluginRegistry, PluginSpec};
pub use window::{ActiveWindow, ActiveWindowSpec};
