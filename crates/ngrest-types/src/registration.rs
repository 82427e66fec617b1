//! Active window registrations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An auxiliary object (active window) attached to a model's records
///
/// Registrations are keyed by a content hash derived from the model and the
/// window type, so a consumer can look one up without iterating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
	/// Type identifier of the registered window
	pub class: String,
	/// Content hash the registration is stored under
	pub hash: String,
	/// Display label
	pub alias: String,
	/// Field name to strap map name bindings
	#[serde(default)]
	pub on: IndexMap<String, String>,
}

impl Registration {
	/// Create a registration without bindings
	pub fn new(class: impl Into<String>, hash: impl Into<String>, alias: impl Into<String>) -> Self {
		Self {
			class: class.into(),
			hash: hash.into(),
			alias: alias.into(),
			on: IndexMap::new(),
		}
	}

	/// Bind `field` to `strap_map`
	///
	/// A new binding replaces an existing one for the same field; bindings of
	/// other fields are kept.
	pub fn bind(&mut self, field: impl Into<String>, strap_map: impl Into<String>) {
		self.on.insert(field.into(), strap_map.into());
	}

	/// Strap map bound to `field`
	pub fn binding(&self, field: &str) -> Option<&str> {
		self.on.get(field).map(String::as_str)
	}
}
