//! Field descriptors

use crate::plugin::PluginDescriptor;
use serde::{Deserialize, Serialize};

/// A named, labeled field with its rendering plugins in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	/// Attribute name
	pub name: String,
	/// Display label
	pub alias: String,
	/// Plugins attached to the field
	#[serde(default)]
	pub plugins: Vec<PluginDescriptor>,
}

impl FieldDescriptor {
	/// Create a field without plugins
	pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			alias: alias.into(),
			plugins: Vec::new(),
		}
	}

	/// Whether the field renders as plain text
	///
	/// A field without any plugin is rendered with the generator's default
	/// text column.
	pub fn is_plain_text(&self) -> bool {
		self.plugins.is_empty()
	}

	/// Keywords of the attached plugins, in order
	pub fn plugin_keywords(&self) -> Vec<&str> {
		self.plugins.iter().map(|p| p.keyword.as_str()).collect()
	}
}
