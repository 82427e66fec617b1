//! Plugin registry
//!
//! The builder records plugin invocations by keyword only. A generator that
//! needs the concrete widget behind a keyword looks it up here, and can
//! validate a whole tree up front so a typo in a model's configuration fails
//! the configuration pass instead of rendering an incomplete UI.

use indexmap::IndexMap;
use ngrest_types::{
	ConfigError, ConfigResult, ConfigTree, PLUGIN_NAMESPACE, PluginDescriptor, capitalize_first,
};

/// Built-in plugin keywords and what they render
const BUILTIN_PLUGINS: &[(&str, &str)] = &[
	("text", "Single line text input"),
	("textarea", "Multi line text input"),
	("password", "Masked password input"),
	("number", "Integer input"),
	("decimal", "Decimal number input"),
	("date", "Date picker"),
	("datetime", "Date and time picker"),
	("toggleStatus", "On/off toggle"),
	("dropdown", "Dropdown over a configured source"),
	("selectArray", "Select from a static list of options"),
	("selectModel", "Select a record of another model"),
	("image", "Image upload"),
	("file", "File upload"),
	("checkboxList", "Multiple choice checkbox list"),
];

/// A plugin known to the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
	/// Keyword used in configurations
	pub keyword: String,
	/// Fully qualified plugin class
	pub class: String,
	/// Short description
	pub description: String,
}

impl PluginSpec {
	/// Create a spec whose class lives in the default plugins namespace
	pub fn new(keyword: impl Into<String>, description: impl Into<String>) -> Self {
		let keyword = keyword.into();
		let class = format!("{}{}", PLUGIN_NAMESPACE, capitalize_first(&keyword));
		Self {
			keyword,
			class,
			description: description.into(),
		}
	}

	/// Override the plugin class
	pub fn with_class(mut self, class: impl Into<String>) -> Self {
		self.class = class.into();
		self
	}
}

/// Keyword to plugin lookup table
///
/// # Examples
///
/// ```
/// use ngrest_core::registry::PluginRegistry;
///
/// let registry = PluginRegistry::with_builtin();
/// let spec = registry.resolve("selectArray").unwrap();
/// assert_eq!(spec.class, "\\admin\\ngrest\\plugins\\SelectArray");
/// assert!(registry.resolve("slider").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
	plugins: IndexMap<String, PluginSpec>,
}

impl PluginRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry holding the built-in plugins
	pub fn with_builtin() -> Self {
		BUILTIN_PLUGINS
			.iter()
			.fold(Self::new(), |mut registry, (keyword, description)| {
				registry.register(PluginSpec::new(*keyword, *description));
				registry
			})
	}

	/// Add a plugin, replacing any plugin with the same keyword
	pub fn register(&mut self, spec: PluginSpec) -> &mut Self {
		if self.plugins.contains_key(&spec.keyword) {
			tracing::debug!(keyword = %spec.keyword, "overriding registered plugin");
		}
		self.plugins.insert(spec.keyword.clone(), spec);
		self
	}

	/// Whether `keyword` is known
	pub fn contains(&self, keyword: &str) -> bool {
		self.plugins.contains_key(keyword)
	}

	/// Number of known plugins
	pub fn len(&self) -> usize {
		self.plugins.len()
	}

	/// Whether no plugin is known
	pub fn is_empty(&self) -> bool {
		self.plugins.is_empty()
	}

	/// Look up `keyword`
	pub fn resolve(&self, keyword: &str) -> ConfigResult<&PluginSpec> {
		self.plugins
			.get(keyword)
			.ok_or_else(|| ConfigError::UnknownPlugin(format!("'{}' is not registered", keyword)))
	}

	/// Look up the plugin behind a recorded invocation
	pub fn resolve_descriptor(&self, plugin: &PluginDescriptor) -> ConfigResult<&PluginSpec> {
		self.resolve(&plugin.keyword)
	}

	/// Resolve every plugin invocation in `tree`
	///
	/// Fails on the first unknown keyword, naming its section and field.
	pub fn validate(&self, tree: &ConfigTree) -> ConfigResult<()> {
		for (section_name, section) in tree.iter() {
			for field in section.fields() {
				for plugin in &field.plugins {
					if !self.contains(&plugin.keyword) {
						tracing::warn!(
							section = section_name,
							field = %field.name,
							keyword = %plugin.keyword,
							"configuration uses an unknown plugin"
						);
						return Err(ConfigError::UnknownPlugin(format!(
							"'{}' on field '{}' in section '{}' is not registered",
							plugin.keyword, field.name, section_name
						)));
					}
				}
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ngrest_types::{FieldDescriptor, PluginArgs, Section};
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> PluginRegistry {
		PluginRegistry::with_builtin()
	}

	fn tree_with_plugin(keyword: &str) -> ConfigTree {
		let mut field = FieldDescriptor::new("title", "Title");
		field
			.plugins
			.push(PluginDescriptor::new(keyword, PluginArgs::new()));
		let mut section = Section::new();
		section.insert_field(field);
		let mut tree = ConfigTree::new();
		tree.insert_if_absent("create", section);
		tree
	}

	#[rstest]
	fn builtin_registry_knows_common_widgets(registry: PluginRegistry) {
		// Act & Assert
		assert_eq!(registry.len(), BUILTIN_PLUGINS.len());
		for keyword in ["text", "password", "datetime", "selectArray", "dropdown"] {
			assert!(registry.contains(keyword), "missing {}", keyword);
		}
	}

	#[rstest]
	fn custom_plugin_can_override_class(mut registry: PluginRegistry) {
		// Arrange
		let spec = PluginSpec::new("text", "Custom text").with_class("\\app\\plugins\\RichText");

		// Act
		registry.register(spec);

		// Assert
		assert_eq!(registry.resolve("text").unwrap().class, "\\app\\plugins\\RichText");
		assert_eq!(registry.len(), BUILTIN_PLUGINS.len());
	}

	#[rstest]
	fn validate_accepts_known_plugins(registry: PluginRegistry) {
		// Act & Assert
		assert!(registry.validate(&tree_with_plugin("selectArray")).is_ok());
	}

	#[rstest]
	fn validate_names_the_offending_field(registry: PluginRegistry) {
		// Act
		let err = registry.validate(&tree_with_plugin("slider")).unwrap_err();

		// Assert
		assert_eq!(
			err,
			ConfigError::UnknownPlugin(
				"'slider' on field 'title' in section 'create' is not registered".into()
			)
		);
	}

	#[rstest]
	fn empty_registry_resolves_nothing() {
		// Arrange
		let registry = PluginRegistry::new();

		// Act & Assert
		assert!(registry.is_empty());
		assert!(matches!(
			registry.resolve("text"),
			Err(ConfigError::UnknownPlugin(_))
		));
	}
}
