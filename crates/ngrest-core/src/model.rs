//! Model description trait
//!
//! This module defines how a model describes itself to the admin generator.
//! A model declares its attribute types, which attributes appear in which
//! section, and which active windows attach to its records;
//! [`NgRestModel::build_config`] turns that description into a [`Config`].

use crate::config::{ACTIVE_WINDOWS, Config, LIST};
use crate::options::Options;
use crate::window::ActiveWindowSpec;
use ngrest_types::{ConfigError, ConfigResult, PluginArgs};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// How an attribute is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeType {
	/// Attribute name
	pub name: String,
	/// Plugin keyword, e.g. `text` or `selectArray`
	pub keyword: String,
	/// Plugin arguments
	pub args: PluginArgs,
}

impl AttributeType {
	/// Render `name` with plugin `keyword` and no arguments
	pub fn new(name: impl Into<String>, keyword: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			keyword: keyword.into(),
			args: PluginArgs::new(),
		}
	}

	/// Set the plugin arguments
	pub fn with_args(mut self, args: impl Into<PluginArgs>) -> Self {
		self.args = args.into();
		self
	}
}

/// Which attributes a section shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
	/// Section showing the listed attributes, in order
	Fields(String, Vec<String>),
	/// Section enabled without attributes (e.g. the delete action)
	Enabled(String),
}

impl Scope {
	/// Section `section` showing `fields`
	pub fn fields<I, S>(section: impl Into<String>, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Scope::Fields(section.into(), fields.into_iter().map(Into::into).collect())
	}

	/// Section `section` enabled without attributes
	pub fn enabled(section: impl Into<String>) -> Self {
		Scope::Enabled(section.into())
	}

	/// Name of the section
	pub fn section(&self) -> &str {
		match self {
			Scope::Fields(section, _) | Scope::Enabled(section) => section,
		}
	}
}

/// Sort direction of the default list order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending
	Asc,
	/// Descending
	Desc,
}

/// Trait for describing a model to the admin generator
///
/// Only [`api_endpoint`](Self::api_endpoint) is required; every other method
/// has an empty default.
pub trait NgRestModel {
	/// REST endpoint of the model, without the admin prefix
	fn api_endpoint(&self) -> &str;

	/// Name of the primary key attribute
	///
	/// By default, returns "id".
	fn primary_key(&self) -> &str {
		"id"
	}

	/// Plugin of each stored attribute
	fn attribute_types(&self) -> Vec<AttributeType> {
		Vec::new()
	}

	/// Plugin of each computed attribute
	fn extra_attribute_types(&self) -> Vec<AttributeType> {
		Vec::new()
	}

	/// Display label of `attribute`
	///
	/// Attributes without a label are shown under their name.
	fn attribute_label(&self, _attribute: &str) -> Option<String> {
		None
	}

	/// Sections and the attributes they show
	fn scopes(&self) -> Vec<Scope> {
		Vec::new()
	}

	/// Active windows attached to the model's records
	fn active_windows(&self) -> Vec<ActiveWindowSpec> {
		Vec::new()
	}

	/// Default list order
	fn list_order(&self) -> Vec<(String, SortDirection)> {
		Vec::new()
	}

	/// Names of the predefined list filters
	fn filters(&self) -> Vec<String> {
		Vec::new()
	}

	/// Attributes searched by the generic search
	fn search_fields(&self) -> Vec<String> {
		Vec::new()
	}

	/// Extra options passed to the configuration
	fn options(&self) -> Options {
		Options::new()
	}

	/// Build the configuration described by this model
	///
	/// List order, filters, and search fields are added to the options as
	/// `listOrder`, `filters`, and `searchFields` unless [`options`](Self::options)
	/// already sets them. Each scope opens its section and declares its
	/// attributes in order; the primary key keeps its place at the top of the
	/// list. Active windows are registered on the `aw` section.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::KeyNotFound`] if a scope names an attribute
	/// without a type, and any error of the underlying builder calls.
	fn build_config(&self) -> ConfigResult<Config> {
		let mut options = self.options();
		let list_order = self.list_order();
		if !list_order.is_empty() {
			let order: Vec<Value> = list_order
				.iter()
				.map(|(field, direction)| json!({"field": field, "direction": direction}))
				.collect();
			options = options.with_default("listOrder", order);
		}
		let filters = self.filters();
		if !filters.is_empty() {
			options = options.with_default("filters", filters);
		}
		let search_fields = self.search_fields();
		if !search_fields.is_empty() {
			options = options.with_default("searchFields", search_fields);
		}

		let mut config = Config::new(self.api_endpoint(), self.primary_key(), options)?;
		let attributes = self.attribute_types();
		let extra_attributes = self.extra_attribute_types();

		for scope in self.scopes() {
			let (section, fields) = match scope {
				Scope::Enabled(section) => {
					config.section(section);
					continue;
				}
				Scope::Fields(section, fields) => (section, fields),
			};
			config.section(section.clone());
			for name in fields {
				if section == LIST && name == self.primary_key() {
					continue;
				}
				let attribute = attributes
					.iter()
					.chain(extra_attributes.iter())
					.find(|a| a.name == name)
					.ok_or_else(|| {
						tracing::warn!(section = %section, attribute = %name, "scope references an attribute without a type");
						ConfigError::KeyNotFound(format!(
							"scope '{}' references attribute '{}' which has no type",
							section, name
						))
					})?;
				let label = self.attribute_label(&name).unwrap_or_else(|| name.clone());
				config
					.field(name, label)?
					.plugin(attribute.keyword.as_str(), attribute.args.clone())?;
			}
		}

		let windows = self.active_windows();
		if !windows.is_empty() {
			config.section(ACTIVE_WINDOWS);
			for spec in &windows {
				config.register(spec.window.as_ref(), spec.resolved_label())?;
			}
		}

		tracing::debug!(
			endpoint = self.api_endpoint(),
			sections = config.get().len(),
			"built ngrest config from model"
		);
		Ok(config)
	}
}
