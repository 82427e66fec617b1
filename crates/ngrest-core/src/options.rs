//! Options bag supplied to a configuration at construction
//!
//! Options are a flat, ordered mapping of arbitrary values. They are
//! read-only once handed to a [`Config`](crate::Config) and every lookup
//! takes a default.

use indexmap::IndexMap;
use ngrest_types::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat mapping of configuration options
///
/// # Examples
///
/// ```
/// use ngrest_core::Options;
///
/// let options = Options::new().with("perPage", 50);
/// assert_eq!(options.get_or("perPage", 25_u32), 50);
/// assert_eq!(options.get_or("title", String::from("Users")), "Users");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<String, Value>);

impl Options {
	/// Create an empty options bag
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `key` to `value`
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Set `key` to `value` unless it is already set
	pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.entry(key.into()).or_insert_with(|| value.into());
		self
	}

	/// Load options from the top-level keys of a TOML document
	///
	/// Nested tables are kept as JSON objects.
	///
	/// # Examples
	///
	/// ```
	/// use ngrest_core::Options;
	///
	/// let options = Options::from_toml_str(r#"
	/// perPage = 50
	/// [labels]
	/// firstname = "Vorname"
	/// "#).unwrap();
	///
	/// assert_eq!(options.get_or("perPage", 0_u32), 50);
	/// assert_eq!(options.get("labels").unwrap()["firstname"], "Vorname");
	/// ```
	pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
		let table: toml::Table =
			toml::from_str(source).map_err(|e| ConfigError::InvalidOptions(e.to_string()))?;
		table
			.into_iter()
			.map(|(key, value)| {
				serde_json::to_value(value)
					.map(|value| (key, value))
					.map_err(|e| ConfigError::InvalidOptions(e.to_string()))
			})
			.collect()
	}

	/// Load options from a JSON object
	pub fn from_json_value(value: Value) -> ConfigResult<Self> {
		match value {
			Value::Object(map) => Ok(map.into_iter().collect()),
			other => Err(ConfigError::InvalidOptions(format!(
				"expected an object of options, got {}",
				json_type_name(&other)
			))),
		}
	}

	/// Raw value stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Value stored under `key` converted to `T`, or `default`
	///
	/// A value that cannot be converted to `T` is treated as missing.
	pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
		let Some(value) = self.0.get(key) else {
			return default;
		};
		match T::deserialize(value) {
			Ok(converted) => converted,
			Err(e) => {
				tracing::warn!(option = key, error = %e, "option has an unexpected type, using default");
				default
			}
		}
	}

	/// Whether `key` is set
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of options
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no option is set
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Options in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}
}

impl FromIterator<(String, Value)> for Options {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
