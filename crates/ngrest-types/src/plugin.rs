//! Plugin descriptors
//!
//! A plugin is a UI widget declaration attached to a field. The builder only
//! records the call: the keyword used, the class identifier derived from it,
//! and the arguments exactly as passed. Resolving a keyword to a concrete
//! widget happens downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Namespace prefix of plugin classes in the generated admin
pub const PLUGIN_NAMESPACE: &str = "\\admin\\ngrest\\plugins\\";

/// Uppercase the first character of `value`
///
/// # Examples
///
/// ```
/// use ngrest_types::capitalize_first;
///
/// assert_eq!(capitalize_first("selectArray"), "SelectArray");
/// assert_eq!(capitalize_first("9abc"), "9abc");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Arguments of a plugin invocation
///
/// Positional arguments are keyed by their zero-based position (`"0"`,
/// `"1"`, ...), named arguments by their name. Insertion order is kept.
/// A positional argument never overwrites a named one: if its position is
/// already taken as a name, the next free number is used as its key.
///
/// # Examples
///
/// ```
/// use ngrest_types::PluginArgs;
/// use serde_json::json;
///
/// let args = PluginArgs::new()
///     .arg("titles")
///     .named("initValue", 0);
///
/// assert_eq!(args.positional(0), Some(&json!("titles")));
/// assert_eq!(args.get("initValue"), Some(&json!(0)));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PluginArgs {
	values: IndexMap<String, Value>,
	#[serde(skip)]
	positional: Vec<String>,
}

impl PluginArgs {
	/// Create an empty argument list
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a positional argument
	pub fn arg(mut self, value: impl Into<Value>) -> Self {
		let mut position = self.positional.len();
		while self.values.contains_key(&position.to_string()) {
			position += 1;
		}
		let key = position.to_string();
		self.values.insert(key.clone(), value.into());
		self.positional.push(key);
		self
	}

	/// Set a named argument
	///
	/// Setting the same name twice keeps the position of the first call and
	/// the value of the last.
	pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Get an argument by name or stringified position
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.values.get(key)
	}

	/// Get the positional argument passed at `position`
	pub fn positional(&self, position: usize) -> Option<&Value> {
		self.positional
			.get(position)
			.and_then(|key| self.values.get(key))
	}

	/// Number of positional arguments
	pub fn positional_len(&self) -> usize {
		self.positional.len()
	}

	/// Total number of arguments
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether no argument was passed
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterate arguments in the order they were passed
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(key, value)| (key.as_str(), value))
	}

	// Serialized arguments do not record which keys were positional; numeric
	// keys are read back as positions.
	fn from_map(values: IndexMap<String, Value>) -> Self {
		let positional = values
			.keys()
			.filter(|key| key.parse::<usize>().is_ok())
			.cloned()
			.collect();
		Self { values, positional }
	}
}

impl PartialEq for PluginArgs {
	fn eq(&self, other: &Self) -> bool {
		self.values == other.values
	}
}

impl<'de> Deserialize<'de> for PluginArgs {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		IndexMap::<String, Value>::deserialize(deserializer).map(Self::from_map)
	}
}

/// Converts a JSON value into plugin arguments
///
/// Objects become named arguments, arrays positional ones, `null` no
/// arguments, and any scalar a single positional argument.
impl From<Value> for PluginArgs {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::new(),
			Value::Object(map) => map
				.into_iter()
				.fold(Self::new(), |args, (name, value)| args.named(name, value)),
			Value::Array(values) => values
				.into_iter()
				.fold(Self::new(), |args, value| args.arg(value)),
			scalar => Self::new().arg(scalar),
		}
	}
}

impl FromIterator<(String, Value)> for PluginArgs {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self::from_map(iter.into_iter().collect())
	}
}

/// A recorded plugin invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
	/// Keyword used at the call site, e.g. `selectArray`
	pub keyword: String,
	/// Class identifier derived from the keyword, e.g. `SelectArray`
	pub class: String,
	/// Arguments exactly as passed
	#[serde(default)]
	pub args: PluginArgs,
}

impl PluginDescriptor {
	/// Record an invocation of `keyword` with `args`
	///
	/// # Examples
	///
	/// ```
	/// use ngrest_types::{PluginArgs, PluginDescriptor};
	///
	/// let plugin = PluginDescriptor::new("dropdown", PluginArgs::new());
	/// assert_eq!(plugin.class, "Dropdown");
	/// assert_eq!(plugin.qualified_class(), "\\admin\\ngrest\\plugins\\Dropdown");
	/// ```
	pub fn new(keyword: impl Into<String>, args: PluginArgs) -> Self {
		let keyword = keyword.into();
		let class = capitalize_first(&keyword);
		Self {
			keyword,
			class,
			args,
		}
	}

	/// Class identifier prefixed with [`PLUGIN_NAMESPACE`]
	pub fn qualified_class(&self) -> String {
		format!("{}{}", PLUGIN_NAMESPACE, self.class)
	}
}
