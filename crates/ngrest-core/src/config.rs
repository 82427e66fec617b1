//! Fluent configuration builder
//!
//! A [`Config`] is created once per model and populated during the model's
//! configuration pass. Calls are chained: opening a section moves the
//! cursor to it, declaring a field moves the cursor to that field, and a
//! plugin invocation is appended to the field under the cursor.
//!
//! ```
//! use ngrest_core::{Config, Options};
//! use serde_json::json;
//!
//! # fn main() -> ngrest_types::ConfigResult<()> {
//! let mut config = Config::new("api-admin-user", "id", Options::new())?;
//! config
//!     .list()
//!     .field("firstname", "Vorname")?
//!     .dropdown(json!({"source": "titles"}))?;
//! config.create().field("email", "E-Mail")?.text()?;
//!
//! let list = config.get_key("list");
//! assert_eq!(list.field_names(), vec!["id", "firstname"]);
//! # Ok(())
//! # }
//! ```
//!
//! The builder is not reentrant. It is built, read, and discarded within one
//! configuration pass by a single caller.

use crate::hash;
use crate::options::Options;
use crate::window::ActiveWindow;
use ngrest_types::{
	ConfigError, ConfigResult, ConfigTree, FieldDescriptor, PluginArgs, PluginDescriptor,
	Registration, Section,
};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;

/// Path segment prepended to every REST endpoint
pub const REST_URL_PREFIX: &str = "admin/";

/// Display label of the primary key field
pub const PRIMARY_KEY_ALIAS: &str = "ID";

/// List view section
pub const LIST: &str = "list";
/// Create form section
pub const CREATE: &str = "create";
/// Update form section
pub const UPDATE: &str = "update";
/// Delete action section
pub const DELETE: &str = "delete";
/// Active window section
pub const ACTIVE_WINDOWS: &str = "aw";

/// Where the next builder call writes to
///
/// Opening a section, field, or registration overwrites the cursor state
/// below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
	section: Option<String>,
	field: Option<String>,
	registration: Option<String>,
}

impl Cursor {
	/// Currently open section
	pub fn section(&self) -> Option<&str> {
		self.section.as_deref()
	}

	/// Currently open field
	pub fn field(&self) -> Option<&str> {
		self.field.as_deref()
	}

	/// Content hash of the currently open registration
	pub fn registration(&self) -> Option<&str> {
		self.registration.as_deref()
	}

	fn open_section(&mut self, name: String) {
		self.section = Some(name);
		self.clear_entry();
	}

	fn open_field(&mut self, name: String) {
		self.field = Some(name);
		self.registration = None;
	}

	fn open_registration(&mut self, hash: String) {
		self.registration = Some(hash);
		self.field = None;
	}

	fn clear_entry(&mut self) {
		self.field = None;
		self.registration = None;
	}
}

/// Configuration builder for one model
#[derive(Debug, Clone)]
pub struct Config {
	tree: ConfigTree,
	cursor: Cursor,
	options: Options,
	rest_url: String,
	rest_primary_key: String,
}

impl Config {
	/// Create the configuration of the model served at `rest_url`
	///
	/// The endpoint is prefixed with [`REST_URL_PREFIX`]. The `list` section
	/// is opened and the primary key field is inserted into it first, with
	/// the alias [`PRIMARY_KEY_ALIAS`] and no plugin.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidArgument`] if `rest_primary_key` is empty.
	pub fn new(
		rest_url: impl AsRef<str>,
		rest_primary_key: impl Into<String>,
		options: Options,
	) -> ConfigResult<Self> {
		let rest_primary_key = rest_primary_key.into();
		if rest_primary_key.trim().is_empty() {
			return Err(ConfigError::InvalidArgument(format!(
				"rest primary key name of '{}' must not be empty",
				rest_url.as_ref()
			)));
		}

		let mut config = Self {
			tree: ConfigTree::new(),
			cursor: Cursor::default(),
			options,
			rest_url: format!("{}{}", REST_URL_PREFIX, rest_url.as_ref()),
			rest_primary_key,
		};
		let primary_key = config.rest_primary_key.clone();
		config.list().field(primary_key, PRIMARY_KEY_ALIAS)?;

		tracing::debug!(rest_url = %config.rest_url, primary_key = %config.rest_primary_key, "created ngrest config");
		Ok(config)
	}

	/// Open section `name`, declaring it if absent
	///
	/// Reopening a section keeps the fields already declared in it.
	pub fn section(&mut self, name: impl Into<String>) -> &mut Self {
		let name = name.into();
		if self.insert_if_absent(name.clone(), Section::new()) {
			tracing::debug!(section = %name, "declared section");
		}
		self.cursor.open_section(name);
		self
	}

	/// Open the `list` section
	pub fn list(&mut self) -> &mut Self {
		self.section(LIST)
	}

	/// Open the `create` section
	pub fn create(&mut self) -> &mut Self {
		self.section(CREATE)
	}

	/// Open the `update` section
	pub fn update(&mut self) -> &mut Self {
		self.section(UPDATE)
	}

	/// Open the `delete` section
	pub fn delete(&mut self) -> &mut Self {
		self.section(DELETE)
	}

	/// Open the active window section
	pub fn aw(&mut self) -> &mut Self {
		self.section(ACTIVE_WINDOWS)
	}

	/// Store `section` under `key` unless the key is already present
	///
	/// Returns `true` if the section was stored. Existing content is never
	/// overwritten.
	pub fn insert_if_absent(&mut self, key: impl Into<String>, section: Section) -> bool {
		self.tree.insert_if_absent(key, section)
	}

	/// Declare field `name` with display label `alias` in the open section
	///
	/// Declaring a field that already exists replaces it with an empty plugin
	/// list, keeping its position.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidState`] if no section is open and
	/// [`ConfigError::InvalidArgument`] if `name` is empty.
	pub fn field(
		&mut self,
		name: impl Into<String>,
		alias: impl Into<String>,
	) -> ConfigResult<&mut Self> {
		let name = name.into();
		let section_name = self.open_section_name("field")?;
		if name.is_empty() {
			return Err(ConfigError::InvalidArgument(format!(
				"field name in section '{}' must not be empty",
				section_name
			)));
		}

		let section = self.section_mut(&section_name)?;
		if section
			.insert_field(FieldDescriptor::new(name.clone(), alias))
			.is_some()
		{
			tracing::debug!(section = %section_name, field = %name, "redefined field");
		} else {
			tracing::debug!(section = %section_name, field = %name, "declared field");
		}
		self.cursor.open_field(name);
		Ok(self)
	}

	/// Attach plugin `keyword` with `args` to the open field
	///
	/// The plugin is only recorded, never invoked.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidState`] if no field is open.
	pub fn plugin(
		&mut self,
		keyword: impl Into<String>,
		args: impl Into<PluginArgs>,
	) -> ConfigResult<&mut Self> {
		let keyword = keyword.into();
		let section_name = self.open_section_name(&keyword)?;
		if keyword.is_empty() {
			return Err(ConfigError::InvalidArgument(format!(
				"plugin keyword in section '{}' must not be empty",
				section_name
			)));
		}
		let Some(field_name) = self.cursor.field.clone() else {
			tracing::warn!(section = %section_name, keyword = %keyword, "plugin invoked without an open field");
			return Err(ConfigError::InvalidState(format!(
				"{}() called outside a field in section '{}'",
				keyword, section_name
			)));
		};

		let field = self
			.section_mut(&section_name)?
			.field_mut(&field_name)
			.ok_or_else(|| {
				ConfigError::KeyNotFound(format!(
					"field '{}' does not exist in section '{}'",
					field_name, section_name
				))
			})?;
		field
			.plugins
			.push(PluginDescriptor::new(keyword.clone(), args.into()));

		tracing::debug!(section = %section_name, field = %field_name, keyword = %keyword, "attached plugin");
		Ok(self)
	}

	/// Attach a single line text input
	pub fn text(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("text", PluginArgs::new())
	}

	/// Attach a multi line text input
	pub fn textarea(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("textarea", PluginArgs::new())
	}

	/// Attach a masked password input
	pub fn password(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("password", PluginArgs::new())
	}

	/// Attach an integer input
	pub fn number(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("number", PluginArgs::new())
	}

	/// Attach a decimal input
	pub fn decimal(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("decimal", PluginArgs::new())
	}

	/// Attach a date picker
	pub fn date(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("date", PluginArgs::new())
	}

	/// Attach a date and time picker
	pub fn datetime(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("datetime", PluginArgs::new())
	}

	/// Attach an on/off toggle
	pub fn toggle_status(&mut self) -> ConfigResult<&mut Self> {
		self.plugin("toggleStatus", PluginArgs::new())
	}

	/// Attach a dropdown
	pub fn dropdown(&mut self, args: impl Into<PluginArgs>) -> ConfigResult<&mut Self> {
		self.plugin("dropdown", args)
	}

	/// Attach a select over a static list
	pub fn select_array(&mut self, args: impl Into<PluginArgs>) -> ConfigResult<&mut Self> {
		self.plugin("selectArray", args)
	}

	/// Attach a select over the records of another model
	pub fn select_model(&mut self, args: impl Into<PluginArgs>) -> ConfigResult<&mut Self> {
		self.plugin("selectModel", args)
	}

	/// Replace the open section with a copy of section `source`
	///
	/// Every name in `remove` is dropped from the copy. All names are checked
	/// before anything is written, so on error the open section is left
	/// untouched.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidState`] if no section is open and
	/// [`ConfigError::KeyNotFound`] if `source` or any name in `remove` does
	/// not exist.
	pub fn copy_from(&mut self, source: &str, remove: &[&str]) -> ConfigResult<&mut Self> {
		let target = self.open_section_name("copy_from")?;
		let mut copied = self.tree.get(source).cloned().ok_or_else(|| {
			ConfigError::KeyNotFound(format!(
				"cannot copy into '{}': section '{}' does not exist",
				target, source
			))
		})?;

		if let Some(missing) = remove.iter().find(|name| !copied.contains(name)) {
			tracing::warn!(source = %source, target = %target, field = %missing, "copy_from removal names an unknown field");
			return Err(ConfigError::KeyNotFound(format!(
				"cannot remove '{}' while copying '{}' into '{}': no such field",
				missing, source, target
			)));
		}
		for name in remove {
			copied.remove(name);
		}

		tracing::debug!(source = %source, target = %target, fields = copied.len(), "copied section");
		self.tree.replace(target, copied);
		self.cursor.clear_entry();
		Ok(self)
	}

	/// Register `window` on the open section
	///
	/// The registration is keyed by a content hash of the model fingerprint
	/// and the window's type identifier, and becomes the target of
	/// subsequent [`on`](Self::on) calls.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidState`] if no section is open and
	/// [`ConfigError::AlreadyRegistered`] if the same window type is already
	/// registered on the section. Use
	/// [`replace_registration`](Self::replace_registration) to replace it.
	pub fn register(
		&mut self,
		window: &dyn ActiveWindow,
		alias: impl Into<String>,
	) -> ConfigResult<&mut Self> {
		self.insert_registration(window, alias.into(), false)
	}

	/// Register `window` on the open section, replacing an existing
	/// registration of the same window type
	///
	/// The replaced registration's bindings are dropped.
	pub fn replace_registration(
		&mut self,
		window: &dyn ActiveWindow,
		alias: impl Into<String>,
	) -> ConfigResult<&mut Self> {
		self.insert_registration(window, alias.into(), true)
	}

	fn insert_registration(
		&mut self,
		window: &dyn ActiveWindow,
		alias: String,
		replace: bool,
	) -> ConfigResult<&mut Self> {
		let section_name = self.open_section_name("register")?;
		let class = window.type_identifier();
		let content_hash = hash::content_hash(&self.config_hash(), &class);

		let section = self.section_mut(&section_name)?;
		if section.contains(&content_hash) && !replace {
			tracing::warn!(section = %section_name, class = %class, hash = %content_hash, "window is already registered");
			return Err(ConfigError::AlreadyRegistered(format!(
				"'{}' is already registered in section '{}' as {}",
				class, section_name, content_hash
			)));
		}
		section.insert_registration(Registration::new(&*class, content_hash.clone(), alias));

		tracing::debug!(section = %section_name, class = %class, hash = %content_hash, "registered window");
		self.cursor.open_registration(content_hash);
		Ok(self)
	}

	/// Bind `field` to `strap_map` on the open registration
	///
	/// A binding for a field that is already bound replaces the old one;
	/// bindings for other fields are kept.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidState`] if no registration is open.
	pub fn on(
		&mut self,
		field: impl Into<String>,
		strap_map: impl Into<String>,
	) -> ConfigResult<&mut Self> {
		let section_name = self.open_section_name("on")?;
		let Some(content_hash) = self.cursor.registration.clone() else {
			tracing::warn!(section = %section_name, "on() called without an open registration");
			return Err(ConfigError::InvalidState(format!(
				"on() called without a registration in section '{}'",
				section_name
			)));
		};

		let field = field.into();
		let registration = self
			.section_mut(&section_name)?
			.registration_mut(&content_hash)
			.ok_or_else(|| {
				ConfigError::KeyNotFound(format!(
					"registration {} does not exist in section '{}'",
					content_hash, section_name
				))
			})?;
		registration.bind(field.clone(), strap_map);

		tracing::debug!(section = %section_name, hash = %content_hash, field = %field, "bound field");
		Ok(self)
	}

	/// The full configuration tree
	pub fn get(&self) -> &ConfigTree {
		&self.tree
	}

	/// Section `name`, or an empty section if it was never declared
	pub fn get_key(&self, name: &str) -> Cow<'_, Section> {
		self.tree
			.get(name)
			.map_or_else(|| Cow::Owned(Section::new()), Cow::Borrowed)
	}

	/// Option `key` converted to `T`, or `default`
	pub fn get_option<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
		self.options.get_or(key, default)
	}

	/// Raw option `key`
	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}

	/// All options
	pub fn options(&self) -> &Options {
		&self.options
	}

	/// Full REST endpoint, including [`REST_URL_PREFIX`]
	pub fn rest_url(&self) -> &str {
		&self.rest_url
	}

	/// Name of the primary key attribute
	pub fn rest_primary_key(&self) -> &str {
		&self.rest_primary_key
	}

	/// Stable fingerprint of this model's endpoint and primary key
	///
	/// The first character is capitalized.
	pub fn config_hash(&self) -> String {
		hash::config_hash(&self.rest_url, &self.rest_primary_key)
	}

	/// Current cursor state
	pub fn cursor(&self) -> &Cursor {
		&self.cursor
	}

	/// Consume the builder into its read-only tree
	pub fn into_tree(self) -> ConfigTree {
		self.tree
	}

	/// Serialize the tree to JSON, preserving declaration order
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(&self.tree)
	}

	/// Serialize the tree to indented JSON, preserving declaration order
	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(&self.tree)
	}

	fn open_section_name(&self, operation: &str) -> ConfigResult<String> {
		self.cursor.section.clone().ok_or_else(|| {
			tracing::warn!(operation = operation, "called outside a section");
			ConfigError::InvalidState(format!("{}() called outside a section", operation))
		})
	}

	fn section_mut(&mut self, name: &str) -> ConfigResult<&mut Section> {
		self.tree
			.get_mut(name)
			.ok_or_else(|| ConfigError::KeyNotFound(format!("section '{}' does not exist", name)))
	}
}

impl Serialize for Config {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.tree.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	struct SummaryWindow;

	impl ActiveWindow for SummaryWindow {
		fn type_identifier(&self) -> Cow<'static, str> {
			Cow::Borrowed("admin\\aws\\UserHistorySummaryActiveWindow")
		}
	}

	struct PasswordWindow;

	impl ActiveWindow for PasswordWindow {}

	#[fixture]
	fn config() -> Config {
		Config::new("api-admin-user", "id", Options::new()).unwrap()
	}

	fn detached() -> Config {
		Config {
			tree: ConfigTree::new(),
			cursor: Cursor::default(),
			options: Options::new(),
			rest_url: format!("{}api-admin-user", REST_URL_PREFIX),
			rest_primary_key: "id".into(),
		}
	}

	#[rstest]
	fn new_inserts_primary_key_into_list(config: Config) {
		// Act
		let list = config.get_key(LIST);

		// Assert
		assert_eq!(config.get().len(), 1);
		assert_eq!(list.len(), 1);
		assert_eq!(list.field("id"), Some(&FieldDescriptor::new("id", "ID")));
		assert!(list.field("id").unwrap().is_plain_text());
		assert_eq!(config.rest_url(), "admin/api-admin-user");
		assert_eq!(config.rest_primary_key(), "id");
		assert_eq!(config.cursor().section(), Some(LIST));
		assert_eq!(config.cursor().field(), Some("id"));
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn new_rejects_empty_primary_key(#[case] primary_key: &str) {
		// Act
		let result = Config::new("api-admin-user", primary_key, Options::new());

		// Assert
		assert!(matches!(result, Err(ConfigError::InvalidArgument(_))));
	}

	#[rstest]
	fn reopening_a_section_keeps_its_fields(mut config: Config) {
		// Arrange
		config.create().field("email", "E-Mail").unwrap();

		// Act
		config.create();
		config.create();
		config.list();

		// Assert
		assert_eq!(config.get_key(CREATE).field_names(), vec!["email"]);
		assert_eq!(config.get_key(LIST).field_names(), vec!["id"]);
	}

	#[rstest]
	fn opening_a_section_clears_field_cursor(mut config: Config) {
		// Act
		config.update();

		// Assert
		assert_eq!(config.cursor().section(), Some(UPDATE));
		assert_eq!(config.cursor().field(), None);
		assert_eq!(config.cursor().registration(), None);
	}

	#[rstest]
	fn insert_if_absent_is_write_once(mut config: Config) {
		// Arrange
		let mut replacement = Section::new();
		replacement.insert_field(FieldDescriptor::new("other", "Other"));

		// Act
		let inserted_list = config.insert_if_absent(LIST, replacement.clone());
		let inserted_search = config.insert_if_absent("search", replacement);

		// Assert
		assert!(!inserted_list);
		assert!(inserted_search);
		assert_eq!(config.get_key(LIST).field_names(), vec!["id"]);
		assert_eq!(config.get_key("search").field_names(), vec!["other"]);
	}

	#[rstest]
	fn field_outside_a_section_is_rejected() {
		// Arrange
		let mut config = detached();

		// Act
		let err = config.field("email", "E-Mail").unwrap_err();

		// Assert
		assert_eq!(
			err,
			ConfigError::InvalidState("field() called outside a section".into())
		);
		assert!(config.get().is_empty());
	}

	#[rstest]
	fn empty_field_name_is_rejected(mut config: Config) {
		// Act
		let result = config.create().field("", "Nothing");

		// Assert
		assert!(matches!(result, Err(ConfigError::InvalidArgument(_))));
	}

	#[rstest]
	fn plugin_is_recorded_on_current_field(mut config: Config) {
		// Act
		config
			.list()
			.field("firstname", "Vorname")
			.unwrap()
			.dropdown(json!({"source": "titles"}))
			.unwrap();

		// Assert
		let list = config.get_key(LIST);
		let field = list.field("firstname").unwrap();
		assert_eq!(field.plugins.len(), 1);
		assert_eq!(field.plugins[0].class, "Dropdown");
		assert_eq!(
			field.plugins[0].qualified_class(),
			"\\admin\\ngrest\\plugins\\Dropdown"
		);
		assert_eq!(field.plugins[0].args.get("source"), Some(&json!("titles")));
	}

	#[rstest]
	fn plugins_keep_invocation_order(mut config: Config) {
		// Act
		config
			.create()
			.field("title", "Title")
			.unwrap()
			.text()
			.unwrap()
			.plugin("tooltip", PluginArgs::new().arg("Choose one"))
			.unwrap();

		// Assert
		let create = config.get_key(CREATE);
		assert_eq!(
			create.field("title").unwrap().plugin_keywords(),
			vec!["text", "tooltip"]
		);
	}

	#[rstest]
	fn redefining_a_field_clears_its_plugins(mut config: Config) {
		// Act
		config.create().field("x", "X").unwrap().text().unwrap();
		config.field("x", "X again").unwrap().password().unwrap();

		// Assert
		let create = config.get_key(CREATE);
		let field = create.field("x").unwrap();
		assert_eq!(field.alias, "X again");
		assert_eq!(field.plugin_keywords(), vec!["password"]);
	}

	#[rstest]
	fn plugin_after_section_switch_is_rejected(mut config: Config) {
		// Act
		let err = config.create().text().unwrap_err();

		// Assert
		assert_eq!(
			err,
			ConfigError::InvalidState("text() called outside a field in section 'create'".into())
		);
		assert!(config.get_key(LIST).field("id").unwrap().is_plain_text());
	}

	#[rstest]
	fn copy_from_replaces_current_section(mut config: Config) {
		// Arrange
		config.list().field("firstname", "Vorname").unwrap().text().unwrap();
		config.list().field("email", "E-Mail").unwrap();
		config.update().field("stale", "Stale").unwrap();

		// Act
		config.copy_from(LIST, &["id"]).unwrap();

		// Assert
		let update = config.get_key(UPDATE);
		assert_eq!(update.field_names(), vec!["firstname", "email"]);
		assert_eq!(update.field("firstname").unwrap().plugin_keywords(), vec!["text"]);
		assert_eq!(config.get_key(LIST).field_names(), vec!["id", "firstname", "email"]);
		assert_eq!(config.cursor().field(), None);
	}

	#[rstest]
	fn copy_from_is_atomic_on_unknown_removal(mut config: Config) {
		// Arrange
		config.list().field("email", "E-Mail").unwrap();
		config.update().field("kept", "Kept").unwrap();

		// Act
		let err = config.copy_from(LIST, &["email", "missing"]).unwrap_err();

		// Assert
		assert!(matches!(err, ConfigError::KeyNotFound(ref msg) if msg.contains("'missing'")));
		assert_eq!(config.get_key(UPDATE).field_names(), vec!["kept"]);
		assert_eq!(config.get_key(LIST).field_names(), vec!["id", "email"]);
	}

	#[rstest]
	fn copy_from_on_open_section_removes_fields(mut config: Config) {
		// Arrange
		config
			.list()
			.field("firstname", "Vorname")
			.unwrap()
			.field("email", "E-Mail")
			.unwrap()
			.field("lastname", "Nachname")
			.unwrap();

		// Act
		config.list().copy_from(LIST, &["email"]).unwrap();

		// Assert
		assert_eq!(
			config.get_key(LIST).field_names(),
			vec!["id", "firstname", "lastname"]
		);
		assert_eq!(config.get().len(), 1);
		assert_eq!(config.cursor().section(), Some(LIST));
	}

	#[rstest]
	fn copy_from_carries_registrations_and_bindings(mut config: Config) {
		// Arrange
		config
			.aw()
			.register(&SummaryWindow, "Summary")
			.unwrap()
			.on("email", "emailMap")
			.unwrap();

		// Act
		config.section("dashboard").copy_from(ACTIVE_WINDOWS, &[]).unwrap();

		// Assert
		let dashboard = config.get_key("dashboard");
		let registration = dashboard
			.registration("2fb2c7300fed64cf912a2ab8cfaa4e9dfbe59457")
			.unwrap();
		assert_eq!(registration.alias, "Summary");
		assert_eq!(registration.binding("email"), Some("emailMap"));
		assert_eq!(config.cursor().registration(), None);
		assert!(config.get_key(ACTIVE_WINDOWS).registration(&registration.hash).is_some());
	}

	#[rstest]
	fn copy_from_unknown_section_is_rejected(mut config: Config) {
		// Act
		let result = config.create().copy_from("search", &[]);

		// Assert
		assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
		assert!(config.get_key(CREATE).is_empty());
	}

	#[rstest]
	fn register_keys_registration_by_content_hash(mut config: Config) {
		// Act
		config.aw().register(&SummaryWindow, "Summary").unwrap();

		// Assert
		let hash = "2fb2c7300fed64cf912a2ab8cfaa4e9dfbe59457";
		let aw = config.get_key(ACTIVE_WINDOWS);
		let registration = aw.registration(hash).unwrap();
		assert_eq!(registration.class, "admin\\aws\\UserHistorySummaryActiveWindow");
		assert_eq!(registration.hash, hash);
		assert_eq!(registration.alias, "Summary");
		assert!(registration.on.is_empty());
		assert_eq!(config.cursor().registration(), Some(hash));
	}

	#[rstest]
	fn on_merges_bindings(mut config: Config) {
		// Act
		config
			.aw()
			.register(&SummaryWindow, "Summary")
			.unwrap()
			.on("email", "emailMap")
			.unwrap()
			.on("phone", "phoneMap")
			.unwrap()
			.on("email", "mailMap")
			.unwrap();

		// Assert
		let aw = config.get_key(ACTIVE_WINDOWS);
		let registration = aw.registrations().next().unwrap();
		let bindings: Vec<(&str, &str)> = registration
			.on
			.iter()
			.map(|(field, map)| (field.as_str(), map.as_str()))
			.collect();
		assert_eq!(bindings, vec![("email", "mailMap"), ("phone", "phoneMap")]);
	}

	#[rstest]
	fn on_without_registration_is_rejected(mut config: Config) {
		// Act
		let result = config.list().field("email", "E-Mail").unwrap().on("email", "map");

		// Assert
		assert!(matches!(result, Err(ConfigError::InvalidState(_))));
	}

	#[rstest]
	fn plugin_after_register_is_rejected(mut config: Config) {
		// Act
		let result = config.aw().register(&PasswordWindow, "Password").unwrap().text();

		// Assert
		assert!(matches!(result, Err(ConfigError::InvalidState(_))));
	}

	#[rstest]
	fn duplicate_registration_is_rejected(mut config: Config) {
		// Arrange
		config
			.aw()
			.register(&SummaryWindow, "Summary")
			.unwrap()
			.on("email", "emailMap")
			.unwrap();
		config.aw();

		// Act
		let err = config.register(&SummaryWindow, "Other").unwrap_err();

		// Assert
		assert!(matches!(err, ConfigError::AlreadyRegistered(_)));
		let aw = config.get_key(ACTIVE_WINDOWS);
		let registration = aw.registrations().next().unwrap();
		assert_eq!(registration.alias, "Summary");
		assert_eq!(registration.binding("email"), Some("emailMap"));
		assert_eq!(config.cursor().registration(), None);
	}

	#[rstest]
	fn replace_registration_resets_bindings(mut config: Config) {
		// Arrange
		config
			.aw()
			.register(&SummaryWindow, "Summary")
			.unwrap()
			.on("email", "emailMap")
			.unwrap();

		// Act
		config.replace_registration(&SummaryWindow, "Replaced").unwrap();

		// Assert
		let aw = config.get_key(ACTIVE_WINDOWS);
		assert_eq!(aw.len(), 1);
		let registration = aw.registrations().next().unwrap();
		assert_eq!(registration.alias, "Replaced");
		assert!(registration.on.is_empty());
	}

	#[rstest]
	fn distinct_window_types_get_distinct_keys(mut config: Config) {
		// Act
		config
			.aw()
			.register(&SummaryWindow, "Summary")
			.unwrap()
			.register(&PasswordWindow, "Password")
			.unwrap();

		// Assert
		let aw = config.get_key(ACTIVE_WINDOWS);
		assert_eq!(aw.registrations().count(), 2);
		assert!(
			aw.registrations()
				.any(|r| r.class == std::any::type_name::<PasswordWindow>())
		);
	}

	#[rstest]
	fn get_key_of_unknown_section_is_empty(config: Config) {
		// Act
		let section = config.get_key("search");

		// Assert
		assert!(section.is_empty());
		assert!(!config.get().contains("search"));
	}

	#[rstest]
	fn config_hash_is_capitalized(config: Config) {
		// Act & Assert
		assert_eq!(config.config_hash(), "Ab8af1677c8617c3e19ac3f6cf91cd0399c6cb58");
	}

	#[rstest]
	fn options_are_read_with_defaults() {
		// Arrange
		let options = Options::new().with("perPage", 50);
		let config = Config::new("api-admin-user", "id", options).unwrap();

		// Act & Assert
		assert_eq!(config.get_option("perPage", 25_u32), 50);
		assert_eq!(config.get_option("title", String::new()), "");
		assert_eq!(config.option("perPage"), Some(&json!(50)));
	}

	#[rstest]
	fn json_output_matches_tree(mut config: Config) {
		// Arrange
		config.list().field("firstname", "Vorname").unwrap().text().unwrap();

		// Act
		let value: Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

		// Assert
		assert_eq!(
			value,
			json!({
				"list": {
					"id": {"name": "id", "alias": "ID", "plugins": []},
					"firstname": {
						"name": "firstname",
						"alias": "Vorname",
						"plugins": [{"keyword": "text", "class": "Text", "args": {}}]
					}
				}
			})
		);
		assert_eq!(serde_json::to_value(&config).unwrap(), value);
	}
}
