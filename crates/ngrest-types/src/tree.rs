//! The declarative configuration tree
//!
//! A [`ConfigTree`] maps section names to [`Section`]s, and a section maps
//! entry keys to either a field descriptor or an active window
//! registration. Both levels keep insertion order; redefining an existing
//! key keeps its original position.

use crate::field::FieldDescriptor;
use crate::registration::Registration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionEntry {
	/// A field declaration, keyed by field name
	Field(FieldDescriptor),
	/// An active window registration, keyed by content hash
	Registration(Registration),
}

impl SectionEntry {
	/// The field descriptor, if this entry is a field
	pub fn as_field(&self) -> Option<&FieldDescriptor> {
		match self {
			SectionEntry::Field(field) => Some(field),
			SectionEntry::Registration(_) => None,
		}
	}

	/// The registration, if this entry is a registration
	pub fn as_registration(&self) -> Option<&Registration> {
		match self {
			SectionEntry::Registration(registration) => Some(registration),
			SectionEntry::Field(_) => None,
		}
	}
}

/// A named grouping of field declarations (e.g. the `list` view)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
	entries: IndexMap<String, SectionEntry>,
}

impl Section {
	/// Create an empty section
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the section has no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether an entry is stored under `key`
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Entry stored under `key`
	pub fn get(&self, key: &str) -> Option<&SectionEntry> {
		self.entries.get(key)
	}

	/// Field named `name`
	pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.entries.get(name).and_then(SectionEntry::as_field)
	}

	/// Mutable field named `name`
	pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
		match self.entries.get_mut(name) {
			Some(SectionEntry::Field(field)) => Some(field),
			_ => None,
		}
	}

	/// Registration stored under `hash`
	pub fn registration(&self, hash: &str) -> Option<&Registration> {
		self.entries.get(hash).and_then(SectionEntry::as_registration)
	}

	/// Mutable registration stored under `hash`
	pub fn registration_mut(&mut self, hash: &str) -> Option<&mut Registration> {
		match self.entries.get_mut(hash) {
			Some(SectionEntry::Registration(registration)) => Some(registration),
			_ => None,
		}
	}

	/// Insert or replace a field, keyed by its name
	pub fn insert_field(&mut self, field: FieldDescriptor) -> Option<SectionEntry> {
		self.entries
			.insert(field.name.clone(), SectionEntry::Field(field))
	}

	/// Insert or replace a registration, keyed by its hash
	pub fn insert_registration(&mut self, registration: Registration) -> Option<SectionEntry> {
		self.entries.insert(
			registration.hash.clone(),
			SectionEntry::Registration(registration),
		)
	}

	/// Remove the entry stored under `key`, keeping the order of the rest
	pub fn remove(&mut self, key: &str) -> Option<SectionEntry> {
		self.entries.shift_remove(key)
	}

	/// Entry keys in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// All entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SectionEntry)> {
		self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
	}

	/// Field entries in insertion order
	pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.entries.values().filter_map(SectionEntry::as_field)
	}

	/// Registration entries in insertion order
	pub fn registrations(&self) -> impl Iterator<Item = &Registration> {
		self.entries.values().filter_map(SectionEntry::as_registration)
	}

	/// Field names in insertion order
	pub fn field_names(&self) -> Vec<&str> {
		self.fields().map(|f| f.name.as_str()).collect()
	}
}

/// Section name to section mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTree {
	sections: IndexMap<String, Section>,
}

impl ConfigTree {
	/// Create an empty tree
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of sections
	pub fn len(&self) -> usize {
		self.sections.len()
	}

	/// Whether no section was declared
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Whether `name` was declared
	pub fn contains(&self, name: &str) -> bool {
		self.sections.contains_key(name)
	}

	/// Section `name`
	pub fn get(&self, name: &str) -> Option<&Section> {
		self.sections.get(name)
	}

	/// Mutable section `name`
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
		self.sections.get_mut(name)
	}

	/// Store `section` under `name` only if nothing is stored there yet
	///
	/// Returns `true` if the section was inserted.
	///
	/// # Examples
	///
	/// ```
	/// use ngrest_types::{ConfigTree, FieldDescriptor, Section};
	///
	/// let mut tree = ConfigTree::new();
	/// let mut list = Section::new();
	/// list.insert_field(FieldDescriptor::new("id", "ID"));
	///
	/// assert!(tree.insert_if_absent("list", list));
	/// assert!(!tree.insert_if_absent("list", Section::new()));
	/// assert_eq!(tree.get("list").unwrap().len(), 1);
	/// ```
	pub fn insert_if_absent(&mut self, name: impl Into<String>, section: Section) -> bool {
		match self.sections.entry(name.into()) {
			indexmap::map::Entry::Occupied(_) => false,
			indexmap::map::Entry::Vacant(slot) => {
				slot.insert(section);
				true
			}
		}
	}

	/// Store `section` under `name`, replacing any previous content
	pub fn replace(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
		self.sections.insert(name.into(), section)
	}

	/// Section names in declaration order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.sections.keys().map(String::as_str)
	}

	/// Sections in declaration order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
		self.sections
			.iter()
			.map(|(name, section)| (name.as_str(), section))
	}
}
