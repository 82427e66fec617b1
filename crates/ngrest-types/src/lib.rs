//! # ngrest-types
//!
//! Shared type definitions for ngrest admin configuration.
//!
//! This crate holds the declarative tree that a model's configuration pass
//! produces, and the error type shared by every ngrest crate:
//!
//! - **tree**: [`ConfigTree`], [`Section`], [`SectionEntry`]
//! - **field**: [`FieldDescriptor`]
//! - **plugin**: [`PluginDescriptor`], [`PluginArgs`]
//! - **registration**: [`Registration`] (active windows bound to fields)
//! - **errors**: [`ConfigError`], [`ConfigResult`]
//!
//! All maps are insertion-ordered. Serializing a tree yields sections and
//! fields in the order they were declared, which downstream UI generation
//! relies on.

pub mod errors;
pub mod field;
pub mod plugin;
pub mod registration;
pub mod tree;

pub use errors::{ConfigError, ConfigResult, ErrorKind};
pub use field::FieldDescriptor;
pub use plugin::{PLUGIN_NAMESPACE, PluginArgs, PluginDescriptor, capitalize_first};
pub use registration::Registration;
pub use tree::{ConfigTree, Section, SectionEntry};
