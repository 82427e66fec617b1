//! Active windows
//!
//! An active window (strap) is an auxiliary object attached to a model's
//! records, such as a password change dialog or a history summary. A
//! configuration registers windows by type; the registration key is derived
//! from the model fingerprint and [`ActiveWindow::type_identifier`].

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An object that can be registered on a configuration section
pub trait ActiveWindow: Send + Sync {
	/// Identifier of the window type
	///
	/// Defaults to the Rust type name. Override it to keep registration
	/// hashes stable across module moves.
	fn type_identifier(&self) -> Cow<'static, str> {
		Cow::Borrowed(std::any::type_name::<Self>())
	}

	/// Label used when the model does not provide one
	fn default_label(&self) -> Option<&str> {
		None
	}
}

/// An active window declared by a model, with an optional label
#[derive(Clone)]
pub struct ActiveWindowSpec {
	/// The window
	pub window: Arc<dyn ActiveWindow>,
	/// Display label; falls back to the window's default label
	pub label: Option<String>,
}

impl ActiveWindowSpec {
	/// Declare `window` without a label
	pub fn new(window: impl ActiveWindow + 'static) -> Self {
		Self {
			window: Arc::new(window),
			label: None,
		}
	}

	/// Set the display label
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Label to register the window with
	pub fn resolved_label(&self) -> String {
		self.label
			.clone()
			.or_else(|| self.window.default_label().map(str::to_owned))
			.unwrap_or_default()
	}
}

impl fmt::Debug for ActiveWindowSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActiveWindowSpec")
			.field("window", &self.window.type_identifier())
			.field("label", &self.label)
			.finish()
	}
}
