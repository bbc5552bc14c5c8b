use log::warn;
use serde::Serialize;

use crate::error::UnsupportedConstructError;
use crate::transpile::Language;

/// A recoverable problem encountered while rendering one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// Identifier of the entity whose output was degraded.
	pub id: String,
	/// Convention that was active.
	pub language: Language,
	/// What went wrong.
	pub message: String,
}

/// Diagnostics accumulated during one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	/// Create an empty collector.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record that the snippet for `id` was omitted.
	pub fn unsupported(&mut self, id: &str, err: &UnsupportedConstructError) {
		warn!(id = id, language = err.language.as_str(); "Omitting snippet: {err}");
		self.entries.push(Diagnostic {
			id: id.to_string(),
			language: err.language,
			message: err.to_string(),
		});
	}

	/// All recorded diagnostics, in render order.
	pub fn entries(&self) -> &[Diagnostic] {
		&self.entries
	}

	/// Whether the render was clean.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of recorded diagnostics.
	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
