use thiserror::Error;

use crate::transpile::Language;

/// Fatal errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A callable was advertised by the graph without its parameter list.
	#[error("{fqn}: `{member}` is missing its parameter list")]
	MissingParameters {
		/// FQN of the owning type.
		fqn: String,
		/// Name of the offending callable.
		member: String,
	},
	/// The sub-module selector did not match anything in the graph.
	#[error("assembly `{assembly}` has no sub-module named `{submodule}`")]
	UnknownSubmodule {
		/// Assembly being rendered.
		assembly: String,
		/// Selector supplied by the caller.
		submodule: String,
	},
	/// The graph JSON could not be decoded.
	#[error("failed to decode type-system graph: {0}")]
	Graph(#[source] serde_json::Error),
	/// The schema record could not be encoded.
	#[error("failed to encode schema: {0}")]
	Serialization(#[source] serde_json::Error),
}

/// A formatter cannot express a graph shape in its convention.
///
/// Recoverable: the calling view degrades the affected snippet and records a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{language} cannot express {construct}")]
pub struct UnsupportedConstructError {
	/// Convention that rejected the construct.
	pub language: Language,
	/// Description of the rejected construct.
	pub construct: String,
}

impl UnsupportedConstructError {
	/// Build an error for `language`.
	pub fn new(language: Language, construct: impl Into<String>) -> Self {
		Self {
			language,
			construct: construct.into(),
		}
	}
}

/// A language name that matches no supported convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{0}`")]
pub struct UnknownLanguage(pub String);

/// Result type returned by the polydoc library.
pub type Result<T> = std::result::Result<T, RenderError>;
