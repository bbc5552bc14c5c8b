use crate::error::{RenderError, Result};
use crate::model::TypeSystem;
use crate::render::{RenderOptions, RenderOutput, render};
use crate::schema::DocumentationSchema;

/// Documentation renders API reference pages for one assembly.
///
/// It owns the type-system graph and renders it on demand, once per convention or sub-module.
/// Every render is a single pass over the graph that yields both the Markdown document and the
/// JSON record, so the two always describe the same entities under the same identifiers.
///
/// ```
/// use polydoc::{Documentation, Language, RenderOptions};
///
/// let docs = Documentation::from_json(r#"{"name": "acme", "types": []}"#).unwrap();
/// let markdown = docs
/// 	.to_markdown(&RenderOptions::new().with_language(Language::Python))
/// 	.unwrap();
/// assert_eq!(markdown, "# API Reference\n");
/// ```
#[derive(Debug, Clone)]
pub struct Documentation {
	/// The graph being documented.
	graph: TypeSystem,
}

impl Documentation {
	/// Wrap an already-loaded graph.
	pub fn new(graph: TypeSystem) -> Self {
		Self { graph }
	}

	/// Decode the graph from its JSON wire form.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(Self::new(TypeSystem::from_json(json)?))
	}

	/// The graph being documented.
	pub fn graph(&self) -> &TypeSystem {
		&self.graph
	}

	/// Render both outputs in one pass.
	pub fn render(&self, options: &RenderOptions) -> Result<RenderOutput> {
		render(&self.graph, options)
	}

	/// Render the Markdown document.
	pub fn to_markdown(&self, options: &RenderOptions) -> Result<String> {
		Ok(self.render(options)?.markdown())
	}

	/// Render the structured record.
	pub fn to_json(&self, options: &RenderOptions) -> Result<DocumentationSchema> {
		Ok(self.render(options)?.schema)
	}

	/// Render the structured record as pretty-printed JSON text.
	pub fn to_json_string(&self, options: &RenderOptions) -> Result<String> {
		let schema = self.to_json(options)?;
		serde_json::to_string_pretty(&schema).map_err(RenderError::Serialization)
	}
}
