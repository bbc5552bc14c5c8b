use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use super::markdown::Markdown;
use super::state::RenderState;
use crate::diagnostics::Diagnostics;
use crate::error::{RenderError, Result};
use crate::model::TypeSystem;
use crate::schema::{DocumentationSchema, MetadataSchema, SCHEMA_VERSION};
use crate::transpile::{Language, TranspiledType, Transpiler};
use crate::view::{ApiReferenceView, View};

/// Callback turning a type into the target of a cross-reference link.
pub type LinkFormatter = Arc<dyn Fn(&TranspiledType) -> String + Send + Sync>;

/// Configuration for a render pass.
#[derive(Clone)]
pub struct RenderOptions {
	/// Convention names and snippets are written in.
	pub language: Language,
	/// Sub-module to render instead of the assembly root.
	pub submodule: Option<String>,
	/// Whether the module readme is prepended to the reference.
	pub readme: bool,
	/// Title of the top-level reference section.
	pub title: String,
	/// Custom link target for local types; in-document anchors when unset.
	link_formatter: Option<LinkFormatter>,
}

impl fmt::Debug for RenderOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RenderOptions")
			.field("language", &self.language)
			.field("submodule", &self.submodule)
			.field("readme", &self.readme)
			.field("title", &self.title)
			.field("link_formatter", &self.link_formatter.as_ref().map(|_| "<fn>"))
			.finish()
	}
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self::new()
	}
}

impl RenderOptions {
	/// Create options for a TypeScript render of the assembly root.
	pub fn new() -> Self {
		Self {
			language: Language::TypeScript,
			submodule: None,
			readme: false,
			title: "API Reference".to_string(),
			link_formatter: None,
		}
	}

	/// Select the target convention.
	pub fn with_language(mut self, language: Language) -> Self {
		self.language = language;
		self
	}

	/// Restrict the render to one sub-module.
	pub fn with_submodule(mut self, submodule: impl Into<String>) -> Self {
		self.submodule = Some(submodule.into());
		self
	}

	/// Prepend the module readme?
	pub fn with_readme(mut self, readme: bool) -> Self {
		self.readme = readme;
		self
	}

	/// Title the reference section.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Produce link targets for local types with `link_formatter`.
	pub fn with_link_formatter(
		mut self,
		link_formatter: impl Fn(&TranspiledType) -> String + Send + Sync + 'static,
	) -> Self {
		self.link_formatter = Some(Arc::new(link_formatter));
		self
	}

	/// Link target for `ty`.
	pub fn format_link(&self, ty: &TranspiledType) -> String {
		match &self.link_formatter {
			Some(link_formatter) => link_formatter(ty),
			None => format!("#{}", ty.source_fqn),
		}
	}
}

/// Both outputs of one render pass, plus what was degraded along the way.
#[derive(Debug, Clone)]
pub struct RenderOutput {
	/// Document tree.
	pub document: Markdown,
	/// Structured record built from the same views as [`RenderOutput::document`].
	pub schema: DocumentationSchema,
	/// Omitted snippets.
	pub diagnostics: Diagnostics,
}

impl RenderOutput {
	/// Serialize the document tree.
	pub fn markdown(&self) -> String {
		self.document.render()
	}

	/// Serialize the structured record as pretty-printed JSON.
	pub fn json(&self) -> Result<String> {
		serde_json::to_string_pretty(&self.schema).map_err(RenderError::Serialization)
	}
}

/// Render one module of `graph` as configured by `options`.
pub fn render(graph: &TypeSystem, options: &RenderOptions) -> Result<RenderOutput> {
	let submodule = options.submodule.as_deref();
	info!(
		assembly = graph.name.as_str(),
		language = options.language.as_str(),
		submodule = submodule.unwrap_or("<root>");
		"Rendering API reference"
	);

	let types = graph.module_types(submodule)?;
	let formatter = options.language.formatter();
	let mut state = RenderState::new(Transpiler::new(formatter.as_ref(), graph), options);
	let reference = ApiReferenceView::new(&mut state, &types)?;

	let mut document = Markdown::new();
	if options.readme {
		match graph.readme_for(submodule) {
			Some(readme) => document.text(readme.trim_end()),
			None => debug!(assembly = graph.name.as_str(); "No readme to prepend"),
		}
	}
	document.section(reference.to_markdown());

	let schema = DocumentationSchema {
		version: SCHEMA_VERSION.to_string(),
		language: options.language,
		metadata: MetadataSchema {
			package_name: graph.name.clone(),
			package_version: graph.version.clone(),
			submodule: options.submodule.clone(),
		},
		api_reference: reference.to_json(),
	};

	Ok(RenderOutput {
		document,
		schema,
		diagnostics: state.diagnostics,
	})
}
