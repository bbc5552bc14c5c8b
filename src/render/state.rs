use crate::diagnostics::Diagnostics;
use crate::error::{RenderError, Result};
use crate::model::{Parameter, TypeRef};
use crate::render::core::RenderOptions;
use crate::render::markdown::Markdown;
use crate::transpile::{Language, SnippetResult, TranspiledType, Transpiler};

/// Mutable rendering context shared by every view of one render pass.
pub struct RenderState<'a> {
	/// Active convention paired with the graph.
	pub transpiler: Transpiler<'a>,
	/// Caller configuration.
	pub options: &'a RenderOptions,
	/// Degraded snippets recorded so far.
	pub diagnostics: Diagnostics,
}

impl<'a> RenderState<'a> {
	/// Create a new render state.
	pub fn new(transpiler: Transpiler<'a>, options: &'a RenderOptions) -> Self {
		Self {
			transpiler,
			options,
			diagnostics: Diagnostics::new(),
		}
	}

	/// The active convention.
	pub fn language(&self) -> Language {
		self.transpiler.language()
	}

	/// Markdown link to a type: anchored through the link formatter when the graph declares it,
	/// inline code otherwise.
	pub fn link(&self, ty: &TranspiledType, is_local: bool) -> String {
		let text = Markdown::pre(&ty.fqn);
		if is_local {
			Markdown::link(&text, &self.options.format_link(ty))
		} else {
			text
		}
	}

	/// Markdown link to the type with graph FQN `fqn`.
	pub fn link_fqn(&self, fqn: &str) -> String {
		let graph = self.transpiler.graph();
		self.link(&self.transpiler.type_of(fqn), graph.is_local(fqn))
	}

	/// Markdown spelling of `reference` with every named type linked.
	pub fn type_markdown(&self, reference: &TypeRef) -> String {
		if reference.named_fqns().is_empty() {
			return Markdown::pre(&self.transpiler.display_type(reference));
		}
		self.transpiler
			.linked_type(reference, &|ty: &TranspiledType, is_local: bool| {
				self.link(ty, is_local)
			})
	}

	/// Keep a snippet, or record why it was omitted for the entity `id`.
	pub fn snippet(&mut self, id: &str, result: SnippetResult) -> Option<String> {
		match result {
			Ok(snippet) => Some(snippet),
			Err(err) => {
				self.diagnostics.unsupported(id, &err);
				None
			}
		}
	}

	/// Parameters of a callable, failing the render when the graph left them out.
	pub fn require_parameters<'p>(
		&self,
		fqn: &str,
		member: &str,
		parameters: &'p Option<Vec<Parameter>>,
	) -> Result<&'p [Parameter]> {
		parameters
			.as_deref()
			.ok_or_else(|| RenderError::MissingParameters {
				fqn: fqn.to_string(),
				member: member.to_string(),
			})
	}
}
