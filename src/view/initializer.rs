use super::{ParameterView, View, docs_block};
use crate::error::Result;
use crate::model::{Docs, Initializer};
use crate::render::utils::initializer_id;
use crate::render::{Markdown, RenderState};
use crate::schema::{InitializerSchema, ParameterSchema};
use crate::transpile::Language;

/// How an instance of a class is created.
#[derive(Debug, Clone)]
pub struct InitializerView {
	id: String,
	language: Language,
	snippet: Option<String>,
	parameters: Vec<ParameterView>,
	docs: Docs,
}

impl InitializerView {
	/// Build the view for the initializer of the class `fqn`.
	pub fn new(state: &mut RenderState<'_>, fqn: &str, initializer: &Initializer) -> Result<Self> {
		let id = initializer_id(fqn);
		let params = state.require_parameters(fqn, "Initializer", &initializer.parameters)?;

		let transpiler = state.transpiler;
		let ty = transpiler.type_of(fqn);
		let construction = transpiler
			.formatter()
			.format_construction(&ty, &transpiler.parameters(params));
		let snippet = state
			.snippet(&id, construction)
			.map(|code| format!("{}\n\n{code}", transpiler.import_of(fqn)));

		Ok(Self {
			parameters: ParameterView::all(state, &id, params),
			id,
			language: state.language(),
			snippet,
			docs: initializer.docs.clone(),
		})
	}
}

impl View for InitializerView {
	type Record = InitializerSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = Markdown::titled("Initializer").with_id(&self.id);
		if let Some(snippet) = &self.snippet {
			md.code(self.language.as_str(), &[snippet.as_str()]);
		}
		docs_block(&mut md, &self.docs);
		for param in &self.parameters {
			md.section(param.to_markdown());
		}
		md
	}

	fn to_json(&self) -> InitializerSchema {
		InitializerSchema {
			id: self.id.clone(),
			snippet: self.snippet.clone(),
			parameters: self
				.parameters
				.iter()
				.map(View::to_json)
				.collect::<Vec<ParameterSchema>>(),
		}
	}
}
