use super::{ParameterView, View, docs_block, entity_section};
use crate::error::Result;
use crate::model::{Docs, Method};
use crate::render::utils::{ipush, sort_by_name};
use crate::render::{Markdown, RenderState};
use crate::schema::CallableSchema;
use crate::transpile::{Language, MemberKind};

/// An instance method or static function.
///
/// Static snippets are self-contained (import, blank line, qualified call); instance snippets
/// show only the call.
#[derive(Debug, Clone)]
pub struct MethodView {
	id: String,
	raw_name: String,
	display_name: String,
	language: Language,
	snippet: Option<String>,
	returns: Option<(String, String)>,
	parameters: Vec<ParameterView>,
	docs: Docs,
}

impl MethodView {
	/// Build the view for `method` of the type `fqn`.
	pub fn new(state: &mut RenderState<'_>, fqn: &str, method: &Method) -> Result<Self> {
		let id = ipush(fqn, &method.name);
		let params = state.require_parameters(fqn, &method.name, &method.parameters)?;

		let transpiler = state.transpiler;
		let display_name = transpiler.member_name(&method.name, MemberKind::Method);
		let ty = transpiler.type_of(fqn);
		let invocation = transpiler.formatter().format_invocation(
			&ty,
			&display_name,
			method.is_static,
			&transpiler.parameters(params),
		);
		let snippet = state.snippet(&id, invocation).map(|code| {
			if method.is_static {
				format!("{}\n\n{code}", transpiler.import_of(fqn))
			} else {
				code
			}
		});
		let returns = method.returns.as_ref().map(|reference| {
			(
				state.type_markdown(reference),
				transpiler.display_type(reference),
			)
		});

		Ok(Self {
			parameters: ParameterView::all(state, &id, params),
			id,
			raw_name: method.name.clone(),
			display_name,
			language: state.language(),
			snippet,
			returns,
			docs: method.docs.clone(),
		})
	}

	/// Non-protected instance methods, sorted by name.
	pub fn instance_methods(
		state: &mut RenderState<'_>,
		fqn: &str,
		methods: &[Method],
	) -> Result<Vec<Self>> {
		Self::filtered(state, fqn, methods, false)
	}

	/// Non-protected static functions, sorted by name.
	pub fn static_functions(
		state: &mut RenderState<'_>,
		fqn: &str,
		methods: &[Method],
	) -> Result<Vec<Self>> {
		Self::filtered(state, fqn, methods, true)
	}

	fn filtered(
		state: &mut RenderState<'_>,
		fqn: &str,
		methods: &[Method],
		is_static: bool,
	) -> Result<Vec<Self>> {
		let mut views = methods
			.iter()
			.filter(|m| !m.protected && m.is_static == is_static)
			.map(|m| Self::new(state, fqn, m))
			.collect::<Result<Vec<_>>>()?;
		sort_by_name(&mut views, |view| view.raw_name.as_str());
		Ok(views)
	}
}

impl View for MethodView {
	type Record = CallableSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, true);
		if let Some(snippet) = &self.snippet {
			md.code(self.language.as_str(), &[snippet.as_str()]);
		}
		if let Some((returns, _)) = &self.returns {
			md.bullet(format!("{} {returns}", Markdown::italic("Returns:")));
		}
		docs_block(&mut md, &self.docs);
		for param in &self.parameters {
			md.section(param.to_markdown());
		}
		md
	}

	fn to_json(&self) -> CallableSchema {
		CallableSchema {
			id: self.id.clone(),
			display_name: self.display_name.clone(),
			snippet: self.snippet.clone(),
			returns: self.returns.as_ref().map(|(_, name)| name.clone()),
			parameters: self.parameters.iter().map(View::to_json).collect(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
		}
	}
}
