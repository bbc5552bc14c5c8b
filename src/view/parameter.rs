use super::{View, docs_block, entity_section};
use crate::model::{Docs, Parameter};
use crate::render::utils::parameter_id;
use crate::render::{Markdown, RenderState};
use crate::schema::ParameterSchema;
use crate::transpile::MemberKind;

/// A parameter of an initializer, method or static function.
#[derive(Debug, Clone)]
pub struct ParameterView {
	id: String,
	display_name: String,
	type_markdown: String,
	type_name: String,
	optional: bool,
	variadic: bool,
	docs: Docs,
}

impl ParameterView {
	/// Build the view for `param` of the callable identified by `callable_id`.
	pub fn new(state: &RenderState<'_>, callable_id: &str, param: &Parameter) -> Self {
		let transpiler = state.transpiler;
		Self {
			id: parameter_id(callable_id, &param.name),
			display_name: transpiler.member_name(&param.name, MemberKind::Parameter),
			type_markdown: state.type_markdown(&param.type_ref),
			type_name: transpiler.display_type(&param.type_ref),
			optional: param.optional,
			variadic: param.variadic,
			docs: param.docs.clone(),
		}
	}

	/// Build views for `params` in positional order.
	pub fn all(state: &RenderState<'_>, callable_id: &str, params: &[Parameter]) -> Vec<Self> {
		params
			.iter()
			.map(|param| Self::new(state, callable_id, param))
			.collect()
	}
}

impl View for ParameterView {
	type Record = ParameterSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, true);
		md.bullet(format!("{} {}", Markdown::italic("Type:"), self.type_markdown));
		if self.optional {
			md.bullet(Markdown::italic("Optional"));
		}
		if self.variadic {
			md.bullet(Markdown::italic("Variadic"));
		}
		if let Some(default) = &self.docs.default {
			md.bullet(format!("{} {default}", Markdown::italic("Default:")));
		}
		docs_block(&mut md, &self.docs);
		md
	}

	fn to_json(&self) -> ParameterSchema {
		ParameterSchema {
			id: self.id.clone(),
			display_name: self.display_name.clone(),
			type_name: self.type_name.clone(),
			optional: self.optional,
			variadic: self.variadic,
			default: self.docs.default.clone(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
		}
	}
}
