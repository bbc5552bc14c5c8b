use super::collections::group;
use super::{PropertyView, View, docs_block, entity_section};
use crate::model::{Docs, InterfaceType, TypeNode};
use crate::render::utils::initializer_id;
use crate::render::{Markdown, RenderState};
use crate::schema::{InitializerSchema, StructSchema};
use crate::transpile::{Language, TranspiledParameter};

/// A data-record interface.
///
/// Instead of callables, a struct documents how a value is populated: an initializer snippet
/// listing every field, followed by one section per field.
#[derive(Debug, Clone)]
pub struct StructView {
	id: String,
	fqn: String,
	display_name: String,
	docs: Docs,
	initializer_id: String,
	language: Language,
	snippet: Option<String>,
	properties: Vec<PropertyView>,
}

impl StructView {
	/// Build the view for the struct `node`.
	pub fn new(state: &mut RenderState<'_>, node: &TypeNode, iface: &InterfaceType) -> Self {
		let fqn = node.fqn.as_str();
		let transpiler = state.transpiler;
		let ty = transpiler.type_of(fqn);
		let properties = PropertyView::properties(state, fqn, &iface.properties);

		let initializer_id = initializer_id(fqn);
		let fields: Vec<TranspiledParameter> = properties.iter().map(PropertyView::as_field).collect();
		let construction = transpiler
			.formatter()
			.format_struct_construction(&ty, &fields);
		let snippet = state
			.snippet(&initializer_id, construction)
			.map(|code| format!("{}\n\n{code}", transpiler.import_of(fqn)));

		Self {
			id: node.fqn.clone(),
			fqn: ty.fqn,
			display_name: ty.name,
			docs: node.docs.clone(),
			initializer_id,
			language: state.language(),
			snippet,
			properties,
		}
	}
}

impl View for StructView {
	type Record = StructSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, false);
		docs_block(&mut md, &self.docs);

		let mut initializer = Markdown::titled("Initializer").with_id(&self.initializer_id);
		if let Some(snippet) = &self.snippet {
			initializer.code(self.language.as_str(), &[snippet.as_str()]);
		}
		md.section(initializer);
		md.section(group("Properties", &self.properties));
		md
	}

	fn to_json(&self) -> StructSchema {
		StructSchema {
			id: self.id.clone(),
			fqn: self.fqn.clone(),
			display_name: self.display_name.clone(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
			initializer: InitializerSchema {
				id: self.initializer_id.clone(),
				snippet: self.snippet.clone(),
				parameters: Vec::new(),
			},
			properties: self.properties.iter().map(View::to_json).collect(),
		}
	}
}
