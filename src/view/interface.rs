use super::collections::group;
use super::{MethodView, PropertyView, View, docs_block, entity_section, link_list, type_link};
use crate::error::Result;
use crate::model::{Docs, InterfaceType, TypeNode};
use crate::render::utils::sort_by_name;
use crate::render::{Markdown, RenderState};
use crate::schema::{InterfaceSchema, TypeLinkSchema};

/// A behavioral interface.
#[derive(Debug, Clone)]
pub struct InterfaceView {
	id: String,
	fqn: String,
	display_name: String,
	extends: Vec<(TypeLinkSchema, String)>,
	implementations: Vec<(TypeLinkSchema, String)>,
	docs: Docs,
	methods: Vec<MethodView>,
	properties: Vec<PropertyView>,
}

impl InterfaceView {
	/// Build the view for the interface `node`.
	pub fn new(
		state: &mut RenderState<'_>,
		node: &TypeNode,
		iface: &InterfaceType,
	) -> Result<Self> {
		let fqn = node.fqn.as_str();
		let ty = state.transpiler.type_of(fqn);

		let extends = iface
			.interfaces
			.iter()
			.map(|base| type_link(state, base))
			.collect();

		let mut implementors = state.transpiler.graph().implementations_of(fqn);
		sort_by_name(&mut implementors, |node| node.name.as_str());
		let implementations = implementors
			.iter()
			.map(|node| type_link(state, &node.fqn))
			.collect();

		Ok(Self {
			id: node.fqn.clone(),
			fqn: ty.fqn,
			display_name: ty.name,
			extends,
			implementations,
			docs: node.docs.clone(),
			methods: MethodView::instance_methods(state, fqn, &iface.methods)?,
			properties: PropertyView::properties(state, fqn, &iface.properties),
		})
	}
}

impl View for InterfaceView {
	type Record = InterfaceSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, false);
		if !self.extends.is_empty() {
			md.bullet(format!("{} {}", Markdown::italic("Extends:"), link_list(&self.extends)));
		}
		if !self.implementations.is_empty() {
			md.bullet(format!(
				"{} {}",
				Markdown::italic("Implemented By:"),
				link_list(&self.implementations)
			));
		}
		docs_block(&mut md, &self.docs);
		md.section(group("Methods", &self.methods));
		md.section(group("Properties", &self.properties));
		md
	}

	fn to_json(&self) -> InterfaceSchema {
		InterfaceSchema {
			id: self.id.clone(),
			fqn: self.fqn.clone(),
			display_name: self.display_name.clone(),
			interfaces: self.extends.iter().map(|(link, _)| link.clone()).collect(),
			implementations: self
				.implementations
				.iter()
				.map(|(link, _)| link.clone())
				.collect(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
			instance_methods: self.methods.iter().map(View::to_json).collect(),
			properties: self.properties.iter().map(View::to_json).collect(),
		}
	}
}
