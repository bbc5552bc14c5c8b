use std::collections::HashSet;

use log::warn;

use super::collections::group;
use super::{
	InitializerView, MethodView, PropertyView, View, docs_block, entity_section, link_list, type_link,
};
use crate::error::Result;
use crate::model::{ClassType, Docs, TypeNode, TypeSystem};
use crate::render::{Markdown, RenderState};
use crate::schema::{ClassSchema, TypeLinkSchema};

/// Base class whose descendants are documented as constructs.
pub const CONSTRUCT_FQN: &str = "constructs.Construct";

/// Whether `node` is the construct base class or descends from it.
///
/// The base chain is followed through the graph and its dependencies. A chain that leaves the
/// graph ends the walk; a chain that revisits a class is reported and treated as not a construct.
pub fn is_construct(graph: &TypeSystem, node: &TypeNode) -> bool {
	let mut visited = HashSet::new();
	let mut current = node;
	loop {
		if current.fqn == CONSTRUCT_FQN {
			return true;
		}
		if !visited.insert(current.fqn.as_str()) {
			warn!(fqn = node.fqn.as_str(), cycle_at = current.fqn.as_str(); "Cyclic base class chain");
			return false;
		}
		let Some(base) = current.as_class().and_then(|class| class.base.as_deref()) else {
			return false;
		};
		if base == CONSTRUCT_FQN {
			return true;
		}
		match graph.find_type(base) {
			Some(next) => current = next,
			None => return false,
		}
	}
}

/// A class, routed under "Constructs" or "Classes" by the caller.
#[derive(Debug, Clone)]
pub struct ClassView {
	id: String,
	fqn: String,
	display_name: String,
	interfaces: Vec<(TypeLinkSchema, String)>,
	docs: Docs,
	initializer: Option<InitializerView>,
	instance_methods: Vec<MethodView>,
	static_functions: Vec<MethodView>,
	properties: Vec<PropertyView>,
	constants: Vec<PropertyView>,
}

impl ClassView {
	/// Build the view for the class `node`.
	pub fn new(state: &mut RenderState<'_>, node: &TypeNode, class: &ClassType) -> Result<Self> {
		let fqn = node.fqn.as_str();
		let ty = state.transpiler.type_of(fqn);

		let interfaces = class
			.interfaces
			.iter()
			.map(|iface| type_link(state, iface))
			.collect();

		let initializer = match &class.initializer {
			Some(init) if !init.protected => Some(InitializerView::new(state, fqn, init)?),
			_ => None,
		};

		Ok(Self {
			id: node.fqn.clone(),
			fqn: ty.fqn,
			display_name: ty.name,
			interfaces,
			docs: node.docs.clone(),
			initializer,
			instance_methods: MethodView::instance_methods(state, fqn, &class.methods)?,
			static_functions: MethodView::static_functions(state, fqn, &class.methods)?,
			properties: PropertyView::properties(state, fqn, &class.properties),
			constants: PropertyView::constants(state, fqn, &class.properties),
		})
	}
}

impl View for ClassView {
	type Record = ClassSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, false);
		if !self.interfaces.is_empty() {
			md.bullet(format!(
				"{} {}",
				Markdown::italic("Implements:"),
				link_list(&self.interfaces)
			));
		}
		docs_block(&mut md, &self.docs);

		if let Some(initializer) = &self.initializer {
			md.section(initializer.to_markdown());
		}
		md.section(group("Methods", &self.instance_methods));
		md.section(group("Static Functions", &self.static_functions));
		md.section(group("Properties", &self.properties));
		md.section(group("Constants", &self.constants));
		md
	}

	fn to_json(&self) -> ClassSchema {
		ClassSchema {
			id: self.id.clone(),
			fqn: self.fqn.clone(),
			display_name: self.display_name.clone(),
			interfaces: self.interfaces.iter().map(|(link, _)| link.clone()).collect(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
			initializer: self.initializer.as_ref().map(View::to_json),
			instance_methods: self.instance_methods.iter().map(View::to_json).collect(),
			static_functions: self.static_functions.iter().map(View::to_json).collect(),
			properties: self.properties.iter().map(View::to_json).collect(),
			constants: self.constants.iter().map(View::to_json).collect(),
		}
	}
}
