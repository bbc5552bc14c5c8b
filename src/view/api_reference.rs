use super::{ClassView, Collection, EnumView, InterfaceView, StructView, View, is_construct};
use crate::error::Result;
use crate::model::{ClassType, EnumType, InterfaceType, TypeKind, TypeNode, TypeSystem};
use crate::render::utils::sort_by_name;
use crate::render::{Markdown, RenderState};
use crate::schema::ApiReferenceSchema;

/// Which top-level collection a type is documented under, with the node's kind-specific data.
#[derive(Debug, Clone, Copy)]
pub enum Category<'a> {
	/// Class descending from the construct base class.
	Construct(&'a ClassType),
	/// Any other class.
	Class(&'a ClassType),
	/// Interface flagged as a data record.
	Struct(&'a InterfaceType),
	/// Behavioral interface.
	Interface(&'a InterfaceType),
	/// Enumeration.
	Enum(&'a EnumType),
}

impl<'a> Category<'a> {
	/// Route `node` to its collection.
	pub fn of(graph: &TypeSystem, node: &'a TypeNode) -> Self {
		match &node.kind {
			TypeKind::Class(class) if is_construct(graph, node) => Self::Construct(class),
			TypeKind::Class(class) => Self::Class(class),
			TypeKind::Interface(iface) if iface.datatype => Self::Struct(iface),
			TypeKind::Interface(iface) => Self::Interface(iface),
			TypeKind::Enum(enumeration) => Self::Enum(enumeration),
		}
	}
}

/// The API reference of one module.
#[derive(Debug, Clone)]
pub struct ApiReferenceView {
	title: String,
	constructs: Collection<ClassView>,
	classes: Collection<ClassView>,
	structs: Collection<StructView>,
	interfaces: Collection<InterfaceView>,
	enums: Collection<EnumView>,
}

impl ApiReferenceView {
	/// Build views for every type in `types`, sorted by name within each collection.
	pub fn new(state: &mut RenderState<'_>, types: &[&TypeNode]) -> Result<Self> {
		let graph = state.transpiler.graph();
		let mut sorted = types.to_vec();
		sort_by_name(&mut sorted, |node| node.name.as_str());

		let mut constructs = Vec::new();
		let mut classes = Vec::new();
		let mut structs = Vec::new();
		let mut interfaces = Vec::new();
		let mut enums = Vec::new();

		for node in sorted {
			match Category::of(graph, node) {
				Category::Construct(class) => constructs.push(ClassView::new(state, node, class)?),
				Category::Class(class) => classes.push(ClassView::new(state, node, class)?),
				Category::Struct(iface) => structs.push(StructView::new(state, node, iface)),
				Category::Interface(iface) => {
					interfaces.push(InterfaceView::new(state, node, iface)?);
				}
				Category::Enum(enumeration) => enums.push(EnumView::new(state, node, enumeration)),
			}
		}

		Ok(Self {
			title: state.options.title.clone(),
			constructs: Collection::new("Constructs", constructs),
			classes: Collection::new("Classes", classes),
			structs: Collection::new("Structs", structs),
			interfaces: Collection::new("Interfaces", interfaces),
			enums: Collection::new("Enums", enums),
		})
	}
}

impl View for ApiReferenceView {
	type Record = ApiReferenceSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = Markdown::titled(&self.title);
		md.section(self.constructs.to_markdown());
		md.section(self.structs.to_markdown());
		md.section(self.classes.to_markdown());
		md.section(self.interfaces.to_markdown());
		md.section(self.enums.to_markdown());
		md
	}

	fn to_json(&self) -> ApiReferenceSchema {
		ApiReferenceSchema {
			constructs: self.constructs.to_json(),
			classes: self.classes.to_json(),
			structs: self.structs.to_json(),
			interfaces: self.interfaces.to_json(),
			enums: self.enums.to_json(),
		}
	}
}
