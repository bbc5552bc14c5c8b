use serde::Deserialize;

use super::reference::TypeRef;

/// Structured documentation attached to any graph node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Docs {
	/// First paragraph.
	pub summary: String,
	/// Extended description following the summary.
	pub remarks: Option<String>,
	/// Human-readable default value for optional members.
	pub default: Option<String>,
	/// Deprecation notice; presence marks the node deprecated.
	pub deprecated: Option<String>,
	/// Link to external reference material.
	pub see: Option<String>,
	/// Example source, written in the library's authoring language.
	pub example: Option<String>,
}

impl Docs {
	/// Whether the node carries a deprecation notice.
	pub fn is_deprecated(&self) -> bool {
		self.deprecated.is_some()
	}

	/// Summary and remarks as one block of text.
	pub fn text(&self) -> String {
		match &self.remarks {
			Some(remarks) if self.summary.is_empty() => remarks.clone(),
			Some(remarks) => format!("{}\n\n{}", self.summary, remarks),
			None => self.summary.clone(),
		}
	}

	/// Whether there is nothing to render.
	pub fn is_empty(&self) -> bool {
		self.summary.is_empty()
			&& self.remarks.is_none()
			&& self.see.is_none()
			&& self.example.is_none()
	}
}

/// A type declared by an assembly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeNode {
	/// Globally unique fully-qualified name.
	pub fqn: String,
	/// Simple name.
	pub name: String,
	/// Dotted sub-module path the type lives in, if any.
	#[serde(default)]
	pub namespace: Option<String>,
	/// Documentation for the type.
	#[serde(default)]
	pub docs: Docs,
	/// Shape-specific payload.
	#[serde(flatten)]
	pub kind: TypeKind,
}

impl TypeNode {
	/// Interfaces this type declares it implements (classes) or extends (interfaces).
	pub fn interfaces(&self) -> &[String] {
		match &self.kind {
			TypeKind::Class(class) => &class.interfaces,
			TypeKind::Interface(iface) => &iface.interfaces,
			TypeKind::Enum(_) => &[],
		}
	}

	/// Borrow the class payload, if this is a class.
	pub fn as_class(&self) -> Option<&ClassType> {
		match &self.kind {
			TypeKind::Class(class) => Some(class),
			_ => None,
		}
	}
}

/// Shape of a type as delivered by the graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
	/// Concrete or abstract class.
	Class(ClassType),
	/// Interface; data-only interfaces are flagged `datatype`.
	Interface(InterfaceType),
	/// Enumeration.
	Enum(EnumType),
}

/// Class payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassType {
	/// FQN of the direct base class.
	pub base: Option<String>,
	/// FQNs of implemented interfaces.
	pub interfaces: Vec<String>,
	/// Public constructor, if the class can be instantiated.
	pub initializer: Option<Initializer>,
	/// Methods declared on this class (not inherited).
	pub methods: Vec<Method>,
	/// Properties declared on this class (not inherited).
	pub properties: Vec<Property>,
}

/// Interface payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InterfaceType {
	/// Whether this interface is a pure data record (a struct).
	pub datatype: bool,
	/// FQNs of extended interfaces.
	pub interfaces: Vec<String>,
	/// Methods declared on this interface.
	pub methods: Vec<Method>,
	/// Properties declared on this interface.
	pub properties: Vec<Property>,
}

/// Enum payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnumType {
	/// Members in declaration order.
	pub members: Vec<EnumMember>,
}

/// A single enum member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnumMember {
	/// Member name.
	pub name: String,
	/// Member documentation.
	#[serde(default)]
	pub docs: Docs,
}

/// A class constructor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Initializer {
	/// Constructor documentation.
	pub docs: Docs,
	/// Whether only subclasses may call it.
	pub protected: bool,
	/// Positional parameters; `None` means the graph failed to supply them.
	pub parameters: Option<Vec<Parameter>>,
}

/// A method, static or instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Method {
	/// Method name.
	pub name: String,
	/// Method documentation.
	#[serde(default)]
	pub docs: Docs,
	/// Whether the method is static.
	#[serde(default, rename = "static")]
	pub is_static: bool,
	/// Whether only subclasses may call it.
	#[serde(default)]
	pub protected: bool,
	/// Positional parameters; `None` means the graph failed to supply them.
	#[serde(default)]
	pub parameters: Option<Vec<Parameter>>,
	/// Declared return type; `None` for void.
	#[serde(default)]
	pub returns: Option<TypeRef>,
}

/// A property, mutable or constant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
	/// Property name.
	pub name: String,
	/// Property documentation.
	#[serde(default)]
	pub docs: Docs,
	/// Declared type.
	#[serde(rename = "type")]
	pub type_ref: TypeRef,
	/// Whether the property may be absent.
	#[serde(default)]
	pub optional: bool,
	/// Whether the property belongs to the type rather than instances.
	#[serde(default, rename = "static")]
	pub is_static: bool,
	/// Whether the property cannot be reassigned.
	#[serde(default)]
	pub immutable: bool,
	/// Whether the graph marks the property as a constant.
	#[serde(default, rename = "const")]
	pub constant: bool,
	/// Whether only subclasses may access it.
	#[serde(default)]
	pub protected: bool,
}

impl Property {
	/// Constants are flagged by the graph, or are both static and immutable.
	pub fn is_constant(&self) -> bool {
		self.constant || (self.is_static && self.immutable)
	}
}

/// A callable parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
	/// Parameter name.
	pub name: String,
	/// Declared type.
	#[serde(rename = "type")]
	pub type_ref: TypeRef,
	/// Whether callers may omit it.
	#[serde(default)]
	pub optional: bool,
	/// Whether it absorbs any number of trailing arguments.
	#[serde(default)]
	pub variadic: bool,
	/// Parameter documentation.
	#[serde(default)]
	pub docs: Docs,
}
