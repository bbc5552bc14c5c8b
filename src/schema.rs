//! Structured records mirroring the rendered document.
//!
//! Every record that corresponds to an identified document section carries the same `id`, so
//! external tools can correlate the JSON and Markdown outputs of one render.

use serde::Serialize;

use crate::error::{RenderError, Result};
use crate::model::Docs;
use crate::transpile::Language;

/// Schema format version.
pub const SCHEMA_VERSION: &str = "0.1";

/// Documentation text of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocsSchema {
	/// First paragraph.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub summary: String,
	/// Extended description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub remarks: Option<String>,
	/// Reference link.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub see: Option<String>,
	/// Example source.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
}

impl From<&Docs> for DocsSchema {
	fn from(docs: &Docs) -> Self {
		Self {
			summary: docs.summary.clone(),
			remarks: docs.remarks.clone(),
			see: docs.see.clone(),
			example: docs.example.clone(),
		}
	}
}

/// Deprecation marker shared by all member records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationSchema {
	/// Whether the entity is deprecated.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub deprecated: bool,
	/// Why, when deprecated.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deprecation_reason: Option<String>,
}

impl From<&Docs> for DeprecationSchema {
	fn from(docs: &Docs) -> Self {
		Self {
			deprecated: docs.is_deprecated(),
			deprecation_reason: docs.deprecated.clone(),
		}
	}
}

/// Reference to another type, as listed under implemented interfaces or implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLinkSchema {
	/// FQN in the graph.
	pub fqn: String,
	/// Display name in the active convention.
	pub display_name: String,
}

/// A parameter of an initializer, method or static function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSchema {
	/// Section identifier.
	pub id: String,
	/// Name in the active convention.
	pub display_name: String,
	/// Type in the active convention, fully qualified.
	#[serde(rename = "type")]
	pub type_name: String,
	/// Whether callers may omit it.
	pub optional: bool,
	/// Whether it absorbs trailing arguments.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub variadic: bool,
	/// Default value description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
}

/// A class or struct initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializerSchema {
	/// Section identifier.
	pub id: String,
	/// Import and construction snippet; absent when the convention cannot express it.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	/// Parameters in positional order.
	pub parameters: Vec<ParameterSchema>,
}

/// An instance method or static function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallableSchema {
	/// Section identifier.
	pub id: String,
	/// Name in the active convention.
	pub display_name: String,
	/// Invocation snippet; absent when the convention cannot express it.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub snippet: Option<String>,
	/// Return type, fully qualified, when not void.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub returns: Option<String>,
	/// Parameters in positional order.
	pub parameters: Vec<ParameterSchema>,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
}

/// A property or constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
	/// Section identifier.
	pub id: String,
	/// Name in the active convention.
	pub display_name: String,
	/// Type in the active convention, fully qualified.
	#[serde(rename = "type")]
	pub type_name: String,
	/// Whether the property may be absent.
	pub optional: bool,
	/// Default value description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
}

/// A class, rendered under "Classes" or "Constructs".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchema {
	/// Section identifier (the graph FQN).
	pub id: String,
	/// Fully-qualified display name in the active convention.
	pub fqn: String,
	/// Short display name.
	pub display_name: String,
	/// Implemented interfaces.
	pub interfaces: Vec<TypeLinkSchema>,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
	/// Public initializer.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub initializer: Option<InitializerSchema>,
	/// Instance methods by name.
	pub instance_methods: Vec<CallableSchema>,
	/// Static functions by name.
	pub static_functions: Vec<CallableSchema>,
	/// Non-constant, non-protected properties by name.
	pub properties: Vec<PropertySchema>,
	/// Constants by name.
	pub constants: Vec<PropertySchema>,
}

/// A data-record interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructSchema {
	/// Section identifier (the graph FQN).
	pub id: String,
	/// Fully-qualified display name in the active convention.
	pub fqn: String,
	/// Short display name.
	pub display_name: String,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
	/// How a value is populated.
	pub initializer: InitializerSchema,
	/// Fields by name.
	pub properties: Vec<PropertySchema>,
}

/// A behavioral interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSchema {
	/// Section identifier (the graph FQN).
	pub id: String,
	/// Fully-qualified display name in the active convention.
	pub fqn: String,
	/// Short display name.
	pub display_name: String,
	/// Extended interfaces.
	pub interfaces: Vec<TypeLinkSchema>,
	/// Local types implementing this interface.
	pub implementations: Vec<TypeLinkSchema>,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
	/// Methods by name.
	pub instance_methods: Vec<CallableSchema>,
	/// Properties by name.
	pub properties: Vec<PropertySchema>,
}

/// One enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMemberSchema {
	/// Section identifier.
	pub id: String,
	/// Name in the active convention.
	pub display_name: String,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
}

/// An enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumSchema {
	/// Section identifier (the graph FQN).
	pub id: String,
	/// Fully-qualified display name in the active convention.
	pub fqn: String,
	/// Short display name.
	pub display_name: String,
	/// Documentation.
	pub docs: DocsSchema,
	/// Deprecation marker.
	#[serde(flatten)]
	pub deprecation: DeprecationSchema,
	/// Members by name.
	pub members: Vec<EnumMemberSchema>,
}

/// The API reference of one module: the structured twin of the "API Reference" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiReferenceSchema {
	/// Construct subclasses.
	pub constructs: Vec<ClassSchema>,
	/// Other classes.
	pub classes: Vec<ClassSchema>,
	/// Data-record interfaces.
	pub structs: Vec<StructSchema>,
	/// Behavioral interfaces.
	pub interfaces: Vec<InterfaceSchema>,
	/// Enumerations.
	pub enums: Vec<EnumSchema>,
}

/// Package coordinates of a rendered module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSchema {
	/// Assembly name.
	pub package_name: String,
	/// Assembly version.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub package_version: Option<String>,
	/// Selected sub-module.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub submodule: Option<String>,
}

/// Envelope written by [`crate::Documentation::to_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationSchema {
	/// Schema format version.
	pub version: String,
	/// Convention the names and snippets are written in.
	pub language: Language,
	/// Package coordinates.
	pub metadata: MetadataSchema,
	/// The API reference itself.
	pub api_reference: ApiReferenceSchema,
}

impl DocumentationSchema {
	/// Every `id` field in the API reference record.
	pub fn identifiers(&self) -> Result<Vec<String>> {
		let value =
			serde_json::to_value(&self.api_reference).map_err(RenderError::Serialization)?;
		let mut out = Vec::new();
		collect_ids(&value, &mut out);
		Ok(out)
	}
}

fn collect_ids(value: &serde_json::Value, out: &mut Vec<String>) {
	match value {
		serde_json::Value::Object(map) => {
			for (key, child) in map {
				match (key.as_str(), child) {
					("id", serde_json::Value::String(id)) => out.push(id.clone()),
					_ => collect_ids(child, out),
				}
			}
		}
		serde_json::Value::Array(items) => {
			for item in items {
				collect_ids(item, out);
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn identifiers_are_collected_from_nested_records() {
		let schema = DocumentationSchema {
			version: SCHEMA_VERSION.to_string(),
			language: Language::TypeScript,
			metadata: MetadataSchema {
				package_name: "acme".into(),
				package_version: None,
				submodule: None,
			},
			api_reference: ApiReferenceSchema {
				enums: vec![EnumSchema {
					id: "acme.Mode".into(),
					fqn: "Mode".into(),
					display_name: "Mode".into(),
					docs: DocsSchema::default(),
					deprecation: DeprecationSchema::default(),
					members: vec![EnumMemberSchema {
						id: "acme.Mode.ON".into(),
						display_name: "ON".into(),
						docs: DocsSchema::default(),
						deprecation: DeprecationSchema::default(),
					}],
				}],
				..ApiReferenceSchema::default()
			},
		};
		let mut ids = schema.identifiers().unwrap();
		ids.sort();
		assert_eq!(ids, vec!["acme.Mode", "acme.Mode.ON"]);
	}
}
