use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in value types every target convention can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
	/// Text.
	String,
	/// Any numeric value.
	Number,
	/// `true` / `false`.
	Boolean,
	/// Point in time.
	Date,
	/// Arbitrary JSON document.
	Json,
	/// Unconstrained value.
	Any,
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::String => "string",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Date => "date",
			Self::Json => "json",
			Self::Any => "any",
		};
		f.write_str(name)
	}
}

/// A resolved reference from a member to the type it declares.
///
/// Named references carry the FQN of the target type; the graph guarantees the FQN is either
/// one of its own types, a type of a declared dependency, or an opaque external name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
	/// A built-in value type.
	Primitive(Primitive),
	/// Another type in the graph, by FQN.
	Named(String),
	/// Ordered list of the element type.
	Array(Box<TypeRef>),
	/// String-keyed map of the value type.
	Map(Box<TypeRef>),
	/// Any one of the listed types.
	Union(Vec<TypeRef>),
}

impl TypeRef {
	/// Shorthand for a named reference.
	pub fn named(fqn: impl Into<String>) -> Self {
		Self::Named(fqn.into())
	}

	/// Visit every named FQN reachable from this reference, depth first.
	pub fn named_fqns(&self) -> Vec<&str> {
		let mut out = Vec::new();
		self.collect_named(&mut out);
		out
	}

	fn collect_named<'a>(&'a self, out: &mut Vec<&'a str>) {
		match self {
			Self::Primitive(_) => {}
			Self::Named(fqn) => out.push(fqn),
			Self::Array(inner) | Self::Map(inner) => inner.collect_named(out),
			Self::Union(options) => {
				for option in options {
					option.collect_named(out);
				}
			}
		}
	}
}

/// Identity of a type as seen by formatters: everything needed to name and import it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentity {
	/// Fully-qualified name as recorded in the graph.
	pub fqn: String,
	/// Simple name (last FQN segment).
	pub name: String,
	/// Name of the assembly that declares the type.
	pub assembly: String,
	/// Dotted sub-module path inside the assembly, if any.
	pub namespace: Option<String>,
	/// Per-language package coordinates of the declaring assembly.
	pub targets: super::Targets,
}

impl TypeIdentity {
	/// Derive an identity purely from an FQN for types the graph does not describe.
	///
	/// The first segment is taken as the assembly, the last as the name, anything in between as
	/// the namespace.
	pub fn from_fqn(fqn: &str) -> Self {
		let segments: Vec<&str> = fqn.split('.').collect();
		let name = segments.last().copied().unwrap_or(fqn).to_string();
		let assembly = segments.first().copied().unwrap_or(fqn).to_string();
		let namespace = (segments.len() > 2).then(|| segments[1..segments.len() - 1].join("."));
		Self {
			fqn: fqn.to_string(),
			name,
			assembly,
			namespace,
			targets: super::Targets::default(),
		}
	}
}
