//! Language conventions for names, imports and code snippets.
//!
//! A [`LanguageFormatter`] turns graph nodes into strings idiomatic for one target audience.
//! Formatters are stateless and know nothing about document structure; views receive one by
//! reference and never ask which concrete convention is active.

/// Identifier case conversion helpers.
pub mod case;
/// C# convention.
pub mod csharp;
/// Java convention.
pub mod java;
/// Python convention.
pub mod python;
/// TypeScript convention (reference implementation).
pub mod typescript;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use self::csharp::CSharpFormatter;
pub use self::java::JavaFormatter;
pub use self::python::PythonFormatter;
pub use self::typescript::TypeScriptFormatter;
use crate::error::{UnknownLanguage, UnsupportedConstructError};
use crate::model::{Parameter, Primitive, TypeIdentity, TypeRef, TypeSystem};

/// Target audiences the renderer can produce documentation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	/// TypeScript / JavaScript.
	TypeScript,
	/// Python.
	Python,
	/// Java.
	Java,
	/// C#.
	CSharp,
}

impl Language {
	/// Every supported convention.
	pub const ALL: [Language; 4] = [Self::TypeScript, Self::Python, Self::Java, Self::CSharp];

	/// Canonical lowercase name, also used as the fenced-code tag.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TypeScript => "typescript",
			Self::Python => "python",
			Self::Java => "java",
			Self::CSharp => "csharp",
		}
	}

	/// The formatter implementing this convention.
	pub fn formatter(self) -> Box<dyn LanguageFormatter> {
		match self {
			Self::TypeScript => Box::new(TypeScriptFormatter),
			Self::Python => Box::new(PythonFormatter),
			Self::Java => Box::new(JavaFormatter),
			Self::CSharp => Box::new(CSharpFormatter),
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Language {
	type Err = UnknownLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"typescript" | "ts" => Ok(Self::TypeScript),
			"python" | "py" => Ok(Self::Python),
			"java" => Ok(Self::Java),
			"csharp" | "c#" | "cs" | "dotnet" => Ok(Self::CSharp),
			_ => Err(UnknownLanguage(s.to_string())),
		}
	}
}

/// Kind of member whose name is being formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
	/// Instance method or static function.
	Method,
	/// Property or constant.
	Property,
	/// Callable parameter or struct field used as one.
	Parameter,
	/// Enum member.
	EnumMember,
}

/// A type named the way one convention names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspiledType {
	/// FQN in the graph; the key link formatters and anchors use.
	pub source_fqn: String,
	/// Fully-qualified display name in the target convention.
	pub fqn: String,
	/// Short name usable once the type is imported.
	pub name: String,
}

/// A parameter reduced to what snippet templates need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspiledParameter {
	/// Name after convention rules.
	pub name: String,
	/// Type as written in a signature.
	pub type_name: String,
	/// Whether callers may omit it.
	pub optional: bool,
	/// Whether it absorbs trailing arguments.
	pub variadic: bool,
}

/// Result of a snippet template.
pub type SnippetResult = Result<String, UnsupportedConstructError>;

/// One target-language convention.
pub trait LanguageFormatter: Send + Sync {
	/// The convention this formatter implements.
	fn language(&self) -> Language;

	/// Apply casing and keyword-escaping rules to a member identifier.
	fn format_member_name(&self, name: &str, kind: MemberKind) -> String;

	/// Name a type, both fully qualified and short.
	fn format_type(&self, identity: &TypeIdentity) -> TranspiledType;

	/// Statement that brings `identity` into scope.
	fn format_import(&self, identity: &TypeIdentity) -> String;

	/// Spelling of a built-in type.
	fn format_primitive(&self, primitive: Primitive) -> String;

	/// List of `element`.
	fn format_array(&self, element: &str) -> String;

	/// String-keyed map of `value`.
	fn format_map(&self, value: &str) -> String;

	/// Any one of `options`.
	fn format_union(&self, options: &[String]) -> String;

	/// How an instance of `ty` is created through its initializer.
	fn format_construction(
		&self,
		ty: &TranspiledType,
		parameters: &[TranspiledParameter],
	) -> SnippetResult;

	/// How a data record of type `ty` is populated with `fields`.
	fn format_struct_construction(
		&self,
		ty: &TranspiledType,
		fields: &[TranspiledParameter],
	) -> SnippetResult;

	/// How `method` is called; static calls are qualified with `ty`.
	fn format_invocation(
		&self,
		ty: &TranspiledType,
		method: &str,
		is_static: bool,
		parameters: &[TranspiledParameter],
	) -> SnippetResult;

	/// Spell a type reference, delegating every named type to `named`.
	fn format_type_reference(
		&self,
		reference: &TypeRef,
		named: &mut dyn FnMut(&str) -> String,
	) -> String {
		match reference {
			TypeRef::Primitive(primitive) => self.format_primitive(*primitive),
			TypeRef::Named(fqn) => named(fqn),
			TypeRef::Array(element) => {
				let element = self.format_type_reference(element, named);
				self.format_array(&element)
			}
			TypeRef::Map(value) => {
				let value = self.format_type_reference(value, named);
				self.format_map(&value)
			}
			TypeRef::Union(options) => {
				let options: Vec<String> = options
					.iter()
					.map(|option| self.format_type_reference(option, named))
					.collect();
				self.format_union(&options)
			}
		}
	}
}

/// Reject a variadic parameter that is not the last one; shared by conventions whose rest
/// parameters must close the list.
pub(crate) fn require_trailing_variadic(
	language: Language,
	parameters: &[TranspiledParameter],
) -> Result<(), UnsupportedConstructError> {
	let last = parameters.len().saturating_sub(1);
	match parameters.iter().enumerate().find(|(index, p)| p.variadic && *index != last) {
		Some((_, param)) => Err(UnsupportedConstructError::new(
			language,
			format!("variadic parameter `{}` before the final position", param.name),
		)),
		None => Ok(()),
	}
}

/// The active formatter paired with the graph it resolves names against.
///
/// Shared read-only by every view of one render.
#[derive(Clone, Copy)]
pub struct Transpiler<'a> {
	formatter: &'a dyn LanguageFormatter,
	graph: &'a TypeSystem,
}

impl<'a> Transpiler<'a> {
	/// Pair `formatter` with `graph`.
	pub fn new(formatter: &'a dyn LanguageFormatter, graph: &'a TypeSystem) -> Self {
		Self { formatter, graph }
	}

	/// The active convention.
	pub fn language(&self) -> Language {
		self.formatter.language()
	}

	/// The wrapped formatter.
	pub fn formatter(&self) -> &'a dyn LanguageFormatter {
		self.formatter
	}

	/// The graph being rendered.
	pub fn graph(&self) -> &'a TypeSystem {
		self.graph
	}

	/// Name the type with graph FQN `fqn`.
	pub fn type_of(&self, fqn: &str) -> TranspiledType {
		self.formatter.format_type(&self.graph.identity(fqn))
	}

	/// Import statement for the type with graph FQN `fqn`.
	pub fn import_of(&self, fqn: &str) -> String {
		self.formatter.format_import(&self.graph.identity(fqn))
	}

	/// Apply member naming rules.
	pub fn member_name(&self, name: &str, kind: MemberKind) -> String {
		self.formatter.format_member_name(name, kind)
	}

	/// Spell `reference` using short names, as written inside a snippet.
	pub fn signature_type(&self, reference: &TypeRef) -> String {
		self.formatter
			.format_type_reference(reference, &mut |fqn: &str| self.type_of(fqn).name)
	}

	/// Spell `reference` using fully-qualified display names.
	pub fn display_type(&self, reference: &TypeRef) -> String {
		self.formatter
			.format_type_reference(reference, &mut |fqn: &str| self.type_of(fqn).fqn)
	}

	/// Spell `reference`, rendering every named type through `link`.
	pub fn linked_type(
		&self,
		reference: &TypeRef,
		link: &dyn Fn(&TranspiledType, bool) -> String,
	) -> String {
		self.formatter.format_type_reference(reference, &mut |fqn: &str| {
			link(&self.type_of(fqn), self.graph.is_local(fqn))
		})
	}

	/// Reduce graph parameters for snippet templates, preserving order.
	pub fn parameters(&self, parameters: &[Parameter]) -> Vec<TranspiledParameter> {
		parameters
			.iter()
			.map(|param| TranspiledParameter {
				name: self.member_name(&param.name, MemberKind::Parameter),
				type_name: self.signature_type(&param.type_ref),
				optional: param.optional,
				variadic: param.variadic,
			})
			.collect()
	}
}
