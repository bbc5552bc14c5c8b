use super::case::{escape_reserved, snake_case};
use super::{
	Language, LanguageFormatter, MemberKind, SnippetResult, TranspiledParameter, TranspiledType,
};
use crate::model::{Primitive, TypeIdentity};

/// Python keywords and soft keywords that cannot be used as bare identifiers.
pub const RESERVED_WORDS: &[&str] = &[
	"False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
	"continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
	"import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
	"while", "with", "yield",
];

/// Python naming and snippet conventions.
///
/// Members are `snake_case` with a trailing underscore on keywords; snippets use keyword
/// arguments, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFormatter;

impl PythonFormatter {
	fn module(identity: &TypeIdentity) -> String {
		let root = match &identity.targets.python {
			Some(module) => module.clone(),
			None => identity
				.assembly
				.trim_start_matches('@')
				.replace(['/', '-'], "_"),
		};
		match &identity.namespace {
			Some(namespace) => format!("{root}.{namespace}"),
			None => root,
		}
	}

	fn call(callee: &str, parameters: &[TranspiledParameter]) -> String {
		if parameters.is_empty() {
			return format!("{callee}()");
		}
		let args: Vec<String> = parameters
			.iter()
			.map(|param| {
				if param.variadic {
					format!("  *{}: {}", param.name, param.type_name)
				} else if param.optional {
					format!("  {}: {} = None", param.name, param.type_name)
				} else {
					format!("  {}: {}", param.name, param.type_name)
				}
			})
			.collect();
		format!("{callee}(\n{}\n)", args.join(",\n"))
	}
}

impl LanguageFormatter for PythonFormatter {
	fn language(&self) -> Language {
		Language::Python
	}

	fn format_member_name(&self, name: &str, kind: MemberKind) -> String {
		match kind {
			MemberKind::EnumMember => name.to_string(),
			MemberKind::Method | MemberKind::Property | MemberKind::Parameter => {
				escape_reserved(snake_case(name), RESERVED_WORDS)
			}
		}
	}

	fn format_type(&self, identity: &TypeIdentity) -> TranspiledType {
		TranspiledType {
			source_fqn: identity.fqn.clone(),
			fqn: format!("{}.{}", Self::module(identity), identity.name),
			name: identity.name.clone(),
		}
	}

	fn format_import(&self, identity: &TypeIdentity) -> String {
		format!("import {}", Self::module(identity))
	}

	fn format_primitive(&self, primitive: Primitive) -> String {
		match primitive {
			Primitive::String => "str",
			Primitive::Number => "typing.Union[int, float]",
			Primitive::Boolean => "bool",
			Primitive::Date => "datetime.datetime",
			Primitive::Json => "typing.Mapping[typing.Any, typing.Any]",
			Primitive::Any => "typing.Any",
		}
		.to_string()
	}

	fn format_array(&self, element: &str) -> String {
		format!("typing.List[{element}]")
	}

	fn format_map(&self, value: &str) -> String {
		format!("typing.Mapping[str, {value}]")
	}

	fn format_union(&self, options: &[String]) -> String {
		format!("typing.Union[{}]", options.join(", "))
	}

	fn format_construction(
		&self,
		ty: &TranspiledType,
		parameters: &[TranspiledParameter],
	) -> SnippetResult {
		Ok(Self::call(&ty.fqn, parameters))
	}

	fn format_struct_construction(
		&self,
		ty: &TranspiledType,
		fields: &[TranspiledParameter],
	) -> SnippetResult {
		Ok(Self::call(&ty.fqn, fields))
	}

	fn format_invocation(
		&self,
		ty: &TranspiledType,
		method: &str,
		is_static: bool,
		parameters: &[TranspiledParameter],
	) -> SnippetResult {
		let callee = if is_static {
			format!("{}.{method}", ty.fqn)
		} else {
			method.to_string()
		};
		Ok(Self::call(&callee, parameters))
	}
}
