use super::case::pascal_case;
use super::{
	Language, LanguageFormatter, MemberKind, SnippetResult, TranspiledParameter, TranspiledType,
	require_trailing_variadic,
};
use crate::model::{Primitive, TypeIdentity};

/// C# keywords that need a verbatim `@` prefix when used as parameter names.
pub const RESERVED_WORDS: &[&str] = &[
	"abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
	"class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum",
	"event", "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto",
	"if", "implicit", "in", "int", "interface", "internal", "is", "lock", "long", "namespace",
	"new", "null", "object", "operator", "out", "override", "params", "private", "protected",
	"public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc",
	"static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint",
	"ulong", "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// C# naming and snippet conventions.
///
/// Types live in `PascalCase` namespaces; methods, properties and enum members are `PascalCase`
/// while parameters keep their authored spelling. Structs are populated with an object
/// initializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpFormatter;

impl CSharpFormatter {
	fn namespace(identity: &TypeIdentity) -> String {
		let root = match &identity.targets.dotnet {
			Some(namespace) => namespace.clone(),
			None => dotted_pascal(identity.assembly.trim_start_matches('@'), '/'),
		};
		match &identity.namespace {
			Some(namespace) => format!("{root}.{}", dotted_pascal(namespace, '.')),
			None => root,
		}
	}

	fn parameter_list(parameters: &[TranspiledParameter]) -> String {
		parameters
			.iter()
			.map(|param| {
				if param.variadic {
					format!("params {}[] {}", param.type_name, param.name)
				} else if param.optional {
					format!("{} {} = null", param.type_name, param.name)
				} else {
					format!("{} {}", param.type_name, param.name)
				}
			})
			.collect::<Vec<_>>()
			.join(", ")
	}
}

fn dotted_pascal(path: &str, separator: char) -> String {
	path.split(separator)
		.map(pascal_case)
		.collect::<Vec<_>>()
		.join(".")
}

impl LanguageFormatter for CSharpFormatter {
	fn language(&self) -> Language {
		Language::CSharp
	}

	fn format_member_name(&self, name: &str, kind: MemberKind) -> String {
		match kind {
			MemberKind::Method | MemberKind::Property | MemberKind::EnumMember => pascal_case(name),
			MemberKind::Parameter if RESERVED_WORDS.contains(&name) => format!("@{name}"),
			MemberKind::Parameter => name.to_string(),
		}
	}

	fn format_type(&self, identity: &TypeIdentity) -> TranspiledType {
		TranspiledType {
			source_fqn: identity.fqn.clone(),
			fqn: format!("{}.{}", Self::namespace(identity), identity.name),
			name: identity.name.clone(),
		}
	}

	fn format_import(&self, identity: &TypeIdentity) -> String {
		format!("using {};", Self::namespace(identity))
	}

	fn format_primitive(&self, primitive: Primitive) -> String {
		match primitive {
			Primitive::String => "string",
			Primitive::Number => "double",
			Primitive::Boolean => "bool",
			Primitive::Date => "System.DateTime",
			Primitive::Json => "System.Collections.Generic.IDictionary<string, object>",
			Primitive::Any => "object",
		}
		.to_string()
	}

	fn format_array(&self, element: &str) -> String {
		format!("{element}[]")
	}

	fn format_map(&self, value: &str) -> String {
		format!("System.Collections.Generic.IDictionary<string, {value}>")
	}

	fn format_union(&self, _options: &[String]) -> String {
		"object".to_string()
	}

	fn format_construction(
		&self,
		ty: &TranspiledType,
		parameters: &[TranspiledParameter],
	) -> SnippetResult {
		require_trailing_variadic(self.language(), parameters)?;
		Ok(format!("new {}({});", ty.name, Self::parameter_list(parameters)))
	}

	fn format_struct_construction(
		&self,
		ty: &TranspiledType,
		fields: &[TranspiledParameter],
	) -> SnippetResult {
		if fields.is_empty() {
			return Ok(format!("new {} {{ }};", ty.name));
		}
		let fields: Vec<String> = fields
			.iter()
			.map(|field| {
				if field.optional {
					format!("    {} {} = null", field.type_name, field.name)
				} else {
					format!("    {} {}", field.type_name, field.name)
				}
			})
			.collect();
		Ok(format!("new {} {{\n{}\n}};", ty.name, fields.join(",\n")))
	}

	fn format_invocation(
		&self,
		ty: &TranspiledType,
		method: &str,
		is_static: bool,
		parameters: &[TranspiledParameter],
	) -> SnippetResult {
		require_trailing_variadic(self.language(), parameters)?;
		let params = Self::parameter_list(parameters);
		Ok(if is_static {
			format!("{}.{method}({params})", ty.name)
		} else {
			format!("{method}({params})")
		})
	}
}
