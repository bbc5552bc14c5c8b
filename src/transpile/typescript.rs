use super::case::lower_first;
use super::{
	Language, LanguageFormatter, MemberKind, SnippetResult, TranspiledParameter, TranspiledType,
	require_trailing_variadic,
};
use crate::model::{Primitive, TypeIdentity};

/// TypeScript naming and snippet conventions.
///
/// Identifiers are kept as authored; types are qualified by their sub-module namespace, which is
/// what an `import { ns } from 'pkg'` statement brings into scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptFormatter;

impl TypeScriptFormatter {
	fn parameter_list(parameters: &[TranspiledParameter]) -> String {
		parameters
			.iter()
			.map(|param| {
				if param.variadic {
					format!("...{}: {}[]", param.name, param.type_name)
				} else if param.optional {
					format!("{}?: {}", param.name, param.type_name)
				} else {
					format!("{}: {}", param.name, param.type_name)
				}
			})
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl LanguageFormatter for TypeScriptFormatter {
	fn language(&self) -> Language {
		Language::TypeScript
	}

	fn format_member_name(&self, name: &str, _kind: MemberKind) -> String {
		name.to_string()
	}

	fn format_type(&self, identity: &TypeIdentity) -> TranspiledType {
		let fqn = match &identity.namespace {
			Some(namespace) => format!("{namespace}.{}", identity.name),
			None => identity.name.clone(),
		};
		TranspiledType {
			source_fqn: identity.fqn.clone(),
			name: fqn.clone(),
			fqn,
		}
	}

	fn format_import(&self, identity: &TypeIdentity) -> String {
		let binding = match &identity.namespace {
			Some(namespace) => namespace.split('.').next().unwrap_or(namespace),
			None => identity.name.as_str(),
		};
		format!("import {{ {binding} }} from '{}'", identity.assembly)
	}

	fn format_primitive(&self, primitive: Primitive) -> String {
		match primitive {
			Primitive::String => "string",
			Primitive::Number => "number",
			Primitive::Boolean => "boolean",
			Primitive::Date => "Date",
			Primitive::Json | Primitive::Any => "any",
		}
		.to_string()
	}

	fn format_array(&self, element: &str) -> String {
		if element.contains(' ') {
			format!("({element})[]")
		} else {
			format!("{element}[]")
		}
	}

	fn format_map(&self, value: &str) -> String {
		format!("{{[ key: string ]: {value}}}")
	}

	fn format_union(&self, options: &[String]) -> String {
		options.join(" | ")
	}

	fn format_construction(
		&self,
		ty: &TranspiledType,
		parameters: &[TranspiledParameter],
	) -> SnippetResult {
		require_trailing_variadic(self.language(), parameters)?;
		Ok(format!("new {}({})", ty.name, Self::parameter_list(parameters)))
	}

	fn format_struct_construction(
		&self,
		ty: &TranspiledType,
		_fields: &[TranspiledParameter],
	) -> SnippetResult {
		let binding = lower_first(ty.name.rsplit('.').next().unwrap_or(&ty.name));
		Ok(format!("const {binding}: {} = {{ ... }}", ty.name))
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
