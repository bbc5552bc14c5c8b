use super::case::escape_reserved;
use super::{
	Language, LanguageFormatter, MemberKind, SnippetResult, TranspiledParameter, TranspiledType,
	require_trailing_variadic,
};
use crate::model::{Primitive, TypeIdentity};

/// Java keywords and literals that cannot be used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
	"abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
	"continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
	"float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
	"native", "new", "null", "package", "private", "protected", "public", "return", "short",
	"static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
	"transient", "true", "try", "void", "volatile", "while",
];

/// Java naming and snippet conventions.
///
/// Types are package-qualified; structs are populated through generated builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFormatter;

impl JavaFormatter {
	fn package(identity: &TypeIdentity) -> String {
		let root = match &identity.targets.java {
			Some(package) => package.clone(),
			None => identity
				.assembly
				.trim_start_matches('@')
				.replace(['/', '-'], ".")
				.to_lowercase(),
		};
		match &identity.namespace {
			Some(namespace) => format!("{root}.{namespace}"),
			None => root,
		}
	}

	fn parameter_list(parameters: &[TranspiledParameter]) -> String {
		parameters
			.iter()
			.map(|param| {
				if param.variadic {
					format!("{}... {}", param.type_name, param.name)
				} else {
					format!("{} {}", param.type_name, param.name)
				}
			})
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl LanguageFormatter for JavaFormatter {
	fn language(&self) -> Language {
		Language::Java
	}

	fn format_member_name(&self, name: &str, kind: MemberKind) -> String {
		match kind {
			MemberKind::EnumMember => name.to_string(),
			MemberKind::Method | MemberKind::Property | MemberKind::Parameter => {
				escape_reserved(name.to_string(), RESERVED_WORDS)
			}
		}
	}

	fn format_type(&self, identity: &TypeIdentity) -> TranspiledType {
		TranspiledType {
			source_fqn: identity.fqn.clone(),
			fqn: format!("{}.{}", Self::package(identity), identity.name),
			name: identity.name.clone(),
		}
	}

	fn format_import(&self, identity: &TypeIdentity) -> String {
		format!("import {}.{};", Self::package(identity), identity.name)
	}

	fn format_primitive(&self, primitive: Primitive) -> String {
		match primitive {
			Primitive::String => "java.lang.String",
			Primitive::Number => "java.lang.Number",
			Primitive::Boolean => "java.lang.Boolean",
			Primitive::Date => "java.time.Instant",
			Primitive::Json => "com.fasterxml.jackson.databind.node.ObjectNode",
			Primitive::Any => "java.lang.Object",
		}
		.to_string()
	}

	fn format_array(&self, element: &str) -> String {
		format!("java.util.List<{element}>")
	}

	fn format_map(&self, value: &str) -> String {
		format!("java.util.Map<java.lang.String, {value}>")
	}

	fn format_union(&self, _options: &[String]) -> String {
		"java.lang.Object".to_string()
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
		let mut lines = vec![format!("{}.builder()", ty.name)];
		for field in fields {
			let setter = format!("    .{}({})", field.name, field.type_name);
			if field.optional {
				lines.push(format!("//  {}", setter.trim_start()));
			} else {
				lines.push(setter);
			}
		}
		lines.push("    .build();".to_string());
		Ok(lines.join("\n"))
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

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn field(name: &str, optional: bool) -> TranspiledParameter {
		TranspiledParameter {
			name: name.into(),
			type_name: "java.lang.String".into(),
			optional,
			variadic: false,
		}
	}

	#[test]
	fn package_falls_back_to_assembly_name() {
		let identity = TypeIdentity::from_fqn("acme-storage.Bucket");
		assert_eq!(
			JavaFormatter.format_import(&identity),
			"import acme.storage.Bucket;"
		);
	}

	#[test]
	fn struct_builder_comments_out_optional_fields() {
		let ty = JavaFormatter.format_type(&TypeIdentity::from_fqn("acme.BucketProps"));
		let snippet = JavaFormatter
			.format_struct_construction(&ty, &[field("bucketName", false), field("region", true)])
			.unwrap();
		assert_eq!(
			snippet,
			"BucketProps.builder()\n    .bucketName(java.lang.String)\n//  .region(java.lang.String)\n    .build();"
		);
	}

	#[test]
	fn keywords_are_escaped() {
		assert_eq!(
			JavaFormatter.format_member_name("default", MemberKind::Property),
			"default_"
		);
	}

	#[test]
	fn non_final_varargs_are_unsupported() {
		let ty = JavaFormatter.format_type(&TypeIdentity::from_fqn("acme.Bucket"));
		let mut rest = field("tags", false);
		rest.variadic = true;
		let err = JavaFormatter
			.format_invocation(&ty, "tag", false, &[rest, field("owner", false)])
			.unwrap_err();
		assert_eq!(err.language, Language::Java);
	}
}
