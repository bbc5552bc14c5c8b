use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// Convert `camelCase` / `PascalCase` identifiers to `snake_case`.
///
/// Acronyms stay together: `bucketARNForPolicy` becomes `bucket_arn_for_policy`.
pub fn snake_case(ident: &str) -> String {
	let split = ACRONYM_WORD.replace_all(ident, "${1}_${2}");
	let split = LOWER_UPPER.replace_all(&split, "${1}_${2}");
	split.to_lowercase()
}

/// Lower the first character: `BucketProps` becomes `bucketProps`.
pub fn lower_first(ident: &str) -> String {
	let mut chars = ident.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Convert `camelCase`, `SHOUTY_SNAKE` and `kebab-case` identifiers to `PascalCase`.
///
/// `DEFAULT_REGION` becomes `DefaultRegion`; `bucketName` becomes `BucketName`.
pub fn pascal_case(ident: &str) -> String {
	let shouty = !ident.chars().any(|c| c.is_ascii_lowercase());
	if shouty || ident.contains(['_', '-']) {
		return ident
			.split(['_', '-'])
			.filter(|word| !word.is_empty())
			.map(|word| {
				let mut chars = word.chars();
				match chars.next() {
					Some(first) => first
						.to_uppercase()
						.chain(chars.flat_map(char::to_lowercase))
						.collect::<String>(),
					None => String::new(),
				}
			})
			.collect();
	}
	let mut chars = ident.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Append `_` to identifiers that collide with `reserved`.
pub fn escape_reserved(ident: String, reserved: &[&str]) -> String {
	if reserved.contains(&ident.as_str()) {
		format!("{ident}_")
	} else {
		ident
	}
}
