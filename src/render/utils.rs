use std::cmp::Ordering;

/// Append `name` to an identifier prefix using `.` separators.
pub fn ipush(prefix: &str, name: &str) -> String {
	if prefix.is_empty() {
		name.to_string()
	} else {
		format!("{prefix}.{name}")
	}
}

/// Identifier of a type's initializer section.
pub fn initializer_id(fqn: &str) -> String {
	ipush(fqn, "Initializer")
}

/// Identifier of a parameter section under the callable identified by `callable_id`.
pub fn parameter_id(callable_id: &str, name: &str) -> String {
	ipush(&ipush(callable_id, "parameter"), name)
}

/// Order names alphabetically ignoring case first, then lowercase before uppercase.
///
/// This is the collation a locale-aware comparison produces for identifiers, kept independent of
/// the host locale so renders are reproducible.
pub fn compare_names(a: &str, b: &str) -> Ordering {
	a.to_lowercase()
		.cmp(&b.to_lowercase())
		.then_with(|| b.cmp(a))
}

/// Sort `items` in place by the name `key` extracts.
pub fn sort_by_name<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
	items.sort_by(|a, b| compare_names(key(a), key(b)));
}
