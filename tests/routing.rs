//! Integration tests for collection routing, member filtering and ordering.
mod utils;

use polydoc::Language;
use pretty_assertions::assert_eq;
use utils::*;

fn ids<'a>(records: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
	records.into_iter().map(String::as_str).collect()
}

#[test]
fn construct_descendants_are_routed_to_constructs() {
	let reference = render(Language::TypeScript).schema.api_reference;
	assert_eq!(
		ids(reference.constructs.iter().map(|c| &c.id)),
		vec!["acme.Bucket", "acme.Resource"]
	);
	assert_eq!(
		ids(reference.classes.iter().map(|c| &c.id)),
		vec!["acme.Helper", "acme.Legacy"]
	);
}

#[test]
fn datatype_interfaces_are_routed_to_structs() {
	let reference = render(Language::TypeScript).schema.api_reference;
	assert_eq!(
		ids(reference.structs.iter().map(|s| &s.id)),
		vec!["acme.BucketProps"]
	);
	assert_eq!(
		ids(reference.interfaces.iter().map(|i| &i.id)),
		vec!["acme.IGrantable"]
	);
	assert_eq!(ids(reference.enums.iter().map(|e| &e.id)), vec!["acme.Color"]);
}

#[test]
fn collections_render_in_fixed_order() {
	let markdown = render(Language::TypeScript).markdown();
	let constructs = position(&markdown, "## Constructs");
	let structs = position(&markdown, "## Structs");
	let classes = position(&markdown, "## Classes");
	let interfaces = position(&markdown, "## Interfaces");
	let enums = position(&markdown, "## Enums");
	assert!(constructs < structs && structs < classes && classes < interfaces && interfaces < enums);
}

#[test]
fn properties_and_constants_are_filtered_independently() {
	let reference = render(Language::TypeScript).schema.api_reference;
	let bucket = &reference.constructs[0];
	assert_eq!(
		ids(bucket.properties.iter().map(|p| &p.id)),
		vec!["acme.Bucket.arn", "acme.Bucket.bucketName"]
	);
	assert_eq!(
		ids(bucket.constants.iter().map(|p| &p.id)),
		vec!["acme.Bucket.DEFAULT_REGION"]
	);

	let markdown = render(Language::TypeScript).markdown();
	assert!(!markdown.contains("acme.Bucket.internal"));
	assert!(!markdown.contains("acme.Bucket.SECRET"));
}

#[test]
fn protected_constant_appears_in_neither_section() {
	let output = render_graph(
		r#"{
			"name": "lib",
			"types": [{
				"fqn": "lib.Thing",
				"name": "Thing",
				"kind": "class",
				"properties": [
					{"name": "a", "type": {"primitive": "string"}},
					{"name": "b", "type": {"primitive": "string"}, "protected": true},
					{"name": "c", "type": {"primitive": "string"}, "const": true},
					{"name": "d", "type": {"primitive": "string"}, "const": true, "protected": true}
				]
			}]
		}"#,
	);
	let thing = &output.schema.api_reference.classes[0];
	assert_eq!(ids(thing.properties.iter().map(|p| &p.id)), vec!["lib.Thing.a"]);
	assert_eq!(ids(thing.constants.iter().map(|p| &p.id)), vec!["lib.Thing.c"]);
	assert_eq!(
		document_ids(&output),
		vec!["lib.Thing", "lib.Thing.a", "lib.Thing.c"]
	);
}

#[test]
fn members_are_sorted_by_name() {
	let output = render(Language::TypeScript);
	let bucket = &output.schema.api_reference.constructs[0];
	assert_eq!(
		ids(bucket.instance_methods.iter().map(|m| &m.id)),
		vec!["acme.Bucket.alpha", "acme.Bucket.mid", "acme.Bucket.zeta"]
	);
	let color = &output.schema.api_reference.enums[0];
	assert_eq!(
		ids(color.members.iter().map(|m| &m.id)),
		vec!["acme.Color.BLUE", "acme.Color.GREEN", "acme.Color.RED"]
	);

	let markdown = output.markdown();
	let alpha = position(&markdown, "acme.Bucket.alpha\"");
	let mid = position(&markdown, "acme.Bucket.mid\"");
	let zeta = position(&markdown, "acme.Bucket.zeta\"");
	assert!(alpha < mid && mid < zeta);
}

#[test]
fn parameters_keep_positional_order() {
	let output = render(Language::TypeScript);
	let bucket = &output.schema.api_reference.constructs[0];
	let initializer = bucket.initializer.as_ref().unwrap();
	let names: Vec<&str> = initializer
		.parameters
		.iter()
		.map(|p| p.display_name.as_str())
		.collect();
	assert_eq!(names, vec!["scope", "id", "props"]);
}

#[test]
fn protected_methods_are_skipped_and_statics_split_out() {
	let output = render(Language::TypeScript);
	let bucket = &output.schema.api_reference.constructs[0];
	assert_eq!(
		ids(bucket.static_functions.iter().map(|m| &m.id)),
		vec!["acme.Bucket.fromArn"]
	);
	assert!(bucket.instance_methods.iter().all(|m| m.id != "acme.Bucket.hidden"));
}

#[test]
fn class_without_members_has_no_member_sections() {
	let output = render_graph(
		r#"{"name": "lib", "types": [{"fqn": "lib.Empty", "name": "Empty", "kind": "class"}]}"#,
	);
	assert_eq!(
		output.markdown(),
		"# API Reference\n\n## Classes\n\n### Empty <a name=\"lib.Empty\" id=\"lib.Empty\"></a>\n"
	);
	let empty = &output.schema.api_reference.classes[0];
	assert!(empty.initializer.is_none());
	assert!(empty.instance_methods.is_empty());
	assert!(empty.static_functions.is_empty());
	assert!(empty.properties.is_empty());
	assert!(empty.constants.is_empty());
	assert!(output.schema.api_reference.constructs.is_empty());
}

#[test]
fn interface_lists_its_implementations() {
	let output = render(Language::TypeScript);
	let grantable = &output.schema.api_reference.interfaces[0];
	let implementations: Vec<&str> = grantable
		.implementations
		.iter()
		.map(|link| link.fqn.as_str())
		.collect();
	assert_eq!(implementations, vec!["acme.Bucket"]);
	assert!(
		output
			.markdown()
			.contains("- *Implemented By:* [`Bucket`](#acme.Bucket)")
	);
}

#[test]
fn deprecated_types_are_struck_through() {
	let output = render(Language::TypeScript);
	let markdown = output.markdown();
	assert!(markdown.contains("### ~~Legacy~~ <a name=\"acme.Legacy\""));
	assert!(markdown.contains("- *Deprecated:* Use Bucket."));

	let legacy = &output.schema.api_reference.classes[1];
	assert!(legacy.deprecation.deprecated);
	assert_eq!(legacy.deprecation.deprecation_reason.as_deref(), Some("Use Bucket."));
}
