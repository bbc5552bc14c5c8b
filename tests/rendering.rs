//! Integration tests for rendered content: snippets, links, readme, sub-modules and failures.
mod utils;

use polydoc::{Documentation, Language, RenderError, RenderOptions, TranspiledType};
use pretty_assertions::assert_eq;
use utils::*;

#[test]
fn renders_class_document() {
	let output = render_graph(
		r#"{
			"name": "acme",
			"types": [{
				"fqn": "acme.Widget",
				"name": "Widget",
				"kind": "class",
				"docs": {"summary": "A widget."},
				"initializer": {"parameters": [{"name": "label", "type": {"primitive": "string"}}]},
				"properties": [{"name": "label", "type": {"primitive": "string"}, "immutable": true}]
			}]
		}"#,
	);

	let expected = concat!(
		"# API Reference\n",
		"\n",
		"## Classes\n",
		"\n",
		"### Widget <a name=\"acme.Widget\" id=\"acme.Widget\"></a>\n",
		"\n",
		"A widget.\n",
		"\n",
		"#### Initializer <a name=\"acme.Widget.Initializer\" id=\"acme.Widget.Initializer\"></a>\n",
		"\n",
		"```typescript\n",
		"import { Widget } from 'acme'\n",
		"\n",
		"new Widget(label: string)\n",
		"```\n",
		"\n",
		"##### `label` <a name=\"acme.Widget.Initializer.parameter.label\" id=\"acme.Widget.Initializer.parameter.label\"></a>\n",
		"\n",
		"- *Type:* `string`\n",
		"\n",
		"#### Properties\n",
		"\n",
		"##### `label` <a name=\"acme.Widget.label\" id=\"acme.Widget.label\"></a>\n",
		"\n",
		"- *Type:* `string`\n",
	);
	assert_eq!(output.markdown(), expected);
	assert!(output.diagnostics.is_empty());
}

#[test]
fn python_snippets_use_keyword_lines() {
	let output = render(Language::Python);
	let bucket = &output.schema.api_reference.constructs[0];
	assert_eq!(
		bucket.initializer.as_ref().unwrap().snippet.as_deref(),
		Some("import acme\n\nacme.Bucket(\n  scope: Construct,\n  id: str,\n  props: BucketProps = None\n)")
	);
	assert_eq!(
		bucket.static_functions[0].snippet.as_deref(),
		Some("import acme\n\nacme.Bucket.from_arn(\n  arn: str\n)")
	);
	assert_eq!(bucket.static_functions[0].display_name, "from_arn");
	assert_eq!(bucket.properties[1].display_name, "bucket_name");
}

#[test]
fn java_snippets_use_builders_and_qualified_statics() {
	let output = render(Language::Java);
	let reference = &output.schema.api_reference;
	assert_eq!(
		reference.constructs[0].static_functions[0].snippet.as_deref(),
		Some("import acme.Bucket;\n\nBucket.fromArn(java.lang.String arn)")
	);
	assert_eq!(
		reference.structs[0].initializer.snippet.as_deref(),
		Some(concat!(
			"import acme.BucketProps;\n",
			"\n",
			"BucketProps.builder()\n",
			"//  .bucketName(java.lang.String)\n",
			"//  .versioned(java.lang.Boolean)\n",
			"    .build();"
		))
	);
}

#[test]
fn csharp_snippets_use_namespaces_and_object_initializers() {
	let output = render(Language::CSharp);
	let reference = &output.schema.api_reference;
	let bucket = &reference.constructs[0];
	assert_eq!(
		bucket.initializer.as_ref().unwrap().snippet.as_deref(),
		Some("using Acme;\n\nnew Bucket(Construct scope, string id, BucketProps props = null);")
	);
	assert_eq!(
		bucket.static_functions[0].snippet.as_deref(),
		Some("using Acme;\n\nBucket.FromArn(string arn)")
	);
	assert_eq!(bucket.constants[0].display_name, "DefaultRegion");
	assert_eq!(
		reference.structs[0].initializer.snippet.as_deref(),
		Some(concat!(
			"using Acme;\n",
			"\n",
			"new BucketProps {\n",
			"    string BucketName = null,\n",
			"    bool Versioned = null\n",
			"};"
		))
	);
	assert!(output.markdown().contains("- *Type:* [`Acme.BucketProps`](#acme.BucketProps)"));
}

#[test]
fn map_types_are_spelled_per_convention() {
	let docs = Documentation::from_json(
		r#"{
			"name": "lib",
			"types": [{
				"fqn": "lib.Table",
				"name": "Table",
				"kind": "class",
				"properties": [{"name": "tags", "type": {"map": {"primitive": "string"}}}]
			}]
		}"#,
	)
	.unwrap();
	let type_of = |language: Language| {
		let output = docs
			.render(&RenderOptions::new().with_language(language))
			.unwrap();
		output.schema.api_reference.classes[0].properties[0].type_name.clone()
	};
	assert_eq!(type_of(Language::TypeScript), "{[ key: string ]: string}");
	assert_eq!(type_of(Language::Python), "typing.Mapping[str, str]");
	assert_eq!(
		type_of(Language::Java),
		"java.util.Map<java.lang.String, java.lang.String>"
	);
	assert_eq!(
		type_of(Language::CSharp),
		"System.Collections.Generic.IDictionary<string, string>"
	);
}

#[test]
fn typescript_struct_snippet_names_a_binding() {
	let output = render(Language::TypeScript);
	assert_eq!(
		output.schema.api_reference.structs[0].initializer.snippet.as_deref(),
		Some("import { BucketProps } from 'acme'\n\nconst bucketProps: BucketProps = { ... }")
	);
}

#[test]
fn member_bullets_describe_types_and_defaults() {
	let markdown = render(Language::TypeScript).markdown();
	assert!(markdown.contains("- *Type:* [`BucketProps`](#acme.BucketProps)\n- *Optional*"));
	assert!(markdown.contains("- *Type:* `Construct`"));
	assert!(markdown.contains("- *Returns:* `string`"));
	assert!(markdown.contains("- *Returns:* [`Bucket`](#acme.Bucket)"));
	assert!(markdown.contains("- *Default:* a generated name"));
	assert!(markdown.contains("- *Implements:* [`IGrantable`](#acme.IGrantable)"));
	assert!(markdown.contains("> [https://acme.dev/bucket](https://acme.dev/bucket)"));
}

#[test]
fn custom_link_formatter_targets_local_types() {
	let options = RenderOptions::new()
		.with_link_formatter(|ty: &TranspiledType| format!("./{}.md", ty.source_fqn));
	let markdown = acme().to_markdown(&options).unwrap();
	assert!(markdown.contains("- *Implements:* [`IGrantable`](./acme.IGrantable.md)"));
	assert!(!markdown.contains("(#acme."));
}

#[test]
fn readme_is_prepended_when_requested() {
	let docs = acme();
	let with_readme = docs
		.to_markdown(&RenderOptions::new().with_readme(true))
		.unwrap();
	assert!(with_readme.starts_with("# acme\n\nObject storage.\n\n# API Reference\n"));

	let without = docs.to_markdown(&RenderOptions::new()).unwrap();
	assert!(without.starts_with("# API Reference\n"));
}

#[test]
fn submodule_selector_restricts_types() {
	let docs = acme();
	let options = RenderOptions::new()
		.with_submodule("storage")
		.with_readme(true)
		.with_title("Storage Reference");
	let output = docs.render(&options).unwrap();

	assert_eq!(
		document_ids(&output),
		vec![
			"acme.storage.Archive",
			"acme.storage.Archive.Initializer",
			"acme.storage.Archive.Initializer.parameter.tier",
		]
	);
	let markdown = output.markdown();
	assert!(markdown.starts_with("Archival storage.\n\n# Storage Reference\n"));
	assert!(markdown.contains("### storage.Archive <a name=\"acme.storage.Archive\""));
	assert!(markdown.contains("import { storage } from 'acme'\n\nnew storage.Archive(tier: string)"));
	assert_eq!(output.schema.metadata.submodule.as_deref(), Some("storage"));
}

#[test]
fn unknown_submodule_is_fatal() {
	let err = acme()
		.render(&RenderOptions::new().with_submodule("compute"))
		.unwrap_err();
	assert!(
		matches!(
			&err,
			RenderError::UnknownSubmodule { assembly, submodule }
				if assembly == "acme" && submodule == "compute"
		),
		"{err}"
	);
}

#[test]
fn missing_method_parameters_abort_the_render() {
	let docs = Documentation::from_json(
		r#"{
			"name": "lib",
			"types": [{"fqn": "lib.Broken", "name": "Broken", "kind": "class", "methods": [{"name": "run"}]}]
		}"#,
	)
	.unwrap();
	let err = docs.render(&RenderOptions::new()).unwrap_err();
	assert!(
		matches!(
			&err,
			RenderError::MissingParameters { fqn, member } if fqn == "lib.Broken" && member == "run"
		),
		"{err}"
	);
	assert_eq!(err.to_string(), "lib.Broken: `run` is missing its parameter list");
}

#[test]
fn missing_initializer_parameters_abort_the_render() {
	let docs = Documentation::from_json(
		r#"{
			"name": "lib",
			"types": [{"fqn": "lib.Broken", "name": "Broken", "kind": "class", "initializer": {}}]
		}"#,
	)
	.unwrap();
	for language in Language::ALL {
		let err = docs
			.to_json(&RenderOptions::new().with_language(language))
			.unwrap_err();
		assert!(matches!(err, RenderError::MissingParameters { .. }), "{err}");
	}
}

#[test]
fn malformed_graph_is_rejected() {
	let err = Documentation::from_json(r#"{"types": []}"#).unwrap_err();
	assert!(matches!(err, RenderError::Graph(_)), "{err}");
}

const TAGGER: &str = r#"{
	"name": "lib",
	"types": [{
		"fqn": "lib.Tagger",
		"name": "Tagger",
		"kind": "class",
		"methods": [
			{
				"name": "tag",
				"parameters": [
					{"name": "tags", "type": {"primitive": "string"}, "variadic": true},
					{"name": "owner", "type": {"primitive": "string"}}
				]
			},
			{"name": "untag", "parameters": []}
		]
	}]
}"#;

#[test]
fn unsupported_construct_omits_only_that_snippet() {
	let docs = Documentation::from_json(TAGGER).unwrap();
	for language in [Language::TypeScript, Language::Java, Language::CSharp] {
		let output = docs
			.render(&RenderOptions::new().with_language(language))
			.unwrap();

		let diagnostics = output.diagnostics.entries();
		assert_eq!(diagnostics.len(), 1, "{language}");
		assert_eq!(diagnostics[0].id, "lib.Tagger.tag");
		assert_eq!(diagnostics[0].language, language);
		assert!(diagnostics[0].message.contains("`tags`"), "{}", diagnostics[0].message);

		let tagger = &output.schema.api_reference.classes[0];
		assert_eq!(tagger.instance_methods[0].snippet, None);
		assert!(tagger.instance_methods[1].snippet.is_some());
		assert_eq!(output.document.code_blocks().len(), 1, "{language}");
		assert!(document_ids(&output).contains(&"lib.Tagger.tag".to_string()));
	}
}

#[test]
fn python_expresses_leading_variadics() {
	let output = Documentation::from_json(TAGGER)
		.unwrap()
		.render(&RenderOptions::new().with_language(Language::Python))
		.unwrap();
	assert!(output.diagnostics.is_empty());
	assert_eq!(
		output.schema.api_reference.classes[0].instance_methods[0]
			.snippet
			.as_deref(),
		Some("tag(\n  *tags: str,\n  owner: str\n)")
	);
}

#[test]
fn json_string_is_camel_cased() {
	let json = acme()
		.to_json_string(&RenderOptions::new().with_language(Language::Java))
		.unwrap();
	assert!(json.contains("\"apiReference\""));
	assert!(json.contains("\"staticFunctions\""));
	assert!(json.contains("\"displayName\": \"fromArn\""));
	assert!(json.contains("\"deprecationReason\": \"Use Bucket.\""));
}
