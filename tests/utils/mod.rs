//! Shared fixtures for polydoc integration tests.
#![allow(dead_code)]

use polydoc::{Documentation, Language, RenderOptions, RenderOutput};

/// A small storage library exercising every entity kind.
pub const ACME: &str = r##"{
	"name": "acme",
	"version": "1.2.0",
	"readme": "# acme\n\nObject storage.",
	"submodules": [{"name": "storage", "readme": "Archival storage."}],
	"types": [
		{
			"fqn": "acme.Resource",
			"name": "Resource",
			"kind": "class",
			"base": "constructs.Construct",
			"docs": {"summary": "Base of every deployable resource."},
			"initializer": {"parameters": []}
		},
		{
			"fqn": "acme.Bucket",
			"name": "Bucket",
			"kind": "class",
			"base": "acme.Resource",
			"interfaces": ["acme.IGrantable"],
			"docs": {"summary": "Stores objects.", "see": "https://acme.dev/bucket"},
			"initializer": {
				"parameters": [
					{"name": "scope", "type": {"named": "constructs.Construct"}},
					{"name": "id", "type": {"primitive": "string"}},
					{"name": "props", "type": {"named": "acme.BucketProps"}, "optional": true}
				]
			},
			"methods": [
				{"name": "zeta", "parameters": []},
				{"name": "alpha", "parameters": [], "returns": {"primitive": "string"}},
				{"name": "mid", "parameters": [{"name": "grantee", "type": {"named": "acme.IGrantable"}}]},
				{
					"name": "fromArn",
					"static": true,
					"parameters": [{"name": "arn", "type": {"primitive": "string"}}],
					"returns": {"named": "acme.Bucket"}
				},
				{"name": "hidden", "protected": true, "parameters": []}
			],
			"properties": [
				{"name": "bucketName", "type": {"primitive": "string"}, "immutable": true},
				{"name": "arn", "type": {"primitive": "string"}, "immutable": true},
				{"name": "internal", "type": {"primitive": "string"}, "protected": true},
				{"name": "DEFAULT_REGION", "type": {"primitive": "string"}, "static": true, "immutable": true},
				{"name": "SECRET", "type": {"primitive": "string"}, "const": true, "protected": true}
			]
		},
		{
			"fqn": "acme.Helper",
			"name": "Helper",
			"kind": "class",
			"docs": {"summary": "Stateless helpers."}
		},
		{
			"fqn": "acme.Legacy",
			"name": "Legacy",
			"kind": "class",
			"docs": {"summary": "Old storage.", "deprecated": "Use Bucket."}
		},
		{
			"fqn": "acme.BucketProps",
			"name": "BucketProps",
			"kind": "interface",
			"datatype": true,
			"docs": {"summary": "Bucket configuration."},
			"properties": [
				{"name": "versioned", "type": {"primitive": "boolean"}, "optional": true, "immutable": true},
				{
					"name": "bucketName",
					"type": {"primitive": "string"},
					"optional": true,
					"immutable": true,
					"docs": {"default": "a generated name"}
				}
			]
		},
		{
			"fqn": "acme.IGrantable",
			"name": "IGrantable",
			"kind": "interface",
			"docs": {"summary": "Something permissions can be granted to."},
			"methods": [
				{"name": "grant", "parameters": [{"name": "principal", "type": {"primitive": "string"}}]}
			],
			"properties": [{"name": "grantId", "type": {"primitive": "string"}, "immutable": true}]
		},
		{
			"fqn": "acme.Color",
			"name": "Color",
			"kind": "enum",
			"members": [{"name": "RED"}, {"name": "BLUE"}, {"name": "GREEN", "docs": {"summary": "Go."}}]
		},
		{
			"fqn": "acme.storage.Archive",
			"name": "Archive",
			"namespace": "storage",
			"kind": "class",
			"initializer": {"parameters": [{"name": "tier", "type": {"primitive": "string"}}]}
		}
	],
	"dependencies": [
		{"name": "constructs", "types": [{"fqn": "constructs.Construct", "name": "Construct", "kind": "class"}]}
	]
}"##;

/// The fixture as a front object.
pub fn acme() -> Documentation {
	Documentation::from_json(ACME).unwrap()
}

/// Render the fixture root module in `language`.
pub fn render(language: Language) -> RenderOutput {
	acme()
		.render(&RenderOptions::new().with_language(language))
		.unwrap()
}

/// Render a one-off graph in TypeScript.
pub fn render_graph(json: &str) -> RenderOutput {
	Documentation::from_json(json)
		.unwrap()
		.render(&RenderOptions::new())
		.unwrap()
}

/// Document identifiers, sorted.
pub fn document_ids(output: &RenderOutput) -> Vec<String> {
	let mut ids: Vec<String> = output
		.document
		.identifiers()
		.into_iter()
		.map(str::to_string)
		.collect();
	ids.sort();
	ids
}

/// Record identifiers, sorted.
pub fn schema_ids(output: &RenderOutput) -> Vec<String> {
	let mut ids = output.schema.identifiers().unwrap();
	ids.sort();
	ids
}

/// Every `snippet` string in the record.
pub fn snippets(output: &RenderOutput) -> Vec<String> {
	fn collect(value: &serde_json::Value, out: &mut Vec<String>) {
		match value {
			serde_json::Value::Object(map) => {
				for (key, child) in map {
					match (key.as_str(), child) {
						("snippet", serde_json::Value::String(snippet)) => out.push(snippet.clone()),
						_ => collect(child, out),
					}
				}
			}
			serde_json::Value::Array(items) => items.iter().for_each(|item| collect(item, out)),
			_ => {}
		}
	}

	let value = serde_json::to_value(&output.schema).unwrap();
	let mut out = Vec::new();
	collect(&value, &mut out);
	out
}

/// Position of `needle` in `haystack`, failing the test when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
	haystack
		.find(needle)
		.unwrap_or_else(|| panic!("`{needle}` not found in:\n{haystack}"))
}
