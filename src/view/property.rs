use super::{View, docs_block, entity_section};
use crate::model::{Docs, Property};
use crate::render::utils::{ipush, sort_by_name};
use crate::render::{Markdown, RenderState};
use crate::schema::PropertySchema;
use crate::transpile::{MemberKind, TranspiledParameter};

/// A property or constant of a class, interface or struct.
#[derive(Debug, Clone)]
pub struct PropertyView {
	id: String,
	raw_name: String,
	display_name: String,
	type_markdown: String,
	type_name: String,
	signature_type: String,
	optional: bool,
	docs: Docs,
}

impl PropertyView {
	/// Build the view for `property` of the type `fqn`.
	pub fn new(state: &RenderState<'_>, fqn: &str, property: &Property) -> Self {
		let transpiler = state.transpiler;
		Self {
			id: ipush(fqn, &property.name),
			raw_name: property.name.clone(),
			display_name: transpiler.member_name(&property.name, MemberKind::Property),
			type_markdown: state.type_markdown(&property.type_ref),
			type_name: transpiler.display_type(&property.type_ref),
			signature_type: transpiler.signature_type(&property.type_ref),
			optional: property.optional,
			docs: property.docs.clone(),
		}
	}

	/// Documented properties: neither protected nor constant, sorted by name.
	pub fn properties(state: &RenderState<'_>, fqn: &str, properties: &[Property]) -> Vec<Self> {
		Self::filtered(state, fqn, properties, |p| !p.protected && !p.is_constant())
	}

	/// Documented constants: constant and not protected, sorted by name.
	pub fn constants(state: &RenderState<'_>, fqn: &str, properties: &[Property]) -> Vec<Self> {
		Self::filtered(state, fqn, properties, |p| !p.protected && p.is_constant())
	}

	fn filtered(
		state: &RenderState<'_>,
		fqn: &str,
		properties: &[Property],
		keep: impl Fn(&Property) -> bool,
	) -> Vec<Self> {
		let mut views: Vec<Self> = properties
			.iter()
			.filter(|&p| keep(p))
			.map(|p| Self::new(state, fqn, p))
			.collect();
		sort_by_name(&mut views, |view| view.raw_name.as_str());
		views
	}

	/// The property as a field in a struct construction snippet.
	pub fn as_field(&self) -> TranspiledParameter {
		TranspiledParameter {
			name: self.display_name.clone(),
			type_name: self.signature_type.clone(),
			optional: self.optional,
			variadic: false,
		}
	}
}

impl View for PropertyView {
	type Record = PropertySchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, true);
		md.bullet(format!("{} {}", Markdown::italic("Type:"), self.type_markdown));
		if self.optional {
			md.bullet(Markdown::italic("Optional"));
		}
		if let Some(default) = &self.docs.default {
			md.bullet(format!("{} {default}", Markdown::italic("Default:")));
		}
		docs_block(&mut md, &self.docs);
		md
	}

	fn to_json(&self) -> PropertySchema {
		PropertySchema {
			id: self.id.clone(),
			display_name: self.display_name.clone(),
			type_name: self.type_name.clone(),
			optional: self.optional,
			default: self.docs.default.clone(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
		}
	}
}
