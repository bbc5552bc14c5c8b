//! Entity views.
//!
//! A view wraps one graph node and everything derived from it with the active convention: names,
//! linked types and snippets are computed once at construction. [`View::to_markdown`] and
//! [`View::to_json`] then read the same fields, so the document and the record cannot disagree.

/// Top-level reference of one module.
pub mod api_reference;
/// Classes and constructs.
pub mod class;
/// Titled lists of views.
pub mod collections;
/// Enums and their members.
pub mod enums;
/// Class initializers.
pub mod initializer;
/// Behavioral interfaces.
pub mod interface;
/// Instance methods and static functions.
pub mod method;
/// Callable parameters.
pub mod parameter;
/// Properties and constants.
pub mod property;
/// Data-record interfaces.
pub mod structs;

pub use self::api_reference::{ApiReferenceView, Category};
pub use self::class::{ClassView, is_construct};
pub use self::collections::Collection;
pub use self::enums::{EnumMemberView, EnumView};
pub use self::initializer::InitializerView;
pub use self::interface::InterfaceView;
pub use self::method::MethodView;
pub use self::parameter::ParameterView;
pub use self::property::PropertyView;
pub use self::structs::StructView;
use crate::model::Docs;
use crate::render::{Markdown, RenderState};
use crate::schema::TypeLinkSchema;

/// Both renderings of one entity.
pub trait View {
	/// Structured twin of the document section.
	type Record;

	/// Document section for the entity, or [`Markdown::empty`] when there is nothing to show.
	fn to_markdown(&self) -> Markdown;

	/// Structured record for the entity.
	fn to_json(&self) -> Self::Record;
}

/// Section header shared by every identified entity: title, anchor and deprecation strike.
pub(crate) fn entity_section(title: &str, id: &str, docs: &Docs, pre: bool) -> Markdown {
	let md = Markdown::titled(title)
		.with_id(id)
		.with_strike(docs.is_deprecated());
	if pre { md.with_pre_title() } else { md }
}

/// Deprecation bullet, then the documentation block.
pub(crate) fn docs_block(md: &mut Markdown, docs: &Docs) {
	if let Some(reason) = &docs.deprecated {
		md.bullet(format!("{} {reason}", Markdown::italic("Deprecated:")));
	}
	md.docs(docs);
}

/// Record and Markdown link for the type with graph FQN `fqn`.
pub(crate) fn type_link(state: &RenderState<'_>, fqn: &str) -> (TypeLinkSchema, String) {
	let link = TypeLinkSchema {
		fqn: fqn.to_string(),
		display_name: state.transpiler.type_of(fqn).fqn,
	};
	(link, state.link_fqn(fqn))
}

/// Comma-separated Markdown links.
pub(crate) fn link_list(links: &[(TypeLinkSchema, String)]) -> String {
	links
		.iter()
		.map(|(_, link)| link.as_str())
		.collect::<Vec<_>>()
		.join(", ")
}
