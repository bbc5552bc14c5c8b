use super::collections::group;
use super::{View, docs_block, entity_section};
use crate::model::{Docs, EnumMember, EnumType, TypeNode};
use crate::render::utils::{ipush, sort_by_name};
use crate::render::{Markdown, RenderState};
use crate::schema::{EnumMemberSchema, EnumSchema};
use crate::transpile::MemberKind;

/// One member of an enum.
#[derive(Debug, Clone)]
pub struct EnumMemberView {
	id: String,
	raw_name: String,
	display_name: String,
	docs: Docs,
}

impl EnumMemberView {
	/// Build the view for `member` of the enum `fqn`.
	pub fn new(state: &RenderState<'_>, fqn: &str, member: &EnumMember) -> Self {
		Self {
			id: ipush(fqn, &member.name),
			raw_name: member.name.clone(),
			display_name: state
				.transpiler
				.member_name(&member.name, MemberKind::EnumMember),
			docs: member.docs.clone(),
		}
	}
}

impl View for EnumMemberView {
	type Record = EnumMemberSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, true);
		docs_block(&mut md, &self.docs);
		md
	}

	fn to_json(&self) -> EnumMemberSchema {
		EnumMemberSchema {
			id: self.id.clone(),
			display_name: self.display_name.clone(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
		}
	}
}

/// An enumeration.
#[derive(Debug, Clone)]
pub struct EnumView {
	id: String,
	fqn: String,
	display_name: String,
	docs: Docs,
	members: Vec<EnumMemberView>,
}

impl EnumView {
	/// Build the view for the enum `node`.
	pub fn new(state: &RenderState<'_>, node: &TypeNode, enumeration: &EnumType) -> Self {
		let ty = state.transpiler.type_of(&node.fqn);
		let mut members: Vec<EnumMemberView> = enumeration
			.members
			.iter()
			.map(|member| EnumMemberView::new(state, &node.fqn, member))
			.collect();
		sort_by_name(&mut members, |member| member.raw_name.as_str());

		Self {
			id: node.fqn.clone(),
			fqn: ty.fqn,
			display_name: ty.name,
			docs: node.docs.clone(),
			members,
		}
	}
}

impl View for EnumView {
	type Record = EnumSchema;

	fn to_markdown(&self) -> Markdown {
		let mut md = entity_section(&self.display_name, &self.id, &self.docs, false);
		docs_block(&mut md, &self.docs);
		md.section(group("Members", &self.members));
		md
	}

	fn to_json(&self) -> EnumSchema {
		EnumSchema {
			id: self.id.clone(),
			fqn: self.fqn.clone(),
			display_name: self.display_name.clone(),
			docs: (&self.docs).into(),
			deprecation: (&self.docs).into(),
			members: self.members.iter().map(View::to_json).collect(),
		}
	}
}
