use log::debug;

use super::View;
use crate::render::Markdown;

/// Titled section listing `views`, or [`Markdown::empty`] when there are none.
pub fn group<V: View>(title: &str, views: &[V]) -> Markdown {
	if views.is_empty() {
		return Markdown::empty();
	}
	let mut md = Markdown::titled(title);
	for view in views {
		md.section(view.to_markdown());
	}
	md
}

/// One top-level category of the API reference ("Classes", "Structs", ...).
#[derive(Debug, Clone)]
pub struct Collection<V> {
	title: &'static str,
	views: Vec<V>,
}

impl<V: View> Collection<V> {
	/// Wrap already-sorted `views` under `title`.
	pub fn new(title: &'static str, views: Vec<V>) -> Self {
		debug!(collection = title, entries = views.len(); "Collected views");
		Self { title, views }
	}

	/// Number of entities in the collection.
	pub fn len(&self) -> usize {
		self.views.len()
	}

	/// Whether the collection renders nothing.
	pub fn is_empty(&self) -> bool {
		self.views.is_empty()
	}
}

impl<V: View> View for Collection<V> {
	type Record = Vec<V::Record>;

	fn to_markdown(&self) -> Markdown {
		group(self.title, &self.views)
	}

	fn to_json(&self) -> Vec<V::Record> {
		self.views.iter().map(View::to_json).collect()
	}
}
