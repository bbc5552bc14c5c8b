use crate::model::Docs;

/// Title line of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
	title: String,
	pre: bool,
	strike: bool,
}

impl Header {
	fn render(&self) -> String {
		let mut title = self.title.clone();
		if self.pre {
			title = Markdown::pre(&title);
		}
		if self.strike {
			title = Markdown::strike(&title);
		}
		title
	}
}

/// One child of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
	Text(String),
	Bullet(String),
	Code { language: String, content: String },
	Section(Markdown),
}

/// Nestable document section: an optional titled header with a stable identifier, followed by
/// ordered text, bullet, code and sub-section blocks.
///
/// Header levels are derived from nesting depth at render time, so the same subtree renders
/// correctly wherever it is attached. The tree performs no semantic filtering: attaching
/// [`Markdown::empty`] is a no-op, everything else is kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markdown {
	id: Option<String>,
	header: Option<Header>,
	blocks: Vec<Block>,
}

impl Markdown {
	/// Sentinel for a view with nothing to show.
	pub fn empty() -> Self {
		Self::default()
	}

	/// An untitled container.
	pub fn new() -> Self {
		Self::default()
	}

	/// A section headed by `title`.
	pub fn titled(title: impl Into<String>) -> Self {
		Self {
			id: None,
			header: Some(Header {
				title: title.into(),
				pre: false,
				strike: false,
			}),
			blocks: Vec::new(),
		}
	}

	/// Attach the cross-reference identifier rendered as the section anchor.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Render the title as inline code.
	pub fn with_pre_title(mut self) -> Self {
		if let Some(header) = &mut self.header {
			header.pre = true;
		}
		self
	}

	/// Strike the title through when `strike` holds.
	pub fn with_strike(mut self, strike: bool) -> Self {
		if let Some(header) = &mut self.header {
			header.strike = strike;
		}
		self
	}

	/// Identifier of this section.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Whether this is the [`Markdown::empty`] sentinel.
	pub fn is_empty(&self) -> bool {
		self.id.is_none() && self.header.is_none() && self.blocks.is_empty()
	}

	/// Append a sub-section.
	pub fn section(&mut self, child: Markdown) {
		if child.is_empty() {
			return;
		}
		self.blocks.push(Block::Section(child));
	}

	/// Append a paragraph.
	pub fn text(&mut self, text: impl Into<String>) {
		self.blocks.push(Block::Text(text.into()));
	}

	/// Append a bullet item; consecutive bullets render as one list.
	pub fn bullet(&mut self, text: impl Into<String>) {
		self.blocks.push(Block::Bullet(text.into()));
	}

	/// Append a fenced code block tagged `language`, one entry per line.
	pub fn code(&mut self, language: &str, lines: &[&str]) {
		self.blocks.push(Block::Code {
			language: language.to_string(),
			content: lines.join("\n"),
		});
	}

	/// Append summary, remarks, reference link and example from `docs`.
	pub fn docs(&mut self, docs: &Docs) {
		let text = docs.text();
		if !text.is_empty() {
			self.text(text);
		}
		if let Some(see) = &docs.see {
			self.text(format!("> {}", Self::link(see, see)));
		}
		if let Some(example) = &docs.example {
			self.text(Self::italic("Example"));
			self.code("", &[example.as_str()]);
		}
	}

	/// Identifiers of this section and every descendant, in document order.
	pub fn identifiers(&self) -> Vec<&str> {
		let mut out = Vec::new();
		self.collect_identifiers(&mut out);
		out
	}

	fn collect_identifiers<'a>(&'a self, out: &mut Vec<&'a str>) {
		if let Some(id) = &self.id {
			out.push(id);
		}
		for block in &self.blocks {
			if let Block::Section(child) = block {
				child.collect_identifiers(out);
			}
		}
	}

	/// Contents of every code block, in document order.
	pub fn code_blocks(&self) -> Vec<&str> {
		let mut out = Vec::new();
		self.collect_code(&mut out);
		out
	}

	fn collect_code<'a>(&'a self, out: &mut Vec<&'a str>) {
		for block in &self.blocks {
			match block {
				Block::Code { content, .. } => out.push(content),
				Block::Section(child) => child.collect_code(out),
				Block::Text(_) | Block::Bullet(_) => {}
			}
		}
	}

	/// Serialize the tree, starting headers at level one.
	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out, 1);
		let trimmed = out.trim_end().len();
		out.truncate(trimmed);
		out.push('\n');
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		match (&self.header, &self.id) {
			(Some(header), id) => {
				out.push_str(&"#".repeat(depth.min(6)));
				out.push(' ');
				out.push_str(&header.render());
				if let Some(id) = id {
					out.push(' ');
					out.push_str(&Self::anchor(id));
				}
				out.push_str("\n\n");
			}
			(None, Some(id)) => {
				out.push_str(&Self::anchor(id));
				out.push_str("\n\n");
			}
			(None, None) => {}
		}

		let child_depth = if self.header.is_some() { depth + 1 } else { depth };
		for (index, block) in self.blocks.iter().enumerate() {
			match block {
				Block::Text(text) => {
					out.push_str(text);
					out.push_str("\n\n");
				}
				Block::Bullet(text) => {
					out.push_str("- ");
					out.push_str(text);
					out.push('\n');
					if !matches!(self.blocks.get(index + 1), Some(Block::Bullet(_))) {
						out.push('\n');
					}
				}
				Block::Code { language, content } => {
					out.push_str("```");
					out.push_str(language);
					out.push('\n');
					out.push_str(content);
					out.push_str("\n```\n\n");
				}
				Block::Section(child) => child.render_into(out, child_depth),
			}
		}
	}

	/// HTML anchor for `id`.
	pub fn anchor(id: &str) -> String {
		format!("<a name=\"{id}\" id=\"{id}\"></a>")
	}

	/// Inline code.
	pub fn pre(text: &str) -> String {
		format!("`{text}`")
	}

	/// Emphasis.
	pub fn italic(text: &str) -> String {
		format!("*{text}*")
	}

	/// Strike-through.
	pub fn strike(text: &str) -> String {
		format!("~~{text}~~")
	}

	/// Inline link.
	pub fn link(text: &str, target: &str) -> String {
		format!("[{text}]({target})")
	}
}
