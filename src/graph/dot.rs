//! A small builder for Graphviz DOT descriptions.

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotNode {
	pub id: String,
	pub label: Option<String>,
	pub attrs: Vec<(String, String)>,
}

impl DotNode {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Default::default()
		}
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((key.into(), value.into()));
		self
	}
}

/// A directed graph that renders itself as DOT through `Display`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Digraph {
	node_defaults: Vec<(String, String)>,
	nodes: Vec<DotNode>,
	edges: Vec<(String, String)>,
}

impl Digraph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attribute applied to every node through a `node [...]` statement.
	pub fn node_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.node_defaults.push((key.into(), value.into()));
		self
	}

	pub fn node(mut self, node: DotNode) -> Self {
		self.nodes.push(node);
		self
	}

	pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
		self.edges.push((from.into(), to.into()));
		self
	}

	pub fn nodes(&self) -> &[DotNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[(String, String)] {
		&self.edges
	}
}

/// A DOT quoted string as graphlib-dot reads it: `\"` is a quote and any
/// other backslash pair is kept verbatim, so only quotes, and backslashes that
/// would swallow a quote, get escaped.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("\"")?;
		let mut chars = self.0.chars().peekable();
		while let Some(c) = chars.next() {
			match c {
				'"' => f.write_str("\\\"")?,
				'\\' if matches!(chars.peek(), None | Some('"')) => f.write_str("\\\\")?,
				'\n' => f.write_str("\\n")?,
				c => write!(f, "{c}")?,
			}
		}
		f.write_str("\"")
	}
}

fn write_attrs<'a>(
	f: &mut fmt::Formatter<'_>,
	attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> fmt::Result {
	let mut attrs = attrs.into_iter().peekable();
	if attrs.peek().is_none() {
		return Ok(());
	}
	f.write_str(" [")?;
	let mut first = true;
	for (key, value) in attrs {
		if !first {
			f.write_str(" ")?;
		}
		first = false;
		write!(f, "{}={}", key, Quoted(value))?;
	}
	f.write_str("]")
}

impl fmt::Display for Digraph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "digraph {{")?;
		if !self.node_defaults.is_empty() {
			f.write_str("node")?;
			write_attrs(
				f,
				self.node_defaults.iter().map(|(k, v)| (k.as_str(), v.as_str())),
			)?;
			writeln!(f, ";")?;
		}
		for node in &self.nodes {
			write!(f, "{}", Quoted(&node.id))?;
			let label = node.label.as_deref().map(|label| ("label", label));
			write_attrs(
				f,
				label
					.into_iter()
					.chain(node.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
			)?;
			writeln!(f, ";")?;
		}
		for (from, to) in &self.edges {
			writeln!(f, "{} -> {};", Quoted(from), Quoted(to))?;
		}
		write!(f, "}}")
	}
}
