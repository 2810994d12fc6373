use enumview::inspect::{ImageValue, MemoryImage, ValueTree, prints_value};

/// Expansion limits for rendered value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum expansion depth below the root.
	pub max_depth: u32,
	/// Maximum children expanded per node.
	pub max_children: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_depth: 6,
			max_children: 32,
		}
	}
}

/// One rendered node of a value tree.
#[derive(Debug, serde::Serialize)]
pub struct ValueNode {
	/// Display name; `[idx]` for unnamed children.
	pub name: String,
	/// Declared type; absent for case labels.
	#[serde(rename = "type")]
	pub type_name: Option<String>,
	/// Rendered value: primitive text or raw tag; absent when the summary stands alone.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	/// One-line summary.
	pub summary: Option<String>,
	/// Presentation state for tagged-union values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state: Option<String>,
	/// Refresh failure text for tagged-union values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub diagnostic: Option<String>,
	/// Child count reported by the value tree.
	pub num_children: usize,
	/// Expanded children.
	pub children: Vec<ValueNode>,
	/// Children left unexpanded because of limits.
	pub elided: usize,
}

/// Expand `value` into a rendered tree.
pub fn build_tree(image: &MemoryImage, value: &ImageValue, name: &str, options: PrintOptions) -> ValueNode {
	build_node(image, value, name, 0, options)
}

fn build_node(image: &MemoryImage, value: &ImageValue, name: &str, depth: u32, options: PrintOptions) -> ValueNode {
	let (state, diagnostic, shown) = if image.is_enum(value) {
		let front = image.front_end(value);
		let shown = if prints_value(image, value) { image.value_text(value) } else { None };
		(Some(format!("{:?}", front.state())), front.diagnostic().map(str::to_owned), shown)
	} else {
		(None, None, None)
	};

	let num_children = image.num_children(value);
	let mut children = Vec::new();
	if depth < options.max_depth {
		for idx in 0..num_children.min(options.max_children) {
			let Some(child) = image.child_at(value, idx) else {
				continue;
			};
			let label = if child.name().is_empty() { format!("[{idx}]") } else { child.name().to_owned() };
			children.push(build_node(image, &child, &label, depth + 1, options));
		}
	}

	ValueNode {
		name: name.to_owned(),
		type_name: image.type_name(value).map(str::to_owned),
		value: shown,
		summary: image.summary(value),
		state,
		diagnostic,
		num_children,
		elided: num_children.saturating_sub(children.len()),
		children,
	}
}

/// Print a rendered tree as indented text.
pub fn print_tree(node: &ValueNode, indent: usize) {
	let pad = " ".repeat(indent);
	let mut line = format!("{pad}{}", node.name);
	if let Some(type_name) = &node.type_name {
		line.push_str(&format!(" ({type_name})"));
	}
	let summary = node.summary.as_deref().filter(|text| !text.is_empty());
	match (node.value.as_deref(), summary) {
		(Some(value), Some(summary)) => line.push_str(&format!(" = {value} {summary}")),
		(Some(text), None) | (None, Some(text)) => line.push_str(&format!(" = {text}")),
		(None, None) => {}
	}
	if let Some(diagnostic) = &node.diagnostic {
		line.push_str(&format!("  # {diagnostic}"));
	}
	println!("{line}");

	for child in &node.children {
		print_tree(child, indent + 2);
	}
	if node.elided > 0 {
		println!("{pad}  ... {} more", node.elided);
	}
}

#[cfg(test)]
mod tests;
