/// Where a value came from, as far as the value tree cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// A named root variable read from the target.
	Variable,
	/// A member or element of another value.
	Child,
	/// A constant produced by the formatter itself, not backed by target memory.
	ConstResult,
}

/// Display leaf for a selected case that carries no payload.
///
/// Rendered as `.` followed by the case name. Immutable once built; the
/// owning front end builds a fresh one on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLabel {
	text: Box<str>,
}

impl CaseLabel {
	/// Build the label for `case_name`.
	pub fn new(case_name: &str) -> Self {
		let mut text = String::with_capacity(case_name.len() + 1);
		text.push('.');
		text.push_str(case_name);
		Self { text: text.into_boxed_str() }
	}

	/// Rendered label, including the leading dot.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Case name without the leading dot.
	pub fn case_name(&self) -> &str {
		&self.text[1..]
	}

	/// Labels never have children.
	pub fn num_children(&self) -> usize {
		0
	}

	/// Display size: label text plus a terminator byte.
	pub fn byte_size(&self) -> usize {
		self.text.len() + 1
	}

	/// Labels are formatter constants.
	pub fn value_kind(&self) -> ValueKind {
		ValueKind::ConstResult
	}

	/// Labels never change after construction.
	pub fn is_constant(&self) -> bool {
		true
	}

	/// Labels cannot supply synthetic children of their own.
	pub fn has_synthetic_value(&self) -> bool {
		false
	}

	/// Summary text, identical to the label.
	pub fn summary(&self) -> &str {
		&self.text
	}
}
