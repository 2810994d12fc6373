use std::rc::Rc;

use crate::inspect::{CaseLabel, TypeId, ValueKind};

/// Cheaply clonable node of a [`crate::inspect::MemoryImage`] value tree.
#[derive(Debug, Clone)]
pub struct ImageValue(Rc<ValueData>);

#[derive(Debug)]
struct ValueData {
	name: Box<str>,
	kind: ValueKind,
	node: Node,
}

#[derive(Debug)]
enum Node {
	Data { type_id: TypeId, bytes: Box<[u8]>, readable: bool },
	Case(CaseLabel),
}

impl ImageValue {
	pub(super) fn data(name: &str, kind: ValueKind, type_id: TypeId, bytes: &[u8], readable: bool) -> Self {
		Self(Rc::new(ValueData {
			name: name.into(),
			kind,
			node: Node::Data {
				type_id,
				bytes: bytes.into(),
				readable,
			},
		}))
	}

	pub(super) fn case(label: &CaseLabel) -> Self {
		Self(Rc::new(ValueData {
			name: "".into(),
			kind: label.value_kind(),
			node: Node::Case(label.clone()),
		}))
	}

	pub(super) fn retyped(&self, type_id: TypeId) -> Self {
		match &self.0.node {
			Node::Data { bytes, readable, .. } => Self::data(&self.0.name, self.0.kind, type_id, bytes, *readable),
			Node::Case(_) => self.clone(),
		}
	}

	/// Identity of the shared node, stable while any clone is alive.
	pub(super) fn key(&self) -> usize {
		Rc::as_ptr(&self.0) as usize
	}

	/// Variable, field, or case name; empty for case labels.
	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// Origin of this node.
	pub fn kind(&self) -> ValueKind {
		self.0.kind
	}

	/// Declared type, absent for case labels.
	pub fn type_id(&self) -> Option<TypeId> {
		match &self.0.node {
			Node::Data { type_id, .. } => Some(*type_id),
			Node::Case(_) => None,
		}
	}

	/// Label when this node stands for a payload-less case.
	pub fn case_label(&self) -> Option<&CaseLabel> {
		match &self.0.node {
			Node::Case(label) => Some(label),
			Node::Data { .. } => None,
		}
	}

	/// Stored bytes, possibly fewer than the type needs.
	pub fn bytes(&self) -> &[u8] {
		match &self.0.node {
			Node::Data { bytes, .. } => bytes,
			Node::Case(label) => label.text().as_bytes(),
		}
	}

	/// Whether the target memory behind this node is readable.
	pub fn is_readable(&self) -> bool {
		match &self.0.node {
			Node::Data { readable, .. } => *readable,
			Node::Case(_) => true,
		}
	}
}
