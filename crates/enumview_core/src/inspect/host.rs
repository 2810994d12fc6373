use std::borrow::Cow;

use crate::inspect::{EnumResolution, InspectError, Result};

/// Navigation over the host's value tree.
///
/// Hosts route tagged-union values back through [`crate::inspect::EnumFrontEnd`]
/// and [`crate::inspect::summarize`], so payload delegation sees formatted
/// children and summaries rather than raw storage.
pub trait ValueTree {
	/// Handle to one node of the value tree.
	type Value: Clone;

	/// Number of children the host shows for `value`.
	fn num_children(&self, value: &Self::Value) -> usize;

	/// Child at `idx`, if any.
	fn child_at(&self, value: &Self::Value, idx: usize) -> Option<Self::Value>;

	/// Index of the child called `name`, if any.
	fn index_of_child(&self, value: &Self::Value, name: &str) -> Option<usize>;

	/// Cheap hint whether expanding `value` can yield children.
	fn might_have_children(&self, value: &Self::Value) -> bool;

	/// Host summary for `value`; `None` when it has none.
	fn summary(&self, value: &Self::Value) -> Option<String>;
}

/// Target access consumed by the tagged-union engine.
///
/// Every method is a read-only query; the engine never writes target memory.
pub trait Target: ValueTree {
	/// Host type descriptor.
	type Type: Clone;

	/// Whether an inspectable process backs `value`.
	fn has_process(&self, value: &Self::Value) -> bool;

	/// Whether runtime introspection is available for `value`.
	fn has_runtime(&self, value: &Self::Value) -> bool;

	/// Currently available bytes for `value`.
	fn backing_bytes<'a>(&'a self, value: &'a Self::Value) -> Result<Cow<'a, [u8]>>;

	/// Selected case and payload layout of a tagged-union value.
	fn resolve_enum_case(&self, value: &Self::Value) -> Result<EnumResolution<Self::Type>>;

	/// Build a typed value named `name` from `bytes`.
	fn construct_value(&self, name: &str, bytes: &[u8], case_type: &Self::Type) -> Result<Self::Value>;

	/// Best available concrete representation of `value`. Idempotent.
	fn refine_value(&self, value: Self::Value) -> Self::Value;
}

/// Resolve the current case of `value`, checking process and runtime first.
pub fn current_enum_value<H: Target + ?Sized>(target: &H, value: &H::Value) -> Result<EnumResolution<H::Type>> {
	if !target.has_process(value) {
		return Err(InspectError::NoBackingProcess);
	}
	if !target.has_runtime(value) {
		return Err(InspectError::NoRuntimeSupport);
	}

	let resolution = target.resolve_enum_case(value)?;
	log::trace!(
		"resolved case {} (payload={}, optional={})",
		resolution.case_name,
		resolution.has_payload(),
		resolution.is_optional
	);
	Ok(resolution)
}
