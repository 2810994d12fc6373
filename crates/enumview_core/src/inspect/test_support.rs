use std::borrow::Cow;
use std::cell::Cell;
use std::collections::HashMap;

use crate::inspect::{EnumResolution, InspectError, Result, Target, ValueTree, summarize};

/// Value handle of the scripted host.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScriptValue {
	pub name: String,
	pub type_name: String,
	pub bytes: Vec<u8>,
}

impl ScriptValue {
	pub(crate) fn new(name: &str, type_name: &str, bytes: &[u8]) -> Self {
		Self {
			name: name.to_owned(),
			type_name: type_name.to_owned(),
			bytes: bytes.to_vec(),
		}
	}
}

/// Table-driven host that counts collaborator calls.
#[derive(Default)]
pub(crate) struct ScriptedTarget {
	pub no_process: bool,
	pub no_runtime: bool,
	pub unreadable: bool,
	/// Resolution reported for values of a type, keyed by type name.
	pub resolutions: HashMap<String, EnumResolution<String>>,
	/// Child field names of struct types.
	pub fields: HashMap<String, Vec<String>>,
	/// Host summaries of non-enum types.
	pub summaries: HashMap<String, String>,
	/// Types whose values refine into another type.
	pub refinements: HashMap<String, String>,
	/// Types the constructor refuses.
	pub reject_types: Vec<String>,
	pub construct_calls: Cell<usize>,
	pub refine_calls: Cell<usize>,
	pub resolve_calls: Cell<usize>,
}

impl ScriptedTarget {
	pub(crate) fn with_resolution(mut self, type_name: &str, resolution: EnumResolution<String>) -> Self {
		self.resolutions.insert(type_name.to_owned(), resolution);
		self
	}

	pub(crate) fn with_fields(mut self, type_name: &str, names: &[&str]) -> Self {
		self.fields.insert(type_name.to_owned(), names.iter().map(|name| (*name).to_owned()).collect());
		self
	}

	pub(crate) fn with_summary(mut self, type_name: &str, text: &str) -> Self {
		self.summaries.insert(type_name.to_owned(), text.to_owned());
		self
	}
}

impl ValueTree for ScriptedTarget {
	type Value = ScriptValue;

	fn num_children(&self, value: &ScriptValue) -> usize {
		self.fields.get(&value.type_name).map_or(0, Vec::len)
	}

	fn child_at(&self, value: &ScriptValue, idx: usize) -> Option<ScriptValue> {
		let name = self.fields.get(&value.type_name)?.get(idx)?;
		Some(ScriptValue::new(name, "Int", &[]))
	}

	fn index_of_child(&self, value: &ScriptValue, name: &str) -> Option<usize> {
		self.fields.get(&value.type_name)?.iter().position(|field| field == name)
	}

	fn might_have_children(&self, value: &ScriptValue) -> bool {
		self.num_children(value) > 0
	}

	fn summary(&self, value: &ScriptValue) -> Option<String> {
		if self.resolutions.contains_key(&value.type_name) {
			return Some(summarize(self, value));
		}
		self.summaries.get(&value.type_name).cloned()
	}
}

impl Target for ScriptedTarget {
	type Type = String;

	fn has_process(&self, _value: &ScriptValue) -> bool {
		!self.no_process
	}

	fn has_runtime(&self, _value: &ScriptValue) -> bool {
		!self.no_runtime
	}

	fn backing_bytes<'a>(&'a self, value: &'a ScriptValue) -> Result<Cow<'a, [u8]>> {
		if self.unreadable {
			return Err(InspectError::Unreadable { name: value.name.clone() });
		}
		Ok(Cow::Borrowed(&value.bytes))
	}

	fn resolve_enum_case(&self, value: &ScriptValue) -> Result<EnumResolution<String>> {
		self.resolve_calls.set(self.resolve_calls.get() + 1);
		self.resolutions.get(&value.type_name).cloned().ok_or_else(|| InspectError::LayoutUnavailable {
			type_name: value.type_name.clone(),
			reason: "not a tagged union".to_owned(),
		})
	}

	fn construct_value(&self, name: &str, bytes: &[u8], case_type: &String) -> Result<ScriptValue> {
		self.construct_calls.set(self.construct_calls.get() + 1);
		if self.reject_types.contains(case_type) {
			return Err(InspectError::UnknownType { name: case_type.clone() });
		}
		Ok(ScriptValue::new(name, case_type, bytes))
	}

	fn refine_value(&self, mut value: ScriptValue) -> ScriptValue {
		self.refine_calls.set(self.refine_calls.get() + 1);
		if let Some(refined) = self.refinements.get(&value.type_name) {
			value.type_name = refined.clone();
		}
		value
	}
}
