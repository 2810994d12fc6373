/// Case name of the empty optional.
pub const OPTIONAL_NONE_CASE: &str = "none";
/// Case name of the value-carrying optional.
pub const OPTIONAL_SOME_CASE: &str = "some";

/// Byte region and declared type of a selected case's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRegion<T> {
	/// Declared payload type.
	pub case_type: T,
	/// Payload start within the backing buffer.
	pub offset: usize,
	/// Payload length in bytes.
	pub length: usize,
}

impl<T> PayloadRegion<T> {
	/// Exclusive end of the region, or `None` when it overflows.
	pub fn end(&self) -> Option<usize> {
		self.offset.checked_add(self.length)
	}
}

/// Selected case of a tagged-union value, as reported by the host resolver.
///
/// Recomputed on every refresh; never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumResolution<T> {
	/// Declared name of the selected case.
	pub case_name: String,
	/// Payload location when the case carries one.
	pub payload: Option<PayloadRegion<T>>,
	/// Whether the declared type is the two-case optional.
	pub is_optional: bool,
}

impl<T> EnumResolution<T> {
	/// Selected case without payload.
	pub fn bare(case_name: impl Into<String>, is_optional: bool) -> Self {
		Self {
			case_name: case_name.into(),
			payload: None,
			is_optional,
		}
	}

	/// Selected case with a payload region.
	pub fn with_payload(case_name: impl Into<String>, case_type: T, offset: usize, length: usize, is_optional: bool) -> Self {
		Self {
			case_name: case_name.into(),
			payload: Some(PayloadRegion { case_type, offset, length }),
			is_optional,
		}
	}

	/// Whether the selected case carries a payload.
	pub fn has_payload(&self) -> bool {
		self.payload.is_some()
	}

	/// Optional sitting on its `none` case.
	pub fn is_empty_optional(&self) -> bool {
		self.is_optional && self.case_name == OPTIONAL_NONE_CASE
	}

	/// Plain tagged union sitting on a payload-less case.
	pub fn is_bare_case(&self) -> bool {
		!self.is_optional && self.payload.is_none()
	}
}
