use crate::inspect::{InspectError, PayloadRegion, Result, Target};

/// Extract a payload region from `bytes` and build its refined typed value.
///
/// The region is checked against `bytes.len()` before any byte is touched.
/// On success the host's refinement runs exactly once.
pub fn materialize_payload<H: Target + ?Sized>(target: &H, bytes: &[u8], case_name: &str, region: &PayloadRegion<H::Type>) -> Result<H::Value> {
	let truncated = InspectError::TruncatedBuffer {
		offset: region.offset,
		length: region.length,
		available: bytes.len(),
	};
	let Some(end) = region.end() else {
		return Err(truncated);
	};
	if end > bytes.len() {
		log::warn!("payload of .{case_name} needs bytes {}..{end}, only {} available", region.offset, bytes.len());
		return Err(truncated);
	}

	let payload = &bytes[region.offset..end];
	let value = target
		.construct_value(case_name, payload, &region.case_type)
		.map_err(|err| match err {
			err @ InspectError::ConstructionFailed { .. } => err,
			other => InspectError::ConstructionFailed {
				name: case_name.to_owned(),
				reason: other.to_string(),
			},
		})?;

	Ok(target.refine_value(value))
}
