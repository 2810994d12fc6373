use crate::inspect::{EnumResolution, Target, current_enum_value, materialize_payload};

/// Lead text of the summary shown when the current case cannot be resolved.
pub const DIAGNOSTIC_PREFIX: &str = "could not fetch current value";

const NIL_SUMMARY: &str = "nil";

/// Render a resolution failure as a summary string.
pub fn render_diagnostic(err: &str) -> String {
	format!("<{DIAGNOSTIC_PREFIX}: {err}>")
}

/// Render the summary of a resolved tagged-union value.
///
/// `payload_summary` is only consulted for an optional outside its `none`
/// case, whose summary is the payload's own; an absent payload summary
/// renders empty. Payload failures are expected to come back as diagnostics.
pub fn render_summary<T>(resolution: &EnumResolution<T>, payload_summary: impl FnOnce() -> Option<String>) -> String {
	if resolution.is_empty_optional() {
		return NIL_SUMMARY.to_owned();
	}
	if resolution.is_optional {
		return payload_summary().unwrap_or_default();
	}

	let mut out = String::with_capacity(resolution.case_name.len() + 1);
	out.push('.');
	out.push_str(&resolution.case_name);
	out
}

/// One-line summary of a tagged-union value, resolved afresh.
///
/// Never fails: resolution errors render as a diagnostic string.
pub fn summarize<H: Target + ?Sized>(target: &H, value: &H::Value) -> String {
	let resolution = match current_enum_value(target, value) {
		Ok(resolution) => resolution,
		Err(err) => return render_diagnostic(&err.to_string()),
	};

	render_summary(&resolution, || optional_payload_summary(target, value, &resolution))
}

fn optional_payload_summary<H: Target + ?Sized>(target: &H, value: &H::Value, resolution: &EnumResolution<H::Type>) -> Option<String> {
	let region = resolution.payload.as_ref()?;
	let payload = target
		.backing_bytes(value)
		.and_then(|bytes| materialize_payload(target, &bytes, &resolution.case_name, region));

	match payload {
		Ok(payload) => target.summary(&payload),
		Err(err) => {
			log::debug!("payload of .{} unavailable: {err}", resolution.case_name);
			Some(render_diagnostic(&err.to_string()))
		}
	}
}

/// Whether a value line should be printed next to the summary.
///
/// Optionals print only their summary; unresolvable values print nothing.
pub fn prints_value<H: Target + ?Sized>(target: &H, value: &H::Value) -> bool {
	current_enum_value(target, value).is_ok_and(|resolution| !resolution.is_optional)
}

#[cfg(test)]
mod tests;
