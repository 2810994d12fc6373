use serde::Serialize;

/// Pretty-print `payload` as one JSON document on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Render an optional string for tab-separated output.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
	match value {
		Some(item) if !item.is_empty() => item,
		_ => "-",
	}
}
