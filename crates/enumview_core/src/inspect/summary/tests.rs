use crate::inspect::test_support::{ScriptValue, ScriptedTarget};
use crate::inspect::{EnumResolution, prints_value, render_diagnostic, render_summary, summarize};

#[test]
fn plain_union_renders_dot_case_with_or_without_payload() {
	let bare: EnumResolution<()> = EnumResolution::bare("a", false);
	let with_payload = EnumResolution::with_payload("t", (), 0, 8, false);

	assert_eq!(render_summary(&bare, || panic!("payload summary must not be consulted")), ".a");
	assert_eq!(render_summary(&with_payload, || panic!("payload summary must not be consulted")), ".t");
}

#[test]
fn optional_renders_nil_or_payload_summary() {
	let none: EnumResolution<()> = EnumResolution::bare("none", true);
	let some = EnumResolution::with_payload("some", (), 0, 8, true);

	assert_eq!(render_summary(&none, || Some("unused".to_owned())), "nil");
	assert_eq!(render_summary(&some, || Some("42".to_owned())), "42");
	assert_eq!(render_summary(&some, || None), "");
}

#[test]
fn diagnostic_embeds_error_text() {
	assert_eq!(render_diagnostic("no process"), "<could not fetch current value: no process>");
}

#[test]
fn summarize_reports_resolver_errors_as_text() {
	let target = ScriptedTarget::default();
	let text = summarize(&target, &ScriptValue::new("x", "Unknown", &[]));
	assert_eq!(text, "<could not fetch current value: layout unavailable for Unknown: not a tagged union>");
}

#[test]
fn summarize_of_truncated_optional_payload_is_a_diagnostic() {
	let target = ScriptedTarget::default()
		.with_resolution("Optional<T>", EnumResolution::with_payload("some", "T".to_owned(), 0, 8, true))
		.with_summary("T", "T(a: 2)");
	let text = summarize(&target, &ScriptValue::new("x", "Optional<T>", &[0; 4]));

	assert_eq!(text, "<could not fetch current value: truncated buffer: payload at 0 with length 8 exceeds 4 available bytes>");
	assert_eq!(target.construct_calls.get(), 0);
}

#[test]
fn summarize_of_unreadable_optional_payload_is_a_diagnostic() {
	let target = ScriptedTarget {
		unreadable: true,
		..ScriptedTarget::default()
	}
	.with_resolution("Optional<T>", EnumResolution::with_payload("some", "T".to_owned(), 0, 8, true));
	let text = summarize(&target, &ScriptValue::new("x", "Optional<T>", &[0; 9]));

	assert_eq!(text, "<could not fetch current value: memory for x is unreadable>");
}

#[test]
fn payloadless_some_is_not_nil() {
	let some: EnumResolution<()> = EnumResolution::bare("some", true);
	assert_eq!(render_summary(&some, || None), "");

	let target = ScriptedTarget::default().with_resolution("Optional<Void>", EnumResolution::bare("some", true));
	assert_eq!(summarize(&target, &ScriptValue::new("x", "Optional<Void>", &[1])), "");
}

#[test]
fn optionals_do_not_print_a_value_line() {
	let target = ScriptedTarget::default()
		.with_resolution("Optional<Int>", EnumResolution::bare("none", true))
		.with_resolution("Status", EnumResolution::bare("ready", false));

	assert!(!prints_value(&target, &ScriptValue::new("x", "Optional<Int>", &[])));
	assert!(prints_value(&target, &ScriptValue::new("y", "Status", &[])));
	assert!(!prints_value(&target, &ScriptValue::new("z", "Unknown", &[])));
}
