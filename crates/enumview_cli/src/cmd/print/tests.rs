use enumview::inspect::{MemoryImage, PresentationOptions};
use enumview_testkit::fixture_path;

use super::{PrintOptions, build_tree};

fn fixture() -> MemoryImage {
	MemoryImage::open(fixture_path("resilient.json")).expect("fixture opens")
}

#[test]
fn label_child_is_named_by_index() {
	let image = fixture();
	let value = image.variable("r_enum_a").expect("r_enum_a exists");
	let tree = build_tree(&image, &value, "r_enum_a", PrintOptions::default());

	assert_eq!(tree.summary.as_deref(), Some(".a"));
	assert_eq!(tree.state.as_deref(), Some("LabelOnly"));
	assert_eq!(tree.children.len(), 1);
	assert_eq!(tree.children[0].name, "[0]");
	assert_eq!(tree.children[0].type_name, None);
	assert_eq!(tree.children[0].summary.as_deref(), Some(".a"));
}

#[test]
fn payload_fields_are_expanded_in_order() {
	let image = fixture();
	let value = image.variable("s_opt").expect("s_opt exists");
	let tree = build_tree(&image, &value, "s_opt", PrintOptions::default());

	let names: Vec<&str> = tree.children.iter().map(|child| child.name.as_str()).collect();
	assert_eq!(names, ["a", "b", "c", "d", "e"]);
	let values: Vec<Option<&str>> = tree.children.iter().map(|child| child.summary.as_deref()).collect();
	assert_eq!(values, [Some("1"), Some("2"), Some("3"), Some("4"), Some("5")]);
}

#[test]
fn limits_elide_children() {
	let image = fixture();
	let value = image.variable("r_enum_s").expect("r_enum_s exists");

	let shallow = build_tree(&image, &value, "r_enum_s", PrintOptions { max_depth: 0, max_children: 32 });
	assert_eq!(shallow.num_children, 5);
	assert!(shallow.children.is_empty());
	assert_eq!(shallow.elided, 5);

	let narrow = build_tree(&image, &value, "r_enum_s", PrintOptions { max_depth: 4, max_children: 2 });
	assert_eq!(narrow.children.len(), 2);
	assert_eq!(narrow.elided, 3);
}

#[test]
fn summary_only_cases_leave_no_children() {
	let image = fixture().with_options(PresentationOptions::summary_only());
	let value = image.variable("status_opt").expect("status_opt exists");
	let tree = build_tree(&image, &value, "status_opt", PrintOptions::default());

	assert_eq!(tree.summary.as_deref(), Some(".ready"));
	assert_eq!(tree.num_children, 0);
}

#[test]
fn failed_refresh_carries_diagnostic() {
	let image = fixture();
	let value = image.variable("short_packet").expect("short_packet exists");
	let tree = build_tree(&image, &value, "short_packet", PrintOptions::default());

	assert_eq!(tree.state.as_deref(), Some("Invalid"));
	assert!(tree.diagnostic.as_deref().is_some_and(|text| text.starts_with("truncated buffer")));
	assert_eq!(tree.summary.as_deref(), Some(".data"));
}

#[test]
fn plain_unions_show_tag_value_and_optionals_do_not() {
	let image = fixture();

	let plain = image.variable("r_enum_t").expect("r_enum_t exists");
	let tree = build_tree(&image, &plain, "r_enum_t", PrintOptions::default());
	assert_eq!(tree.value.as_deref(), Some("2"));
	assert_eq!(tree.summary.as_deref(), Some(".t"));

	let optional = image.variable("r_enum_t_opt").expect("r_enum_t_opt exists");
	let tree = build_tree(&image, &optional, "r_enum_t_opt", PrintOptions::default());
	assert_eq!(tree.value, None);
	assert_eq!(tree.summary.as_deref(), Some(".t"));

	let detached = MemoryImage::open(fixture_path("detached.json")).expect("fixture opens");
	let count = detached.variable("count_opt").expect("count_opt exists");
	assert_eq!(build_tree(&detached, &count, "count_opt", PrintOptions::default()).value, None);
}

#[test]
fn tree_building_resolves_each_enum_once() {
	let image = fixture();
	let value = image.variable("r_enum_s").expect("r_enum_s exists");
	let _ = build_tree(&image, &value, "r_enum_s", PrintOptions::default());
	let first = image.resolve_count();

	let _ = build_tree(&image, &value, "r_enum_s", PrintOptions::default());
	// Only prints_value resolves afresh; the front end comes from the cache.
	assert_eq!(image.resolve_count(), first + 1);
}
