use std::path::PathBuf;

use enumview::inspect::{CaseLabelPolicy, MemoryImage, PresentationOptions};

use crate::cmd::print::{PrintOptions, ValueNode, build_tree, print_tree};
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Variable to show; every root variable when omitted.
	#[arg(long = "var")]
	pub var: Option<String>,
	#[arg(long)]
	pub json: bool,
	#[arg(long, default_value_t = PrintOptions::default().max_depth)]
	pub max_depth: u32,
	#[arg(long, default_value_t = PrintOptions::default().max_children)]
	pub max_children: usize,
	/// Keep payload-less case labels out of the child list.
	#[arg(long)]
	pub summary_only_cases: bool,
	/// Present an optional wrapping a bare case as the inner value.
	#[arg(long)]
	pub no_collapse: bool,
}

/// Print summaries and expanded child trees for snapshot variables.
pub fn run(args: Args) -> enumview::inspect::Result<()> {
	let Args {
		path,
		var,
		json,
		max_depth,
		max_children,
		summary_only_cases,
		no_collapse,
	} = args;

	let options = PresentationOptions {
		case_labels: if summary_only_cases { CaseLabelPolicy::SummaryOnly } else { CaseLabelPolicy::Child },
		collapse_nested_cases: !no_collapse,
	};
	let image = MemoryImage::open(&path)?.with_options(options);
	let limits = PrintOptions { max_depth, max_children };

	let roots = match &var {
		Some(name) => vec![image.variable(name)?],
		None => image.variables().to_vec(),
	};
	tracing::debug!(count = roots.len(), max_depth, max_children, "expanding variables");

	let trees: Vec<ValueNode> = roots.iter().map(|value| build_tree(&image, value, value.name(), limits)).collect();

	if json {
		emit_json(&ShowJson {
			path: path.display().to_string(),
			case_labels: match image.options().case_labels {
				CaseLabelPolicy::Child => "child",
				CaseLabelPolicy::SummaryOnly => "summary_only",
			},
			collapse_nested_cases: image.options().collapse_nested_cases,
			values: trees,
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	for tree in &trees {
		print_tree(tree, 0);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	case_labels: &'static str,
	collapse_nested_cases: bool,
	values: Vec<ValueNode>,
}
