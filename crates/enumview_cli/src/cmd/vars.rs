use std::path::PathBuf;

use enumview::inspect::{MemoryImage, ValueTree};

use crate::cmd::util::{emit_json, or_dash};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// List every root variable with its one-line summary.
pub fn run(args: Args) -> enumview::inspect::Result<()> {
	let Args { path, json } = args;
	let image = MemoryImage::open(&path)?;

	let rows: Vec<VarJson> = image
		.variables()
		.iter()
		.map(|var| VarJson {
			name: var.name().to_owned(),
			type_name: image.type_name(var).map(str::to_owned),
			summary: image.summary(var),
			children: image.num_children(var),
		})
		.collect();

	if json {
		emit_json(&VarsJson {
			path: path.display().to_string(),
			variables: rows,
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("name\ttype\tchildren\tsummary");
	for row in &rows {
		println!("{}\t{}\t{}\t{}", row.name, or_dash(row.type_name.as_deref()), row.children, or_dash(row.summary.as_deref()));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct VarsJson {
	path: String,
	variables: Vec<VarJson>,
}

#[derive(serde::Serialize)]
struct VarJson {
	name: String,
	#[serde(rename = "type")]
	type_name: Option<String>,
	summary: Option<String>,
	children: usize,
}
