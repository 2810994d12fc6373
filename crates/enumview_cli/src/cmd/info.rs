use std::path::PathBuf;

use enumview::inspect::{MemoryImage, TypeDef};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print snapshot flags and table sizes.
pub fn run(args: Args) -> enumview::inspect::Result<()> {
	let Args { path } = args;
	let image = MemoryImage::open(&path)?;

	let enums = image.types().iter().filter(|def| matches!(def, TypeDef::Enum(_))).count();
	let optionals = image
		.types()
		.iter()
		.filter(|def| matches!(def, TypeDef::Enum(item) if item.optional))
		.count();

	println!("path: {}", path.display());
	println!("compression: {}", image.compression.as_str());
	println!("process: {}", image.has_process_flag());
	println!("runtime: {}", image.has_runtime_flag());
	println!("types: {}", image.types().len());
	println!("enums: {enums}");
	println!("optionals: {optionals}");
	println!("variables: {}", image.variables().len());

	Ok(())
}
