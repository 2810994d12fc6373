/// Snapshot-level information command.
pub mod info;
/// Value tree rendering shared by commands.
pub mod print;
/// Single-variable tree command.
pub mod show;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared parsing and output helpers.
pub mod util;
/// Variable summary listing command.
pub mod vars;
