mod bytes;
mod case_label;
mod compression;
mod error;
mod frontend;
mod host;
mod image;
mod materialize;
mod options;
mod resolution;
mod summary;

#[cfg(test)]
mod test_support;

/// Bounded byte cursor and endianness selector.
pub use bytes::{Cursor, Endianness};
/// Leaf node standing in for a payload-less case.
pub use case_label::{CaseLabel, ValueKind};
/// Snapshot compression detection.
pub use compression::{Compression, decode_bytes};
/// Error and result aliases.
pub use error::{InspectError, Result};
/// Presentation state machine for one tagged-union value.
pub use frontend::{Child, CurrentNode, EnumFrontEnd, PresentationState};
/// Interfaces consumed from the host debugger.
pub use host::{Target, ValueTree, current_enum_value};
/// Static memory snapshot host.
pub use image::{CaseDef, EnumDef, FieldDef, ImageFrontEnd, ImageValue, MemoryImage, Snapshot, TagLayout, TypeDef, TypeId, VariableDef};
/// Bounds-checked payload extraction.
pub use materialize::materialize_payload;
/// Presentation switches.
pub use options::{CaseLabelPolicy, PresentationOptions};
/// Resolved case layout for one value.
pub use resolution::{EnumResolution, OPTIONAL_NONE_CASE, OPTIONAL_SOME_CASE, PayloadRegion};
/// One-line summary rendering.
pub use summary::{DIAGNOSTIC_PREFIX, prints_value, render_diagnostic, render_summary, summarize};
