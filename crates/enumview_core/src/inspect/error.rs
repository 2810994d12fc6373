use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors produced while resolving, materializing, and loading inspected values.
#[derive(Debug, Error)]
pub enum InspectError {
	/// The value has no live or inspectable target behind it.
	#[error("no process")]
	NoBackingProcess,
	/// The runtime introspection facility is not available.
	#[error("no runtime")]
	NoRuntimeSupport,
	/// The case layout of a type could not be computed for the current bytes.
	#[error("layout unavailable for {type_name}: {reason}")]
	LayoutUnavailable {
		/// Declared type name of the value.
		type_name: String,
		/// Why the layout could not be produced.
		reason: String,
	},
	/// The resolved payload region reads past the available bytes.
	#[error("truncated buffer: payload at {offset} with length {length} exceeds {available} available bytes")]
	TruncatedBuffer {
		/// Payload start within the backing buffer.
		offset: usize,
		/// Payload length in bytes.
		length: usize,
		/// Bytes actually available.
		available: usize,
	},
	/// The host could not build a typed value from payload bytes.
	#[error("could not construct {name}: {reason}")]
	ConstructionFailed {
		/// Name given to the value being constructed.
		name: String,
		/// Host-provided failure description.
		reason: String,
	},
	/// Memory behind a value could not be read.
	#[error("memory for {name} is unreadable")]
	Unreadable {
		/// Name of the value whose bytes were requested.
		name: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot document is not valid JSON for the expected schema.
	#[error("snapshot json: {0}")]
	Json(#[from] serde_json::Error),
	/// Unknown leading snapshot magic.
	#[error("unsupported compression or not a snapshot (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Integer width is not representable as `u64`.
	#[error("unsupported integer width {size}")]
	UnsupportedWidth {
		/// Requested width in bytes.
		size: usize,
	},
	/// Variable bytes are not a valid hex string.
	#[error("invalid hex bytes for variable {name}")]
	InvalidHex {
		/// Variable whose byte string failed to parse.
		name: String,
	},
	/// A type reference names no declared type.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Referenced type name.
		name: String,
	},
	/// Two type declarations share one name.
	#[error("duplicate type declaration: {name}")]
	DuplicateType {
		/// Duplicated type name.
		name: String,
	},
	/// A type contains itself by value through fields, payloads, or aliases.
	#[error("type {name} contains itself")]
	RecursiveType {
		/// Type found on the cycle.
		name: String,
	},
	/// Requested variable does not exist in the snapshot.
	#[error("variable not found: {name}")]
	VariableNotFound {
		/// Requested variable name.
		name: String,
	},
}
