use serde::Deserialize;

use crate::inspect::Endianness;

fn default_true() -> bool {
	true
}

/// Serialized memory snapshot: target flags, type table, and root variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
	/// Whether a process backs the snapshot.
	#[serde(default = "default_true")]
	pub process: bool,
	/// Whether runtime introspection is available.
	#[serde(default = "default_true")]
	pub runtime: bool,
	/// Byte order of stored integers.
	#[serde(default)]
	pub endianness: Endianness,
	/// Declared types.
	#[serde(default)]
	pub types: Vec<TypeDef>,
	/// Root variables.
	#[serde(default)]
	pub variables: Vec<VariableDef>,
}

/// One declared type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDef {
	/// Fixed-width integer.
	Int {
		/// Type name.
		name: String,
		/// Width in bytes.
		size: usize,
		/// Two's-complement signed when true.
		#[serde(default = "default_true")]
		signed: bool,
	},
	/// IEEE float of 4 or 8 bytes.
	Float {
		/// Type name.
		name: String,
		/// Width in bytes.
		size: usize,
	},
	/// One-byte boolean.
	Bool {
		/// Type name.
		name: String,
	},
	/// Record with fields at fixed offsets.
	Struct {
		/// Type name.
		name: String,
		/// Total size in bytes.
		size: usize,
		/// Fields in declaration order.
		#[serde(default)]
		fields: Vec<FieldDef>,
	},
	/// Tagged union with an explicit tag table.
	Enum(EnumDef),
	/// Type whose best representation is another declared type.
	Alias {
		/// Type name.
		name: String,
		/// Name of the represented type.
		target: String,
	},
}

impl TypeDef {
	/// Declared type name.
	pub fn name(&self) -> &str {
		match self {
			Self::Int { name, .. } | Self::Float { name, .. } | Self::Bool { name } | Self::Struct { name, .. } | Self::Alias { name, .. } => name,
			Self::Enum(def) => &def.name,
		}
	}
}

/// Tagged-union type layout.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDef {
	/// Type name.
	pub name: String,
	/// Total size in bytes.
	pub size: usize,
	/// Two-case optional with `none`/`some` cases.
	#[serde(default)]
	pub optional: bool,
	/// Where the case selector lives.
	pub tag: TagLayout,
	/// Cases with their tag values.
	pub cases: Vec<CaseDef>,
}

/// Location of the case selector within an enum value.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TagLayout {
	/// Byte offset of the selector.
	pub offset: usize,
	/// Selector width in bytes, at most 8.
	pub size: usize,
}

/// One enum case.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseDef {
	/// Case name.
	pub name: String,
	/// Selector value choosing this case.
	pub tag: u64,
	/// Payload type name, if the case carries one.
	#[serde(default)]
	pub payload: Option<String>,
	/// Payload byte offset within the enum value.
	#[serde(default)]
	pub offset: usize,
}

/// One struct field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
	/// Field name.
	pub name: String,
	/// Field type name.
	#[serde(rename = "type")]
	pub type_name: String,
	/// Byte offset within the struct.
	pub offset: usize,
}

/// One root variable.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableDef {
	/// Variable name.
	pub name: String,
	/// Declared type name.
	#[serde(rename = "type")]
	pub type_name: String,
	/// Hex-encoded bytes; whitespace and `_` separators are ignored.
	#[serde(default)]
	pub bytes: String,
	/// Whether the target memory can be read.
	#[serde(default = "default_true")]
	pub readable: bool,
}
