use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::inspect::{
	Child, Compression, Cursor, EnumFrontEnd, EnumResolution, Endianness, InspectError, PresentationOptions, Result, Target, ValueKind, ValueTree, decode_bytes,
};

mod schema;
mod value;

pub use schema::{CaseDef, EnumDef, FieldDef, Snapshot, TagLayout, TypeDef, VariableDef};
pub use value::ImageValue;

const MAX_ALIAS_HOPS: usize = 16;

/// Front end presenting one tagged-union value of a [`MemoryImage`].
pub type ImageFrontEnd = EnumFrontEnd<ImageValue, TypeId>;

/// Index into a [`MemoryImage`] type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

/// Static memory snapshot standing in for a debugged target.
///
/// Case layouts come from the snapshot's explicit tag tables. Each displayed
/// tagged-union value gets one [`EnumFrontEnd`], refreshed when first queried
/// and reused for its children and summary until [`MemoryImage::refresh`] or
/// [`MemoryImage::clear_presentations`].
pub struct MemoryImage {
	/// Compression mode of the source file.
	pub compression: Compression,
	process: bool,
	runtime: bool,
	endianness: Endianness,
	types: Vec<TypeDef>,
	by_name: HashMap<String, TypeId>,
	variables: Vec<ImageValue>,
	options: PresentationOptions,
	front_ends: RefCell<HashMap<usize, Rc<ImageFrontEnd>>>,
	fields: RefCell<HashMap<usize, (ImageValue, Rc<[ImageValue]>)>>,
	resolve_calls: Cell<usize>,
}

impl MemoryImage {
	/// Read, decode, and validate a snapshot file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		let mut image = Self::from_json_bytes(&bytes)?;
		image.compression = compression;
		Ok(image)
	}

	/// Parse and validate an uncompressed JSON snapshot.
	pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
		let snapshot: Snapshot = serde_json::from_slice(bytes)?;
		Self::from_snapshot(snapshot)
	}

	/// Validate a snapshot and build its root variables.
	pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
		let Snapshot {
			process,
			runtime,
			endianness,
			types,
			variables,
		} = snapshot;

		let mut by_name = HashMap::with_capacity(types.len());
		for (idx, def) in types.iter().enumerate() {
			if by_name.insert(def.name().to_owned(), TypeId(idx)).is_some() {
				return Err(InspectError::DuplicateType { name: def.name().to_owned() });
			}
		}

		let mut image = Self {
			compression: Compression::None,
			process,
			runtime,
			endianness,
			types,
			by_name,
			variables: Vec::new(),
			options: PresentationOptions::default(),
			front_ends: RefCell::new(HashMap::new()),
			fields: RefCell::new(HashMap::new()),
			resolve_calls: Cell::new(0),
		};
		image.validate_types()?;

		let mut roots = Vec::with_capacity(variables.len());
		for var in variables {
			let type_id = image.type_id(&var.type_name)?;
			let bytes = parse_hex(&var.name, &var.bytes)?;
			roots.push(ImageValue::data(&var.name, ValueKind::Variable, type_id, &bytes, var.readable));
		}
		image.variables = roots;

		Ok(image)
	}

	fn validate_types(&self) -> Result<()> {
		for def in &self.types {
			match def {
				TypeDef::Struct { fields, .. } => {
					for field in fields {
						self.type_id(&field.type_name)?;
					}
				}
				TypeDef::Enum(def) => {
					if def.tag.size > 8 {
						return Err(InspectError::UnsupportedWidth { size: def.tag.size });
					}
					for case in &def.cases {
						if let Some(payload) = &case.payload {
							self.type_id(payload)?;
						}
					}
				}
				TypeDef::Alias { target, .. } => {
					self.type_id(target)?;
				}
				TypeDef::Int { .. } | TypeDef::Float { .. } | TypeDef::Bool { .. } => {}
			}
		}
		self.reject_recursive_types()
	}

	// Depth-first walk over by-value containment; a back edge is a type holding itself.
	fn reject_recursive_types(&self) -> Result<()> {
		#[derive(Clone, Copy, PartialEq, Eq)]
		enum Mark {
			Unvisited,
			Active,
			Done,
		}

		let edges: Vec<Vec<usize>> = self.types.iter().map(|def| self.contained_types(def)).collect();
		let mut marks = vec![Mark::Unvisited; self.types.len()];

		for root in 0..self.types.len() {
			if marks[root] != Mark::Unvisited {
				continue;
			}
			marks[root] = Mark::Active;
			let mut stack = vec![(root, 0_usize)];

			while let Some((node, next)) = stack.last_mut() {
				let node = *node;
				let Some(&child) = edges[node].get(*next) else {
					marks[node] = Mark::Done;
					stack.pop();
					continue;
				};
				*next += 1;

				match marks[child] {
					Mark::Active => {
						return Err(InspectError::RecursiveType {
							name: self.types[child].name().to_owned(),
						});
					}
					Mark::Unvisited => {
						marks[child] = Mark::Active;
						stack.push((child, 0));
					}
					Mark::Done => {}
				}
			}
		}
		Ok(())
	}

	fn contained_types(&self, def: &TypeDef) -> Vec<usize> {
		let names: Vec<&str> = match def {
			TypeDef::Struct { fields, .. } => fields.iter().map(|field| field.type_name.as_str()).collect(),
			TypeDef::Enum(def) => def.cases.iter().filter_map(|case| case.payload.as_deref()).collect(),
			TypeDef::Alias { target, .. } => vec![target.as_str()],
			TypeDef::Int { .. } | TypeDef::Float { .. } | TypeDef::Bool { .. } => Vec::new(),
		};
		names.into_iter().filter_map(|name| self.by_name.get(name)).map(|id| id.0).collect()
	}

	/// Replace the presentation options used for tagged-union children.
	pub fn with_options(mut self, options: PresentationOptions) -> Self {
		self.options = options;
		self.front_ends.get_mut().clear();
		self.fields.get_mut().clear();
		self
	}

	/// Presentation options in effect.
	pub fn options(&self) -> &PresentationOptions {
		&self.options
	}

	/// Whether a process backs this snapshot.
	pub fn has_process_flag(&self) -> bool {
		self.process
	}

	/// Whether runtime introspection is available.
	pub fn has_runtime_flag(&self) -> bool {
		self.runtime
	}

	/// Declared types.
	pub fn types(&self) -> &[TypeDef] {
		&self.types
	}

	/// Root variables in snapshot order.
	pub fn variables(&self) -> &[ImageValue] {
		&self.variables
	}

	/// Root variable called `name`.
	pub fn variable(&self, name: &str) -> Result<ImageValue> {
		self.variables
			.iter()
			.find(|var| var.name() == name)
			.cloned()
			.ok_or_else(|| InspectError::VariableNotFound { name: name.to_owned() })
	}

	/// Look up a type by name.
	pub fn type_id(&self, name: &str) -> Result<TypeId> {
		self.by_name.get(name).copied().ok_or_else(|| InspectError::UnknownType { name: name.to_owned() })
	}

	/// Declared type name of `value`; `None` for case labels.
	pub fn type_name(&self, value: &ImageValue) -> Option<&str> {
		let type_id = value.type_id()?;
		self.types.get(type_id.0).map(TypeDef::name)
	}

	/// Whether `value` is a tagged union once aliases are followed.
	pub fn is_enum(&self, value: &ImageValue) -> bool {
		matches!(self.concrete_def(value), Some(TypeDef::Enum(_)))
	}

	/// Front end presenting `value`, refreshed on first use and cached afterwards.
	pub fn front_end(&self, value: &ImageValue) -> Rc<ImageFrontEnd> {
		if let Some(front) = self.front_ends.borrow().get(&value.key()) {
			return Rc::clone(front);
		}
		self.refresh(value)
	}

	/// Recompute the presentation of `value` and replace the cached front end.
	pub fn refresh(&self, value: &ImageValue) -> Rc<ImageFrontEnd> {
		let mut front = EnumFrontEnd::new(value.clone(), self.options.clone());
		front.refresh(self);
		let front = Rc::new(front);
		// The cached front end holds a clone of `value`, so its key cannot be reused.
		self.front_ends.borrow_mut().insert(value.key(), Rc::clone(&front));
		front
	}

	/// Drop every cached front end and field list.
	pub fn clear_presentations(&self) {
		self.front_ends.borrow_mut().clear();
		self.fields.borrow_mut().clear();
	}

	/// Number of resolver queries answered so far.
	pub fn resolve_count(&self) -> usize {
		self.resolve_calls.get()
	}

	/// Rendered primitive value or raw enum tag; `None` for structs and unreadable bytes.
	pub fn value_text(&self, value: &ImageValue) -> Option<String> {
		if !value.is_readable() {
			return None;
		}
		let def = self.concrete_def(value)?;
		let mut cursor = Cursor::new(value.bytes());
		match def {
			TypeDef::Int { size, signed, .. } => {
				let raw = cursor.read_uint(*size, self.endianness).ok()?;
				if *signed {
					Some(sign_extend(raw, *size).to_string())
				} else {
					Some(raw.to_string())
				}
			}
			TypeDef::Float { size: 4, .. } => {
				let raw = cursor.read_uint(4, self.endianness).ok()?;
				Some(f32::from_bits(raw as u32).to_string())
			}
			TypeDef::Float { size: 8, .. } => {
				let raw = cursor.read_uint(8, self.endianness).ok()?;
				Some(f64::from_bits(raw).to_string())
			}
			TypeDef::Bool { .. } => {
				let raw = cursor.read_exact(1).ok()?;
				Some((raw[0] != 0).to_string())
			}
			TypeDef::Enum(def) => {
				cursor.skip(def.tag.offset).ok()?;
				let tag = cursor.read_uint(def.tag.size, self.endianness).ok()?;
				Some(tag.to_string())
			}
			TypeDef::Float { .. } | TypeDef::Struct { .. } | TypeDef::Alias { .. } => None,
		}
	}

	fn def(&self, type_id: TypeId) -> Option<&TypeDef> {
		self.types.get(type_id.0)
	}

	fn concrete_id(&self, type_id: TypeId) -> Option<TypeId> {
		let mut current = type_id;
		for _ in 0..MAX_ALIAS_HOPS {
			match self.def(current)? {
				TypeDef::Alias { target, .. } => current = *self.by_name.get(target)?,
				_ => return Some(current),
			}
		}
		None
	}

	fn concrete_def(&self, value: &ImageValue) -> Option<&TypeDef> {
		let type_id = self.concrete_id(value.type_id()?)?;
		self.def(type_id)
	}

	fn type_size(&self, type_id: TypeId) -> Result<usize> {
		let concrete = self.concrete_id(type_id).ok_or_else(|| self.unknown(type_id))?;
		match self.def(concrete).ok_or_else(|| self.unknown(type_id))? {
			TypeDef::Int { size, .. } | TypeDef::Float { size, .. } | TypeDef::Struct { size, .. } => Ok(*size),
			TypeDef::Bool { .. } => Ok(1),
			TypeDef::Enum(def) => Ok(def.size),
			TypeDef::Alias { .. } => Err(self.unknown(type_id)),
		}
	}

	fn unknown(&self, type_id: TypeId) -> InspectError {
		InspectError::UnknownType {
			name: self.def(type_id).map_or_else(|| format!("#{}", type_id.0), |def| def.name().to_owned()),
		}
	}

	// Field children are built once per parent so their identities stay stable for the front-end cache.
	fn fields_of(&self, value: &ImageValue) -> Rc<[ImageValue]> {
		if let Some((_, fields)) = self.fields.borrow().get(&value.key()) {
			return Rc::clone(fields);
		}
		let fields: Rc<[ImageValue]> = self.field_values(value).into();
		self.fields.borrow_mut().insert(value.key(), (value.clone(), Rc::clone(&fields)));
		fields
	}

	fn field_values(&self, value: &ImageValue) -> Vec<ImageValue> {
		let Some(TypeDef::Struct { fields, .. }) = self.concrete_def(value) else {
			return Vec::new();
		};

		let bytes = value.bytes();
		fields
			.iter()
			.filter_map(|field| {
				let type_id = self.type_id(&field.type_name).ok()?;
				let size = self.type_size(type_id).ok()?;
				let start = field.offset.min(bytes.len());
				let end = field.offset.saturating_add(size).min(bytes.len());
				Some(ImageValue::data(&field.name, ValueKind::Child, type_id, &bytes[start..end], value.is_readable()))
			})
			.collect()
	}
}

impl ValueTree for MemoryImage {
	type Value = ImageValue;

	fn num_children(&self, value: &ImageValue) -> usize {
		if self.is_enum(value) {
			return self.front_end(value).num_children(self);
		}
		self.fields_of(value).len()
	}

	fn child_at(&self, value: &ImageValue, idx: usize) -> Option<ImageValue> {
		if self.is_enum(value) {
			return match self.front_end(value).child_at(self, idx)? {
				Child::Case(label) => Some(ImageValue::case(label)),
				Child::Value(child) => Some(child),
			};
		}
		self.fields_of(value).get(idx).cloned()
	}

	fn index_of_child(&self, value: &ImageValue, name: &str) -> Option<usize> {
		if self.is_enum(value) {
			return self.front_end(value).index_of_child(self, name);
		}
		self.fields_of(value).iter().position(|field| field.name() == name)
	}

	fn might_have_children(&self, value: &ImageValue) -> bool {
		if self.is_enum(value) {
			return self.front_end(value).might_have_children(self);
		}
		matches!(self.concrete_def(value), Some(TypeDef::Struct { fields, .. }) if !fields.is_empty())
	}

	fn summary(&self, value: &ImageValue) -> Option<String> {
		if let Some(label) = value.case_label() {
			return Some(label.summary().to_owned());
		}
		if self.is_enum(value) {
			return Some(self.front_end(value).summary(self));
		}
		self.value_text(value)
	}
}

impl Target for MemoryImage {
	type Type = TypeId;

	fn has_process(&self, _value: &ImageValue) -> bool {
		self.process
	}

	fn has_runtime(&self, _value: &ImageValue) -> bool {
		self.runtime
	}

	fn backing_bytes<'a>(&'a self, value: &'a ImageValue) -> Result<Cow<'a, [u8]>> {
		if !value.is_readable() {
			return Err(InspectError::Unreadable { name: value.name().to_owned() });
		}
		Ok(Cow::Borrowed(value.bytes()))
	}

	fn resolve_enum_case(&self, value: &ImageValue) -> Result<EnumResolution<TypeId>> {
		self.resolve_calls.set(self.resolve_calls.get() + 1);
		let type_name = self.type_name(value).unwrap_or("<case label>").to_owned();
		let layout_error = |reason: String| InspectError::LayoutUnavailable {
			type_name: type_name.clone(),
			reason,
		};

		let Some(TypeDef::Enum(def)) = self.concrete_def(value) else {
			return Err(layout_error("not a tagged union".to_owned()));
		};
		let bytes = self.backing_bytes(value)?;

		let mut cursor = Cursor::new(&bytes);
		let tag = cursor
			.skip(def.tag.offset)
			.and_then(|()| cursor.read_uint(def.tag.size, self.endianness))
			.map_err(|err| layout_error(format!("tag unreadable: {err}")))?;
		let case = def
			.cases
			.iter()
			.find(|case| case.tag == tag)
			.ok_or_else(|| layout_error(format!("no case for tag {tag}")))?;

		let Some(payload) = &case.payload else {
			return Ok(EnumResolution::bare(case.name.as_str(), def.optional));
		};
		let case_type = self.type_id(payload)?;
		let length = self.type_size(case_type)?;
		Ok(EnumResolution::with_payload(case.name.as_str(), case_type, case.offset, length, def.optional))
	}

	fn construct_value(&self, name: &str, bytes: &[u8], case_type: &TypeId) -> Result<ImageValue> {
		let construction_failed = |reason: String| InspectError::ConstructionFailed {
			name: name.to_owned(),
			reason,
		};
		let size = self.type_size(*case_type).map_err(|err| construction_failed(err.to_string()))?;
		if bytes.len() != size {
			return Err(construction_failed(format!("expected {size} bytes, got {}", bytes.len())));
		}
		Ok(ImageValue::data(name, ValueKind::ConstResult, *case_type, bytes, true))
	}

	fn refine_value(&self, value: ImageValue) -> ImageValue {
		let Some(declared) = value.type_id() else {
			return value;
		};
		match self.concrete_id(declared) {
			Some(concrete) if concrete != declared => value.retyped(concrete),
			_ => value,
		}
	}
}

fn sign_extend(raw: u64, size: usize) -> i64 {
	if size == 0 || size >= 8 {
		return raw as i64;
	}
	let shift = 64 - size * 8;
	((raw << shift) as i64) >> shift
}

fn parse_hex(name: &str, text: &str) -> Result<Vec<u8>> {
	let digits: Vec<u8> = text.bytes().filter(|byte| !byte.is_ascii_whitespace() && *byte != b'_').collect();
	if digits.len() % 2 != 0 {
		return Err(InspectError::InvalidHex { name: name.to_owned() });
	}

	digits
		.chunks(2)
		.map(|pair| {
			std::str::from_utf8(pair)
				.ok()
				.and_then(|pair| u8::from_str_radix(pair, 16).ok())
				.ok_or_else(|| InspectError::InvalidHex { name: name.to_owned() })
		})
		.collect()
}
