use serde::Deserialize;

use crate::inspect::{InspectError, Result};

/// Byte order of integers stored in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
	/// Least significant byte first.
	#[default]
	Little,
	/// Most significant byte first.
	Big,
}

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Advance the cursor by `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(InspectError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read an unsigned integer of up to 8 bytes and widen to `u64`.
	///
	/// Odd widths (3, 5, ...) are folded byte by byte in the requested order.
	pub fn read_uint(&mut self, size: usize, endianness: Endianness) -> Result<u64> {
		if size > 8 {
			return Err(InspectError::UnsupportedWidth { size });
		}
		let raw = self.read_exact(size)?;
		let fold = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
		Ok(match endianness {
			Endianness::Little => raw.iter().rev().fold(0, fold),
			Endianness::Big => raw.iter().fold(0, fold),
		})
	}
}
