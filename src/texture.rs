use std::{
	fmt::{self, Display},
	io::{self, Read, Seek},
};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
	error::{ReadError, TextureError},
	layout::{DATA_OFFSET, HEIGHT_OFFSET, PALETTE_SIZE, TAG_BASIC, TAG_COMPRESSED, TAG_OFFSET, TAG_SIMPLE, TAG_SIZE, TAG_VARIANT, WIDTH_OFFSET},
};

/// Represents the kind of a texture, as classified by its type tag.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Kind {
	/// A compressed texture (`[T]`).
	Compressed,

	/// A simple texture (`[S]`).
	Simple,

	/// A basic texture (`[B]`).
	Basic,

	/// An unverified variant (`[T2]`), with no assumed relation to compressed textures.
	Variant,

	/// A texture with an unrecognised type tag.
	Unknown([u8; TAG_SIZE]),
}

/// Represents a single decoded texture record.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Texture {
	/// The 1-based position of the texture within the archive.
	pub ordinal: usize,

	/// The absolute offset of the texture, as listed in the index table.
	pub off: u32,

	/// The raw type tag.
	pub tag: [u8; TAG_SIZE],

	/// The kind of the texture, classified from its type tag.
	pub kind: Kind,

	/// The width of the texture, in pixels.
	pub width: u16,

	/// The height of the texture, in pixels.
	pub height: u16,

	/// The absolute offset of the palette and bitmap data.
	pub data: u32,

	/// The size mismatch found for the bitmap, if any.
	pub mismatch: Option<SizeMismatch>,
}

/// Represents a bitmap that extends beyond the end of the file.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct SizeMismatch {
	/// The number of bytes the bitmap requires.
	pub expected: u64,

	/// The number of bytes between the start of the bitmap and the end of the file, negative if the bitmap starts past it.
	pub available: i64,
}

impl Kind {
	/// Classifies the specified type tag by exact match.
	pub fn from_tag(tag: [u8; TAG_SIZE]) -> Self {
		match tag {
			TAG_COMPRESSED => Self::Compressed,
			TAG_SIMPLE => Self::Simple,
			TAG_BASIC => Self::Basic,
			TAG_VARIANT => Self::Variant,
			_ => Self::Unknown(tag),
		}
	}

	/// Returns the short label of the kind.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Compressed => "[T]",
			Self::Simple => "[S]",
			Self::Basic => "[B]",
			Self::Variant => "[T2]",
			Self::Unknown(_) => "[?]",
		}
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl Texture {
	/// Returns the absolute position the width was read from.
	pub fn width_at(&self) -> u64 {
		self.off as u64 + WIDTH_OFFSET
	}

	/// Returns the absolute position the height was read from.
	pub fn height_at(&self) -> u64 {
		self.off as u64 + HEIGHT_OFFSET
	}

	/// Returns the absolute position the data offset was read from.
	pub fn data_at(&self) -> u64 {
		self.off as u64 + DATA_OFFSET
	}

	/// Returns the absolute offset of the palette.
	pub fn palette(&self) -> u64 {
		self.data as u64
	}

	/// Returns the absolute offset of the bitmap, which directly follows the palette.
	pub fn bitmap(&self) -> u64 {
		self.data as u64 + PALETTE_SIZE
	}

	/// Returns the number of bytes of the bitmap, at one byte per pixel.
	pub fn bitmap_len(&self) -> u64 {
		self.width as u64 * self.height as u64
	}
}

/// Checks whether a bitmap of the specified dimensions, starting at `bitmap`, fits within a file of `len` bytes.
///
/// Returns `None` when the bitmap fits exactly or with room to spare.
pub fn check_size(width: u16, height: u16, bitmap: u64, len: u64) -> Option<SizeMismatch> {
	let expected = width as u64 * height as u64;
	let available = len as i64 - bitmap as i64;

	if available < expected as i64 {
		Some(SizeMismatch {
			expected,
			available,
		})
	} else {
		None
	}
}

/// Attempts to decode the texture record at `off` from `src`, where `len` is the total length of the source.
///
/// Failures are tagged with `ordinal` so that the caller may report them and continue with the remaining textures.
pub fn decode_texture<R>(src: &mut R, ordinal: usize, off: u32, len: u64) -> Result<Texture, TextureError>
where
	R: Read + Seek,
{
	let texture = read_record(src, ordinal, off, len).map_err(|cause| {
		log::warn!("failed to decode texture {} at 0x{:X}: {}", ordinal, off, cause);

		TextureError {
			ordinal,
			cause,
		}
	})?;

	if let Some(mismatch) = texture.mismatch {
		log::warn!("texture {} expects {} bitmap bytes, but only {} are available", ordinal, mismatch.expected, mismatch.available);
	}

	Ok(texture)
}

fn read_record<R>(src: &mut R, ordinal: usize, off: u32, len: u64) -> Result<Texture, ReadError>
where
	R: Read + Seek,
{
	let base = off as u64;

	// Read the type tag as raw bytes.

	src.seek(io::SeekFrom::Start(base + TAG_OFFSET))?;

	let tag = {
		let mut buffer = [0; TAG_SIZE];

		src.read_exact(&mut buffer)?;

		buffer
	};

	// Read the geometry and the data offset, which are stored back-to-back after a gap.

	src.seek(io::SeekFrom::Start(base + WIDTH_OFFSET))?;

	let width = src.read_u16::<BigEndian>()?;
	let height = src.read_u16::<BigEndian>()?;
	let data = src.read_u32::<BigEndian>()?;

	log::debug!("texture {} at 0x{:X}: tag {:02X?}, {}x{}, data at 0x{:X}", ordinal, off, tag, width, height, data);

	let mismatch = check_size(width, height, data as u64 + PALETTE_SIZE, len);

	Ok(Texture {
		ordinal,
		off,
		tag,
		kind: Kind::from_tag(tag),
		width,
		height,
		data,
		mismatch,
	})
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use byteorder::{BigEndian, WriteBytesExt};

	use crate::error::ReadError;

	use super::{check_size, decode_texture, Kind, SizeMismatch};

	/// Builds a single texture record at offset 0, padded to `len` bytes.
	fn record(tag: [u8; 4], width: u16, height: u16, data: u32, len: usize) -> Cursor<Vec<u8>> {
		let mut buf: Vec<u8> = vec![0; 4];

		buf.extend_from_slice(&tag);
		buf.extend_from_slice(&[0; 8]);
		buf.write_u16::<BigEndian>(width).unwrap();
		buf.write_u16::<BigEndian>(height).unwrap();
		buf.write_u32::<BigEndian>(data).unwrap();
		buf.resize(len.max(buf.len()), 0);

		Cursor::new(buf)
	}

	#[test]
	fn test_classify_known_tags() {
		assert_eq!(Kind::from_tag([0x00, 0x00, 0x00, 0x21]), Kind::Compressed);
		assert_eq!(Kind::from_tag([0x80, 0x00, 0x00, 0x01]), Kind::Simple);
		assert_eq!(Kind::from_tag([0x00, 0x00, 0x00, 0x01]), Kind::Basic);
		assert_eq!(Kind::from_tag([0x00, 0x00, 0x00, 0x22]), Kind::Variant);
	}

	#[test]
	fn test_classify_unknown_tag() {
		let kind = Kind::from_tag([0xFF, 0xFF, 0xFF, 0xFF]);

		assert_eq!(kind, Kind::Unknown([0xFF, 0xFF, 0xFF, 0xFF]));
		assert_eq!(kind.label(), "[?]");
	}

	#[test]
	fn test_labels() {
		assert_eq!(Kind::Compressed.to_string(), "[T]");
		assert_eq!(Kind::Simple.to_string(), "[S]");
		assert_eq!(Kind::Basic.to_string(), "[B]");
		assert_eq!(Kind::Variant.to_string(), "[T2]");
	}

	#[test]
	fn test_decode_sample() {
		let mut src = Cursor::new(include_bytes!("../test/sample.a3t"));

		let texture = decode_texture(&mut src, 1, 0x30, 288).expect("failed to decode texture");

		assert_eq!(texture.kind, Kind::Compressed);
		assert_eq!(texture.width, 4);
		assert_eq!(texture.height, 4);
		assert_eq!(texture.data, 0x90);
		assert_eq!(texture.width_at(), 0x40);
		assert_eq!(texture.height_at(), 0x42);
		assert_eq!(texture.data_at(), 0x44);
		assert_eq!(texture.palette(), 0x90);
		assert_eq!(texture.bitmap(), 0x110);

		// The bitmap ends exactly at the end of the file.

		assert!(texture.mismatch.is_none());
	}

	#[test]
	fn test_decode_deterministic() {
		let mut src = Cursor::new(include_bytes!("../test/sample.a3t"));

		let first = decode_texture(&mut src, 2, 0x48, 288).expect("failed to decode texture first time");
		let second = decode_texture(&mut src, 2, 0x48, 288).expect("failed to decode texture second time");

		assert_eq!(first, second);
	}

	#[test]
	fn test_decode_unsigned_dimensions() {
		let mut src = record([0x00, 0x00, 0x00, 0x01], 0xFFFF, 0xFFFF, 0, 24);

		let texture = decode_texture(&mut src, 1, 0, 24).expect("failed to decode texture");

		assert_eq!(texture.width, 65535);
		assert_eq!(texture.height, 65535);
		assert_eq!(texture.bitmap_len(), 65535 * 65535);
	}

	#[test]
	fn test_decode_offsets_derive_from_data() {
		let mut src = record([0x80, 0x00, 0x00, 0x01], 1, 1, 0xFFFF_FFFF, 24);

		let texture = decode_texture(&mut src, 1, 0, 24).expect("failed to decode texture");

		assert_eq!(texture.palette(), 0xFFFF_FFFF);
		assert_eq!(texture.bitmap(), 0xFFFF_FFFF + 128);
	}

	#[test]
	fn test_decode_mismatch() {
		let mut src = record([0x00, 0x00, 0x00, 0x21], 10, 10, 100, 250);

		let texture = decode_texture(&mut src, 1, 0, 250).expect("failed to decode texture");

		assert_eq!(texture.bitmap(), 228);
		assert_eq!(
			texture.mismatch,
			Some(SizeMismatch {
				expected: 100,
				available: 22,
			})
		);
	}

	#[test]
	fn test_decode_short_record() {
		// The record stops halfway through the data offset.

		let mut src = Cursor::new(vec![0u8; 22]);

		let err = decode_texture(&mut src, 5, 0, 22).expect_err("expected decode to fail");

		assert_eq!(err.ordinal, 5);
		assert!(matches!(err.cause, ReadError::TruncatedFile));
	}

	#[test]
	fn test_decode_past_end() {
		let mut src = Cursor::new(include_bytes!("../test/sample.a3t"));

		let err = decode_texture(&mut src, 1, 0xFFFF_FFFF, 288).expect_err("expected decode to fail");

		assert!(matches!(err.cause, ReadError::TruncatedFile));
	}

	#[test]
	fn test_check_size_boundary() {
		assert_eq!(check_size(10, 10, 100, 200), None);
		assert!(check_size(10, 10, 100, 199).is_some());
		assert_eq!(check_size(0, 0, 100, 100), None);
	}

	#[test]
	fn test_check_size_bitmap_past_end() {
		let mismatch = check_size(0, 0, 300, 250).expect("expected mismatch");

		assert_eq!(mismatch.expected, 0);
		assert_eq!(mismatch.available, -50);
	}
}
