use std::io::{self, Read, Seek};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
	error::ReadError,
	layout::{COUNT_OFFSET, INDEX_ENTRY_SIZE, INDEX_OFFSET},
};

/// Represents the header of an archive.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Header {
	/// The number of textures in the archive.
	pub count: u32,

	/// The absolute offset of the index table.
	pub index: u32,
}

impl Header {
	/// Returns the absolute position of the index table entry at the specified index.
	pub fn entry_offset(&self, index: u32) -> u64 {
		self.index as u64 + INDEX_ENTRY_SIZE * index as u64
	}
}

/// Attempts to read the header of the archive from `src`.
///
/// No upper bound is placed on the texture count; an implausible count surfaces as a truncated index table instead.
pub fn read_header<R>(src: &mut R) -> Result<Header, ReadError>
where
	R: Read + Seek,
{
	src.seek(io::SeekFrom::Start(COUNT_OFFSET))?;

	let count = src.read_u32::<BigEndian>()?;

	src.seek(io::SeekFrom::Start(INDEX_OFFSET))?;

	let index = src.read_u32::<BigEndian>()?;

	log::debug!("header: {} textures, index table at 0x{:X}", count, index);

	Ok(Header {
		count,
		index,
	})
}

/// Attempts to resolve the offsets of every texture listed in the index table, in index order.
///
/// A failure on any entry fails the whole table, as none of the remaining offsets could be trusted.
pub fn read_offsets<R>(src: &mut R, header: &Header) -> Result<Vec<u32>, ReadError>
where
	R: Read + Seek,
{
	let mut offsets = Vec::new();

	for index in 0..header.count {
		src.seek(io::SeekFrom::Start(header.entry_offset(index)))?;

		let off = src.read_u32::<BigEndian>()?;

		log::trace!("index entry {}: texture at 0x{:X}", index, off);

		offsets.push(off);
	}

	Ok(offsets)
}
