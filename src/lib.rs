//! Library for inspecting the structure of `A3T` texture archives without modifying them.

use std::{
	fs::File,
	io::{self, Read, Seek},
	path::Path,
};

use error::{AnalyzeError, ReadError};
use read::Header;
use texture::Texture;

/// Contains types for errors.
pub mod error;

/// Contains the validation of input paths.
pub mod input;

/// Contains the fixed byte layout of the format.
pub mod layout;

/// Contains the stderr logger used by the command-line application.
pub mod logger;

/// Contains the interactive prompt loop.
pub mod prompt;

/// Contains the header reader and index table resolution.
pub mod read;

/// Contains the rendering of human-readable reports.
pub mod report;

/// Contains the texture record decoder.
pub mod texture;

/// Represents the outcome of analyzing a single archive.
#[derive(Debug)]
pub struct Analysis {
	/// The header read from the archive.
	pub header: Header,

	/// The total length of the archive, in bytes.
	pub len: u64,

	/// The decoded textures, in index order, each of which may have failed independently.
	pub textures: Vec<Result<Texture, error::TextureError>>,
}

impl Analysis {
	/// Returns the number of textures that decoded successfully.
	pub fn decoded(&self) -> usize {
		self.textures.iter().filter(|texture| texture.is_ok()).count()
	}
}

/// Attempts to analyze the archive read from `src`.
///
/// The header and index table are resolved first; a failure in either aborts the analysis.
/// Each texture is then decoded independently, so a broken texture never affects its siblings.
pub fn analyze<R>(src: &mut R) -> Result<Analysis, ReadError>
where
	R: Read + Seek,
{
	analyze_with(src, |_| {})
}

/// Attempts to analyze the archive read from `src`, handing the header to `on_header` as soon as it is read.
///
/// The header is known before the index table is resolved, so `on_header` is called even when the index table turns
/// out to be truncated.
pub fn analyze_with<R, F>(src: &mut R, on_header: F) -> Result<Analysis, ReadError>
where
	R: Read + Seek,
	F: FnOnce(&Header),
{
	let len = stream_len(src)?;

	let header = read::read_header(src)?;

	on_header(&header);

	let offsets = read::read_offsets(src, &header)?;

	let textures = offsets
		.iter()
		.enumerate()
		.map(|(index, &off)| texture::decode_texture(&mut *src, index + 1, off, len))
		.collect();

	Ok(Analysis {
		header,
		len,
		textures,
	})
}

/// Attempts to validate and analyze the archive at the specified path.
pub fn analyze_path<P>(path: P) -> Result<Analysis, AnalyzeError>
where
	P: AsRef<Path>,
{
	analyze_path_with(path, |_| {})
}

/// Attempts to validate and analyze the archive at the specified path, handing the header to `on_header` as soon as it
/// is read.
pub fn analyze_path_with<P, F>(path: P, on_header: F) -> Result<Analysis, AnalyzeError>
where
	P: AsRef<Path>,
	F: FnOnce(&Header),
{
	let path = input::validate(path.as_ref())?;

	log::info!("analyzing <{}>", path.display());

	// Unbuffered, as every field is reached by an absolute seek.

	let mut file = File::open(&path).map_err(ReadError::from)?;

	Ok(analyze_with(&mut file, on_header)?)
}

/// Returns the total length of `src`, restoring its position afterwards.
fn stream_len<S>(src: &mut S) -> io::Result<u64>
where
	S: Seek,
{
	let pos = src.stream_position()?;
	let len = src.seek(io::SeekFrom::End(0))?;

	src.seek(io::SeekFrom::Start(pos))?;

	Ok(len)
}
