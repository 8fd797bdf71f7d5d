use std::{
	io::{self, Write},
	path::Path,
};

use crate::{
	error::{AnalyzeError, InputError, TextureError},
	read::Header,
	texture::Texture,
	Analysis,
};

/// Analyzes the archive at `path` and writes its report, or the reason it could not be analyzed.
///
/// The texture count is written as soon as the header is read, ahead of any failure in the index table.
pub fn inspect_path<W>(out: &mut W, path: &Path) -> io::Result<()>
where
	W: Write,
{
	let mut written = Ok(());
	let result = crate::analyze_path_with(path, |header| written = write_header(&mut *out, header));

	written?;

	match result {
		Ok(analysis) => {
			log::info!("decoded {} of {} textures", analysis.decoded(), analysis.header.count);

			write_textures(out, &analysis)
		}
		Err(err) => write_failure(out, &err),
	}
}

/// Writes the full report for an analysis, including every texture in index order.
pub fn write_analysis<W>(out: &mut W, analysis: &Analysis) -> io::Result<()>
where
	W: Write,
{
	write_header(out, &analysis.header)?;
	write_textures(out, analysis)
}

/// Writes the texture count read from the header.
pub fn write_header<W>(out: &mut W, header: &Header) -> io::Result<()>
where
	W: Write,
{
	writeln!(out)?;
	writeln!(out, "[+] Found {} textures", header.count)
}

/// Writes every texture in index order, followed by the closing line.
pub fn write_textures<W>(out: &mut W, analysis: &Analysis) -> io::Result<()>
where
	W: Write,
{
	for texture in analysis.textures.iter() {
		match texture {
			Ok(texture) => write_texture(out, texture)?,
			Err(err) => write_texture_error(out, err)?,
		}
	}

	writeln!(out)?;
	writeln!(out, "[+] analysis finished")
}

/// Writes the message for an archive that could not be analyzed.
pub fn write_failure<W>(out: &mut W, err: &AnalyzeError) -> io::Result<()>
where
	W: Write,
{
	match err {
		AnalyzeError::Input(InputError::Empty) => writeln!(out, "Please enter a valid path"),
		AnalyzeError::Input(InputError::FileNotFound(path)) => writeln!(out, "Error: File {} does not exist", path.display()),
		AnalyzeError::Input(InputError::UnsupportedExtension(_)) => writeln!(out, "File must have .a3t or .bin extension"),
		AnalyzeError::Read(err) => writeln!(out, "error while processing file: {}", err),
	}
}

/// Writes the block describing a single decoded texture.
pub fn write_texture<W>(out: &mut W, texture: &Texture) -> io::Result<()>
where
	W: Write,
{
	writeln!(out)?;
	writeln!(out, "Texture {} {}", texture.ordinal, texture.kind)?;
	writeln!(out, "  Texture offset: 0x{:X}", texture.off)?;
	writeln!(out, "  Width: {} (at offset 0x{:X})", texture.width, texture.width_at())?;
	writeln!(out, "  Height: {} (at offset 0x{:X})", texture.height, texture.height_at())?;
	writeln!(out, "  Data offset: 0x{:X} (file offset 0x{:X})", texture.data, texture.data_at())?;
	writeln!(out, "  Palette offset: 0x{:X}", texture.palette())?;
	writeln!(out, "  Bitmap offset: 0x{:X}", texture.bitmap())?;

	if let Some(mismatch) = texture.mismatch {
		writeln!(out, "  Warning: Only {} bytes available, but {} expected", mismatch.available, mismatch.expected)?;
	}

	Ok(())
}

/// Writes the message for a texture that failed to decode.
pub fn write_texture_error<W>(out: &mut W, err: &TextureError) -> io::Result<()>
where
	W: Write,
{
	writeln!(out, "Error processing texture {}: {}", err.ordinal, err.cause)
}
