use std::{
	io::{self, BufRead, Write},
	path::Path,
};

use crate::{
	error::{AnalyzeError, InputError},
	input::{self, Line},
	report,
};

/// Represents the lines printed when the prompt starts.
pub const BANNER: [&str; 3] = [
	"=== A3T Analyzer (read-only mode) ===",
	"Thanks to Nexus the Modder and Credits for their analysis code on A3T textures",
	"Drag and drop your A3T or BIN file here, or type the path manually",
];

/// Reads paths from `src` one line at a time, handing each to `inspect`, until `src` is exhausted or the user asks to
/// leave.
///
/// Lines are decoded lossily, so a line that is not valid UTF-8 is reported like any other bad path rather than ending
/// the prompt.
pub fn run<R, W, F>(src: &mut R, out: &mut W, mut inspect: F) -> io::Result<()>
where
	R: BufRead,
	W: Write,
	F: FnMut(&mut W, &Path) -> io::Result<()>,
{
	for line in BANNER {
		writeln!(out, "{}", line)?;
	}

	let mut buf = Vec::new();

	loop {
		buf.clear();

		match src.read_until(b'\n', &mut buf) {
			Ok(0) => break,
			Ok(_) => {}
			Err(err) => {
				log::error!("failed to read from standard input: {}", err);
				break;
			}
		}

		match input::parse_line(&String::from_utf8_lossy(&buf)) {
			Line::Exit => break,
			Line::Empty => report::write_failure(&mut *out, &AnalyzeError::Input(InputError::Empty))?,
			Line::Path(path) => inspect(&mut *out, &path)?,
		}

		out.flush()?;
	}

	Ok(())
}
