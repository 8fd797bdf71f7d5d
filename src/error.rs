use core::fmt;
use std::{error::Error, fmt::Display, io, path::PathBuf};

/// Represents a read-related error.
#[derive(Debug)]
pub enum ReadError {
	/// Indicates that a generic I/O error occurred.
	IoError(io::Error),

	/// Indicates that a read ran past the end of the file.
	TruncatedFile,
}

/// Represents a failure to decode a single texture record.
#[derive(Debug)]
pub struct TextureError {
	/// The 1-based position of the texture within the archive.
	pub ordinal: usize,

	/// The underlying cause of the failure.
	pub cause: ReadError,
}

/// Represents an input path that cannot be analyzed.
#[derive(Debug)]
pub enum InputError {
	/// Indicates that no path was supplied.
	Empty,

	/// Indicates that the path does not resolve to a readable file.
	FileNotFound(PathBuf),

	/// Indicates that the path does not end in a supported extension.
	UnsupportedExtension(PathBuf),
}

/// Represents an error that aborts the analysis of a file.
#[derive(Debug)]
pub enum AnalyzeError {
	/// Indicates that the input path was rejected.
	Input(InputError),

	/// Indicates that the header or index table could not be read.
	Read(ReadError),
}

impl Error for ReadError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::IoError(err) => Some(err),
			Self::TruncatedFile => None,
		}
	}
}

impl Error for TextureError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(&self.cause)
	}
}

impl Error for InputError {}

impl Error for AnalyzeError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Input(err) => Some(err),
			Self::Read(err) => Some(err),
		}
	}
}

impl Display for ReadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::IoError(err) => write!(f, "input/output error [{}]", err),
			Self::TruncatedFile => write!(f, "truncated file"),
		}
	}
}

impl Display for TextureError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "texture {}: {}", self.ordinal, self.cause)
	}
}

impl Display for InputError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Empty => write!(f, "empty path"),
			Self::FileNotFound(path) => write!(f, "file not found [{}]", path.display()),
			Self::UnsupportedExtension(path) => write!(f, "unsupported extension [{}]", path.display()),
		}
	}
}

impl Display for AnalyzeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Input(err) => write!(f, "invalid input [{}]", err),
			Self::Read(err) => write!(f, "read error [{}]", err),
		}
	}
}

impl From<io::Error> for ReadError {
	fn from(value: io::Error) -> Self {
		match value.kind() {
			io::ErrorKind::UnexpectedEof => Self::TruncatedFile,
			_ => Self::IoError(value),
		}
	}
}

impl From<InputError> for AnalyzeError {
	fn from(value: InputError) -> Self {
		Self::Input(value)
	}
}

impl From<ReadError> for AnalyzeError {
	fn from(value: ReadError) -> Self {
		Self::Read(value)
	}
}
