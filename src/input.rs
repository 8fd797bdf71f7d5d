use std::path::{Path, PathBuf};

use crate::error::InputError;

/// Represents the extensions accepted for archives, compared case-insensitively.
pub const EXTENSIONS: [&str; 2] = ["a3t", "bin"];

/// Represents a single line entered at the prompt.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Line {
	/// Asks to leave the prompt, with `exit` or `quit` in any case.
	Exit,

	/// Contains nothing but whitespace and quotes.
	Empty,

	/// Names an archive to analyze.
	Path(PathBuf),
}

/// Classifies a line entered at the prompt, after cleaning it.
pub fn parse_line(line: &str) -> Line {
	let line = clean(line);

	if line.is_empty() {
		return Line::Empty;
	}

	if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
		return Line::Exit;
	}

	Line::Path(PathBuf::from(line))
}

/// Cleans a path typed or dropped onto a prompt, removing surrounding whitespace and any quotes.
pub fn clean(line: &str) -> String {
	line.trim().replace('"', "")
}

/// Returns if the path ends in one of the accepted extensions.
pub fn has_supported_extension(path: &Path) -> bool {
	path.extension()
		.and_then(|ext| ext.to_str())
		.map(|ext| EXTENSIONS.iter().any(|candidate| ext.eq_ignore_ascii_case(candidate)))
		.unwrap_or(false)
}

/// Attempts to validate the specified path as an archive that may be analyzed.
pub fn validate(path: &Path) -> Result<PathBuf, InputError> {
	if path.as_os_str().is_empty() {
		return Err(InputError::Empty);
	}

	if !has_supported_extension(path) {
		return Err(InputError::UnsupportedExtension(path.to_path_buf()));
	}

	if !path.is_file() {
		return Err(InputError::FileNotFound(path.to_path_buf()));
	}

	Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
	use std::path::{Path, PathBuf};

	use tempfile::{Builder, TempDir};

	use crate::error::InputError;

	use super::{clean, has_supported_extension, parse_line, validate, Line};

	#[test]
	fn test_clean() {
		assert_eq!(clean("  \"C:\\textures\\font.a3t\"\r\n"), "C:\\textures\\font.a3t");
		assert_eq!(clean("plain.bin"), "plain.bin");
		assert_eq!(clean("   "), "");
	}

	#[test]
	fn test_parse_exit() {
		assert_eq!(parse_line("exit"), Line::Exit);
		assert_eq!(parse_line("EXIT\n"), Line::Exit);
		assert_eq!(parse_line("  Quit  "), Line::Exit);
		assert_eq!(parse_line("\"quit\""), Line::Exit);
	}

	#[test]
	fn test_parse_empty() {
		assert_eq!(parse_line(""), Line::Empty);
		assert_eq!(parse_line(" \t \r\n"), Line::Empty);
		assert_eq!(parse_line("\"\""), Line::Empty);
	}

	#[test]
	fn test_parse_path() {
		assert_eq!(parse_line("\"/tmp/my textures/font.a3t\"\n"), Line::Path(PathBuf::from("/tmp/my textures/font.a3t")));
		assert_eq!(parse_line("exit.a3t"), Line::Path(PathBuf::from("exit.a3t")));
	}

	#[test]
	fn test_extension() {
		assert!(has_supported_extension(Path::new("font.a3t")));
		assert!(has_supported_extension(Path::new("font.A3T")));
		assert!(has_supported_extension(Path::new("dir/menu.Bin")));
		assert!(!has_supported_extension(Path::new("font.png")));
		assert!(!has_supported_extension(Path::new("a3t")));
		assert!(!has_supported_extension(Path::new("font.a3t.bak")));
	}

	#[test]
	fn test_validate_existing() {
		let file = Builder::new().suffix(".a3t").tempfile().expect("failed to create file");

		let path = validate(file.path()).expect("expected path to be valid");

		assert_eq!(path, file.path());
	}

	#[test]
	fn test_validate_missing() {
		let dir = TempDir::new().expect("failed to create directory");
		let path = dir.path().join("missing.bin");

		assert!(matches!(validate(&path), Err(InputError::FileNotFound(_))));
	}

	#[test]
	fn test_validate_directory() {
		let dir = Builder::new().suffix(".a3t").tempdir().expect("failed to create directory");

		assert!(matches!(validate(dir.path()), Err(InputError::FileNotFound(_))));
	}

	#[test]
	fn test_validate_extension_first() {
		assert!(matches!(validate(Path::new("missing.png")), Err(InputError::UnsupportedExtension(_))));
	}

	#[test]
	fn test_validate_empty() {
		assert!(matches!(validate(Path::new("")), Err(InputError::Empty)));
	}
}
