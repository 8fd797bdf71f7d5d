//! Logger that prints messages like `[WARN] texture 2 expects 4 bitmap bytes` to stderr.

use std::io::{self, IsTerminal, Write};

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Logger {
	level: LevelFilter,
	use_color: bool,
}

impl Log for Logger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}

		let color_choice = match self.use_color {
			true => ColorChoice::Auto,
			false => ColorChoice::Never,
		};

		let mut stderr = StandardStream::stderr(color_choice);

		let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color(record.level()))));
		let _ = writeln!(&mut stderr, "[{}] {}", record.level(), record.args());
		let _ = stderr.reset();
	}

	fn flush(&self) {}
}

fn color(level: Level) -> Color {
	match level {
		Level::Error => Color::Red,
		Level::Warn => Color::Yellow,
		_ => Color::Green,
	}
}

/// Installs the logger for the whole process, showing messages up to `level`.
pub fn init(level: LevelFilter) {
	let use_color = io::stderr().is_terminal();
	let logger = Logger {
		level,
		use_color,
	};

	let _ = log::set_boxed_logger(Box::new(logger));

	log::set_max_level(level);
}

/// Returns the level implied by the number of `verbose` flags, or errors only when `quiet`.
pub fn level(verbose: u8, quiet: bool) -> LevelFilter {
	if quiet {
		return LevelFilter::Error;
	}

	match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

#[cfg(test)]
mod tests {
	use log::LevelFilter;

	use super::level;

	#[test]
	fn test_level() {
		assert_eq!(level(0, false), LevelFilter::Warn);
		assert_eq!(level(1, false), LevelFilter::Info);
		assert_eq!(level(2, false), LevelFilter::Debug);
		assert_eq!(level(9, false), LevelFilter::Trace);
		assert_eq!(level(3, true), LevelFilter::Error);
	}
}
