//! Command-line application reporting the structure of A3T texture archives.

use std::{io, path::PathBuf};

use a3t_inspect::{logger, prompt, report};
use clap::{ArgAction, Parser};

/// Reports the textures of A3T archives without modifying them
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
	/// Specifies the archives to inspect, prompting for paths when omitted
	paths: Vec<PathBuf>,

	/// Increases the detail of diagnostic messages (repeatable)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,

	/// Shows only error diagnostic messages
	#[arg(short, long, conflicts_with = "verbose")]
	quiet: bool,
}

fn main() {
	let cli = Cli::parse();

	logger::init(logger::level(cli.verbose, cli.quiet));

	let mut stdout = io::stdout().lock();

	let result = if cli.paths.is_empty() {
		prompt::run(&mut io::stdin().lock(), &mut stdout, report::inspect_path)
	} else {
		cli.paths.iter().try_for_each(|path| report::inspect_path(&mut stdout, path))
	};

	if let Err(err) = result {
		log::error!("failed to write report: {}", err);
	}
}
