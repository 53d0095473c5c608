use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead};
use std::process::ExitCode;

use makedep_cli::config::{ResolvedPaths, find_source_root};
use makedep_cli::rewrite::{LineRewriter, RewriteTable};
use makedep_cli::sink::Accumulators;

#[derive(Parser)]
#[command(name = "makedep")]
#[command(
	author,
	version,
	about = "Accumulate compiler dependency listings into .depend and .depend.mak"
)]
struct Cli {
	/// Write only the NMAKE accumulator (.depend.mak), skipping .depend
	#[arg(short = 'n', long)]
	nmake: bool,

	/// Prefix joined onto header targets (prefix/foo.h, prefix\foo.h)
	prefix: Option<String>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	// Resolve the source root before touching any output file, so a missing
	// anchor aborts with the accumulators untouched.
	let root = find_source_root(&cwd).context("Failed to locate the source root")?;
	let paths = ResolvedPaths::from_root(&root);

	let mut out = Accumulators::open(cli.nmake).context("Failed to open accumulator files")?;
	let mut rewriter = LineRewriter::new(RewriteTable::for_paths(&paths), cli.prefix);

	for line in io::stdin().lock().lines() {
		let line = line.context("Failed to read standard input")?;
		rewriter.feed(&line, &mut out)?;
	}

	out.flush()?;

	Ok(ExitCode::SUCCESS)
}
