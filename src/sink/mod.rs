//! Output accumulators for makedep.
//!
//! This module handles:
//! - Opening the two accumulator files in append mode
//! - Space-joined token emission with newline-terminated records

use crate::error::{MakedepError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

/// POSIX-make-compatible accumulator file name.
pub const POSIX_ACCUMULATOR: &str = ".depend";

/// NMAKE-compatible accumulator file name.
pub const NMAKE_ACCUMULATOR: &str = ".depend.mak";

/// The two append-only output streams.
///
/// The POSIX stream is absent under `--nmake`; the NMAKE stream is always
/// present. Generic over the writer so tests can collect into `Vec<u8>`.
pub struct Accumulators<W: Write> {
	posix: Option<W>,
	nmake: W,
	line_started: bool,
}

impl Accumulators<BufWriter<File>> {
	/// Open the accumulator files in the current directory.
	///
	/// Both files are opened append+create and never truncated, so output
	/// accumulates across invocations. With `nmake_only`, `.depend` is
	/// neither created nor opened.
	pub fn open(nmake_only: bool) -> Result<Self> {
		let posix = if nmake_only {
			None
		} else {
			Some(open_append(POSIX_ACCUMULATOR)?)
		};
		let nmake = open_append(NMAKE_ACCUMULATOR)?;

		Ok(Accumulators::from_writers(posix, nmake))
	}
}

fn open_append(path: &str) -> Result<BufWriter<File>> {
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(|source| MakedepError::AccumulatorOpen {
			path: path.into(),
			source,
		})?;

	Ok(BufWriter::new(file))
}

impl<W: Write> Accumulators<W> {
	/// Wrap already-open writers; `posix` is `None` in NMAKE-only mode.
	pub fn from_writers(posix: Option<W>, nmake: W) -> Self {
		Accumulators {
			posix,
			nmake,
			line_started: false,
		}
	}

	/// Append one token to the current line of each active stream.
	///
	/// The two streams may receive different spellings of the same token
	/// (prefix joining and NMAKE quoting differ), but always in lockstep:
	/// one call, one token per active stream.
	pub fn push(&mut self, posix_token: &str, nmake_token: &str) -> Result<()> {
		let sep = if self.line_started { " " } else { "" };
		if let Some(posix) = self.posix.as_mut() {
			write!(posix, "{sep}{posix_token}").map_err(posix_write_error)?;
		}
		write!(self.nmake, "{sep}{nmake_token}").map_err(nmake_write_error)?;
		self.line_started = true;

		Ok(())
	}

	/// Terminate the current record on each active stream.
	pub fn end_line(&mut self) -> Result<()> {
		if let Some(posix) = self.posix.as_mut() {
			writeln!(posix).map_err(posix_write_error)?;
		}
		writeln!(self.nmake).map_err(nmake_write_error)?;
		self.line_started = false;

		Ok(())
	}

	/// Flush both streams; called once after input is exhausted.
	pub fn flush(&mut self) -> Result<()> {
		if let Some(posix) = self.posix.as_mut() {
			posix.flush().map_err(posix_write_error)?;
		}
		self.nmake.flush().map_err(nmake_write_error)
	}

	/// Consume the accumulators, returning the underlying writers.
	pub fn into_writers(self) -> (Option<W>, W) {
		(self.posix, self.nmake)
	}
}

fn posix_write_error(source: std::io::Error) -> MakedepError {
	MakedepError::AccumulatorWrite {
		path: POSIX_ACCUMULATOR,
		source,
	}
}

fn nmake_write_error(source: std::io::Error) -> MakedepError {
	MakedepError::AccumulatorWrite {
		path: NMAKE_ACCUMULATOR,
		source,
	}
}
