use std::path::PathBuf;

/// Library-level structured errors for makedep.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MakedepError {
	#[error("can't find top level source directory (searched {depth} levels up from {start})")]
	SourceRootNotFound { start: PathBuf, depth: usize },

	#[error("Failed to open accumulator file: {path}")]
	AccumulatorOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write accumulator file: {path}")]
	AccumulatorWrite {
		path: &'static str,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using MakedepError.
pub type Result<T> = std::result::Result<T, MakedepError>;
