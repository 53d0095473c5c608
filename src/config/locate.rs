use crate::error::{MakedepError, Result};
use std::path::{Path, PathBuf};

/// Name under which this tool is installed inside the source tree.
/// The upward search keys off its presence under `<root>/config/`.
pub const TOOL_NAME: &str = "makedep";

/// Candidate source roots relative to the working directory, probed in order.
const ROOT_CANDIDATES: [&str; 5] = [".", "..", "../..", "../../..", "../../../.."];

/// Locate the top-level source directory by walking upward from `base`.
///
/// A candidate is the source root when it contains `config/makedep`, this
/// tool's own location in the tree. The returned path is the *relative*
/// candidate, not a canonicalized absolute path: the include-prefix rewrite
/// keys derived from it must literally match the relative path tokens a
/// depend pass emits from the same working directory.
pub fn find_source_root(base: &Path) -> Result<PathBuf> {
	for candidate in ROOT_CANDIDATES {
		let anchor = base.join(candidate).join("config").join(TOOL_NAME);
		if anchor.exists() {
			return Ok(PathBuf::from(candidate));
		}
	}

	Err(MakedepError::SourceRootNotFound {
		start: base.to_path_buf(),
		depth: ROOT_CANDIDATES.len(),
	})
}
