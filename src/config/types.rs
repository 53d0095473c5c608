use std::path::{Path, PathBuf};

/// Paths resolved once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
	/// Relative path of the top-level source directory.
	pub top_srcdir: PathBuf,

	/// `<top_srcdir>/include`, the primary include tree.
	pub includedir: String,

	/// `<top_srcdir>/../cpp/include`, the sibling C++ tree's include directory.
	pub cpp_includedir: String,
}

impl ResolvedPaths {
	/// Compose the include-prefix strings from the source root.
	///
	/// Composition is plain string concatenation with no path normalization:
	/// the prefixes must literally match the path tokens a depend pass emits,
	/// which are relative in the same way.
	pub fn from_root(top_srcdir: &Path) -> Self {
		let root = top_srcdir.display().to_string();
		ResolvedPaths {
			top_srcdir: top_srcdir.to_path_buf(),
			includedir: format!("{root}/include"),
			cpp_includedir: format!("{root}/../cpp/include"),
		}
	}
}
