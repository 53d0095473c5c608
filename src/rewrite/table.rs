use crate::config::ResolvedPaths;

/// One literal prefix-substitution rule.
#[derive(Debug, Clone)]
pub struct PrefixRule {
	/// Include-directory prefix to match at the start of a token.
	pub prefix: String,

	/// Build-variable placeholder substituted for the matched prefix.
	pub placeholder: &'static str,
}

/// Ordered table of include-directory prefix rules; first match wins.
#[derive(Debug, Clone)]
pub struct RewriteTable {
	rules: Vec<PrefixRule>,
}

impl RewriteTable {
	/// Build the table for the resolved source-tree paths.
	pub fn for_paths(paths: &ResolvedPaths) -> Self {
		RewriteTable {
			rules: vec![
				PrefixRule {
					prefix: paths.includedir.clone(),
					placeholder: "$(includedir)",
				},
				PrefixRule {
					prefix: paths.cpp_includedir.clone(),
					placeholder: "$(cpp_dir)/include",
				},
			],
		}
	}

	/// Rewrite a token whose leading characters match a rule's prefix.
	///
	/// Matching is literal: no path normalization, no separator awareness.
	/// Returns `None` when no rule matches.
	pub fn rewrite(&self, token: &str) -> Option<String> {
		self.rules.iter().find_map(|rule| {
			token
				.strip_prefix(rule.prefix.as_str())
				.map(|rest| format!("{}{rest}", rule.placeholder))
		})
	}
}
