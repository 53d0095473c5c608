use crate::error::Result;
use crate::rewrite::table::RewriteTable;
use crate::sink::Accumulators;
use std::io::Write;
use std::mem;

/// Source language detected from target tokens.
///
/// Recorded when a `.cpp:` target goes by; nothing consumes it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
	Cpp,
}

/// Streaming rewriter for continuation-joined dependency lines.
///
/// Feed physical input lines one at a time. Lines ending with the `\`
/// continuation marker are buffered; every completed logical line emits
/// exactly one newline-terminated record per active accumulator.
pub struct LineRewriter {
	table: RewriteTable,
	header_prefix: Option<String>,
	pending: String,
	language: Option<SourceLanguage>,
}

impl LineRewriter {
	/// Create a rewriter over the given prefix table.
	///
	/// `header_prefix` is the optional positional argument: when present,
	/// the first `.h`-suffixed token of each line is joined onto it instead
	/// of going through the rewrite table.
	pub fn new(table: RewriteTable, header_prefix: Option<String>) -> Self {
		LineRewriter {
			table,
			header_prefix,
			pending: String::new(),
			language: None,
		}
	}

	/// Feed one physical input line.
	///
	/// Comment (`#`) and blank lines are dropped without touching the
	/// continuation buffer. A logical line still awaiting continuation
	/// emits nothing; input exhausted mid-continuation is discarded.
	pub fn feed<W: Write>(&mut self, raw: &str, out: &mut Accumulators<W>) -> Result<()> {
		let line = raw.trim();

		if line.starts_with('#') || line.is_empty() {
			return Ok(());
		}

		let line = line.replace(".o:", "$(OBJEXT):");

		let line = if self.pending.is_empty() {
			line
		} else {
			format!("{} {line}", mem::take(&mut self.pending))
		};

		if let Some(stripped) = line.strip_suffix('\\') {
			self.pending = stripped.trim_end().to_string();
			return Ok(());
		}

		self.emit_tokens(&line, out)?;
		out.end_line()
	}

	fn emit_tokens<W: Write>(&mut self, line: &str, out: &mut Accumulators<W>) -> Result<()> {
		let mut prefix_spent = false;

		for token in line.split_whitespace() {
			// Absolute tokens never match the relative rewrite table and
			// are dropped rather than passed through.
			if token.starts_with('/') {
				continue;
			}

			if !prefix_spent
				&& token.ends_with(".h")
				&& let Some(prefix) = &self.header_prefix
			{
				out.push(
					&format!("{prefix}/{token}"),
					&format!("{prefix}\\{token}"),
				)?;
				prefix_spent = true;
				continue;
			}

			if token.ends_with(".cpp:") {
				self.language = Some(SourceLanguage::Cpp);
			}

			if let Some(rewritten) = self.table.rewrite(token) {
				out.push(&rewritten, &format!("\"{rewritten}\""))?;
				continue;
			}

			out.push(token, token)?;
		}

		Ok(())
	}

	/// Language detected from the most recent `.cpp:` target, if any.
	pub fn detected_language(&self) -> Option<SourceLanguage> {
		self.language
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ResolvedPaths;
	use std::path::Path;

	/// Feed each line through a fresh rewriter and collect both streams.
	fn run(lines: &[&str], header_prefix: Option<&str>) -> (String, String) {
		let paths = ResolvedPaths::from_root(Path::new(".."));
		let mut rewriter = LineRewriter::new(
			RewriteTable::for_paths(&paths),
			header_prefix.map(String::from),
		);
		let mut out = Accumulators::from_writers(Some(Vec::new()), Vec::new());

		for line in lines {
			rewriter.feed(line, &mut out).unwrap();
		}

		let (posix, nmake) = out.into_writers();
		(
			String::from_utf8(posix.unwrap()).unwrap(),
			String::from_utf8(nmake).unwrap(),
		)
	}

	#[test]
	fn test_plain_line_passes_through() {
		let (posix, nmake) = run(&["main$(OBJEXT): util.cpp util.h"], None);
		assert_eq!(posix, "main$(OBJEXT): util.cpp util.h\n");
		assert_eq!(nmake, "main$(OBJEXT): util.cpp util.h\n");
	}

	#[test]
	fn test_object_suffix_is_normalized_globally() {
		let (posix, _) = run(&["a.o: b.o: c.cpp"], None);
		assert_eq!(posix, "a$(OBJEXT): b$(OBJEXT): c.cpp\n");
	}

	#[test]
	fn test_continuation_lines_are_joined() {
		let joined = run(&["a b c d"], None);
		let split = run(&["a b \\", "c d"], None);
		assert_eq!(joined, split);
		assert_eq!(split.0, "a b c d\n");
	}

	#[test]
	fn test_continuation_spanning_three_lines() {
		let (posix, _) = run(&["a \\", "b \\", "c"], None);
		assert_eq!(posix, "a b c\n");
	}

	#[test]
	fn test_comments_and_blanks_emit_nothing() {
		let (posix, nmake) = run(&["# a comment", "", "   "], None);
		assert_eq!(posix, "");
		assert_eq!(nmake, "");
	}

	#[test]
	fn test_comment_does_not_disturb_pending_continuation() {
		let (posix, _) = run(&["a b \\", "# interleaved comment", "c"], None);
		assert_eq!(posix, "a b c\n");
	}

	#[test]
	fn test_input_ending_mid_continuation_is_discarded() {
		let (posix, nmake) = run(&["a b \\"], None);
		assert_eq!(posix, "");
		assert_eq!(nmake, "");
	}

	#[test]
	fn test_include_prefix_rewrite_quotes_nmake_only() {
		let (posix, nmake) = run(&["main$(OBJEXT): ../include/app/config.h"], None);
		assert_eq!(posix, "main$(OBJEXT): $(includedir)/app/config.h\n");
		assert_eq!(nmake, "main$(OBJEXT): \"$(includedir)/app/config.h\"\n");
	}

	#[test]
	fn test_sibling_cpp_include_rewrite() {
		let (posix, nmake) = run(&["x$(OBJEXT): ../../cpp/include/net/proto.h"], None);
		assert_eq!(posix, "x$(OBJEXT): $(cpp_dir)/include/net/proto.h\n");
		assert_eq!(nmake, "x$(OBJEXT): \"$(cpp_dir)/include/net/proto.h\"\n");
	}

	// Inherited behavior: tokens starting with a path separator are dropped
	// in every position, legitimate absolute dependencies included. Not a
	// guaranteed contract.
	#[test]
	fn test_absolute_tokens_are_dropped() {
		let (posix, nmake) = run(&["main$(OBJEXT): /usr/include/stdio.h util.h"], None);
		assert_eq!(posix, "main$(OBJEXT): util.h\n");
		assert_eq!(nmake, "main$(OBJEXT): util.h\n");
	}

	#[test]
	fn test_line_of_only_absolute_tokens_emits_bare_newline() {
		let (posix, nmake) = run(&["/a/b.h /c/d.h"], None);
		assert_eq!(posix, "\n");
		assert_eq!(nmake, "\n");
	}

	#[test]
	fn test_header_prefix_joins_with_platform_separators() {
		let (posix, nmake) = run(&["foo.h bar.txt"], Some("hdr"));
		assert_eq!(posix, "hdr/foo.h bar.txt\n");
		assert_eq!(nmake, "hdr\\foo.h bar.txt\n");
	}

	#[test]
	fn test_header_prefix_bypasses_include_rewrite() {
		let (posix, nmake) = run(&["../include/app/config.h"], Some("hdr"));
		assert_eq!(posix, "hdr/../include/app/config.h\n");
		assert_eq!(nmake, "hdr\\../include/app/config.h\n");
	}

	#[test]
	fn test_header_prefix_applies_once_per_line() {
		let (posix, _) = run(&["a.h b.h"], Some("hdr"));
		assert_eq!(posix, "hdr/a.h b.h\n");
	}

	// Inherited behavior: the prefix goes to the first `.h`-suffixed token
	// wherever it sits, not strictly to a first-position target.
	#[test]
	fn test_header_prefix_finds_first_header_token() {
		let (posix, _) = run(&["main$(OBJEXT): util.h"], Some("hdr"));
		assert_eq!(posix, "main$(OBJEXT): hdr/util.h\n");
	}

	#[test]
	fn test_no_prefix_leaves_headers_alone() {
		let (posix, _) = run(&["foo.h bar.txt"], None);
		assert_eq!(posix, "foo.h bar.txt\n");
	}

	#[test]
	fn test_cpp_target_sets_detected_language() {
		let paths = ResolvedPaths::from_root(Path::new(".."));
		let mut rewriter = LineRewriter::new(RewriteTable::for_paths(&paths), None);
		let mut out = Accumulators::from_writers(None, Vec::new());

		assert_eq!(rewriter.detected_language(), None);
		rewriter.feed("main.cpp: util.h", &mut out).unwrap();
		assert_eq!(rewriter.detected_language(), Some(SourceLanguage::Cpp));

		// The target token itself is still emitted unchanged.
		let (_, nmake) = out.into_writers();
		assert_eq!(String::from_utf8(nmake).unwrap(), "main.cpp: util.h\n");
	}

	#[test]
	fn test_token_count_is_preserved_without_drops() {
		let input = "main$(OBJEXT): a.cpp b.h ../include/c.h d";
		let (posix, _) = run(&[input], None);
		assert_eq!(
			posix.split_whitespace().count(),
			input.split_whitespace().count(),
		);
	}
}
