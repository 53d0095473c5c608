//! Makedep - accumulates compiler dependency listings into make includes.
//!
//! This library provides the core functionality for makedep, including:
//! - Upward discovery of the top-level source directory
//! - Include-directory prefix rewriting of dependency path tokens
//! - Continuation joining of logical dependency lines
//! - Append-only emission to the POSIX and NMAKE accumulator files
//!
//! # Example
//!
//! ```
//! use makedep_cli::config::ResolvedPaths;
//! use makedep_cli::rewrite::{LineRewriter, RewriteTable};
//! use makedep_cli::sink::Accumulators;
//! use std::path::Path;
//!
//! let paths = ResolvedPaths::from_root(Path::new(".."));
//! let table = RewriteTable::for_paths(&paths);
//! let mut rewriter = LineRewriter::new(table, None);
//! let mut out = Accumulators::from_writers(Some(Vec::new()), Vec::new());
//!
//! rewriter.feed("main.o: ../include/app/config.h", &mut out).unwrap();
//!
//! let (posix, nmake) = out.into_writers();
//! assert_eq!(
//!     String::from_utf8(posix.unwrap()).unwrap(),
//!     "main$(OBJEXT): $(includedir)/app/config.h\n",
//! );
//! assert_eq!(
//!     String::from_utf8(nmake).unwrap(),
//!     "main$(OBJEXT): \"$(includedir)/app/config.h\"\n",
//! );
//! ```

pub mod config;
pub mod error;
pub mod rewrite;
pub mod sink;

pub use error::{MakedepError, Result};
