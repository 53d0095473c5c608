//! Token classification and rewriting for makedep.
//!
//! This module handles:
//! - The include-directory prefix rewrite table
//! - Continuation joining and per-token emission rules

pub mod line;
pub mod table;

pub use line::{LineRewriter, SourceLanguage};
pub use table::{PrefixRule, RewriteTable};
