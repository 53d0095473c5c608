//! Startup configuration for makedep.
//!
//! This module handles:
//! - Upward discovery of the top-level source directory
//! - Resolution of the include-directory prefixes fed to the rewrite table

pub mod locate;
pub mod types;

pub use locate::{TOOL_NAME, find_source_root};
pub use types::ResolvedPaths;
