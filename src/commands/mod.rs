//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod humanize;
pub mod inspect;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use humanize::{execute_humanize, validate_args};
pub use inspect::{classify_block_file, execute_calendar, execute_classify};
pub use models::HumanizeArgs;
pub use utils::{display_schema, display_version, validate_summary_file};
