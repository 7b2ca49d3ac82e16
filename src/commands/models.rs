use std::path::PathBuf;

/// Arguments for the humanize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct HumanizeArgs {
    /// Path to the block JSON file
    pub block_path: PathBuf,

    /// Output path for the JSON summary (stdout when absent)
    pub output_json: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    pub compact: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for HumanizeArgs {
    fn default() -> Self {
        Self {
            block_path: PathBuf::from("block.json"),
            output_json: None,
            compact: false,
            print_summary: false,
        }
    }
}
