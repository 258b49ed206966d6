//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Collection file settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding `products.json` and `addresses.json`
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}
