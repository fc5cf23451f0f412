use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsgen_manifest::DocumentFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the document (defaults to ./tsgen.toml)
    #[arg(short, long, default_value = "tsgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = DocumentFile::open(&self.config).unwrap_or_exit();
        let count = file.document().elements().len();
        println!(
            "✓ {} is valid ({} element{})",
            self.config.display(),
            count,
            if count == 1 { "" } else { "s" }
        );
        Ok(())
    }
}
