//! Seed command implementation

use std::path::{Path, PathBuf};

use clap::Args;

use mask_integrity::fixtures;
use mask_integrity::models::Relationship;

use crate::error::CliError;

/// Arguments for the `seed` command
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Where to write the demo original dataset
    #[arg(long, default_value = "original.db")]
    pub original: PathBuf,

    /// Where to write the demo masked dataset
    #[arg(long, default_value = "masked.db")]
    pub masked: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

/// Handle the `seed` command
pub fn handle_seed(args: &SeedArgs) -> Result<(), CliError> {
    prepare_target(&args.original, args.force)?;
    prepare_target(&args.masked, args.force)?;

    fixtures::seed_original(&args.original).map_err(CliError::Seed)?;
    fixtures::seed_masked(&args.masked).map_err(CliError::Seed)?;

    println!(
        "Seeded demo datasets: {} (consistent), {} (one orphan)",
        args.original.display(),
        args.masked.display()
    );
    println!("Demo relationship: {}", Relationship::demo());
    Ok(())
}

fn prepare_target(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() {
        if !force {
            return Err(CliError::FileExists(path.display().to_string()));
        }
        std::fs::remove_file(path)?;
    }
    Ok(())
}
