//! Check command implementation

use std::path::PathBuf;

use clap::Args;

use mask_integrity::models::{DatasetPair, Relationship};
use mask_integrity::store::SqliteStore;
use mask_integrity::validation::integrity::{CheckOutcome, DEFAULT_SAMPLE_LIMIT, IntegrityChecker};

use crate::error::CliError;
use crate::output::{self, Format};

/// Arguments for the `check` command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the original dataset
    #[arg(long)]
    pub original: PathBuf,

    /// Path to the masked dataset to verify
    #[arg(long)]
    pub masked: PathBuf,

    /// Child table holding the foreign key
    #[arg(long = "table")]
    pub table: String,

    /// Foreign-key column in the child table
    #[arg(long = "foreign-key")]
    pub foreign_key: String,

    /// Parent table referenced by the foreign key
    #[arg(long = "parent-table")]
    pub parent_table: String,

    /// Key column in the parent table
    #[arg(long = "parent-key")]
    pub parent_key: String,

    /// Maximum number of sample orphans to report
    #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
    pub samples: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

/// Handle the `check` command
pub fn handle_check(args: &CheckArgs) -> Result<CheckOutcome, CliError> {
    let datasets = DatasetPair::new(&args.original, &args.masked);

    // Both paths get the existence pre-flight; only the masked copy is
    // queried.
    SqliteStore::open(&datasets.original)?;
    let masked = SqliteStore::open(&datasets.masked)?;

    let relationship = Relationship::new(
        &args.table,
        &args.foreign_key,
        &args.parent_table,
        &args.parent_key,
    );

    let checker = IntegrityChecker::with_sample_limit(args.samples);
    let outcome = checker.check(&masked, &relationship)?;

    println!("{}", output::render(&outcome, &relationship, args.format)?);
    Ok(outcome)
}
