//! Dataset pair model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The original and masked dataset locations for one invocation.
///
/// Both paths receive the existence pre-flight, but only the masked copy is
/// ever queried: the original is accepted for interface symmetry and future
/// before/after comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPair {
    /// Path to the original dataset.
    pub original: PathBuf,
    /// Path to the masked/derived dataset under verification.
    pub masked: PathBuf,
}

impl DatasetPair {
    pub fn new(original: impl Into<PathBuf>, masked: impl Into<PathBuf>) -> Self {
        Self {
            original: original.into(),
            masked: masked.into(),
        }
    }
}
