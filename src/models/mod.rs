//! Data models for integrity checking

pub mod dataset;
pub mod key_value;
pub mod relationship;

pub use dataset::DatasetPair;
pub use key_value::KeyValue;
pub use relationship::Relationship;
