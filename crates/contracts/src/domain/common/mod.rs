//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod photo_field;

// Re-exports
pub use aggregate_id::{AggregateId, RecordId};
pub use aggregate_root::AggregateRoot;
pub use photo_field::PhotoField;
