//! Common types and traits for all record aggregates

pub mod base_record;
pub mod entity_metadata;
pub mod record_id;
pub mod record_root;

// Re-exports
pub use base_record::BaseRecord;
pub use entity_metadata::EntityMetadata;
pub use record_id::RecordId;
pub use record_root::RecordRoot;
