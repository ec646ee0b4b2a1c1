pub mod aggregate;

pub use aggregate::{WasteFields, WasteRecord, WasteRecordDraft, WasteRecordId};
