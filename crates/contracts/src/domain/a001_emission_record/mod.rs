pub mod aggregate;

pub use aggregate::{EmissionFields, EmissionRecord, EmissionRecordDraft, EmissionRecordId};
