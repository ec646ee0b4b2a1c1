pub mod aggregate;

pub use aggregate::{EnergyFields, EnergyRecord, EnergyRecordDraft, EnergyRecordId};
