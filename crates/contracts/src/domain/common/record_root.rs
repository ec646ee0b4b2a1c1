use super::{EntityMetadata, RecordId};

/// Trait implemented by every record aggregate.
///
/// Instance accessors plus the static naming metadata that identifies the
/// aggregate within the system.
pub trait RecordRoot {
    /// Identifier type of the aggregate
    type Id: RecordId;

    // ------------------------------------------------------------------
    // Instance accessors
    // ------------------------------------------------------------------

    /// Record id
    fn id(&self) -> Self::Id;

    /// Business date (creation date, immutable across edits)
    fn date(&self) -> chrono::NaiveDate;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ------------------------------------------------------------------
    // Static aggregate metadata
    // ------------------------------------------------------------------

    /// Aggregate index within the system (e.g. "a001")
    fn record_index() -> &'static str;

    /// Collection name (e.g. "emission_record")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "배출량 기록")
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    // ------------------------------------------------------------------
    // Default implementations
    // ------------------------------------------------------------------

    /// Full aggregate name (e.g. "a001_emission_record")
    fn full_name() -> String {
        format!("{}_{}", Self::record_index(), Self::collection_name())
    }
}
