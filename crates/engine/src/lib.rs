//! Carbon-management dashboard engine.
//!
//! In-memory record stores, dialog form sessions, metric projections and the
//! overview dashboard: everything behind the six pages, with presentation
//! left to the embedding UI. All state is volatile and owned by explicitly
//! constructed page sessions; nothing here is global, async or persisted.

pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;
