pub mod aggregate;

pub use aggregate::{
    ValueChainFields, ValueChainRecord, ValueChainRecordDraft, ValueChainRecordId,
};
