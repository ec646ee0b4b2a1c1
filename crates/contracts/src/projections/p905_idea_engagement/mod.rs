pub mod dto;

pub use dto::{IdeaEngagementSummary, TopIdea};
