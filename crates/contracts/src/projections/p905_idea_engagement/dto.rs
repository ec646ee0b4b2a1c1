use crate::shared::charts::CountPoint;
use serde::{Deserialize, Serialize};

/// Ideas page summary: distributions, engagement and the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaEngagementSummary {
    pub total_ideas: usize,
    pub implemented_ideas: usize,
    pub total_likes: u64,
    /// `implemented / total`, percent; `None` when no ideas exist
    pub implementation_rate: Option<f64>,
    /// One count per status, in declared enum order, zero-filled
    pub by_status: Vec<CountPoint>,
    /// One count per category, in declared enum order, zero-filled
    pub by_category: Vec<CountPoint>,
    /// Most liked ideas, best first; ties keep submission order
    pub top_ideas: Vec<TopIdea>,
}

/// Leaderboard entry for the "인기 아이디어 TOP 3" card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopIdea {
    /// Opaque record id
    pub id: String,
    pub title: String,
    /// Category display label
    pub category: String,
    pub likes: u32,
}
