use crate::projections::common::{count_where, ratio};
use contracts::domain::a005_idea::Idea;
use contracts::enums::{IdeaCategory, IdeaStatus};
use contracts::projections::p905_idea_engagement::{IdeaEngagementSummary, TopIdea};
use contracts::shared::charts::CountPoint;

/// Size of the "인기 아이디어 TOP 3" leaderboard
const TOP_IDEAS: usize = 3;

/// Ideas page summary over the current board snapshot
pub fn summarize(ideas: &[Idea]) -> IdeaEngagementSummary {
    let total_ideas = ideas.len();
    let implemented_ideas = count_where(ideas, |i| i.status == IdeaStatus::Implemented);

    let by_status = IdeaStatus::all()
        .into_iter()
        .map(|status| {
            CountPoint::new(
                status.display_name(),
                count_where(ideas, |i| i.status == status),
            )
        })
        .collect();

    let by_category = IdeaCategory::all()
        .into_iter()
        .map(|category| {
            CountPoint::new(
                category.display_name(),
                count_where(ideas, |i| i.category == category),
            )
        })
        .collect();

    IdeaEngagementSummary {
        total_ideas,
        implemented_ideas,
        total_likes: ideas.iter().map(|i| u64::from(i.likes)).sum(),
        implementation_rate: ratio(implemented_ideas as f64, total_ideas as f64),
        by_status,
        by_category,
        top_ideas: top_ideas(ideas),
    }
}

/// Most liked ideas, best first; ties keep submission order
fn top_ideas(ideas: &[Idea]) -> Vec<TopIdea> {
    let mut ranked: Vec<&Idea> = ideas.iter().collect();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked
        .into_iter()
        .take(TOP_IDEAS)
        .map(|idea| TopIdea {
            id: idea.to_string_id(),
            title: idea.title.clone(),
            category: idea.category.display_name().to_string(),
            likes: idea.likes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_seeded_engagement() {
        let summary = summarize(&seed::ideas());

        assert_eq!(summary.total_ideas, 4);
        assert_eq!(summary.implemented_ideas, 1);
        assert_eq!(summary.total_likes, 54);
        assert_eq!(summary.implementation_rate, Some(25.0));
    }

    #[test]
    fn test_status_counts_in_declared_order() {
        let summary = summarize(&seed::ideas());

        let counts: Vec<usize> = summary.by_status.iter().map(|p| p.value).collect();
        // submitted, reviewing, approved, implemented, rejected
        assert_eq!(counts, vec![1, 1, 1, 1, 0]);
    }

    #[test]
    fn test_leaderboard_order() {
        let summary = summarize(&seed::ideas());

        assert_eq!(summary.top_ideas.len(), 3);
        assert_eq!(summary.top_ideas[0].likes, 18);
        assert_eq!(summary.top_ideas[0].title, "공급업체 친환경 인증 제도");
        assert_eq!(summary.top_ideas[1].likes, 15);
        assert_eq!(summary.top_ideas[2].likes, 12);
    }

    #[test]
    fn test_ties_keep_submission_order() {
        let mut ideas = seed::ideas();
        // bump the last idea to tie with the second most liked
        ideas[3].likes = 15;

        let summary = summarize(&ideas);
        assert_eq!(summary.top_ideas[1].title, "사무용 전기차 충전소 확대");
        assert_eq!(summary.top_ideas[2].title, "폐기물 업사이클링 프로그램");
    }

    #[test]
    fn test_empty_board() {
        let summary = summarize(&[]);

        assert_eq!(summary.implementation_rate, None);
        assert!(summary.top_ideas.is_empty());
        assert!(summary.by_status.iter().all(|p| p.value == 0));
    }
}
