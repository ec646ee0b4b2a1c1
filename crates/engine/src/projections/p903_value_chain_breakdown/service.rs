use crate::projections::common::{ratio, sum_by, sum_where};
use contracts::domain::a003_value_chain_record::ValueChainRecord;
use contracts::enums::{ReductionStatus, ValueChainCategory};
use contracts::projections::p903_value_chain_breakdown::ValueChainBreakdown;
use contracts::shared::charts::ChartPoint;

/// Scope 3 page summary over the current ledger snapshot
pub fn summarize(records: &[ValueChainRecord]) -> ValueChainBreakdown {
    let total = sum_by(records, |r| r.amount);
    let sum_with_status = |status: ReductionStatus| {
        sum_where(records, |r| r.status == status, |r| r.amount)
    };
    let reduced_total = sum_with_status(ReductionStatus::Reduced);

    let by_category = ValueChainCategory::all()
        .into_iter()
        .map(|category| {
            ChartPoint::new(
                category.display_name(),
                sum_where(records, |r| r.category == category, |r| r.amount),
            )
        })
        .collect();

    ValueChainBreakdown {
        total,
        active_total: sum_with_status(ReductionStatus::Active),
        reduced_total,
        eliminated_total: sum_with_status(ReductionStatus::Eliminated),
        reduction_rate: ratio(reduced_total, total),
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_seeded_breakdown() {
        let breakdown = summarize(&seed::value_chain_records());

        assert!((breakdown.total - 1046.8).abs() < 1e-9);
        assert!((breakdown.active_total - 630.5).abs() < 1e-9);
        assert!((breakdown.reduced_total - 416.3).abs() < 1e-9);
        assert_eq!(breakdown.eliminated_total, 0.0);

        let rate = breakdown.reduction_rate.unwrap();
        assert!((rate - 39.768819).abs() < 1e-4);
    }

    #[test]
    fn test_category_bars_in_declared_order() {
        let breakdown = summarize(&seed::value_chain_records());

        assert_eq!(breakdown.by_category.len(), 8);
        assert_eq!(breakdown.by_category[0].name, "구매 상품 및 서비스");
        assert!((breakdown.by_category[0].value - 450.2).abs() < 1e-9);
        // categories with no records still get a zero bar
        assert_eq!(breakdown.by_category[5].value, 0.0);
    }

    #[test]
    fn test_empty_ledger_has_no_reduction_rate() {
        let breakdown = summarize(&[]);
        assert_eq!(breakdown.reduction_rate, None);
    }
}
