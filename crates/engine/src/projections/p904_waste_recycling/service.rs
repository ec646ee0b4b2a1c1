use crate::projections::common::{ratio, sum_by, sum_where};
use crate::shared::data::seed::MONTHLY_WASTE_TREND;
use contracts::domain::a004_waste_record::WasteRecord;
use contracts::enums::DisposalMethod;
use contracts::projections::p904_waste_recycling::WasteRecyclingSummary;
use contracts::shared::charts::ChartPoint;

/// Circular-economy page summary over the current ledger snapshot.
///
/// The recycling rate weighs whole batches by disposal method; per-batch
/// recycling percentages stay on the records themselves.
pub fn summarize(records: &[WasteRecord]) -> WasteRecyclingSummary {
    let total_waste = sum_by(records, |r| r.amount);
    let sum_via = |disposal: DisposalMethod| {
        sum_where(records, |r| r.disposal == disposal, |r| r.amount)
    };
    let recycled = sum_via(DisposalMethod::Recycling);
    let landfill = sum_via(DisposalMethod::Landfill);

    let by_disposal = DisposalMethod::all()
        .into_iter()
        .map(|disposal| ChartPoint::new(disposal.display_name(), sum_via(disposal)))
        .collect();

    WasteRecyclingSummary {
        total_waste,
        recycled,
        landfill,
        recycling_rate: ratio(recycled, total_waste),
        landfill_zero: landfill == 0.0,
        by_disposal,
        monthly_history: MONTHLY_WASTE_TREND.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_seeded_summary() {
        let summary = summarize(&seed::waste_records());

        assert_eq!(summary.total_waste, 4020.0);
        assert_eq!(summary.recycled, 3420.0);
        assert_eq!(summary.landfill, 0.0);
        assert!(summary.landfill_zero);

        let rate = summary.recycling_rate.unwrap();
        assert!((rate - 85.074626).abs() < 1e-4);
    }

    #[test]
    fn test_disposal_slices_in_declared_order() {
        let summary = summarize(&seed::waste_records());

        assert_eq!(summary.by_disposal.len(), 4);
        assert_eq!(summary.by_disposal[0].name, "재활용");
        assert_eq!(summary.by_disposal[0].value, 3420.0);
        assert_eq!(summary.by_disposal[1].name, "퇴비화");
        assert_eq!(summary.by_disposal[1].value, 600.0);
        assert_eq!(summary.by_disposal[3].value, 0.0);
    }

    #[test]
    fn test_empty_ledger() {
        let summary = summarize(&[]);

        assert_eq!(summary.recycling_rate, None);
        // nothing recorded means nothing went to landfill
        assert!(summary.landfill_zero);
    }

    #[test]
    fn test_monthly_history_is_fixed() {
        use contracts::projections::p904_waste_recycling::{WASTE_LANDFILL, WASTE_RECYCLED};

        let summary = summarize(&seed::waste_records());
        assert_eq!(summary.monthly_history.len(), 6);
        assert_eq!(summary.monthly_history[0].series(WASTE_RECYCLED), Some(3200.0));
        assert_eq!(summary.monthly_history[0].series(WASTE_LANDFILL), Some(0.0));
    }
}
