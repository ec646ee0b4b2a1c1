use crate::projections::common::{ratio, sum_by, sum_where};
use crate::shared::data::seed::MONTHLY_ENERGY_TREND;
use contracts::domain::a002_energy_record::EnergyRecord;
use contracts::projections::p902_energy_mix::EnergyMixSummary;
use contracts::shared::charts::ChartPoint;

/// Scope 2 page summary over the current ledger snapshot.
///
/// Amounts are summed as reported, across units; the renewable share is a
/// plain amount ratio over that mixed total.
pub fn summarize(records: &[EnergyRecord]) -> EnergyMixSummary {
    let total = sum_by(records, |r| r.amount);
    let renewable = sum_where(records, |r| r.renewable, |r| r.amount);
    let conventional = total - renewable;

    EnergyMixSummary {
        total,
        renewable,
        conventional,
        renewable_share: ratio(renewable, total),
        source_split: vec![
            ChartPoint::new("재생에너지", renewable),
            ChartPoint::new("일반전력", conventional),
        ],
        monthly_history: MONTHLY_ENERGY_TREND.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_seeded_mix() {
        let summary = summarize(&seed::energy_records());

        assert_eq!(summary.total, 22500.0);
        assert_eq!(summary.renewable, 5000.0);
        assert_eq!(summary.conventional, 17500.0);
        let share = summary.renewable_share.unwrap();
        assert!((share - 22.222222).abs() < 1e-4);
    }

    #[test]
    fn test_empty_ledger_has_no_share() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.renewable_share, None);
        assert_eq!(summary.source_split[0].value, 0.0);
    }

    #[test]
    fn test_monthly_history_is_fixed() {
        use contracts::projections::p902_energy_mix::ENERGY_RENEWABLE;

        let summary = summarize(&[]);
        assert_eq!(summary.monthly_history.len(), 6);
        assert_eq!(summary.monthly_history[5].series(ENERGY_RENEWABLE), Some(6500.0));
    }
}
