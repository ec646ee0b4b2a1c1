use crate::projections::common::{sum_by, sum_where};
use contracts::domain::a001_emission_record::EmissionRecord;
use contracts::enums::EmissionType;
use contracts::projections::p901_emission_by_type::EmissionSummary;
use contracts::shared::charts::ChartPoint;

/// Scope 1 page summary over the current ledger snapshot.
///
/// Bars cover every emission type in declared order, zero-filled, so the
/// chart keeps a stable shape as records come and go.
pub fn summarize(records: &[EmissionRecord]) -> EmissionSummary {
    let by_type = EmissionType::all()
        .into_iter()
        .map(|emission_type| {
            ChartPoint::new(
                emission_type.display_name(),
                sum_where(records, |r| r.emission_type == emission_type, |r| r.amount),
            )
        })
        .collect();

    EmissionSummary {
        total: sum_by(records, |r| r.amount),
        record_count: records.len(),
        by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;

    #[test]
    fn test_seeded_summary() {
        let summary = summarize(&seed::emission_records());

        assert!((summary.total - 244.0).abs() < 1e-9);
        assert_eq!(summary.record_count, 3);
    }

    #[test]
    fn test_bars_are_zero_filled_in_enum_order() {
        let summary = summarize(&seed::emission_records());

        assert_eq!(summary.by_type.len(), 4);
        assert_eq!(summary.by_type[0].name, "연료 연소");
        assert!((summary.by_type[0].value - 244.0).abs() < 1e-9);
        assert_eq!(summary.by_type[1].value, 0.0);
        assert_eq!(summary.by_type[3].name, "기타 직접 배출");
    }

    #[test]
    fn test_empty_ledger_summary() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.record_count, 0);
        assert!(summary.by_type.iter().all(|p| p.value == 0.0));
    }
}
