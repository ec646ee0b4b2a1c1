//! Small aggregation helpers shared by the page projections.

/// Sum `value` over all items
pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(value).sum()
}

/// Sum `value` over items matching `filter`
pub fn sum_where<T>(items: &[T], filter: impl Fn(&T) -> bool, value: impl Fn(&T) -> f64) -> f64 {
    items.iter().filter(|i| filter(i)).map(value).sum()
}

/// Count items matching `filter`
pub fn count_where<T>(items: &[T], filter: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|i| filter(i)).count()
}

/// `part / total` as a percentage.
///
/// `None` when `total` is zero, so an empty ledger reports "no data" instead
/// of a NaN that poisons every downstream card.
pub fn ratio(part: f64, total: f64) -> Option<f64> {
    if total > 0.0 {
        Some(part / total * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_count() {
        let values = [1.5, 2.5, 4.0];
        assert_eq!(sum_by(&values, |v| *v), 8.0);
        assert_eq!(sum_where(&values, |v| *v > 2.0, |v| *v), 6.5);
        assert_eq!(count_where(&values, |v| *v > 2.0), 2);
    }

    #[test]
    fn test_ratio_guards_empty_total() {
        assert_eq!(ratio(1.0, 4.0), Some(25.0));
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(5.0, 0.0), None);
    }
}
