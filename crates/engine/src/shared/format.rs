/// Format an integer with thousands separators (commas)
///
/// # Examples
/// ```
/// use engine::shared::format::format_count;
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(42), "42");
/// assert_eq!(format_count(0), "0");
/// ```
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format an optional percentage; absent values render as "N/A"
pub fn format_percent(value: Option<f64>, decimals: u8) -> String {
    match value {
        Some(v) => format!("{:.*}%", decimals as usize, v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percent_handles_missing() {
        assert_eq!(format_percent(Some(85.125), 1), "85.1%");
        assert_eq!(format_percent(None, 1), "N/A");
    }
}
