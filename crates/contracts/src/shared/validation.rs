use serde::{Deserialize, Serialize};

/// Result of parsing or validating user-entered form data
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Structured validation failure tied to a single form field.
///
/// Invalid input never reaches a record store; it surfaces as one of these
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name as known to the form (e.g. "amount")
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A required field was left empty
    pub fn required(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        Self { field, message }
    }

    /// A numeric field could not be parsed
    pub fn not_a_number(field: impl Into<String>, raw: &str) -> Self {
        let field = field.into();
        let message = format!("{} is not a number: '{}'", field, raw);
        Self { field, message }
    }

    /// A numeric field is outside its allowed range
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A select field received a code outside the declared set
    pub fn unknown_code(field: impl Into<String>, raw: &str) -> Self {
        let field = field.into();
        let message = format!("{} has no variant with code '{}'", field, raw);
        Self { field, message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a non-negative number staged as text.
///
/// Shared by every draft with a numeric field: empty input, non-numeric
/// input, NaN and negative values are all rejected here so they can never
/// poison an aggregate sum downstream.
pub fn parse_non_negative(field: &str, raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::not_a_number(field, raw))?;
    if !value.is_finite() {
        return Err(ValidationError::not_a_number(field, raw));
    }
    if value < 0.0 {
        return Err(ValidationError::out_of_range(
            field,
            format!("{} must not be negative", field),
        ));
    }
    Ok(value)
}

/// Require a non-empty text field, trimming surrounding whitespace
pub fn parse_required_text(field: &str, raw: &str) -> ValidationResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_negative() {
        assert_eq!(parse_non_negative("amount", "45.2"), Ok(45.2));
        assert_eq!(parse_non_negative("amount", " 10 "), Ok(10.0));
        assert!(parse_non_negative("amount", "").is_err());
        assert!(parse_non_negative("amount", "abc").is_err());
        assert!(parse_non_negative("amount", "-1").is_err());
        assert!(parse_non_negative("amount", "NaN").is_err());
        assert!(parse_non_negative("amount", "inf").is_err());
    }

    #[test]
    fn test_parse_required_text() {
        assert_eq!(parse_required_text("source", " 보일러 "), Ok("보일러".to_string()));
        let err = parse_required_text("source", "   ").unwrap_err();
        assert_eq!(err.field, "source");
    }
}
