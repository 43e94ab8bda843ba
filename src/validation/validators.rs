use crate::core::Value;

pub type ValidationError = String;
pub type ValidationResult = Result<(), ValidationError>;

pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Fails on absent, empty or NaN values. `0`, `false` and empty lists pass.
pub fn validate_required(value: &Value, message: Option<&str>) -> ValidationResult {
    if value.is_missing() {
        Err(message.unwrap_or(DEFAULT_REQUIRED_MESSAGE).to_string())
    } else {
        Ok(())
    }
}

/// Character-count bounds for a text value. Unset bounds are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthRule {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub min_message: Option<String>,
    pub max_message: Option<String>,
}

impl LengthRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self::new().min(min).max(max)
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn min_message(mut self, message: impl Into<String>) -> Self {
        self.min_message = Some(message.into());
        self
    }

    pub fn max_message(mut self, message: impl Into<String>) -> Self {
        self.max_message = Some(message.into());
        self
    }
}

/// Empty or absent text is skipped; required-ness is `validate_required`'s job.
/// The minimum is checked first, so it wins when both bounds are violated.
pub fn validate_string_length(value: Option<&str>, rule: &LengthRule) -> ValidationResult {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    let len = value.chars().count();

    if let Some(min) = rule.min
        && len < min
    {
        return Err(rule
            .min_message
            .clone()
            .unwrap_or_else(|| format!("Must be at least {min} characters")));
    }

    if let Some(max) = rule.max
        && len > max
    {
        return Err(rule
            .max_message
            .clone()
            .unwrap_or_else(|| format!("Must be no more than {max} characters")));
    }

    Ok(())
}

pub fn validate_min_number(value: Option<f64>, min: f64, message: Option<&str>) -> ValidationResult {
    match value {
        Some(v) if !v.is_nan() && v < min => Err(message
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Must be at least {}", format_grouped(min)))),
        _ => Ok(()),
    }
}

pub fn validate_max_number(value: Option<f64>, max: f64, message: Option<&str>) -> ValidationResult {
    match value {
        Some(v) if !v.is_nan() && v > max => Err(message
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Cannot exceed {}", format_grouped(max)))),
        _ => Ok(()),
    }
}

/// Returns the first error in argument order. Put the required check first to
/// give it precedence over bound checks.
pub fn combine_validations<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    for result in results {
        result?;
    }
    Ok(())
}

/// Formats a number with comma digit grouping and at most three decimals,
/// e.g. `1000000` -> `1,000,000`, `-1234.5` -> `-1,234.5`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Past 1e15 an f64 has no fractional digits left to round.
    let rounded = if value.abs() < 1e15 {
        (value * 1000.0).round() / 1000.0
    } else {
        value
    };
    let fixed = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_uses_default_or_custom_message() {
        assert_eq!(
            validate_required(&Value::None, None),
            Err(DEFAULT_REQUIRED_MESSAGE.to_string())
        );
        assert_eq!(
            validate_required(&Value::from(""), Some("Field X is mandatory")),
            Err("Field X is mandatory".to_string())
        );
        assert_eq!(validate_required(&Value::from("valid"), None), Ok(()));
        assert_eq!(validate_required(&Value::Number(0.0), None), Ok(()));
        assert!(validate_required(&Value::Number(f64::NAN), None).is_err());
    }

    #[test]
    fn length_skips_empty_and_absent() {
        let rule = LengthRule::new().min(5);
        assert_eq!(validate_string_length(Some(""), &rule), Ok(()));
        assert_eq!(validate_string_length(None, &rule), Ok(()));
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let rule = LengthRule::between(5, 10);
        assert_eq!(
            validate_string_length(Some("abc"), &rule),
            Err("Must be at least 5 characters".to_string())
        );
        assert_eq!(validate_string_length(Some("abcde"), &rule), Ok(()));
        assert_eq!(validate_string_length(Some("abcdefghij"), &rule), Ok(()));
        assert_eq!(
            validate_string_length(Some("abcdefghijk"), &rule),
            Err("Must be no more than 10 characters".to_string())
        );
    }

    #[test]
    fn length_min_wins_over_max() {
        let rule = LengthRule::between(5, 3);
        assert_eq!(
            validate_string_length(Some("ab"), &rule),
            Err("Must be at least 5 characters".to_string())
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rule = LengthRule::new().max(5);
        assert_eq!(validate_string_length(Some("ééééé"), &rule), Ok(()));
    }

    #[test]
    fn length_custom_messages() {
        let rule = LengthRule::between(5, 6)
            .min_message("Too short!")
            .max_message("Too long!");
        assert_eq!(
            validate_string_length(Some("ab"), &rule),
            Err("Too short!".to_string())
        );
        assert_eq!(
            validate_string_length(Some("abcdefgh"), &rule),
            Err("Too long!".to_string())
        );
    }

    #[test]
    fn max_number_defaults_with_grouped_bound() {
        assert_eq!(validate_max_number(None, 100.0, None), Ok(()));
        assert_eq!(validate_max_number(Some(f64::NAN), 100.0, None), Ok(()));
        assert_eq!(validate_max_number(Some(100.0), 100.0, None), Ok(()));
        assert_eq!(validate_max_number(Some(-50.0), 100.0, None), Ok(()));
        assert_eq!(
            validate_max_number(Some(1.1), 1.0, None),
            Err("Cannot exceed 1".to_string())
        );
        assert_eq!(
            validate_max_number(Some(2_000_000.0), 1_000_000.0, None),
            Err("Cannot exceed 1,000,000".to_string())
        );
        assert_eq!(
            validate_max_number(Some(150.0), 100.0, Some("Value too high!")),
            Err("Value too high!".to_string())
        );
    }

    #[test]
    fn min_number_defaults_with_grouped_bound() {
        assert_eq!(validate_min_number(None, 0.0, None), Ok(()));
        assert_eq!(validate_min_number(Some(0.0), 0.0, None), Ok(()));
        assert_eq!(
            validate_min_number(Some(-1.0), 0.0, None),
            Err("Must be at least 0".to_string())
        );
        assert_eq!(
            validate_min_number(Some(-100.0), -50.0, None),
            Err("Must be at least -50".to_string())
        );
        assert_eq!(validate_min_number(Some(-25.0), -50.0, None), Ok(()));
        assert_eq!(
            validate_min_number(Some(500_000.0), 1_000_000.0, None),
            Err("Must be at least 1,000,000".to_string())
        );
        assert_eq!(
            validate_min_number(Some(-5.0), 0.0, Some("Cannot be negative!")),
            Err("Cannot be negative!".to_string())
        );
    }

    #[test]
    fn combine_returns_first_error_in_order() {
        let err = |m: &str| -> ValidationResult { Err(m.to_string()) };
        assert_eq!(combine_validations(Vec::new()), Ok(()));
        assert_eq!(combine_validations([Ok(()), Ok(()), Ok(())]), Ok(()));
        assert_eq!(
            combine_validations([err("Error 1"), err("Error 2")]),
            err("Error 1")
        );
        assert_eq!(
            combine_validations([Ok(()), Ok(()), err("Error 3")]),
            err("Error 3")
        );
        assert_eq!(
            combine_validations([err("Error 1"), Ok(()), err("Error 3")]),
            err("Error 1")
        );
    }

    #[test]
    fn combine_gives_required_precedence_over_length() {
        let nickname = "";
        let result = combine_validations([
            validate_required(&Value::from(nickname), Some("Nickname is required")),
            validate_string_length(Some(nickname), &LengthRule::between(5, 30)),
        ]);
        assert_eq!(result, Err("Nickname is required".to_string()));
    }

    #[test]
    fn combine_number_chain_reports_min_first() {
        let goal = Some(-100.0);
        let result = combine_validations([
            validate_required(&Value::from(goal), Some("Savings goal is required")),
            validate_min_number(goal, 0.0, Some("Cannot be negative")),
            validate_max_number(goal, 1_000_000.0, Some("Cannot exceed $1,000,000")),
        ]);
        assert_eq!(result, Err("Cannot be negative".to_string()));
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1_000_000.0), "1,000,000");
        assert_eq!(format_grouped(-50.0), "-50");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(0.5), "0.5");
        assert_eq!(format_grouped(1.23456), "1.235");
    }

    #[test]
    fn grouped_formatting_of_huge_values_stays_finite() {
        assert_eq!(format_grouped(1e16), "10,000,000,000,000,000");
        let max = format_grouped(f64::MAX);
        assert!(max.starts_with("179,769,313"));
        assert!(!max.contains("inf"));
        assert!(format_grouped(-f64::MAX).starts_with("-179,769,313"));
    }
}
