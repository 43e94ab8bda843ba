/// Raw value of a form field as it arrives from an input, before any rule is applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Text(String),
    Bool(bool),
    Number(f64),
    List(Vec<String>),
}

impl Value {
    /// True for the values a required field rejects: nothing, empty text, or a
    /// number that failed to parse. `0`, `false` and empty lists are present.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(v) => v.is_empty(),
            Self::Number(v) => v.is_nan(),
            Self::Bool(_) | Self::List(_) => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::None, Self::Number)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Reads a numeric input the way a number field reports it: blank input is
/// absent, anything unparseable is NaN.
pub fn parse_number_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::{Value, parse_number_input};

    #[test]
    fn missing_covers_absent_empty_and_nan() {
        assert!(Value::None.is_missing());
        assert!(Value::from("").is_missing());
        assert!(Value::Number(f64::NAN).is_missing());
    }

    #[test]
    fn falsy_values_are_still_present() {
        assert!(!Value::Number(0.0).is_missing());
        assert!(!Value::Bool(false).is_missing());
        assert!(!Value::List(Vec::new()).is_missing());
        assert!(!Value::from("  ").is_missing());
    }

    #[test]
    fn number_input_parsing() {
        assert_eq!(parse_number_input(""), None);
        assert_eq!(parse_number_input("   "), None);
        assert_eq!(parse_number_input("50000"), Some(50_000.0));
        assert_eq!(parse_number_input(" -100 "), Some(-100.0));
        assert!(parse_number_input("lots").is_some_and(f64::is_nan));
    }
}
