use std::fmt::Display;
use std::str::FromStr;

/// A number the parser accepts from a text input.
pub trait NumericValue: Copy + FromStr + Display {
    /// Whether a successfully parsed value may be submitted.
    fn is_submittable(&self) -> bool {
        true
    }
}

impl NumericValue for i64 {}

impl NumericValue for f64 {
    // "NaN" and "inf" parse as f64 but must never reach a request body.
    fn is_submittable(&self) -> bool {
        self.is_finite()
    }
}

/// An optional numeric form field.
///
/// Keeps the text exactly as typed, so a controlled input can show partial
/// entries like `-` or `1.`, next to the parsed value. The value is `None`
/// whenever the text is blank or does not parse; zero is a real value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput<T> {
    raw: String,
    value: Option<T>,
}

impl<T> Default for NumericInput<T> {
    fn default() -> Self {
        Self {
            raw: String::new(),
            value: None,
        }
    }
}

impl<T: NumericValue> NumericInput<T> {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw
            .trim()
            .parse::<T>()
            .ok()
            .filter(|v| v.is_submittable());
        Self { raw, value }
    }

    /// Build an input showing an already known value, e.g. one loaded from
    /// the API.
    pub fn from_value(value: Option<T>) -> Self {
        Self {
            raw: value.map(|v| v.to_string()).unwrap_or_default(),
            value,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<T> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_none() {
        assert_eq!(NumericInput::<i64>::parse("").value(), None);
        assert_eq!(NumericInput::<f64>::parse("   ").value(), None);
    }

    #[test]
    fn unparsable_is_none_but_raw_is_kept() {
        let input = NumericInput::<f64>::parse("12.5abc");
        assert_eq!(input.value(), None);
        assert_eq!(input.raw(), "12.5abc");

        let input = NumericInput::<i64>::parse("-");
        assert_eq!(input.value(), None);
        assert_eq!(input.raw(), "-");
    }

    #[test]
    fn non_finite_floats_are_none() {
        for raw in ["NaN", "nan", "inf", "-infinity"] {
            assert_eq!(NumericInput::<f64>::parse(raw).value(), None, "{raw}");
        }
    }

    #[test]
    fn zero_is_a_value() {
        assert_eq!(NumericInput::<i64>::parse("0").value(), Some(0));
        assert_eq!(NumericInput::<f64>::parse("0").value(), Some(0.0));
        assert_eq!(NumericInput::<f64>::parse("-0.0").value(), Some(-0.0));
    }

    #[test]
    fn integers_reject_fractions() {
        assert_eq!(NumericInput::<i64>::parse("3.7").value(), None);
        assert_eq!(NumericInput::<i64>::parse(" 42 ").value(), Some(42));
    }

    #[test]
    fn from_value_renders_raw() {
        let input = NumericInput::from_value(Some(51.5));
        assert_eq!(input.raw(), "51.5");
        assert_eq!(input.value(), Some(51.5));

        let input = NumericInput::<i64>::from_value(None);
        assert_eq!(input.raw(), "");
    }
}
