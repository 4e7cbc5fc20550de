//! Identifier values as they arrive from upstream data feeds
//!
//! Feeds deliver identifiers either as JSON numbers or as decimal strings
//! (large Snowflake values lose precision as JavaScript numbers, so most
//! producers quote them). Both shapes deserialize into [`Identifier`].

use crate::error::{CoreError, CoreResult};
use idfmt_utils::{is_ascii_digits, strip_separator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A numeric or decimal-string identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl Identifier {
    /// The exact string form of the identifier, without any grouping
    pub fn raw(&self) -> Cow<'_, str> {
        match self {
            Identifier::Numeric(n) => Cow::Owned(n.to_string()),
            Identifier::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Whether this value counts as "no identifier".
    ///
    /// An empty string is always absent. A numeric zero is absent only when
    /// `zero_is_absent` is set; the string `"0"` never is.
    pub fn is_absent(&self, zero_is_absent: bool) -> bool {
        match self {
            Identifier::Numeric(0) => zero_is_absent,
            Identifier::Numeric(_) => false,
            Identifier::Text(s) => s.is_empty(),
        }
    }

    /// Parse user-entered text.
    ///
    /// Whitespace around the value is ignored, and `separator` may appear
    /// between runs of digits, so a previously formatted identifier parses
    /// back to its digits. Leading, trailing or doubled separators are rejected.
    pub fn parse(input: &str, separator: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let well_formed = if separator.is_empty() {
            is_ascii_digits(trimmed)
        } else {
            trimmed.split(separator).all(is_ascii_digits)
        };
        if !well_formed {
            return Err(CoreError::InvalidIdentifier {
                input: input.to_string(),
                reason: "expected decimal digits, optionally grouped by the separator".to_string(),
            });
        }

        let digits = strip_separator(trimmed, separator);
        Ok(Identifier::Text(digits))
    }

    /// Numeric value, for identifiers that fit in 64 bits
    pub fn as_u64(&self) -> CoreResult<u64> {
        match self {
            Identifier::Numeric(n) => Ok(*n),
            Identifier::Text(s) => {
                if !is_ascii_digits(s) {
                    return Err(CoreError::InvalidIdentifier {
                        input: s.clone(),
                        reason: "expected decimal digits".to_string(),
                    });
                }
                s.parse::<u64>().map_err(|_| CoreError::OutOfRange { value: s.clone() })
            }
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw())
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::Text(s)
    }
}

impl std::str::FromStr for Identifier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::parse(s, "-")
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_forms() {
        assert_eq!(Identifier::from(1234567890123456789u64).raw(), "1234567890123456789");
        assert_eq!(Identifier::from("0042").raw(), "0042");
        assert_eq!(Identifier::from(7u64).to_string(), "7");
    }

    #[test]
    fn test_absent_values() {
        assert!(Identifier::from("").is_absent(true));
        assert!(Identifier::from("").is_absent(false));
        assert!(Identifier::from(0u64).is_absent(true));
        assert!(!Identifier::from(0u64).is_absent(false));
        assert!(!Identifier::from("0").is_absent(true));
        assert!(!Identifier::from(12u64).is_absent(true));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let ids: Vec<Option<Identifier>> =
            serde_json::from_str(r#"[1234567890123456789, "1234567890123456789", "", null]"#).unwrap();

        assert_eq!(ids[0], Some(Identifier::Numeric(1234567890123456789)));
        assert_eq!(ids[1], Some(Identifier::Text("1234567890123456789".to_string())));
        assert_eq!(ids[2], Some(Identifier::Text(String::new())));
        assert_eq!(ids[3], None);
    }

    #[test]
    fn test_parse_accepts_formatted_input() {
        let id = Identifier::parse(" 123-4567-8901-2345-6789\n", "-").unwrap();
        assert_eq!(id, Identifier::Text("1234567890123456789".to_string()));

        let id: Identifier = "1-2345".parse().unwrap();
        assert_eq!(id.raw(), "12345");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Identifier::parse("12a45", "-").unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));

        let err = Identifier::parse("12 45", "-").unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));

        assert!(matches!(Identifier::parse("   ", "-"), Err(CoreError::EmptyInput)));
    }

    #[test]
    fn test_parse_rejects_stray_separators() {
        for input in ["-12", "12-", "1--2345", "-1-2-3-4-5-", "--", "-"] {
            let err = Identifier::parse(input, "-").unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidIdentifier { .. }),
                "{:?} should be rejected, got {:?}",
                input,
                err
            );
        }

        let id = Identifier::parse("1::23::45", "::").unwrap();
        assert_eq!(id.raw(), "12345");
        assert!(Identifier::parse("::12345", "::").is_err());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(Identifier::from("18446744073709551615").as_u64().unwrap(), u64::MAX);
        assert_eq!(Identifier::from(42u64).as_u64().unwrap(), 42);

        let err = Identifier::from("18446744073709551616").as_u64().unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange { .. }));

        let err = Identifier::from("+1").as_u64().unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));
    }
}
