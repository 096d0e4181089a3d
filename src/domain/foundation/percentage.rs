//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
///
/// Deserialization goes through [`Percentage::try_new`], so a persisted value
/// above 100 is rejected instead of silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True once the full scale has been reached.
    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(40).value(), 40);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { min, max, actual, .. }) => {
                assert_eq!((min, max, actual), (0, 100, 101));
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn percentage_is_complete_only_at_100() {
        assert!(Percentage::new(100).is_complete());
        assert!(!Percentage::new(99).is_complete());
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(Percentage::new(75).to_string(), "75%");
    }

    #[test]
    fn percentage_serializes_as_bare_integer() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
    }

    #[test]
    fn percentage_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Percentage>("150").is_err());
        assert_eq!(
            serde_json::from_str::<Percentage>("100").unwrap(),
            Percentage::new(100)
        );
    }
}
