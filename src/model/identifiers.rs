//! Core identifier newtypes with smart constructors.
//!
//! Identifiers validate their invariants at construction time.
//! Raw constructors are never exported - use smart constructors only.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::num::NonZeroU32;

/// Unique, stable identifier of a question record.
///
/// Always a positive integer. Ordering follows the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(NonZeroU32);

impl QuestionId {
    /// Smart constructor: validates the id is positive.
    pub fn new(raw: u32) -> Result<Self, InvalidQuestionId> {
        NonZeroU32::new(raw)
            .map(Self)
            .ok_or(InvalidQuestionId::Zero)
    }

    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        QuestionId::new(raw).map_err(serde::de::Error::custom)
    }
}

// ===== Error Types =====

/// Error returned when constructing a [`QuestionId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuestionId {
    /// Ids start at 1.
    #[error("Question ID must be a positive integer, got 0")]
    Zero,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_rejects_zero() {
        assert_eq!(QuestionId::new(0), Err(InvalidQuestionId::Zero));
    }

    #[test]
    fn question_id_accepts_positive() {
        let id = QuestionId::new(7).expect("positive id");
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn question_id_displays_as_number() {
        let id = QuestionId::new(42).unwrap();
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn question_id_orders_numerically() {
        let a = QuestionId::new(2).unwrap();
        let b = QuestionId::new(10).unwrap();
        assert!(a < b, "Ordering must be numeric, not lexical");
    }

    #[test]
    fn question_id_deserializes_from_json_number() {
        let id: QuestionId = serde_json::from_str("13").unwrap();
        assert_eq!(id.get(), 13);
    }

    #[test]
    fn question_id_deserialize_rejects_zero() {
        let result: Result<QuestionId, _> = serde_json::from_str("0");
        assert!(result.is_err(), "Zero id must fail to deserialize");
    }
}
