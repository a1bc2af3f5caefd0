// src/money.rs
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type AmountValue = f64;

/// A bid value. Always positive and finite, fractions allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount {
    value: AmountValue,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    #[error("Amount must be a positive number: {0}")]
    NotPositive(AmountValue),

    #[error("Invalid amount value: {0}")]
    Unparsable(String),
}

impl Amount {
    pub fn new(value: AmountValue) -> Result<Self, MoneyError> {
        if value.is_finite() && value > 0.0 {
            Ok(Amount { value })
        } else {
            Err(MoneyError::NotPositive(value))
        }
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }

    /// Total order over amounts. Construction rules out NaN, so this agrees
    /// with `<` and `>`.
    pub fn cmp_value(&self, other: &Amount) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_f64(self.value)
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = AmountValue::deserialize(deserializer)?;
        Amount::new(value)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<AmountValue>()
            .map_err(|_| MoneyError::Unparsable(s.to_string()))?;
        Amount::new(value)
    }
}
