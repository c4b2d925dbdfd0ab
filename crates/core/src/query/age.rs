//! Age filter for the `before:` / `after:` clause.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of an age filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeUnit {
    /// First letter of the unit name, as rendered in the query language.
    pub fn initial(self) -> char {
        match self {
            TimeUnit::Hour => 'H',
            TimeUnit::Day => 'D',
            TimeUnit::Week => 'W',
            TimeUnit::Month => 'M',
        }
    }
}

impl TryFrom<i32> for TimeUnit {
    type Error = i32;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(TimeUnit::Hour),
            1 => Ok(TimeUnit::Day),
            2 => Ok(TimeUnit::Week),
            3 => Ok(TimeUnit::Month),
            other => Err(other),
        }
    }
}

/// Which side of the age the results must fall on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeDirection {
    Older,
    Newer,
}

/// An age filter such as "older than 2 weeks".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Age {
    pub amount: i32,
    pub unit: TimeUnit,
    pub direction: AgeDirection,
}

impl Age {
    pub fn older_than(amount: i32, unit: TimeUnit) -> Self {
        Self {
            amount,
            unit,
            direction: AgeDirection::Older,
        }
    }

    pub fn newer_than(amount: i32, unit: TimeUnit) -> Self {
        Self {
            amount,
            unit,
            direction: AgeDirection::Newer,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.amount > 0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.direction {
            AgeDirection::Older => "before",
            AgeDirection::Newer => "after",
        };
        write!(f, "{}:{}{}", keyword, self.amount, self.unit.initial())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_rendering() {
        assert_eq!(Age::older_than(2, TimeUnit::Week).to_string(), "before:2W");
        assert_eq!(Age::newer_than(12, TimeUnit::Hour).to_string(), "after:12H");
        assert_eq!(Age::newer_than(1, TimeUnit::Month).to_string(), "after:1M");
    }

    #[test]
    fn test_unit_from_index() {
        assert_eq!(TimeUnit::try_from(1), Ok(TimeUnit::Day));
        assert_eq!(TimeUnit::try_from(3), Ok(TimeUnit::Month));
        assert_eq!(TimeUnit::try_from(4), Err(4));
    }

    #[test]
    fn test_validity() {
        assert!(Age::older_than(1, TimeUnit::Day).is_valid());
        assert!(!Age::older_than(0, TimeUnit::Day).is_valid());
        assert!(!Age::newer_than(-3, TimeUnit::Day).is_valid());
    }
}
