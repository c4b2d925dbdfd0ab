//! Size bounds for the `>50MB` / `<1GB` / `50MB-1GB` filter clause.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a size bound. Each step is a factor of 1024.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SizeUnit {
    #[serde(rename = "KB")]
    Kb,
    #[serde(rename = "MB")]
    Mb,
    #[serde(rename = "GB")]
    Gb,
}

impl SizeUnit {
    /// Position of the unit in the KB/MB/GB ladder.
    pub fn index(self) -> u32 {
        match self {
            SizeUnit::Kb => 0,
            SizeUnit::Mb => 1,
            SizeUnit::Gb => 2,
        }
    }

    /// Short code used in the query language.
    pub fn code(self) -> &'static str {
        match self {
            SizeUnit::Kb => "KB",
            SizeUnit::Mb => "MB",
            SizeUnit::Gb => "GB",
        }
    }
}

impl TryFrom<i32> for SizeUnit {
    type Error = i32;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(SizeUnit::Kb),
            1 => Ok(SizeUnit::Mb),
            2 => Ok(SizeUnit::Gb),
            other => Err(other),
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A size bound such as `50MB`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub amount: i32,
    pub unit: SizeUnit,
}

impl Size {
    pub fn new(amount: i32, unit: SizeUnit) -> Self {
        Self { amount, unit }
    }

    /// A bound is usable only with a positive amount.
    pub fn is_valid(&self) -> bool {
        self.amount > 0
    }

    /// The bound expressed in kilobytes.
    pub fn kilobytes(&self) -> i64 {
        i64::from(self.amount) << (10 * self.unit.index())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilobytes_conversion() {
        assert_eq!(Size::new(3, SizeUnit::Kb).kilobytes(), 3);
        assert_eq!(Size::new(2, SizeUnit::Mb).kilobytes(), 2048);
        assert_eq!(Size::new(1, SizeUnit::Gb).kilobytes(), 1024 * 1024);
    }

    #[test]
    fn test_large_amount_does_not_overflow() {
        let size = Size::new(i32::MAX, SizeUnit::Gb);
        assert_eq!(size.kilobytes(), i64::from(i32::MAX) * 1024 * 1024);
    }

    #[test]
    fn test_unit_from_index() {
        assert_eq!(SizeUnit::try_from(0), Ok(SizeUnit::Kb));
        assert_eq!(SizeUnit::try_from(2), Ok(SizeUnit::Gb));
        assert_eq!(SizeUnit::try_from(3), Err(3));
        assert_eq!(SizeUnit::try_from(-1), Err(-1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(50, SizeUnit::Mb).to_string(), "50MB");
    }
}
