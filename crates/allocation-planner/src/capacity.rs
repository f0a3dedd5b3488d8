// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-group capacity limit.

use crate::PlannerError;
use std::fmt;

/// Maximum total weight a single group may carry.
///
/// # Examples
/// ```
/// use allocation_planner::Capacity;
///
/// let c = Capacity::parse("10").unwrap();
/// assert_eq!(c.as_units(), 10);
/// assert_eq!(c.min_groups(25), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Capacity {
    units: u64,
}

impl Capacity {
    /// The limit used by the original problem set.
    pub const DEFAULT_UNITS: u64 = 10;

    /// Creates a capacity from a raw weight limit.
    pub fn new(units: u64) -> Self {
        Self { units }
    }

    /// Returns the limit.
    pub fn as_units(&self) -> u64 {
        self.units
    }

    /// Returns `true` if a group of the given total weight is within the limit.
    pub fn fits(&self, weight: u64) -> bool {
        weight <= self.units
    }

    /// Lower bound on the number of groups needed to carry `total_weight`:
    /// `⌈total_weight / capacity⌉`.
    pub fn min_groups(&self, total_weight: u64) -> u64 {
        if total_weight == 0 {
            return 0;
        }
        total_weight.div_ceil(self.units.max(1))
    }

    /// Parses a positive integer limit. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, PlannerError> {
        let s = s.trim();
        let units: u64 = s.parse().map_err(|_| {
            PlannerError::InvalidCapacity(format!("'{s}' is not a positive integer"))
        })?;
        if units == 0 {
            return Err(PlannerError::InvalidCapacity("capacity must be positive".into()));
        }
        Ok(Self { units })
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UNITS)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ten() {
        assert_eq!(Capacity::default().as_units(), 10);
    }

    #[test]
    fn test_fits() {
        let c = Capacity::new(10);
        assert!(c.fits(10));
        assert!(c.fits(0));
        assert!(!c.fits(11));
    }

    #[test]
    fn test_min_groups() {
        let c = Capacity::new(10);
        assert_eq!(c.min_groups(0), 0);
        assert_eq!(c.min_groups(1), 1);
        assert_eq!(c.min_groups(10), 1);
        assert_eq!(c.min_groups(11), 2);
        assert_eq!(c.min_groups(20), 2);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Capacity::parse("10").unwrap().as_units(), 10);
        assert_eq!(Capacity::parse("  42 ").unwrap().as_units(), 42);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Capacity::parse("").is_err());
        assert!(Capacity::parse("ten").is_err());
        assert!(Capacity::parse("-3").is_err());
        assert!(Capacity::parse("0").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Capacity::new(10)), "10");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Capacity::new(12)).unwrap();
        assert_eq!(json, "12");
        let back: Capacity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Capacity::new(12));
    }
}
