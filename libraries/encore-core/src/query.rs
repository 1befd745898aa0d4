//! Numeric comparison queries (`<N`, `>N`, `N`)
//!
//! Used by the release-year and follower-count filters. Queries are parsed once
//! up front so a malformed query fails before any entry is inspected.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parsed comparison against an integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// `<N`: strictly less than N
    LessThan(i64),

    /// `>N`: strictly greater than N
    GreaterThan(i64),

    /// `N`: exactly N
    Equal(i64),
}

impl Comparison {
    /// Parse a query string
    pub fn parse(query: &str) -> Result<Self> {
        query.parse()
    }

    /// Check a field value against this comparison
    pub fn test(self, value: i64) -> bool {
        match self {
            Self::LessThan(bound) => value < bound,
            Self::GreaterThan(bound) => value > bound,
            Self::Equal(bound) => value == bound,
        }
    }
}

impl FromStr for Comparison {
    type Err = CoreError;

    fn from_str(query: &str) -> Result<Self> {
        let number = |digits: &str| {
            digits
                .parse::<i64>()
                .map_err(|_| CoreError::invalid_query(query))
        };

        if let Some(rest) = query.strip_prefix('<') {
            number(rest).map(Self::LessThan)
        } else if let Some(rest) = query.strip_prefix('>') {
            number(rest).map(Self::GreaterThan)
        } else {
            number(query).map(Self::Equal)
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LessThan(n) => write!(f, "<{}", n),
            Self::GreaterThan(n) => write!(f, ">{}", n),
            Self::Equal(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_forms() {
        assert_eq!(Comparison::parse("<2000").unwrap(), Comparison::LessThan(2000));
        assert_eq!(Comparison::parse(">10").unwrap(), Comparison::GreaterThan(10));
        assert_eq!(Comparison::parse("1999").unwrap(), Comparison::Equal(1999));
    }

    #[test]
    fn comparisons_are_strict() {
        assert!(Comparison::LessThan(2000).test(1999));
        assert!(!Comparison::LessThan(2000).test(2000));
        assert!(Comparison::GreaterThan(5).test(6));
        assert!(!Comparison::GreaterThan(5).test(5));
        assert!(Comparison::Equal(5).test(5));
    }

    #[test]
    fn malformed_queries_are_rejected() {
        for bad in ["", "<", ">abc", "=5", "1 999", "<<3"] {
            assert_eq!(
                Comparison::parse(bad),
                Err(CoreError::InvalidQuery(bad.to_string())),
                "query {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn display_matches_input_syntax() {
        assert_eq!(Comparison::LessThan(3).to_string(), "<3");
        assert_eq!(Comparison::GreaterThan(3).to_string(), ">3");
        assert_eq!(Comparison::Equal(3).to_string(), "3");
    }
}
