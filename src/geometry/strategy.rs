// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Selection of the pairwise matching algorithm
//!
//! Vertex deduplication, edge counting and other-half pairing all boil down to
//! "find the first earlier element equal to this one". Every strategy returns
//! identical results, including which element is reported first on failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pairwise matches are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Linear scan over every candidate, O(n²)
    #[default]
    BruteForce,
    /// Keyed hash maps, O(n) expected
    Hashed,
    /// Brute-force scans spread over the rayon thread pool
    Parallel,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 3] = [
        MatchStrategy::BruteForce,
        MatchStrategy::Hashed,
        MatchStrategy::Parallel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::BruteForce => "brute_force",
            MatchStrategy::Hashed => "hashed",
            MatchStrategy::Parallel => "parallel",
        }
    }

    /// Worst and best case complexity, where n is the number of face corners
    pub fn complexity(&self) -> (&'static str, &'static str) {
        match self {
            MatchStrategy::BruteForce | MatchStrategy::Parallel => ("O(n^2)", "O(n)"),
            MatchStrategy::Hashed => ("O(n)", "O(n)"),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "brute_force" | "bruteforce" | "brute" => Ok(MatchStrategy::BruteForce),
            "hashed" | "hash" => Ok(MatchStrategy::Hashed),
            "parallel" => Ok(MatchStrategy::Parallel),
            other => Err(format!(
                "unknown strategy '{}', expected brute_force, hashed or parallel",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("brute-force".parse::<MatchStrategy>(), Ok(MatchStrategy::BruteForce));
        assert_eq!("HASHED".parse::<MatchStrategy>(), Ok(MatchStrategy::Hashed));
        assert_eq!("parallel".parse::<MatchStrategy>(), Ok(MatchStrategy::Parallel));
        assert!("quadtree".parse::<MatchStrategy>().is_err());
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in MatchStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<MatchStrategy>(), Ok(strategy));
        }
    }
}
