//! Risk tier derived from the recommendation score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which the tier is High.
pub const HIGH_THRESHOLD: u32 = 8;

/// Score at or above which the tier is at least Medium.
pub const MEDIUM_THRESHOLD: u32 = 4;

/// Coarse complexity classification of a will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Determine tier from score; each lower bound is inclusive.
    /// - High: score >= 8
    /// - Medium: score 4-7
    /// - Low: score < 4
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} complexity", self.label())
    }
}
