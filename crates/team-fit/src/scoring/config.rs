use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Raw attribute ratings are on a 0-10 scale.
pub const DEFAULT_NORMALIZATION_DIVISOR: f64 = 10.0;
/// Share of the composite score taken by similarity to the team centroid.
pub const DEFAULT_FIT_WEIGHT: f64 = 0.80;
/// Share of the composite score taken by how well the applicant fills team gaps.
pub const DEFAULT_GAP_WEIGHT: f64 = 0.20;

/// How to score gap-filling when the team has no shortfall on any attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroGapPolicy {
    /// Abort the run with [`ScoringError::ZeroTotalGap`].
    #[default]
    Fail,
    /// Give every applicant a gap-filler score of 0.
    TreatAsZero,
}

impl ZeroGapPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            ZeroGapPolicy::Fail => "fail",
            ZeroGapPolicy::TreatAsZero => "zero",
        }
    }
}

impl fmt::Display for ZeroGapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZeroGapPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fail" | "error" => Ok(Self::Fail),
            "zero" | "treat_as_zero" | "treat-as-zero" => Ok(Self::TreatAsZero),
            other => Err(format!(
                "unknown zero-gap policy '{other}' (expected 'fail' or 'zero')"
            )),
        }
    }
}

/// Tunable constants of the scoring rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub normalization_divisor: f64,
    pub fit_weight: f64,
    pub gap_weight: f64,
    pub zero_gap_policy: ZeroGapPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            normalization_divisor: DEFAULT_NORMALIZATION_DIVISOR,
            fit_weight: DEFAULT_FIT_WEIGHT,
            gap_weight: DEFAULT_GAP_WEIGHT,
            zero_gap_policy: ZeroGapPolicy::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.normalization_divisor.is_finite() || self.normalization_divisor <= 0.0 {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!(
                    "normalization divisor must be a finite value > 0, got {}",
                    self.normalization_divisor
                ),
            });
        }

        for (name, weight) in [("fit", self.fit_weight), ("gap", self.gap_weight)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoringError::InvalidConfiguration {
                    reason: format!("{name} weight must be a finite value >= 0, got {weight}"),
                });
            }
        }

        Ok(())
    }
}
