//! Team compatibility scoring.
//!
//! Applicants are compared against the mean profile of the existing team. Two
//! signals are blended: how close the applicant sits to that centroid (fit) and
//! how much of the team's shortfall from a perfect profile they cover (gap filling).

mod attributes;
mod centroid;
mod composite;
mod config;
mod domain;
mod fit;
mod gap;

#[cfg(test)]
mod tests;

pub use attributes::{Attribute, AttributeVector};
pub use centroid::team_centroid;
pub use composite::composite_score;
pub use config::{
    ScoringConfig, ZeroGapPolicy, DEFAULT_FIT_WEIGHT, DEFAULT_GAP_WEIGHT,
    DEFAULT_NORMALIZATION_DIVISOR,
};
pub use domain::{ApplicantBreakdown, Person, ScoredApplicant};
pub use fit::{euclidean_distance, fit_score, max_unit_distance};
pub use gap::GapVector;

use tracing::{debug, info};

/// Error raised while scoring a roster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("cannot compute a team centroid without any team members")]
    EmptyTeam,
    #[error("team has no gap on any attribute, so gap-filler scores are undefined")]
    ZeroTotalGap,
    #[error("invalid scoring configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("score for applicant '{applicant}' is not a finite number")]
    NonFiniteScore { applicant: String },
}

/// Stateless scorer that applies the rubric configuration to a roster.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(
        &self,
        team: &[Person],
        applicants: &[Person],
    ) -> Result<ScoringOutcome, ScoringError> {
        if team.is_empty() {
            return Err(ScoringError::EmptyTeam);
        }

        let divisor = self.config.normalization_divisor;
        let team_profiles = team
            .iter()
            .map(|member| member.attributes.normalized(divisor))
            .collect::<Result<Vec<_>, _>>()?;

        let centroid = team_centroid(&team_profiles)?;
        let gap_vector = GapVector::from_centroid(&centroid);
        let total_gap = gap_vector.total();
        info!(
            team = team.len(),
            applicants = applicants.len(),
            total_gap,
            "team centroid computed"
        );

        let has_gap = total_gap > 0.0;
        if !has_gap && self.config.zero_gap_policy == ZeroGapPolicy::Fail {
            return Err(ScoringError::ZeroTotalGap);
        }

        let mut breakdowns = Vec::with_capacity(applicants.len());
        for applicant in applicants {
            let profile = applicant.attributes.normalized(divisor)?;

            let distance = euclidean_distance(&centroid, &profile);
            let fit = fit_score(distance);
            let contribution = gap_vector.contribution(&profile);
            let gap_filler_score = if has_gap {
                contribution / total_gap
            } else {
                0.0
            };
            let score = composite_score(&self.config, fit, gap_filler_score);
            if ![distance, contribution, score]
                .iter()
                .all(|value| value.is_finite())
            {
                return Err(ScoringError::NonFiniteScore {
                    applicant: applicant.name.clone(),
                });
            }

            debug!(
                applicant = %applicant.name,
                distance,
                fit,
                contribution,
                gap_filler_score,
                score,
                "applicant scored"
            );

            breakdowns.push(ApplicantBreakdown {
                name: applicant.name.clone(),
                distance,
                fit_score: fit,
                contribution,
                gap_filler_score,
                score,
            });
        }

        Ok(ScoringOutcome {
            centroid,
            gap_vector,
            total_gap,
            applicants: breakdowns,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

/// Scoring output describing the team profile and every applicant's score trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringOutcome {
    pub centroid: AttributeVector,
    pub gap_vector: GapVector,
    pub total_gap: f64,
    pub applicants: Vec<ApplicantBreakdown>,
}

impl ScoringOutcome {
    /// Final scores in roster order.
    pub fn scored_applicants(&self) -> Vec<ScoredApplicant> {
        self.applicants.iter().map(ApplicantBreakdown::scored).collect()
    }

    pub fn applicant(&self, name: &str) -> Option<&ApplicantBreakdown> {
        self.applicants.iter().find(|breakdown| breakdown.name == name)
    }
}
