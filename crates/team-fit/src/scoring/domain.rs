use serde::{Deserialize, Serialize};

use super::attributes::AttributeVector;

/// A team member or applicant entering the pipeline with raw (unnormalized) ratings.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub attributes: AttributeVector,
}

impl Person {
    pub fn new(name: impl Into<String>, attributes: AttributeVector) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// Final compatibility score for one applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredApplicant {
    pub name: String,
    pub score: f64,
}

/// Every intermediate signal behind an applicant's score, kept for audits and reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantBreakdown {
    pub name: String,
    pub distance: f64,
    pub fit_score: f64,
    pub contribution: f64,
    pub gap_filler_score: f64,
    pub score: f64,
}

impl ApplicantBreakdown {
    pub fn scored(&self) -> ScoredApplicant {
        ScoredApplicant {
            name: self.name.clone(),
            score: self.score,
        }
    }
}
