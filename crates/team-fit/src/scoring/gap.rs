use super::attributes::{Attribute, AttributeVector};

/// Per-attribute shortfall of the team from a perfect (1.0) profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapVector(AttributeVector);

impl GapVector {
    pub fn from_centroid(centroid: &AttributeVector) -> Self {
        Self(centroid.map(|value| (1.0 - value).max(0.0)))
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.0.get(attribute)
    }

    pub fn as_vector(&self) -> &AttributeVector {
        &self.0
    }

    /// Sum of all shortfalls, used to normalize contributions.
    pub fn total(&self) -> f64 {
        self.0.sum()
    }

    /// How much of the team's shortfall an applicant covers, weighted by gap size.
    pub fn contribution(&self, applicant: &AttributeVector) -> f64 {
        self.0.dot(applicant)
    }
}
