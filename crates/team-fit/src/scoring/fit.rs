use super::attributes::{Attribute, AttributeVector};

/// Largest distance between two profiles inside the unit hypercube.
pub fn max_unit_distance() -> f64 {
    (Attribute::COUNT as f64).sqrt()
}

pub fn euclidean_distance(centroid: &AttributeVector, applicant: &AttributeVector) -> f64 {
    centroid.distance(applicant)
}

/// `1 - distance / sqrt(dimensions)`. Not clamped: applicants further than the
/// unit-cube diagonal receive a negative fit.
pub fn fit_score(distance: f64) -> f64 {
    1.0 - distance / max_unit_distance()
}
