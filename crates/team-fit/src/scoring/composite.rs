use super::config::ScoringConfig;

/// Weighted blend of similarity and gap-filling.
pub fn composite_score(config: &ScoringConfig, average_fit: f64, gap_filler_score: f64) -> f64 {
    config.fit_weight * average_fit + config.gap_weight * gap_filler_score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_hit_the_bounds() {
        let config = ScoringConfig::default();
        assert_eq!(composite_score(&config, 1.0, 1.0), 1.0);
        assert_eq!(composite_score(&config, 0.0, 0.0), 0.0);
    }

    #[test]
    fn non_decreasing_in_each_argument() {
        let config = ScoringConfig::default();
        let steps = [-0.5, 0.0, 0.25, 0.5, 0.75, 1.0];
        for &fixed in &steps {
            for pair in steps.windows(2) {
                let (low, high) = (pair[0], pair[1]);
                assert!(
                    composite_score(&config, high, fixed) >= composite_score(&config, low, fixed)
                );
                assert!(
                    composite_score(&config, fixed, high) >= composite_score(&config, fixed, low)
                );
            }
        }
    }

    #[test]
    fn blend_favors_fit() {
        let config = ScoringConfig::default();
        let score = composite_score(&config, 0.5, 1.0);
        assert!((score - 0.6).abs() < 1e-12);
    }
}
