use super::attributes::AttributeVector;
use super::ScoringError;

/// Component-wise mean of the team's (already normalized) profiles.
pub fn team_centroid<'a, I>(members: I) -> Result<AttributeVector, ScoringError>
where
    I: IntoIterator<Item = &'a AttributeVector>,
{
    let (sum, count) = members
        .into_iter()
        .fold((AttributeVector::ZERO, 0usize), |(sum, count), member| {
            (sum + *member, count + 1)
        });

    if count == 0 {
        return Err(ScoringError::EmptyTeam);
    }

    let count = count as f64;
    Ok(sum.map(|total| total / count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_member_is_its_own_centroid() {
        let member = AttributeVector::new(0.5, 0.5, 0.5, 0.5);
        let centroid = team_centroid([&member]).expect("non-empty team");
        assert_eq!(centroid, member);
    }

    #[test]
    fn averages_each_attribute_independently() {
        let team = [
            AttributeVector::new(1.0, 0.0, 0.0, 0.0),
            AttributeVector::new(0.0, 1.0, 0.0, 0.0),
        ];
        let centroid = team_centroid(&team).expect("non-empty team");
        assert_eq!(centroid, AttributeVector::new(0.5, 0.5, 0.0, 0.0));
    }

    #[test]
    fn empty_team_is_rejected() {
        let team: Vec<AttributeVector> = Vec::new();
        assert!(matches!(team_centroid(&team), Err(ScoringError::EmptyTeam)));
    }
}
