use std::ops::{Add, Index};

use super::ScoringError;

/// Measured trait dimensions shared by every stage of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Intelligence,
    Strength,
    Endurance,
    SpicyFoodTolerance,
}

impl Attribute {
    /// Canonical iteration order. Centroid, gap and contribution all walk this list.
    pub const ALL: [Attribute; 4] = [
        Attribute::Intelligence,
        Attribute::Strength,
        Attribute::Endurance,
        Attribute::SpicyFoodTolerance,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Intelligence => "intelligence",
            Attribute::Strength => "strength",
            Attribute::Endurance => "endurance",
            Attribute::SpicyFoodTolerance => "spicyFoodTolerance",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// One person's profile, keyed by [`Attribute`] so no stage can misalign dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttributeVector([f64; Attribute::COUNT]);

impl AttributeVector {
    pub const ZERO: AttributeVector = AttributeVector([0.0; Attribute::COUNT]);

    pub fn new(intelligence: f64, strength: f64, endurance: f64, spicy_food_tolerance: f64) -> Self {
        Self([intelligence, strength, endurance, spicy_food_tolerance])
    }

    /// Builds a vector by evaluating `f` once per attribute.
    pub fn from_fn(mut f: impl FnMut(Attribute) -> f64) -> Self {
        let mut values = [0.0; Attribute::COUNT];
        for attribute in Attribute::ALL {
            values[attribute.slot()] = f(attribute);
        }
        Self(values)
    }

    /// Splat a single value across every attribute.
    pub fn uniform(value: f64) -> Self {
        Self([value; Attribute::COUNT])
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.0[attribute.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }

    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|attribute| f(self.get(attribute)))
    }

    /// Rescales every attribute by `divisor`, typically the top of the raw rating scale.
    pub fn normalized(&self, divisor: f64) -> Result<Self, ScoringError> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!("normalization divisor must be a finite value > 0, got {divisor}"),
            });
        }
        Ok(self.map(|value| value / divisor))
    }

    /// Euclidean distance across all attributes.
    pub fn distance(&self, other: &AttributeVector) -> f64 {
        self.iter()
            .map(|(attribute, value)| {
                let delta = value - other.get(attribute);
                delta * delta
            })
            .sum::<f64>()
            .sqrt()
    }

    pub fn dot(&self, other: &AttributeVector) -> f64 {
        self.iter()
            .map(|(attribute, value)| value * other.get(attribute))
            .sum()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<Attribute> for AttributeVector {
    type Output = f64;

    fn index(&self, attribute: Attribute) -> &f64 {
        &self.0[attribute.slot()]
    }
}

impl Add for AttributeVector {
    type Output = AttributeVector;

    fn add(self, rhs: AttributeVector) -> AttributeVector {
        AttributeVector::from_fn(|attribute| self[attribute] + rhs[attribute])
    }
}
