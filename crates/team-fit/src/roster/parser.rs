use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::scoring::{AttributeVector, ScoredApplicant};

#[derive(Debug, Deserialize)]
pub(crate) struct RosterDocument {
    pub(crate) team: Vec<PersonRow>,
    pub(crate) applicants: Vec<PersonRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PersonRow {
    pub(crate) name: String,
    pub(crate) attributes: AttributeRow,
}

/// All four ratings are required; serde rejects missing or non-numeric values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttributeRow {
    intelligence: f64,
    strength: f64,
    endurance: f64,
    spicy_food_tolerance: f64,
}

impl From<AttributeRow> for AttributeVector {
    fn from(row: AttributeRow) -> Self {
        AttributeVector::new(
            row.intelligence,
            row.strength,
            row.endurance,
            row.spicy_food_tolerance,
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredApplicantsDocument<'a> {
    scored_applicants: &'a [ScoredApplicant],
}

pub(crate) fn parse_document<R: Read>(reader: R) -> Result<RosterDocument, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub(crate) fn write_document<W: Write>(
    writer: W,
    scored_applicants: &[ScoredApplicant],
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &ScoredApplicantsDocument { scored_applicants })
}
