//! JSON roster intake and score output.

mod parser;

use crate::scoring::{Attribute, AttributeVector, Person, ScoredApplicant};
use parser::PersonRow;
use std::collections::HashSet;
use std::fmt;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "input.json";
pub const DEFAULT_OUTPUT_PATH: &str = "scored_applicants.json";

/// Which half of the roster a person belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterGroup {
    Team,
    Applicants,
}

impl RosterGroup {
    pub const fn label(self) -> &'static str {
        match self {
            RosterGroup::Team => "team",
            RosterGroup::Applicants => "applicants",
        }
    }
}

#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Json(serde_json::Error),
    EmptyName {
        group: RosterGroup,
        position: usize,
    },
    DuplicateName {
        group: RosterGroup,
        name: String,
    },
    InvalidAttribute {
        name: String,
        attribute: Attribute,
        value: f64,
    },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Io(err) => write!(f, "failed to access roster file: {}", err),
            RosterError::Json(err) => write!(f, "invalid roster JSON: {}", err),
            RosterError::EmptyName { group, position } => write!(
                f,
                "entry {} in '{}' has an empty name",
                position,
                group.label()
            ),
            RosterError::DuplicateName { group, name } => {
                write!(f, "name '{}' appears more than once in '{}'", name, group.label())
            }
            RosterError::InvalidAttribute {
                name,
                attribute,
                value,
            } => write!(
                f,
                "{} has invalid {} rating {} (expected a finite value >= 0)",
                name,
                attribute.label(),
                value
            ),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(err) => Some(err),
            RosterError::Json(err) => Some(err),
            RosterError::EmptyName { .. }
            | RosterError::DuplicateName { .. }
            | RosterError::InvalidAttribute { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Validated team and applicant lists, ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub team: Vec<Person>,
    pub applicants: Vec<Person>,
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Roster, RosterError> {
        let document = parser::parse_document(reader)?;

        Ok(Roster {
            team: collect_people(RosterGroup::Team, document.team)?,
            applicants: collect_people(RosterGroup::Applicants, document.applicants)?,
        })
    }

    pub fn from_json(raw: &str) -> Result<Roster, RosterError> {
        Self::from_reader(raw.as_bytes())
    }
}

fn collect_people(group: RosterGroup, rows: Vec<PersonRow>) -> Result<Vec<Person>, RosterError> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut people = Vec::with_capacity(rows.len());

    for (position, row) in rows.into_iter().enumerate() {
        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::EmptyName { group, position });
        }
        if !seen.insert(name.clone()) {
            return Err(RosterError::DuplicateName { group, name });
        }

        let attributes = AttributeVector::from(row.attributes);
        if let Some((attribute, value)) = attributes
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(RosterError::InvalidAttribute {
                name,
                attribute,
                value,
            });
        }

        people.push(Person::new(name, attributes));
    }

    Ok(people)
}

/// Writes `{"scoredApplicants": [...]}` with two-space indentation.
pub fn write_scored_applicants<P: AsRef<Path>>(
    path: P,
    scored_applicants: &[ScoredApplicant],
) -> Result<(), RosterError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_scored_applicants_to(&mut writer, scored_applicants)?;
    writer.flush()?;
    Ok(())
}

pub fn write_scored_applicants_to<W: Write>(
    writer: W,
    scored_applicants: &[ScoredApplicant],
) -> Result<(), RosterError> {
    parser::write_document(writer, scored_applicants)?;
    Ok(())
}
