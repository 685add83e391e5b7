//! Closed enumerations of roles, experience levels and locations

use crate::error::{CareerToolsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    MachineLearningEngineer,
    DataScientist,
    DataEngineer,
    MlopsEngineer,
    AiResearchScientist,
    NlpEngineer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Sydney,
    Melbourne,
    Brisbane,
    Perth,
    Adelaide,
    Canberra,
    Hobart,
    Remote,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::MachineLearningEngineer,
        Role::DataScientist,
        Role::DataEngineer,
        Role::MlopsEngineer,
        Role::AiResearchScientist,
        Role::NlpEngineer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::MachineLearningEngineer => "Machine Learning Engineer",
            Role::DataScientist => "Data Scientist",
            Role::DataEngineer => "Data Engineer",
            Role::MlopsEngineer => "MLOps Engineer",
            Role::AiResearchScientist => "AI Research Scientist",
            Role::NlpEngineer => "NLP Engineer",
        }
    }

    /// Position in [`Role::ALL`], used to index fixed-size tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Lead => "Lead",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Sydney,
        Location::Melbourne,
        Location::Brisbane,
        Location::Perth,
        Location::Adelaide,
        Location::Canberra,
        Location::Hobart,
        Location::Remote,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Location::Sydney => "Sydney",
            Location::Melbourne => "Melbourne",
            Location::Brisbane => "Brisbane",
            Location::Perth => "Perth",
            Location::Adelaide => "Adelaide",
            Location::Canberra => "Canberra",
            Location::Hobart => "Hobart",
            Location::Remote => "Remote",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = CareerToolsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s, "role", &Role::ALL, |r| r.name())
    }
}

impl FromStr for ExperienceLevel {
    type Err = CareerToolsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s, "experience level", &ExperienceLevel::ALL, |l| l.name())
    }
}

impl FromStr for Location {
    type Err = CareerToolsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s, "location", &Location::ALL, |l| l.name())
    }
}

/// Lowercase and drop separators so "mlops-engineer" == "MLOps Engineer".
fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_variant<T: Copy>(
    input: &str,
    kind: &'static str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T> {
    let wanted = normalize_name(input.trim());

    if let Some(found) = all.iter().copied().find(|v| normalize_name(name(*v)) == wanted) {
        return Ok(found);
    }

    let suggestion = all
        .iter()
        .map(|v| (name(*v), jaro_winkler(&wanted, &normalize_name(name(*v)))))
        .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate.to_string());

    Err(CareerToolsError::UnknownVariant {
        kind,
        value: input.to_string(),
        suggestion,
    })
}
