//! Salary reference tables: Sydney base ranges, location multipliers, skill modifiers

use crate::error::{CareerToolsError, Result};
use crate::roles::{ExperienceLevel, Location, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const ROLES: usize = Role::ALL.len();
const LEVELS: usize = ExperienceLevel::ALL.len();
const LOCATIONS: usize = Location::ALL.len();

/// Annual salary range in whole AUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub median: i64,
    pub max: i64,
}

impl SalaryRange {
    pub const fn new(min: i64, median: i64, max: i64) -> Self {
        Self { min, median, max }
    }

    /// Scale each bound independently, rounding to the nearest dollar.
    pub fn scaled(self, multiplier: f64) -> Self {
        Self {
            min: scale(self.min, multiplier),
            median: scale(self.median, multiplier),
            max: scale(self.max, multiplier),
        }
    }

    pub fn plus(self, amount: i64) -> Self {
        Self {
            min: self.min + amount,
            median: self.median + amount,
            max: self.max + amount,
        }
    }
}

pub(crate) fn scale(amount: i64, multiplier: f64) -> i64 {
    (amount as f64 * multiplier).round() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillModifier {
    pub skill: String,
    pub category: String,
    pub modifier: i64,
}

impl SkillModifier {
    pub fn new(skill: &str, category: &str, modifier: i64) -> Self {
        Self {
            skill: skill.to_string(),
            category: category.to_string(),
            modifier,
        }
    }
}

/// The complete set of lookup tables the salary calculator runs over.
///
/// Base ranges and multipliers are fixed-size arrays indexed by enum position,
/// so every `(role, level)` and every location always has an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryTables {
    base: [[SalaryRange; LEVELS]; ROLES],
    multipliers: [f64; LOCATIONS],
    skills: Vec<SkillModifier>,
}

impl SalaryTables {
    pub fn new(
        base: [[SalaryRange; LEVELS]; ROLES],
        multipliers: [f64; LOCATIONS],
        skills: Vec<SkillModifier>,
    ) -> Result<Self> {
        for role in Role::ALL {
            for level in ExperienceLevel::ALL {
                let range = base[role.index()][level.index()];
                if range.median <= 0 || range.min > range.median || range.median > range.max {
                    return Err(CareerToolsError::SalaryTable(format!(
                        "{} {} range {}/{}/{} must satisfy 0 < median and min <= median <= max",
                        level, role, range.min, range.median, range.max
                    )));
                }
            }
        }

        for location in Location::ALL {
            let multiplier = multipliers[location.index()];
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return Err(CareerToolsError::SalaryTable(format!(
                    "{} multiplier {} must be a positive number",
                    location, multiplier
                )));
            }
        }

        let mut seen = HashSet::new();
        for modifier in &skills {
            let key = modifier.skill.trim().to_lowercase();
            if key.is_empty() {
                return Err(CareerToolsError::SalaryTable(
                    "skill name must not be empty".to_string(),
                ));
            }
            if !seen.insert(key) {
                return Err(CareerToolsError::SalaryTable(format!(
                    "skill '{}' is listed more than once",
                    modifier.skill
                )));
            }
            if modifier.modifier < 0 {
                return Err(CareerToolsError::SalaryTable(format!(
                    "skill '{}' has negative modifier {}",
                    modifier.skill, modifier.modifier
                )));
            }
        }

        Ok(Self {
            base,
            multipliers,
            skills,
        })
    }

    /// Built-in AUD tables with Sydney as the 1.0 baseline.
    pub fn builtin() -> Self {
        Self {
            base: BASE_SALARIES,
            multipliers: LOCATION_MULTIPLIERS,
            skills: SKILL_MODIFIERS
                .iter()
                .map(|(skill, category, modifier)| SkillModifier::new(skill, category, *modifier))
                .collect(),
        }
    }

    /// Sydney-baseline range for a role and level.
    pub fn base_salary(&self, role: Role, level: ExperienceLevel) -> SalaryRange {
        self.base[role.index()][level.index()]
    }

    pub fn multiplier(&self, location: Location) -> f64 {
        self.multipliers[location.index()]
    }

    pub fn skill_modifiers(&self) -> &[SkillModifier] {
        &self.skills
    }

    /// Case-insensitive lookup on the trimmed skill name.
    pub fn find_skill(&self, name: &str) -> Option<&SkillModifier> {
        let wanted = name.trim().to_lowercase();
        self.skills
            .iter()
            .find(|m| m.skill.to_lowercase() == wanted)
    }
}

impl Default for SalaryTables {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn range(min: i64, median: i64, max: i64) -> SalaryRange {
    SalaryRange::new(min, median, max)
}

// Rows follow Role::ALL, columns ExperienceLevel::ALL (Junior, Mid, Senior, Lead).
const BASE_SALARIES: [[SalaryRange; LEVELS]; ROLES] = [
    // Machine Learning Engineer
    [
        range(80_000, 95_000, 110_000),
        range(110_000, 130_000, 150_000),
        range(145_000, 170_000, 195_000),
        range(180_000, 210_000, 240_000),
    ],
    // Data Scientist
    [
        range(75_000, 90_000, 105_000),
        range(100_000, 120_000, 140_000),
        range(135_000, 158_000, 180_000),
        range(165_000, 190_000, 220_000),
    ],
    // Data Engineer
    [
        range(75_000, 88_000, 100_000),
        range(100_000, 118_000, 135_000),
        range(130_000, 150_000, 172_000),
        range(160_000, 185_000, 210_000),
    ],
    // MLOps Engineer
    [
        range(78_000, 92_000, 106_000),
        range(105_000, 125_000, 145_000),
        range(140_000, 163_000, 185_000),
        range(170_000, 198_000, 225_000),
    ],
    // AI Research Scientist
    [
        range(90_000, 105_000, 120_000),
        range(120_000, 145_000, 170_000),
        range(160_000, 190_000, 220_000),
        range(200_000, 235_000, 270_000),
    ],
    // NLP Engineer
    [
        range(82_000, 97_000, 112_000),
        range(112_000, 132_000, 152_000),
        range(148_000, 172_000, 198_000),
        range(182_000, 212_000, 245_000),
    ],
];

// Follows Location::ALL.
const LOCATION_MULTIPLIERS: [f64; LOCATIONS] = [
    1.0,  // Sydney
    0.97, // Melbourne
    0.92, // Brisbane
    0.94, // Perth
    0.88, // Adelaide
    0.96, // Canberra
    0.85, // Hobart
    0.93, // Remote
];

const SKILL_MODIFIERS: &[(&str, &str, i64)] = &[
    ("Python", "Programming", 5_000),
    ("R", "Programming", 3_000),
    ("SQL", "Programming", 3_000),
    ("Scala", "Programming", 6_000),
    ("C++", "Programming", 8_000),
    ("Rust", "Programming", 9_000),
    ("TensorFlow", "ML Frameworks", 7_000),
    ("PyTorch", "ML Frameworks", 8_000),
    ("scikit-learn", "ML Frameworks", 4_000),
    ("JAX", "ML Frameworks", 9_000),
    ("Hugging Face", "ML Frameworks", 8_000),
    ("AWS", "Cloud", 10_000),
    ("Azure", "Cloud", 8_000),
    ("GCP", "Cloud", 8_000),
    ("Kubernetes", "Infrastructure", 9_000),
    ("Docker", "Infrastructure", 5_000),
    ("MLflow", "MLOps", 6_000),
    ("Spark", "Data Engineering", 8_000),
    ("Kafka", "Data Engineering", 7_000),
    ("Airflow", "Data Engineering", 6_000),
    ("Deep Learning", "Specialization", 12_000),
    ("NLP", "Specialization", 12_000),
    ("Computer Vision", "Specialization", 11_000),
    ("LLMs", "Specialization", 15_000),
    ("Reinforcement Learning", "Specialization", 13_000),
];
