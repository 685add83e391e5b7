//! Career tools library: resume, skills-gap and salary scoring engines

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod roles;
pub mod salary;

pub use config::Config;
pub use error::{CareerToolsError, Result};
pub use processing::analyzer::{analyze_resume, analyze_skills_gap, AnalysisEngine, AnalysisKind};
pub use processing::recommendation::{get_score_label, recommend, score_label, ColorHint, ScoreLabel};
pub use processing::scorer::{score, AnalysisResult, CategoryResult, KeywordMatch, KeywordScorer};
pub use processing::taxonomy::{KeywordCategory, Taxonomy};
pub use processing::text_matcher::{count_matches, KeywordMatcher};
pub use roles::{ExperienceLevel, Location, Role};
pub use salary::{calculate_salary, compare_cities, CityComparison, SalaryCalculator, SalaryRange, SalaryResult};
