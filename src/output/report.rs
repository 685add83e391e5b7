//! Report envelope wrapping engine results with generation metadata

use crate::processing::analyzer::AnalysisKind;
use crate::processing::scorer::AnalysisResult;
use crate::roles::{ExperienceLevel, Location, Role};
use crate::salary::{CityComparison, SalaryResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of career-tools used
    pub tool_version: String,

    /// Input description: a file path, "inline text", or the salary query
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "report_type", rename_all = "snake_case")]
pub enum ReportBody {
    Analysis {
        kind: AnalysisKind,
        result: AnalysisResult,
    },
    Salary {
        result: SalaryResult,
    },
    CityComparison {
        role: Role,
        experience_level: ExperienceLevel,
        current_location: Location,
        skills: Vec<String>,
        comparisons: Vec<CityComparison>,
    },
}

impl ReportMetadata {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
        }
    }
}

impl Report {
    pub fn analysis(kind: AnalysisKind, result: AnalysisResult, source: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata::new(source),
            body: ReportBody::Analysis { kind, result },
        }
    }

    pub fn salary(result: SalaryResult) -> Self {
        let source = format!(
            "{} {} in {}",
            result.experience_level, result.role, result.location
        );
        Self {
            metadata: ReportMetadata::new(source),
            body: ReportBody::Salary { result },
        }
    }

    pub fn city_comparison(
        role: Role,
        experience_level: ExperienceLevel,
        current_location: Location,
        skills: Vec<String>,
        comparisons: Vec<CityComparison>,
    ) -> Self {
        let source = format!("{} {} from {}", experience_level, role, current_location);
        Self {
            metadata: ReportMetadata::new(source),
            body: ReportBody::CityComparison {
                role,
                experience_level,
                current_location,
                skills,
                comparisons,
            },
        }
    }

    pub fn title(&self) -> String {
        match &self.body {
            ReportBody::Analysis { kind, .. } => kind.to_string(),
            ReportBody::Salary { .. } => "Salary estimate".to_string(),
            ReportBody::CityComparison { .. } => "Salary comparison by location".to_string(),
        }
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$92,150` or `-$2,700`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::calculate_salary;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(92_150), "$92,150");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
        assert_eq!(format_currency(-2_700), "-$2,700");
    }

    #[test]
    fn test_salary_report_metadata() {
        let result = calculate_salary(
            Role::DataScientist,
            ExperienceLevel::Senior,
            Location::Canberra,
            &["Python"],
        );
        let report = Report::salary(result);

        assert_eq!(report.metadata.source, "Senior Data Scientist in Canberra");
        assert_eq!(report.metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.title(), "Salary estimate");
    }

    #[test]
    fn test_report_json_is_tagged() {
        let result = calculate_salary(
            Role::DataEngineer,
            ExperienceLevel::Mid,
            Location::Sydney,
            &["Kafka"],
        );
        let json = serde_json::to_value(Report::salary(result)).unwrap();
        assert_eq!(json["body"]["report_type"], "salary");
        assert_eq!(json["body"]["result"]["skill_bonus"], 7_000);
    }
}
