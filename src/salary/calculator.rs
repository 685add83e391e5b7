//! Salary estimation with skill bonuses and city-by-city comparison

use crate::roles::{ExperienceLevel, Location, Role};
use crate::salary::tables::{scale, SalaryRange, SalaryTables};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillImpact {
    pub skill: String,
    pub category: String,
    /// Location-adjusted bonus in whole AUD.
    pub modifier: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryResult {
    pub role: Role,
    pub experience_level: ExperienceLevel,
    pub location: Location,
    pub base_salary: SalaryRange,
    pub skill_bonus: i64,
    pub skill_impacts: Vec<SkillImpact>,
    pub total_salary: SalaryRange,
    /// Selected skills with no modifier entry; they do not affect the totals.
    pub unrecognized_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityComparison {
    pub location: Location,
    pub salary: SalaryRange,
    pub difference_amount: i64,
    /// Relative to the current location's median, rounded to one decimal.
    pub difference_percentage: f64,
    pub is_current: bool,
}

/// Stateless calculator over a set of [`SalaryTables`].
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    tables: SalaryTables,
}

impl SalaryCalculator {
    pub fn new(tables: SalaryTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &SalaryTables {
        &self.tables
    }

    /// Base range for `(role, level)` scaled to `location`.
    pub fn base_salary(&self, role: Role, level: ExperienceLevel, location: Location) -> SalaryRange {
        self.tables
            .base_salary(role, level)
            .scaled(self.tables.multiplier(location))
    }

    pub fn calculate_salary<S: AsRef<str>>(
        &self,
        role: Role,
        level: ExperienceLevel,
        location: Location,
        selected_skills: &[S],
    ) -> SalaryResult {
        let multiplier = self.tables.multiplier(location);
        let base_salary = self.base_salary(role, level, location);

        let mut seen = HashSet::new();
        let mut skill_impacts = Vec::new();
        let mut unrecognized_skills = Vec::new();

        for selected in selected_skills {
            let name = selected.as_ref().trim();
            if name.is_empty() || !seen.insert(name.to_lowercase()) {
                continue;
            }

            match self.tables.find_skill(name) {
                Some(modifier) => skill_impacts.push(SkillImpact {
                    skill: modifier.skill.clone(),
                    category: modifier.category.clone(),
                    modifier: scale(modifier.modifier, multiplier),
                }),
                None => unrecognized_skills.push(name.to_string()),
            }
        }

        // Stable: equal bonuses keep selection order.
        skill_impacts.sort_by(|a, b| b.modifier.cmp(&a.modifier));

        let skill_bonus: i64 = skill_impacts.iter().map(|s| s.modifier).sum();
        let total_salary = base_salary.plus(skill_bonus);

        if !unrecognized_skills.is_empty() {
            debug!("Ignoring unrecognized skills: {}", unrecognized_skills.join(", "));
        }

        SalaryResult {
            role,
            experience_level: level,
            location,
            base_salary,
            skill_bonus,
            skill_impacts,
            total_salary,
            unrecognized_skills,
        }
    }

    /// Total salary in every location, with the difference from `current`.
    ///
    /// Sorted by median descending; ties keep [`Location::ALL`] order.
    pub fn compare_cities<S: AsRef<str>>(
        &self,
        role: Role,
        level: ExperienceLevel,
        selected_skills: &[S],
        current: Location,
    ) -> Vec<CityComparison> {
        let current_median = self
            .calculate_salary(role, level, current, selected_skills)
            .total_salary
            .median;

        if current_median == 0 {
            warn!("{} median is zero; percentage differences reported as 0", current);
        }

        let mut comparisons: Vec<CityComparison> = Location::ALL
            .iter()
            .map(|&location| {
                let salary = self
                    .calculate_salary(role, level, location, selected_skills)
                    .total_salary;
                let difference_amount = salary.median - current_median;

                CityComparison {
                    location,
                    salary,
                    difference_amount,
                    difference_percentage: percentage_difference(difference_amount, current_median),
                    is_current: location == current,
                }
            })
            .collect();

        comparisons.sort_by(|a, b| b.salary.median.cmp(&a.salary.median));
        comparisons
    }
}

fn percentage_difference(difference: i64, base: i64) -> f64 {
    if base == 0 {
        return 0.0;
    }
    (1000.0 * difference as f64 / base as f64).round() / 10.0
}

/// Calculate a salary against the built-in tables.
pub fn calculate_salary<S: AsRef<str>>(
    role: Role,
    level: ExperienceLevel,
    location: Location,
    selected_skills: &[S],
) -> SalaryResult {
    SalaryCalculator::default().calculate_salary(role, level, location, selected_skills)
}

/// Compare all locations against the built-in tables.
pub fn compare_cities<S: AsRef<str>>(
    role: Role,
    level: ExperienceLevel,
    selected_skills: &[S],
    current: Location,
) -> Vec<CityComparison> {
    SalaryCalculator::default().compare_cities(role, level, selected_skills, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_SKILLS: [&str; 0] = [];

    #[test]
    fn test_melbourne_scaling() {
        let result = calculate_salary(
            Role::MachineLearningEngineer,
            ExperienceLevel::Junior,
            Location::Melbourne,
            &NO_SKILLS,
        );
        assert_eq!(result.base_salary, SalaryRange::new(77_600, 92_150, 106_700));
        assert_eq!(result.skill_bonus, 0);
        assert_eq!(result.total_salary, result.base_salary);
        assert!(result.skill_impacts.is_empty());
    }

    #[test]
    fn test_skill_bonus_is_additive() {
        let result = calculate_salary(
            Role::MachineLearningEngineer,
            ExperienceLevel::Junior,
            Location::Sydney,
            &["Python", "AWS"],
        );
        assert_eq!(result.skill_bonus, 15_000);
        assert_eq!(result.total_salary.median, result.base_salary.median + 15_000);
        assert_eq!(result.total_salary.min, result.base_salary.min + 15_000);
        assert_eq!(result.total_salary.max, result.base_salary.max + 15_000);
        assert_eq!(result.skill_impacts[0].skill, "AWS");
        assert_eq!(result.skill_impacts[1].skill, "Python");
    }

    #[test]
    fn test_skill_bonus_is_location_adjusted() {
        let result = calculate_salary(
            Role::DataScientist,
            ExperienceLevel::Mid,
            Location::Hobart,
            &["AWS"],
        );
        assert_eq!(result.skill_bonus, 8_500);
        assert_eq!(result.skill_impacts[0].modifier, 8_500);
    }

    #[test]
    fn test_unknown_and_duplicate_skills() {
        let result = calculate_salary(
            Role::DataEngineer,
            ExperienceLevel::Senior,
            Location::Sydney,
            &["python", "Underwater Basket Weaving", "Python ", ""],
        );
        assert_eq!(result.skill_bonus, 5_000);
        assert_eq!(result.skill_impacts.len(), 1);
        assert_eq!(result.skill_impacts[0].skill, "Python");
        assert_eq!(result.unrecognized_skills, vec!["Underwater Basket Weaving".to_string()]);
    }

    #[test]
    fn test_skill_impacts_sorted_descending_with_stable_ties() {
        let result = calculate_salary(
            Role::NlpEngineer,
            ExperienceLevel::Lead,
            Location::Sydney,
            &["Docker", "NLP", "Python", "Deep Learning", "GCP", "Azure"],
        );
        let order: Vec<&str> = result.skill_impacts.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(order, vec!["NLP", "Deep Learning", "GCP", "Azure", "Docker", "Python"]);
    }

    #[test]
    fn test_compare_cities_current_row_is_zero() {
        let comparisons = compare_cities(
            Role::MachineLearningEngineer,
            ExperienceLevel::Senior,
            &["PyTorch"],
            Location::Brisbane,
        );
        assert_eq!(comparisons.len(), Location::ALL.len());

        let current: Vec<&CityComparison> = comparisons.iter().filter(|c| c.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].location, Location::Brisbane);
        assert_eq!(current[0].difference_amount, 0);
        assert_eq!(current[0].difference_percentage, 0.0);
    }

    #[test]
    fn test_compare_cities_sorted_by_median() {
        let comparisons = compare_cities(
            Role::DataScientist,
            ExperienceLevel::Junior,
            &NO_SKILLS,
            Location::Melbourne,
        );
        assert_eq!(comparisons[0].location, Location::Sydney);
        assert_eq!(comparisons.last().unwrap().location, Location::Hobart);
        assert!(comparisons.windows(2).all(|w| w[0].salary.median >= w[1].salary.median));

        let sydney = &comparisons[0];
        // 90 000 vs 87 300 in Melbourne.
        assert_eq!(sydney.difference_amount, 2_700);
        assert_eq!(sydney.difference_percentage, 3.1);
    }

    #[test]
    fn test_compare_cities_negative_difference() {
        let comparisons = compare_cities(
            Role::DataScientist,
            ExperienceLevel::Junior,
            &NO_SKILLS,
            Location::Sydney,
        );
        let hobart = comparisons
            .iter()
            .find(|c| c.location == Location::Hobart)
            .unwrap();
        assert_eq!(hobart.salary.median, 76_500);
        assert_eq!(hobart.difference_amount, -13_500);
        assert_eq!(hobart.difference_percentage, -15.0);
    }

    #[test]
    fn test_percentage_difference_zero_base() {
        assert_eq!(percentage_difference(500, 0), 0.0);
        assert_eq!(percentage_difference(1, 3), 33.3);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let calculator = SalaryCalculator::default();
        let skills = vec!["Spark".to_string(), "Kafka".to_string()];
        let first = calculator.calculate_salary(Role::DataEngineer, ExperienceLevel::Mid, Location::Perth, &skills);
        let second = calculator.calculate_salary(Role::DataEngineer, ExperienceLevel::Mid, Location::Perth, &skills);
        assert_eq!(first, second);
    }
}
