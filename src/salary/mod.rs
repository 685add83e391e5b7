//! Salary calculator: base ranges by role, experience and location plus skill bonuses

pub mod calculator;
pub mod tables;

pub use calculator::{calculate_salary, compare_cities, CityComparison, SalaryCalculator, SalaryResult, SkillImpact};
pub use tables::{SalaryRange, SalaryTables, SkillModifier};
