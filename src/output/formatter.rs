//! Output formatters: colored console, JSON and markdown

use crate::config::OutputFormat;
use crate::error::{CareerToolsError, Result};
use crate::output::report::{format_currency, Report, ReportBody};
use crate::processing::analyzer::AnalysisKind;
use crate::processing::recommendation::ColorHint;
use crate::processing::scorer::AnalysisResult;
use crate::roles::{ExperienceLevel, Location, Role};
use crate::salary::{CityComparison, SalaryResult};
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering a report in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn hint_color(hint: ColorHint) -> Color {
    match hint {
        ColorHint::Positive => Color::Green,
        ColorHint::Informational => Color::Cyan,
        ColorHint::Warning => Color::Yellow,
        ColorHint::Negative => Color::Red,
    }
}

fn write_err(e: std::fmt::Error) -> CareerToolsError {
    CareerToolsError::OutputFormatting(e.to_string())
}

fn signed_percentage(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

fn signed_currency(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, result: &AnalysisResult) -> String {
        let label = result.score_label.label.to_uppercase();
        if self.use_colors {
            format!("[{}]", label.as_str().color(hint_color(result.score_label.color_hint)).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_analysis(&self, out: &mut String, kind: &AnalysisKind, result: &AnalysisResult) -> std::fmt::Result {
        out.push_str(&self.format_header(&kind.to_string().to_uppercase(), 1));
        writeln!(
            out,
            "Overall Score: {}% {}  ({:.1} / {:.1} points)",
            result.percentage,
            self.format_score_badge(result),
            result.total_score,
            result.max_score
        )?;
        writeln!(
            out,
            "Keywords found: {} of {}",
            result.total_keywords_found, result.total_keywords_possible
        )?;

        out.push_str(&self.format_header("Category Breakdown", 2));
        for category in &result.category_results {
            writeln!(
                out,
                "  • {}: {:.1}/{:.1} ({}/{} keywords)",
                category.name,
                category.score,
                category.max_score,
                category.found_keywords.len(),
                category.found_keywords.len() + category.missing_keywords.len()
            )?;

            if self.detailed {
                if !category.found_keywords.is_empty() {
                    let found: Vec<String> = category
                        .found_keywords
                        .iter()
                        .map(|m| format!("{} ×{}", m.keyword, m.count))
                        .collect();
                    writeln!(out, "    {} {}", self.colorize("found:", Color::Green), found.join(", "))?;
                }
                if !category.missing_keywords.is_empty() {
                    writeln!(
                        out,
                        "    {} {}",
                        self.colorize("missing:", Color::Yellow),
                        category.missing_keywords.join(", ")
                    )?;
                }
            }
        }

        if !result.top_missing_keywords.is_empty() {
            out.push_str(&self.format_header("🎯 Top Missing Keywords", 3));
            for (i, missing) in result.top_missing_keywords.iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {} ({}, weight {:.1})",
                    i + 1,
                    self.colorize(&missing.keyword, Color::Yellow),
                    missing.category,
                    missing.weight
                )?;
            }
        }

        out.push_str(&self.format_header("💡 Recommendation", 3));
        writeln!(out, "{}", self.colorize(&result.recommendation, Color::Cyan))?;

        let stats = &result.readability_stats;
        out.push_str(&self.format_header("Readability", 3));
        writeln!(
            out,
            "{} words, {} characters, ~{} min read",
            stats.word_count, stats.character_count, stats.estimated_reading_time_minutes
        )
    }

    fn format_salary(&self, out: &mut String, result: &SalaryResult) -> std::fmt::Result {
        out.push_str(&self.format_header("💰 SALARY ESTIMATE", 1));
        writeln!(
            out,
            "{} {} in {}",
            result.experience_level, result.role, result.location
        )?;

        out.push_str(&self.format_header("Base Salary", 2));
        writeln!(
            out,
            "  {} – {} (median {})",
            format_currency(result.base_salary.min),
            format_currency(result.base_salary.max),
            format_currency(result.base_salary.median)
        )?;

        if !result.skill_impacts.is_empty() {
            out.push_str(&self.format_header("Skill Impact", 2));
            for impact in &result.skill_impacts {
                writeln!(
                    out,
                    "  • {} ({}): {}",
                    impact.skill,
                    impact.category,
                    self.colorize(&signed_currency(impact.modifier), Color::Green)
                )?;
            }
            writeln!(out, "  Total skill bonus: {}", signed_currency(result.skill_bonus))?;
        }

        if self.detailed && !result.unrecognized_skills.is_empty() {
            writeln!(
                out,
                "  {} {}",
                self.colorize("Not in salary data:", Color::Yellow),
                result.unrecognized_skills.join(", ")
            )?;
        }

        out.push_str(&self.format_header("Estimated Total", 2));
        let median = format_currency(result.total_salary.median);
        writeln!(
            out,
            "  {} – {} (median {})",
            format_currency(result.total_salary.min),
            format_currency(result.total_salary.max),
            if self.use_colors { median.as_str().bold().to_string() } else { median }
        )
    }

    fn format_cities(
        &self,
        out: &mut String,
        role: Role,
        level: ExperienceLevel,
        current: Location,
        comparisons: &[CityComparison],
    ) -> std::fmt::Result {
        out.push_str(&self.format_header("🌏 SALARY BY LOCATION", 1));
        writeln!(out, "{} {}, compared with {}", level, role, current)?;
        writeln!(out)?;
        writeln!(out, "  {:<12} {:>12} {:>12} {:>9}", "Location", "Median", "Difference", "%")?;

        for row in comparisons {
            let marker = if row.is_current { "*" } else { " " };
            let color = match row.difference_amount {
                d if d > 0 => Color::Green,
                d if d < 0 => Color::Red,
                _ => Color::White,
            };
            let difference = format!(
                "{:>12} {:>9}",
                signed_currency(row.difference_amount),
                signed_percentage(row.difference_percentage)
            );
            writeln!(
                out,
                "{} {:<12} {:>12} {}",
                marker,
                row.location.name(),
                format_currency(row.salary.median),
                self.colorize(&difference, color)
            )?;
            if self.detailed {
                writeln!(
                    out,
                    "    range {} – {}",
                    format_currency(row.salary.min),
                    format_currency(row.salary.max)
                )?;
            }
        }
        Ok(())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        let written = match &report.body {
            ReportBody::Analysis { kind, result } => self.format_analysis(&mut output, kind, result),
            ReportBody::Salary { result } => self.format_salary(&mut output, result),
            ReportBody::CityComparison {
                role,
                experience_level,
                current_location,
                comparisons,
                ..
            } => self.format_cities(&mut output, *role, *experience_level, *current_location, comparisons),
        };
        written.map_err(write_err)?;

        if self.detailed {
            writeln!(
                output,
                "\nGenerated: {} | Source: {}",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.source
            )
            .map_err(write_err)?;
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badge(hint: ColorHint) -> &'static str {
        match hint {
            ColorHint::Positive => "🟢",
            ColorHint::Informational => "🔵",
            ColorHint::Warning => "🟡",
            ColorHint::Negative => "🔴",
        }
    }

    fn format_analysis(out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
        writeln!(
            out,
            "**Overall Score:** {}% {} {}\n",
            result.percentage,
            Self::markdown_badge(result.score_label.color_hint),
            result.score_label.label
        )?;
        writeln!(
            out,
            "**Keywords found:** {} of {}\n",
            result.total_keywords_found, result.total_keywords_possible
        )?;

        writeln!(out, "## Category Breakdown\n")?;
        writeln!(out, "| Category | Score | Found | Missing |")?;
        writeln!(out, "|----------|-------|-------|---------|")?;
        for category in &result.category_results {
            let found: Vec<&str> = category
                .found_keywords
                .iter()
                .map(|m| m.keyword.as_str())
                .collect();
            writeln!(
                out,
                "| {} | {:.1}/{:.1} | {} | {} |",
                category.name,
                category.score,
                category.max_score,
                found.join(", "),
                category.missing_keywords.join(", ")
            )?;
        }

        if !result.top_missing_keywords.is_empty() {
            writeln!(out, "\n## Top Missing Keywords\n")?;
            for missing in &result.top_missing_keywords {
                writeln!(out, "- **{}** ({})", missing.keyword, missing.category)?;
            }
        }

        writeln!(out, "\n## Recommendation\n\n{}\n", result.recommendation)?;
        writeln!(
            out,
            "_{} words · {} characters · ~{} min read_",
            result.readability_stats.word_count,
            result.readability_stats.character_count,
            result.readability_stats.estimated_reading_time_minutes
        )
    }

    fn format_salary(out: &mut String, result: &SalaryResult) -> std::fmt::Result {
        writeln!(out, "| | Min | Median | Max |")?;
        writeln!(out, "|-|-----|--------|-----|")?;
        for (label, range) in [("Base", result.base_salary), ("Total", result.total_salary)] {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                label,
                format_currency(range.min),
                format_currency(range.median),
                format_currency(range.max)
            )?;
        }

        if !result.skill_impacts.is_empty() {
            writeln!(out, "\n## Skill Impact\n")?;
            for impact in &result.skill_impacts {
                writeln!(
                    out,
                    "- {} ({}): {}",
                    impact.skill,
                    impact.category,
                    signed_currency(impact.modifier)
                )?;
            }
            writeln!(out, "\n**Total skill bonus:** {}", signed_currency(result.skill_bonus))?;
        }
        Ok(())
    }

    fn format_cities(out: &mut String, comparisons: &[CityComparison]) -> std::fmt::Result {
        writeln!(out, "| Location | Median | Difference | % |")?;
        writeln!(out, "|----------|--------|------------|---|")?;
        for row in comparisons {
            let name = if row.is_current {
                format!("**{}**", row.location)
            } else {
                row.location.to_string()
            };
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                name,
                format_currency(row.salary.median),
                signed_currency(row.difference_amount),
                signed_percentage(row.difference_percentage)
            )?;
        }
        Ok(())
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# {}\n", report.title()).map_err(write_err)?;
        if self.include_metadata {
            writeln!(
                output,
                "**Generated:** {} | **Source:** `{}`\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.source
            )
            .map_err(write_err)?;
        }

        let written = match &report.body {
            ReportBody::Analysis { result, .. } => Self::format_analysis(&mut output, result),
            ReportBody::Salary { result } => Self::format_salary(&mut output, result),
            ReportBody::CityComparison { comparisons, .. } => Self::format_cities(&mut output, comparisons),
        };
        written.map_err(write_err)?;

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, base_name: &str, timestamp: bool) -> String {
    let stem = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_report{}.txt", stem, timestamp_suffix),
        OutputFormat::Json => format!("{}_report{}.json", stem, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_report{}.md", stem, timestamp_suffix),
    }
}
