//! CLI interface for career tools

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-tools")]
#[command(about = "Resume, skills-gap and salary scoring for AI/ML job seekers")]
#[command(long_about = "Score resumes against weighted keyword taxonomies, find skill gaps for a target role, and estimate salaries across locations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Where the text to analyse comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TextSource {
    /// Path to resume file (PDF, TXT, MD)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Resume text given inline
    #[arg(short, long)]
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format: console, json, markdown (defaults to the configured format)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Output detailed analysis
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Args, Debug)]
pub struct SalaryArgs {
    /// Target role, e.g. "Machine Learning Engineer"
    #[arg(short, long)]
    pub role: String,

    /// Experience level: junior, mid, senior, lead
    #[arg(short, long)]
    pub experience: String,

    /// Location (defaults to the configured location)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Selected skill; repeat or separate with commas
    #[arg(short = 'k', long = "skill", value_delimiter = ',')]
    pub skills: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against the resume keyword taxonomy
    Analyze {
        #[command(flatten)]
        source: TextSource,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Find the skills a resume is missing for a target role
    SkillsGap {
        /// Target role, e.g. "Data Engineer"
        #[arg(short, long)]
        role: String,

        #[command(flatten)]
        source: TextSource,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Estimate a salary from role, experience, location and skills
    Salary {
        #[command(flatten)]
        salary: SalaryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compare the estimated salary across all locations
    CompareCities {
        #[command(flatten)]
        salary: SalaryArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the keyword taxonomy in use
    Taxonomy {
        /// Show the skills-gap taxonomy of this role instead
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_salary_with_comma_separated_skills() {
        let cli = Cli::try_parse_from([
            "career-tools", "salary", "--role", "Data Scientist", "--experience", "mid",
            "--skill", "Python,AWS", "-k", "Spark",
        ])
        .unwrap();

        match cli.command {
            Commands::Salary { salary, output } => {
                assert_eq!(salary.role, "Data Scientist");
                assert_eq!(salary.skills, vec!["Python", "AWS", "Spark"]);
                assert!(salary.location.is_none());
                assert!(output.output.is_none());
            }
            _ => panic!("expected salary command"),
        }
    }

    #[test]
    fn test_analyze_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["career-tools", "analyze"]).is_err());
        assert!(Cli::try_parse_from([
            "career-tools", "analyze", "--file", "cv.txt", "--text", "Python"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["career-tools", "analyze", "--text", "Python"]).is_ok());
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
