//! Error handling for the career tools engine and CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerToolsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid taxonomy: {0}")]
    Taxonomy(String),

    #[error("Invalid salary table: {0}")]
    SalaryTable(String),

    #[error("Failed to compile keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unknown {kind} '{value}'{}", suggestion_hint(.suggestion))]
    UnknownVariant {
        kind: &'static str,
        value: String,
        suggestion: Option<String>,
    },

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CareerToolsError>;
