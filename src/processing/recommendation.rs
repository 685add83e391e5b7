//! Rule-based guidance and presentation hints derived from a score

use serde::{Deserialize, Serialize};

const EXCELLENT_THRESHOLD: i64 = 70;
const GOOD_THRESHOLD: i64 = 50;
const FAIR_THRESHOLD: i64 = 30;
/// Below the fair band, this many keywords separates "thin" from "missing".
const MIN_KEYWORDS_FOUND: i64 = 5;

/// Abstract colour category for a score, left to the caller to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHint {
    Positive,
    Informational,
    Warning,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLabel {
    pub label: String,
    pub color_hint: ColorHint,
}

/// Guidance text for an overall percentage and number of keywords found.
///
/// Out-of-range inputs are clamped: percentage to `0..=100`, count to `>= 0`.
pub fn recommend(percentage: i64, keywords_found: i64) -> &'static str {
    let percentage = percentage.clamp(0, 100);
    let keywords_found = keywords_found.max(0);

    if percentage >= EXCELLENT_THRESHOLD {
        "Excellent! Your resume is well-optimized for AI/ML roles. Keep it updated with \
         your latest projects and measurable results."
    } else if percentage >= GOOD_THRESHOLD {
        "Good keyword coverage. Add a few more specific frameworks and tools you have \
         used, and quantify the impact of your work."
    } else if percentage >= FAIR_THRESHOLD {
        "Fair coverage. Include more relevant technical keywords from the categories \
         below and describe the ML systems you have built in concrete terms."
    } else if keywords_found >= MIN_KEYWORDS_FOUND {
        "Your resume needs more technical keywords. Highlight the frameworks, cloud \
         platforms and ML techniques you work with, using the names recruiters search for."
    } else {
        "Your resume appears to lack the keywords applicant tracking systems look for. \
         Add a dedicated skills section listing your languages, frameworks and tools."
    }
}

pub fn score_label(percentage: i64) -> ScoreLabel {
    let percentage = percentage.clamp(0, 100);

    let (label, color_hint) = if percentage >= EXCELLENT_THRESHOLD {
        ("Excellent", ColorHint::Positive)
    } else if percentage >= GOOD_THRESHOLD {
        ("Good", ColorHint::Informational)
    } else if percentage >= FAIR_THRESHOLD {
        ("Fair", ColorHint::Warning)
    } else {
        ("Needs Work", ColorHint::Negative)
    };

    ScoreLabel {
        label: label.to_string(),
        color_hint,
    }
}

/// Alias kept for callers used to the `getScoreLabel` name.
pub fn get_score_label(percentage: i64) -> ScoreLabel {
    score_label(percentage)
}
