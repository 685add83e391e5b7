//! Category and overall scoring of a text against a keyword taxonomy

use crate::error::Result;
use crate::processing::recommendation::{recommend, score_label, ScoreLabel};
use crate::processing::taxonomy::{KeywordCategory, Taxonomy};
use crate::processing::text_matcher::KeywordMatcher;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of entries in [`AnalysisResult::top_missing_keywords`].
pub const TOP_MISSING_LIMIT: usize = 10;
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub count: usize,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: String,
    pub weight: f64,
    pub found_keywords: Vec<KeywordMatch>,
    pub missing_keywords: Vec<String>,
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub keyword: String,
    pub category: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadabilityStats {
    pub word_count: usize,
    pub character_count: usize,
    pub estimated_reading_time_minutes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_score: f64,
    pub max_score: f64,
    /// Rounded `100 * total_score / max_score`, in `0..=100`.
    pub percentage: u8,
    pub category_results: Vec<CategoryResult>,
    pub total_keywords_found: usize,
    pub total_keywords_possible: usize,
    pub top_missing_keywords: Vec<MissingKeyword>,
    pub recommendation: String,
    pub score_label: ScoreLabel,
    pub readability_stats: ReadabilityStats,
}

struct CompiledCategory {
    category: KeywordCategory,
    matchers: Vec<KeywordMatcher>,
}

/// Scorer bound to one taxonomy, with every keyword pattern compiled up front.
pub struct KeywordScorer {
    taxonomy: Taxonomy,
    compiled: Vec<CompiledCategory>,
}

impl KeywordScorer {
    pub fn new(taxonomy: Taxonomy) -> Result<Self> {
        let compiled = taxonomy
            .categories()
            .iter()
            .map(|category| {
                let matchers = category
                    .keywords
                    .iter()
                    .map(|keyword| KeywordMatcher::new(keyword))
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledCategory {
                    category: category.clone(),
                    matchers,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if taxonomy.max_score() == 0.0 {
            warn!("Taxonomy has no scoreable keywords; every analysis will report 0%");
        }

        Ok(Self { taxonomy, compiled })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Score `text` against the taxonomy. Pure: equal inputs give equal results.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let category_results: Vec<CategoryResult> = self
            .compiled
            .iter()
            .map(|compiled| score_category(compiled, text))
            .collect();

        let total_score: f64 = category_results.iter().map(|c| c.score).sum();
        let max_score: f64 = category_results.iter().map(|c| c.max_score).sum();
        let percentage = percentage_of(total_score, max_score);

        let total_keywords_found = category_results
            .iter()
            .map(|c| c.found_keywords.len())
            .sum::<usize>();
        let total_keywords_possible = self.taxonomy.keyword_count();

        let top_missing_keywords = top_missing_keywords(&category_results);

        debug!(
            "Scored {} categories: {:.1}/{:.1} ({}%), {}/{} keywords found",
            category_results.len(),
            total_score,
            max_score,
            percentage,
            total_keywords_found,
            total_keywords_possible
        );

        AnalysisResult {
            total_score,
            max_score,
            percentage,
            category_results,
            total_keywords_found,
            total_keywords_possible,
            top_missing_keywords,
            recommendation: recommend(i64::from(percentage), total_keywords_found as i64)
                .to_string(),
            score_label: score_label(i64::from(percentage)),
            readability_stats: readability_stats(text),
        }
    }
}

/// Score a text against a taxonomy in one call.
pub fn score(taxonomy: &Taxonomy, text: &str) -> Result<AnalysisResult> {
    Ok(KeywordScorer::new(taxonomy.clone())?.analyze(text))
}

fn score_category(compiled: &CompiledCategory, text: &str) -> CategoryResult {
    let category = &compiled.category;
    let mut found_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    for (keyword, matcher) in category.keywords.iter().zip(&compiled.matchers) {
        match matcher.count(text) {
            0 => missing_keywords.push(keyword.clone()),
            count => found_keywords.push(KeywordMatch {
                keyword: keyword.clone(),
                count,
                category: category.name.clone(),
            }),
        }
    }

    // Weight counts once per distinct keyword, not per occurrence.
    let score = category.weight * found_keywords.len() as f64;

    CategoryResult {
        name: category.name.clone(),
        weight: category.weight,
        found_keywords,
        missing_keywords,
        score,
        max_score: category.max_score(),
    }
}

fn percentage_of(total: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    (100.0 * total / max).round().clamp(0.0, 100.0) as u8
}

fn top_missing_keywords(category_results: &[CategoryResult]) -> Vec<MissingKeyword> {
    let mut missing: Vec<MissingKeyword> = category_results
        .iter()
        .flat_map(|category| {
            category.missing_keywords.iter().map(move |keyword| MissingKeyword {
                keyword: keyword.clone(),
                category: category.name.clone(),
                weight: category.weight,
            })
        })
        .collect();

    // Stable: equal weights keep taxonomy declaration order.
    missing.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    missing.truncate(TOP_MISSING_LIMIT);
    missing
}

pub fn readability_stats(text: &str) -> ReadabilityStats {
    let word_count = text.unicode_words().count();
    let character_count = text.graphemes(true).count();

    ReadabilityStats {
        word_count,
        character_count,
        estimated_reading_time_minutes: word_count.div_ceil(WORDS_PER_MINUTE),
    }
}
