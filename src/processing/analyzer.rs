//! Analysis entry points: resume analyser and skills-gap analyser

use crate::error::Result;
use crate::processing::scorer::{AnalysisResult, KeywordScorer};
use crate::processing::taxonomy::Taxonomy;
use crate::roles::Role;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which taxonomy an [`AnalysisEngine`] scores against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "role", rename_all = "snake_case")]
pub enum AnalysisKind {
    Resume,
    SkillsGap(Role),
    Custom,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisKind::Resume => write!(f, "Resume analysis"),
            AnalysisKind::SkillsGap(role) => write!(f, "Skills gap analysis ({})", role),
            AnalysisKind::Custom => write!(f, "Custom taxonomy analysis"),
        }
    }
}

/// Reusable analyser holding a compiled scorer.
///
/// Build one at startup and call [`AnalysisEngine::analyze`] per document.
pub struct AnalysisEngine {
    scorer: KeywordScorer,
    kind: AnalysisKind,
}

impl AnalysisEngine {
    pub fn resume() -> Result<Self> {
        Self::build(Taxonomy::resume(), AnalysisKind::Resume)
    }

    pub fn skills_gap(role: Role) -> Result<Self> {
        Self::build(Taxonomy::for_role(role), AnalysisKind::SkillsGap(role))
    }

    pub fn with_taxonomy(taxonomy: Taxonomy) -> Result<Self> {
        Self::build(taxonomy, AnalysisKind::Custom)
    }

    fn build(taxonomy: Taxonomy, kind: AnalysisKind) -> Result<Self> {
        info!(
            "Initializing {} engine ({} categories, {} keywords)",
            kind,
            taxonomy.categories().len(),
            taxonomy.keyword_count()
        );
        Ok(Self {
            scorer: KeywordScorer::new(taxonomy)?,
            kind,
        })
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.scorer.analyze(text)
    }

    pub fn kind(&self) -> &AnalysisKind {
        &self.kind
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.scorer.taxonomy()
    }
}

/// Score a resume against the built-in resume taxonomy.
pub fn analyze_resume(text: &str) -> Result<AnalysisResult> {
    Ok(AnalysisEngine::resume()?.analyze(text))
}

/// Score a resume against the skills expected for `role`.
pub fn analyze_skills_gap(role: Role, text: &str) -> Result<AnalysisResult> {
    Ok(AnalysisEngine::skills_gap(role)?.analyze(text))
}
