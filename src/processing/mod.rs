//! Keyword matching and scoring engine

pub mod analyzer;
pub mod recommendation;
pub mod scorer;
pub mod taxonomy;
pub mod text_matcher;
