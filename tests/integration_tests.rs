//! Integration tests for career tools

use career_tools::config::OutputFormat;
use career_tools::input::InputManager;
use career_tools::output::formatter::{save_report_to_file, ReportGenerator};
use career_tools::output::report::Report;
use career_tools::{
    analyze_resume, analyze_skills_gap, calculate_salary, compare_cities, count_matches, score,
    AnalysisEngine, AnalysisKind, CareerToolsError, ExperienceLevel, KeywordCategory, Location,
    Role, Taxonomy,
};
use std::path::Path;

const NO_SKILLS: [&str; 0] = [];

fn language_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        KeywordCategory::new("Languages", 2.5, &["Python", "R", "C++"]),
        KeywordCategory::new("Cloud", 1.0, &["AWS", "GCP"]),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Citizen"));
    assert!(text.contains("Machine Learning Engineer"));
    assert!(text.contains("PyTorch"));
    assert!(text.contains("Kubernetes"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Citizen"));
    assert!(text.contains("Machine Learning Engineer"));
    assert!(text.contains("PyTorch"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains("https://"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CareerToolsError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(CareerToolsError::InvalidInput(_))));
}

#[tokio::test]
async fn test_analyze_sample_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let result = analyze_resume(&text).unwrap();
    let frameworks = &result.category_results[0];
    assert_eq!(frameworks.name, "ML/AI Frameworks");

    let found: Vec<&str> = frameworks
        .found_keywords
        .iter()
        .map(|m| m.keyword.as_str())
        .collect();
    assert!(found.contains(&"PyTorch"));
    assert!(found.contains(&"XGBoost"));
    assert!(frameworks.missing_keywords.contains(&"JAX".to_string()));

    assert!(result.percentage > 0);
    assert!(result.total_keywords_found >= 15);
    assert!(result.readability_stats.word_count > 50);
    assert_eq!(result.readability_stats.estimated_reading_time_minutes, 1);
}

#[tokio::test]
async fn test_skills_gap_on_sample_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let result = analyze_skills_gap(Role::MachineLearningEngineer, &text).unwrap();
    let core = &result.category_results[0];
    assert_eq!(core.name, "Core Skills");
    assert!(core.missing_keywords.contains(&"Model Deployment".to_string()));
    assert!(core.found_keywords.iter().any(|m| m.keyword == "Python"));

    let top = &result.top_missing_keywords[0];
    assert_eq!(top.category, "Core Skills");
    assert_eq!(top.weight, 3.0);
}

#[test]
fn test_scoring_is_deterministic() {
    let taxonomy = Taxonomy::resume();
    let text = "Python and PyTorch on AWS. Led a team, improved latency, deployed models.";

    let first = score(&taxonomy, text).unwrap();
    let second = score(&taxonomy, text).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_found_and_missing_partition_each_category() {
    let text = "Python, SQL, Docker, Kubernetes, Spark, Kafka, Leadership";

    for taxonomy in [Taxonomy::resume(), Taxonomy::for_role(Role::DataEngineer)] {
        let result = score(&taxonomy, text).unwrap();

        for (category, outcome) in taxonomy.categories().iter().zip(&result.category_results) {
            assert_eq!(
                outcome.found_keywords.len() + outcome.missing_keywords.len(),
                category.keywords.len()
            );
            for keyword in &category.keywords {
                let found = outcome.found_keywords.iter().any(|m| &m.keyword == keyword);
                let missing = outcome.missing_keywords.contains(keyword);
                assert!(found != missing, "{} must be exactly one of found/missing", keyword);
            }
        }
    }
}

#[test]
fn test_score_bounds() {
    let texts = [
        "",
        "Python",
        "TensorFlow PyTorch Keras scikit-learn JAX Hugging Face XGBoost LightGBM LangChain OpenCV spaCy ONNX",
        "Python Python Python Rust Go Java SQL R Scala Julia C++ AWS Azure GCP",
    ];

    for text in texts {
        let result = analyze_resume(text).unwrap();
        assert!(result.percentage <= 100);
        for category in &result.category_results {
            assert!(category.score >= 0.0);
            assert!(category.score <= category.max_score);
        }
    }
}

#[test]
fn test_whole_word_boundary() {
    assert_eq!(count_matches("I use R and Python", "R").unwrap(), 1);
    assert_eq!(count_matches("I use Rust", "R").unwrap(), 0);

    let result = score(&language_taxonomy(), "I use Rust").unwrap();
    assert!(result.category_results[0]
        .missing_keywords
        .contains(&"R".to_string()));
}

#[test]
fn test_literal_special_characters() {
    assert!(count_matches("Skilled in C++ and C#", "C++").unwrap() >= 1);

    let result = score(&language_taxonomy(), "Skilled in C++ and C#").unwrap();
    let languages = &result.category_results[0];
    assert_eq!(languages.found_keywords[0].keyword, "C++");
}

#[test]
fn test_repeated_occurrence_counts_once_in_score() {
    let result = score(&language_taxonomy(), "Python Python Python").unwrap();
    let languages = &result.category_results[0];

    assert_eq!(languages.score, 2.5);
    assert_eq!(languages.found_keywords.len(), 1);
    assert_eq!(languages.found_keywords[0].count, 3);
}

#[test]
fn test_top_missing_keywords_cap_and_order() {
    let result = analyze_resume("Python").unwrap();
    let top = &result.top_missing_keywords;

    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|pair| pair[0].weight >= pair[1].weight));
    assert_eq!(top[0].keyword, "TensorFlow");

    let small = score(&language_taxonomy(), "").unwrap();
    let keywords: Vec<&str> = small
        .top_missing_keywords
        .iter()
        .map(|m| m.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["Python", "R", "C++", "AWS", "GCP"]);
}

#[test]
fn test_salary_scaling_example() {
    let result = calculate_salary(
        Role::MachineLearningEngineer,
        ExperienceLevel::Junior,
        Location::Melbourne,
        &NO_SKILLS,
    );

    assert_eq!(result.base_salary.min, 77_600);
    assert_eq!(result.base_salary.median, 92_150);
    assert_eq!(result.base_salary.max, 106_700);
    assert_eq!(result.skill_bonus, 0);
    assert_eq!(result.total_salary, result.base_salary);
}

#[test]
fn test_skill_bonus_additivity() {
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
}

#[test]
fn test_city_comparison_self_consistency() {
    for current in Location::ALL {
        let comparisons = compare_cities(
            Role::DataScientist,
            ExperienceLevel::Mid,
            &["Python", "Spark"],
            current,
        );

        assert_eq!(comparisons.len(), Location::ALL.len());
        let own = comparisons
            .iter()
            .find(|c| c.location == current)
            .unwrap();
        assert!(own.is_current);
        assert_eq!(own.difference_amount, 0);
        assert_eq!(own.difference_percentage, 0.0);
        assert!(comparisons
            .windows(2)
            .all(|pair| pair[0].salary.median >= pair[1].salary.median));
    }
}

#[test]
fn test_empty_input() {
    let result = analyze_resume("").unwrap();

    assert_eq!(result.total_keywords_found, 0);
    assert_eq!(result.percentage, 0);
    assert!(!result.recommendation.is_empty());
    assert_eq!(result.readability_stats.word_count, 0);
    assert_eq!(result.readability_stats.estimated_reading_time_minutes, 0);
}

#[test]
fn test_custom_taxonomy_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taxonomy.toml");
    std::fs::write(&path, language_taxonomy().to_toml_string().unwrap()).unwrap();

    let taxonomy = Taxonomy::load(&path).unwrap();
    assert_eq!(taxonomy, language_taxonomy());

    let engine = AnalysisEngine::with_taxonomy(taxonomy).unwrap();
    assert_eq!(engine.kind(), &AnalysisKind::Custom);

    let result = engine.analyze("Python on GCP");
    assert_eq!(result.total_keywords_found, 2);
    assert_eq!(result.total_score, 3.5);
    assert_eq!(result.max_score, 9.5);
    assert_eq!(result.percentage, 37);
}

#[test]
fn test_report_rendering_and_saving() {
    let result = analyze_resume("Python, PyTorch and AWS").unwrap();
    let report = Report::analysis(AnalysisKind::Resume, result, "inline text");
    let generator = ReportGenerator::with_options(false, true, true, true);

    let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["body"]["report_type"], "analysis");
    assert_eq!(value["metadata"]["source"], "inline text");

    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("Resume analysis"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("cv_report.json");
    save_report_to_file(&json, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), json);
}
