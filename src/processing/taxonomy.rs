//! Weighted keyword taxonomies: the static reference data the scorer runs over

use crate::error::{CareerToolsError, Result};
use crate::roles::Role;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A named group of keywords sharing one per-match weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
    pub weight: f64,
}

impl KeywordCategory {
    pub fn new(name: impl Into<String>, weight: f64, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }

    /// Best possible score for this category, independent of any text.
    pub fn max_score(&self) -> f64 {
        self.weight * self.keywords.len() as f64
    }
}

/// An ordered, immutable set of keyword categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Taxonomy {
    categories: Vec<KeywordCategory>,
}

#[derive(Deserialize)]
struct TaxonomyFile {
    #[serde(default)]
    categories: Vec<KeywordCategory>,
}

struct CategoryDef {
    name: &'static str,
    weight: f64,
    keywords: &'static [&'static str],
}

impl Taxonomy {
    /// Build a taxonomy, rejecting duplicate names, duplicate keywords and bad weights.
    pub fn new(categories: Vec<KeywordCategory>) -> Result<Self> {
        let mut names = HashSet::new();

        for category in &categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(CareerToolsError::Taxonomy(
                    "category name must not be empty".to_string(),
                ));
            }
            if !names.insert(name.to_lowercase()) {
                return Err(CareerToolsError::Taxonomy(format!(
                    "duplicate category '{}'",
                    name
                )));
            }
            if !category.weight.is_finite() || category.weight < 0.0 {
                return Err(CareerToolsError::Taxonomy(format!(
                    "category '{}' has invalid weight {}",
                    name, category.weight
                )));
            }

            let mut seen = HashSet::new();
            for keyword in &category.keywords {
                let normalized = keyword.trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(CareerToolsError::Taxonomy(format!(
                        "category '{}' contains an empty keyword",
                        name
                    )));
                }
                if !seen.insert(normalized) {
                    return Err(CareerToolsError::Taxonomy(format!(
                        "category '{}' lists keyword '{}' more than once",
                        name,
                        keyword.trim()
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// A taxonomy with no categories. Scores against it are always 0%.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(content).map_err(|e| {
            CareerToolsError::Taxonomy(format!("Failed to parse taxonomy: {}", e))
        })?;
        Self::new(file.categories)
    }

    /// Load a custom taxonomy file. Meant to run once at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_toml_str(&content)?;
        info!(
            "Loaded taxonomy from {} ({} categories, {} keywords)",
            path.display(),
            taxonomy.categories.len(),
            taxonomy.keyword_count()
        );
        Ok(taxonomy)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            CareerToolsError::Taxonomy(format!("Failed to serialize taxonomy: {}", e))
        })
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }

    pub fn max_score(&self) -> f64 {
        self.categories.iter().map(KeywordCategory::max_score).sum()
    }

    /// Built-in resume analyser taxonomy.
    pub fn resume() -> Self {
        Self::from_defs(RESUME_CATEGORIES)
    }

    /// Built-in skills-gap taxonomy for a target role.
    pub fn for_role(role: Role) -> Self {
        let defs = match role {
            Role::MachineLearningEngineer => ML_ENGINEER_SKILLS,
            Role::DataScientist => DATA_SCIENTIST_SKILLS,
            Role::DataEngineer => DATA_ENGINEER_SKILLS,
            Role::MlopsEngineer => MLOPS_ENGINEER_SKILLS,
            Role::AiResearchScientist => AI_RESEARCH_SCIENTIST_SKILLS,
            Role::NlpEngineer => NLP_ENGINEER_SKILLS,
        };
        Self::from_defs(defs)
    }

    // Built-in tables are checked through `Taxonomy::new` in the tests below.
    fn from_defs(defs: &[CategoryDef]) -> Self {
        Self {
            categories: defs
                .iter()
                .map(|def| KeywordCategory::new(def.name, def.weight, def.keywords))
                .collect(),
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::resume()
    }
}

const RESUME_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "ML/AI Frameworks",
        weight: 3.0,
        keywords: &[
            "TensorFlow", "PyTorch", "Keras", "scikit-learn", "JAX", "Hugging Face",
            "XGBoost", "LightGBM", "LangChain", "OpenCV", "spaCy", "ONNX",
        ],
    },
    CategoryDef {
        name: "ML Concepts",
        weight: 3.0,
        keywords: &[
            "Machine Learning", "Deep Learning", "NLP", "Computer Vision",
            "Reinforcement Learning", "Neural Networks", "Transformers", "LLM",
            "Feature Engineering", "Model Deployment", "MLOps", "Generative AI",
        ],
    },
    CategoryDef {
        name: "Programming Languages",
        weight: 2.5,
        keywords: &["Python", "R", "SQL", "Java", "C++", "Scala", "Julia", "Go", "Rust"],
    },
    CategoryDef {
        name: "Cloud & Infrastructure",
        weight: 2.0,
        keywords: &[
            "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "SageMaker",
            "Vertex AI", "MLflow", "Kubeflow", "CI/CD",
        ],
    },
    CategoryDef {
        name: "Data Engineering",
        weight: 2.0,
        keywords: &[
            "Spark", "Kafka", "Airflow", "Hadoop", "dbt", "Snowflake", "Databricks",
            "ETL", "Data Pipelines", "BigQuery",
        ],
    },
    CategoryDef {
        name: "Achievements & Impact",
        weight: 1.5,
        keywords: &[
            "Improved", "Reduced", "Increased", "Deployed", "Optimized", "Published",
            "Led", "Scaled", "Delivered", "Automated",
        ],
    },
    CategoryDef {
        name: "Soft Skills",
        weight: 1.0,
        keywords: &[
            "Leadership", "Communication", "Collaboration", "Mentoring", "Problem Solving",
            "Stakeholder Management", "Agile", "Cross-functional",
        ],
    },
];

const ML_ENGINEER_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &[
            "Python", "Machine Learning", "Deep Learning", "Model Deployment",
            "Feature Engineering", "Data Structures",
        ],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["PyTorch", "TensorFlow", "scikit-learn", "Docker", "Kubernetes", "AWS", "MLflow"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["C++", "Rust", "ONNX", "Triton", "Ray", "Spark"],
    },
];

const DATA_SCIENTIST_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &[
            "Statistics", "Python", "SQL", "Machine Learning", "Hypothesis Testing",
            "Data Visualization",
        ],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["pandas", "NumPy", "scikit-learn", "Jupyter", "Tableau", "R"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["A/B Testing", "Causal Inference", "Bayesian", "Spark", "dbt"],
    },
];

const DATA_ENGINEER_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &["SQL", "Python", "ETL", "Data Modeling", "Data Pipelines", "Data Warehousing"],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["Spark", "Kafka", "Airflow", "dbt", "Snowflake", "BigQuery", "Databricks"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["Scala", "Terraform", "Flink", "Delta Lake", "AWS"],
    },
];

const MLOPS_ENGINEER_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &["CI/CD", "Docker", "Kubernetes", "Model Deployment", "Monitoring", "Python"],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["MLflow", "Kubeflow", "Terraform", "AWS", "SageMaker", "Prometheus", "Argo"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["Go", "Feature Store", "Ray", "Triton", "GCP"],
    },
];

const AI_RESEARCH_SCIENTIST_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &[
            "Deep Learning", "Mathematics", "Research", "Publications", "Python",
            "Optimization",
        ],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["PyTorch", "JAX", "CUDA", "Transformers", "TensorFlow"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["Reinforcement Learning", "NeurIPS", "ICML", "Distributed Training", "C++"],
    },
];

const NLP_ENGINEER_SKILLS: &[CategoryDef] = &[
    CategoryDef {
        name: "Core Skills",
        weight: 3.0,
        keywords: &["NLP", "Python", "Transformers", "LLM", "Text Classification", "Embeddings"],
    },
    CategoryDef {
        name: "Tools & Frameworks",
        weight: 2.0,
        keywords: &["Hugging Face", "PyTorch", "spaCy", "LangChain", "NLTK", "Vector Databases"],
    },
    CategoryDef {
        name: "Nice to Have",
        weight: 1.0,
        keywords: &["RAG", "Fine-tuning", "Prompt Engineering", "Information Retrieval", "Docker"],
    },
];
