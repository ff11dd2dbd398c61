use crate::error::{BridgeError, Result};
use crate::taxonomy::TaxonomyEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Minimum cosine score (exclusive) for a course to be recommended.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.03;
/// How many times a record's title is repeated in its indexed content.
pub const DEFAULT_TITLE_WEIGHT: usize = 3;
/// Courses returned per skill.
pub const DEFAULT_TOP_K: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    VectorSpace,
    Keyword,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::VectorSpace => f.write_str("vector_space"),
            Strategy::Keyword => f.write_str("keyword"),
        }
    }
}

impl FromStr for Strategy {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "vector_space" | "vector" | "tfidf" => Ok(Strategy::VectorSpace),
            "keyword" | "regex" => Ok(Strategy::Keyword),
            _ => Err(BridgeError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub relevance_threshold: f64,
    pub title_weight: usize,
    pub top_k: usize,
    /// Entries added after the built-in taxonomy.
    pub taxonomy: Vec<TaxonomyEntry>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            title_weight: DEFAULT_TITLE_WEIGHT,
            top_k: DEFAULT_TOP_K,
            taxonomy: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file; absent fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let t = self.relevance_threshold;
        if !t.is_finite() || !(0.0..1.0).contains(&t) {
            return Err(BridgeError::InvalidConfig(format!("relevance_threshold must be in [0, 1), got {t}")));
        }
        if self.top_k == 0 {
            return Err(BridgeError::InvalidConfig("top_k must be at least 1".into()));
        }
        if self.title_weight == 0 {
            return Err(BridgeError::InvalidConfig("title_weight must be at least 1".into()));
        }
        Ok(())
    }
}
