use crate::catalog::{CatalogRecord, CourseSummary};
use crate::config::{EngineConfig, Strategy};
use crate::error::{BridgeError, Result};
use crate::index::{cosine_similarity, VectorSpaceModel};
use crate::taxonomy::Taxonomy;
use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Courses selected for one skill, best match first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// The skill exactly as the caller supplied it.
    pub skill: String,
    #[serde(serialize_with = "serialize_courses")]
    pub courses: Vec<&'a CatalogRecord>,
}

fn serialize_courses<S: Serializer>(courses: &[&CatalogRecord], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(courses.iter().map(|c| CourseSummary::from(*c)))
}

/// A way of turning skills into course recommendations.
///
/// Implementations keep the order of first occurrence, skip skills whose
/// normalized form was already seen, and leave out skills that matched
/// nothing.
pub trait Recommender {
    fn strategy(&self) -> Strategy;
    fn catalog(&self) -> &[CatalogRecord];
    fn recommend(&self, skills: &[String]) -> Vec<Recommendation<'_>>;
}

/// First occurrence of every distinct non-blank skill, as
/// `(original, trimmed lowercase)`.
fn distinct_skills(skills: &[String]) -> Vec<(&str, String)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(skills.len());
    for skill in skills {
        let normalized = skill.trim().to_lowercase();
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }
        out.push((skill.as_str(), normalized));
    }
    out
}

fn check_catalog(records: &[CatalogRecord], config: &EngineConfig) -> Result<()> {
    config.validate()?;
    if records.is_empty() {
        return Err(BridgeError::EmptyCorpus);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord<'a> {
    pub record: &'a CatalogRecord,
    pub score: f64,
}

/// TF-IDF cosine ranking over taxonomy-expanded skills.
pub struct VectorSpaceRecommender {
    records: Vec<CatalogRecord>,
    model: VectorSpaceModel,
    taxonomy: Taxonomy,
    threshold: f64,
    top_k: usize,
}

impl VectorSpaceRecommender {
    pub fn new(records: Vec<CatalogRecord>, config: &EngineConfig) -> Result<Self> {
        check_catalog(&records, config)?;
        let model = VectorSpaceModel::train(&records, config.title_weight)?;
        let taxonomy = Taxonomy::builtin().with_entries(config.taxonomy.iter().cloned());
        Ok(Self { records, model, taxonomy, threshold: config.relevance_threshold, top_k: config.top_k })
    }

    pub fn model(&self) -> &VectorSpaceModel { &self.model }
    pub fn taxonomy(&self) -> &Taxonomy { &self.taxonomy }

    /// Every record with a non-zero score for `skill`, highest first. Equal
    /// scores keep catalog order.
    pub fn rank(&self, skill: &str) -> Vec<ScoredRecord<'_>> {
        let expanded = self.taxonomy.expand(skill);
        let query = self.model.vectorize(&expanded);
        if query.is_empty() {
            return Vec::new();
        }
        let mut scored: Vec<ScoredRecord<'_>> = self
            .records
            .iter()
            .filter_map(|record| {
                let vector = self.model.vector(&record.id)?;
                let score = cosine_similarity(&query, vector);
                (score > 0.0).then_some(ScoredRecord { record, score })
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

impl Recommender for VectorSpaceRecommender {
    fn strategy(&self) -> Strategy { Strategy::VectorSpace }
    fn catalog(&self) -> &[CatalogRecord] { &self.records }

    fn recommend(&self, skills: &[String]) -> Vec<Recommendation<'_>> {
        let mut out = Vec::new();
        for (skill, normalized) in distinct_skills(skills) {
            let courses: Vec<&CatalogRecord> = self
                .rank(&normalized)
                .into_iter()
                .filter(|s| s.score > self.threshold)
                .take(self.top_k)
                .map(|s| s.record)
                .collect();
            tracing::debug!(skill, matched = courses.len(), "ranked skill");
            if !courses.is_empty() {
                out.push(Recommendation { skill: skill.to_string(), courses });
            }
        }
        out
    }
}

/// Literal pattern matching over title, description and keywords.
pub struct KeywordRecommender {
    records: Vec<CatalogRecord>,
    haystacks: Vec<String>,
    top_k: usize,
}

impl KeywordRecommender {
    pub fn new(records: Vec<CatalogRecord>, config: &EngineConfig) -> Result<Self> {
        check_catalog(&records, config)?;
        let haystacks = records
            .iter()
            .map(|r| format!("{} {} {}", r.title, r.description, r.keywords.join(" ")).to_lowercase())
            .collect();
        Ok(Self { records, haystacks, top_k: config.top_k })
    }
}

/// Short skills ("sql", "c++", "r") must stand alone; longer ones may match
/// inside a word ("communication" in "communications").
fn skill_pattern(normalized: &str) -> std::result::Result<Regex, regex::Error> {
    let escaped = regex::escape(normalized);
    let pattern = if normalized.chars().count() <= 3 {
        format!("(?:^|[^a-z0-9]){escaped}(?:$|[^a-z0-9])")
    } else {
        escaped
    };
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

impl Recommender for KeywordRecommender {
    fn strategy(&self) -> Strategy { Strategy::Keyword }
    fn catalog(&self) -> &[CatalogRecord] { &self.records }

    fn recommend(&self, skills: &[String]) -> Vec<Recommendation<'_>> {
        let mut out = Vec::new();
        for (skill, normalized) in distinct_skills(skills) {
            let pattern = match skill_pattern(&normalized) {
                Ok(p) => p,
                Err(err) => {
                    tracing::warn!(skill, %err, "skill does not form a valid pattern");
                    continue;
                }
            };
            let mut courses: Vec<&CatalogRecord> = self
                .records
                .iter()
                .zip(&self.haystacks)
                .filter(|(_, text)| pattern.is_match(text))
                .map(|(record, _)| record)
                .collect();
            // title hits first; sort_by_key is stable
            courses.sort_by_key(|r| !r.title.to_lowercase().contains(&normalized));
            courses.truncate(self.top_k);
            tracing::debug!(skill, matched = courses.len(), "matched skill");
            if !courses.is_empty() {
                out.push(Recommendation { skill: skill.to_string(), courses });
            }
        }
        out
    }
}
