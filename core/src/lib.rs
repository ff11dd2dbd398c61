//! Maps missing skills to catalog courses that teach them.
//!
//! Train once with [`train`], then call [`recommend`] (or
//! [`Engine::recommend`]) as often as needed. A trained [`Engine`] is
//! immutable and can be shared across threads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod persist;
pub mod recommend;
pub mod taxonomy;
pub mod tokenizer;

pub use catalog::{CatalogRecord, CourseSummary};
pub use config::{EngineConfig, Strategy};
pub use error::BridgeError;
pub use index::{cosine_similarity, TermVector, VectorSpaceModel};
pub use recommend::{KeywordRecommender, Recommendation, Recommender, ScoredRecord, VectorSpaceRecommender};
pub use taxonomy::{Taxonomy, TaxonomyEntry};

use std::collections::HashMap;

/// A trained recommender plus an id index over its catalog; read-only after [`train`].
pub struct Engine {
    recommender: Box<dyn Recommender + Send + Sync>,
    by_id: HashMap<String, usize>,
}

impl Engine {
    pub fn strategy(&self) -> Strategy { self.recommender.strategy() }
    pub fn catalog(&self) -> &[CatalogRecord] { self.recommender.catalog() }

    pub fn record(&self, id: &str) -> Option<&CatalogRecord> {
        self.by_id.get(id).and_then(|&i| self.catalog().get(i))
    }

    pub fn recommend(&self, skills: &[String]) -> Vec<Recommendation<'_>> {
        self.recommender.recommend(skills)
    }
}

/// Build an engine for `config.strategy` over `records`. Fails on an empty
/// catalog, duplicate record ids, or an invalid config.
pub fn train(records: Vec<CatalogRecord>, config: &EngineConfig) -> Result<Engine, BridgeError> {
    let recommender: Box<dyn Recommender + Send + Sync> = match config.strategy {
        Strategy::VectorSpace => Box::new(VectorSpaceRecommender::new(records, config)?),
        Strategy::Keyword => Box::new(KeywordRecommender::new(records, config)?),
    };
    let mut by_id = HashMap::with_capacity(recommender.catalog().len());
    for (i, record) in recommender.catalog().iter().enumerate() {
        if by_id.insert(record.id.clone(), i).is_some() {
            return Err(BridgeError::DuplicateRecordId(record.id.clone()));
        }
    }
    tracing::info!(strategy = %config.strategy, records = by_id.len(), "engine ready");
    Ok(Engine { recommender, by_id })
}

pub fn recommend<'e>(engine: &'e Engine, skills: &[String]) -> Vec<Recommendation<'e>> {
    engine.recommend(skills)
}
