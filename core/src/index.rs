use crate::catalog::CatalogRecord;
use crate::error::{BridgeError, Result};
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Sparse term → TF-IDF weight map. Ordered so sums over a vector are always
/// accumulated in the same order.
pub type TermVector = BTreeMap<String, f64>;

/// Number of records each term occurs in at least once.
#[derive(Debug, Default, Clone)]
pub struct DocumentFrequency {
    counts: HashMap<String, u32>,
}

impl DocumentFrequency {
    pub fn get(&self, term: &str) -> u32 { self.counts.get(term).copied().unwrap_or(0) }
    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    fn observe(&mut self, unique_terms: HashSet<String>) {
        for term in unique_terms {
            *self.counts.entry(term).or_insert(0) += 1;
        }
    }
}

/// TF-IDF vector space over a fixed catalog. Built once by [`train`](Self::train)
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct VectorSpaceModel {
    df: DocumentFrequency,
    vectors: HashMap<String, TermVector>,
    num_records: usize,
}

impl VectorSpaceModel {
    pub fn train(records: &[CatalogRecord], title_weight: usize) -> Result<Self> {
        if records.is_empty() {
            return Err(BridgeError::EmptyCorpus);
        }
        let contents: Vec<String> = records.iter().map(|r| r.weighted_content(title_weight)).collect();

        // First pass: document frequencies, one count per record per term
        let mut df = DocumentFrequency::default();
        for content in &contents {
            df.observe(tokenize(content).into_iter().collect());
        }

        let mut model = Self { df, vectors: HashMap::with_capacity(records.len()), num_records: records.len() };

        // Second pass: record vectors against the final statistics
        for (record, content) in records.iter().zip(&contents) {
            let vector = model.vectorize(content);
            if vector.is_empty() {
                tracing::warn!(id = %record.id, "catalog record has no indexable content");
            }
            if model.vectors.insert(record.id.clone(), vector).is_some() {
                return Err(BridgeError::DuplicateRecordId(record.id.clone()));
            }
        }

        tracing::info!(num_records = model.num_records, num_terms = model.df.len(), "trained vector space model");
        Ok(model)
    }

    /// `ln(1 + N / (1 + df))`; unseen terms get df = 0 and so the largest weight.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.num_records as f64;
        let df = self.df.get(term) as f64;
        (1.0 + n / (1.0 + df)).ln()
    }

    /// Weight every term of `text` by its relative frequency times its idf.
    pub fn vectorize(&self, text: &str) -> TermVector {
        let terms = tokenize(text);
        if terms.is_empty() {
            return TermVector::new();
        }
        let total = terms.len() as f64;
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(term, count)| {
                let weight = (count as f64 / total) * self.idf(&term);
                (term, weight)
            })
            .collect()
    }

    pub fn vector(&self, id: &str) -> Option<&TermVector> { self.vectors.get(id) }
    pub fn document_frequency(&self) -> &DocumentFrequency { &self.df }
    pub fn num_records(&self) -> usize { self.num_records }
}

fn squared_norm(v: &TermVector) -> f64 { v.values().map(|w| w * w).sum() }

/// Cosine of the angle between two weight vectors, in `[0, 1]`. Zero when
/// either vector is empty or they share no terms.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let dot: f64 = a.iter().filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb)).sum();
    if dot == 0.0 {
        return 0.0;
    }
    let denom = (squared_norm(a) * squared_norm(b)).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}
