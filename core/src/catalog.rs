use serde::{Deserialize, Serialize};

/// One course in the catalog. Records without a title or description still
/// load; they just contribute less (or no) indexable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Title repeated `title_weight` times, then description, then keywords.
    pub fn weighted_content(&self, title_weight: usize) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(title_weight + 1 + self.keywords.len());
        for _ in 0..title_weight {
            parts.push(&self.title);
        }
        parts.push(&self.description);
        parts.extend(self.keywords.iter().map(String::as_str));
        parts.join(" ")
    }
}

/// What callers get back for a recommended course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<&CatalogRecord> for CourseSummary {
    fn from(record: &CatalogRecord) -> Self {
        Self { id: record.id.clone(), title: record.title.clone(), description: record.description.clone() }
    }
}
