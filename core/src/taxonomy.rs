//! Query rewriting from industry jargon to the vocabulary course catalogs use.
//!
//! A skill such as "React" rarely appears in a course description, but "web
//! development" and "javascript" do. Every entry whose key occurs anywhere in
//! the normalized skill appends its related phrases to the query.

use serde::{Deserialize, Serialize};

const BUILTIN: &[(&str, &[&str])] = &[
    ("react", &["web development", "frontend", "javascript", "user interface"]),
    ("angular", &["web development", "frontend", "javascript"]),
    ("javascript", &["web programming", "frontend", "web development"]),
    ("typescript", &["javascript", "web programming", "object oriented programming"]),
    ("node", &["server side", "web development", "javascript"]),
    ("html", &["web design", "web development", "frontend"]),
    ("css", &["web design", "frontend", "html"]),
    ("frontend", &["web design", "user interface", "html css"]),
    ("backend", &["server side", "database", "web development"]),
    ("full stack", &["web development", "server side", "database", "frontend"]),
    ("rest api", &["web development", "server side", "network programming"]),
    ("microservices", &["distributed computing", "server side", "cloud computing"]),
    ("docker", &["operating systems", "cloud computing", "software deployment", "networking"]),
    ("kubernetes", &["cloud computing", "distributed computing", "operating systems"]),
    ("ci/cd", &["software engineering", "automation", "project management"]),
    ("devops", &["software engineering", "automation", "cloud computing", "operating systems"]),
    ("amazon web services", &["cloud computing", "networking", "infrastructure"]),
    ("azure", &["cloud computing", "networking", "infrastructure"]),
    ("cloud", &["cloud computing", "networking", "infrastructure"]),
    ("linux", &["operating systems", "memory management", "cpu scheduling"]),
    ("unix", &["operating systems", "memory management", "cpu scheduling"]),
    ("agile method", &["project management", "software engineering", "teamwork"]),
    ("agile development", &["project management", "software engineering", "teamwork"]),
    ("scrum", &["project management", "agile", "teamwork"]),
    ("sql", &["database", "data modeling", "query languages", "relational database"]),
    ("postgres", &["database", "relational database", "sql"]),
    ("mongodb", &["database", "nosql", "data modeling"]),
    ("microsoft excel", &["spreadsheet modeling", "business analytics", "data"]),
    ("excel spreadsheet", &["spreadsheet modeling", "business analytics", "data"]),
    ("tableau", &["data visualization", "dashboard", "business analytics"]),
    ("power bi", &["data visualization", "dashboard", "business intelligence"]),
    ("pandas", &["python", "data analytics", "data science"]),
    ("numpy", &["python", "data analytics", "statistics"]),
    ("data science", &["machine learning", "statistics", "data analytics", "data mining"]),
    ("machine learning", &["artificial intelligence", "data mining", "neural networks", "deep learning"]),
    ("artificial intelligence", &["machine learning", "intelligent agents", "search algorithms"]),
    ("tensorflow", &["machine learning", "deep learning", "neural networks", "artificial intelligence"]),
    ("pytorch", &["machine learning", "deep learning", "neural networks", "artificial intelligence"]),
    ("llm", &["artificial intelligence", "machine learning", "deep learning"]),
    ("nlp", &["artificial intelligence", "machine learning", "data mining"]),
    ("c++", &["object oriented programming", "programming", "data structures"]),
    ("c#", &["object oriented programming", "programming language"]),
    ("golang", &["programming", "concurrent programming", "network programming"]),
    ("android", &["mobile application development", "mobile programming", "java"]),
    ("kotlin", &["mobile programming", "android", "java"]),
    ("swift", &["mobile programming", "mobile application development", "mobile devices"]),
    ("flutter", &["mobile application development", "mobile programming"]),
    ("spring boot", &["java", "object oriented programming", "web development"]),
    ("django", &["python", "web development", "server side"]),
    ("flask", &["python", "web development", "server side"]),
    ("security", &["cybersecurity", "information assurance", "cryptography", "risk management"]),
    ("penetration", &["cybersecurity", "vulnerabilities", "threats", "information assurance"]),
    ("encryption", &["cryptography", "cybersecurity", "information assurance"]),
    ("figma", &["user experience", "user interface", "web design", "visualization"]),
    ("ui/ux", &["user experience", "user centered design", "computer graphics"]),
    ("user experience", &["user centered design", "web design", "computer graphics"]),
    ("seo", &["digital marketing", "marketing", "advertising"]),
    ("social media", &["digital marketing", "public relations", "advertising"]),
    ("salesforce", &["marketing", "customer relationship management", "sales"]),
    ("crm", &["marketing", "customer relationship management", "sales"]),
    ("matlab", &["engineering problem solving", "software tools", "calculus"]),
    ("autocad", &["computer aided design", "technical graphics", "production drawing"]),
    ("solidworks", &["computer aided design", "technical graphics", "manufacturing"]),
    ("plc", &["process control", "instrumentation", "automation", "industrial robotics"]),
    ("public speaking", &["speech communication", "communication", "communicative experiences"]),
    ("leadership", &["organizational behavior", "management", "organizational change"]),
    ("teamwork", &["small group communication", "group behavior", "organizational behavior"]),
    ("budgeting", &["accounting", "financial management", "finance"]),
    ("quickbooks", &["accounting", "financial statements"]),
    ("statistics", &["statistical methods", "probability", "data analysis"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub term: String,
    pub related: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
}

impl Default for Taxonomy {
    fn default() -> Self { Self::builtin() }
}

impl Taxonomy {
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(term, related)| TaxonomyEntry {
                term: term.to_string(),
                related: related.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self { Self { entries: Vec::new() } }

    /// Append entries after the existing ones. Keys are lowercased and
    /// trimmed; entries with a blank key are ignored.
    pub fn with_entries<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = TaxonomyEntry>,
    {
        for entry in extra {
            let term = entry.term.trim().to_lowercase();
            if term.is_empty() {
                tracing::warn!("ignoring taxonomy entry with a blank term");
                continue;
            }
            self.entries.push(TaxonomyEntry { term, related: entry.related });
        }
        self
    }

    pub fn entries(&self) -> &[TaxonomyEntry] { &self.entries }

    /// Return `skill` followed by the related phrases of every entry whose
    /// key is a substring of the lowercased, trimmed skill.
    pub fn expand(&self, skill: &str) -> String {
        let normalized = skill.trim().to_lowercase();
        let mut expanded = skill.to_string();
        for entry in self.entries.iter().filter(|e| normalized.contains(e.term.as_str())) {
            for phrase in &entry.related {
                expanded.push(' ');
                expanded.push_str(phrase);
            }
        }
        expanded
    }
}
