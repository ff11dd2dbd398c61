use crate::catalog::CatalogRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_catalog_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|s| s.to_str()), Some("json" | "jsonl"))
}

/// Load catalog records from a `.json` file, a `.jsonl` file, or a directory
/// of them. Directory entries are read in path order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRecord>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking catalog directory {}", path.display()))?;
            let p = entry.path();
            if p.is_file() && is_catalog_file(p) {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        anyhow::bail!("catalog path {} does not exist", path.display());
    }

    let mut records = Vec::new();
    for file in files {
        let result = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file)
        } else {
            read_json(&file)
        };
        let loaded = result.with_context(|| format!("reading catalog file {}", file.display()))?;
        tracing::debug!(file = %file.display(), records = loaded.len(), "loaded catalog file");
        records.extend(loaded);
    }
    tracing::info!(records = records.len(), path = %path.display(), "catalog loaded");
    Ok(records)
}

fn read_jsonl(file: &Path) -> Result<Vec<CatalogRecord>> {
    let reader = BufReader::new(File::open(file)?);
    let mut records = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let record: CatalogRecord = serde_json::from_str(&line).with_context(|| format!("line {}", lineno + 1))?;
        records.push(record);
    }
    Ok(records)
}

fn read_json(file: &Path) -> Result<Vec<CatalogRecord>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let records = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<CatalogRecord>, _>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => anyhow::bail!("expected a record or an array of records"),
    };
    Ok(records)
}
