use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One corpus document: a unique identifier and its raw text.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// Load a corpus from disk: either a directory tree of `.txt` files or a
/// single `.jsonl` file with one `{"id", "text"}` object per line.
///
/// The result's order is the corpus order used for ranking tie-breaks, so
/// both forms are deterministic: directory paths are sorted before reading,
/// JSONL keeps line order.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    if path.is_dir() {
        load_corpus_dir(path)
    } else if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
        load_corpus_jsonl(path)
    } else {
        bail!(
            "corpus path must be a directory of .txt files or a .jsonl file: {}",
            path.display()
        );
    }
}

fn load_corpus_dir(dir: &Path) -> Result<Vec<Document>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.path().is_file()
                && entry.path().extension().and_then(|e| e.to_str()) == Some("txt")
        })
        .map(|entry| entry.into_path())
        .collect();
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    let mut seen: HashSet<String> = HashSet::new();
    for path in paths {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("unreadable file name: {}", path.display()))?
            .to_string();
        if !seen.insert(id.clone()) {
            bail!("duplicate document id {id:?} at {}", path.display());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .trim()
            .to_string();
        tracing::debug!(doc_id = %id, "loaded document");
        docs.push(Document { id, text });
    }
    tracing::info!(num_docs = docs.len(), dir = %dir.display(), "corpus loaded");
    Ok(docs)
}

fn load_corpus_jsonl(file: &Path) -> Result<Vec<Document>> {
    let f = fs::File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    let reader = BufReader::new(f);

    let mut docs = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: Document = serde_json::from_str(&line)
            .with_context(|| format!("bad document on line {} of {}", line_no + 1, file.display()))?;
        if !seen.insert(doc.id.clone()) {
            bail!("duplicate document id {:?} on line {}", doc.id, line_no + 1);
        }
        docs.push(doc);
    }
    tracing::info!(num_docs = docs.len(), file = %file.display(), "corpus loaded");
    Ok(docs)
}
