use anyhow::{Context, Result};
use clap::Parser;
use ranker_core::{load_corpus, precision_at_k, recall_at_k, Ranker, WeightingScheme};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct QueryRecord {
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct QrelRecord {
    query_id: String,
    relevant: Vec<String>,
}

#[derive(Parser)]
#[command(name = "ranker-eval")]
#[command(about = "Score ranked retrieval against relevance judgments", long_about = None)]
struct Args {
    /// Corpus path: a directory of .txt files or a .jsonl file
    #[arg(long)]
    corpus: PathBuf,
    /// Queries as JSONL: {"id": ..., "text": ...}
    #[arg(long)]
    queries: PathBuf,
    /// Judgments as JSONL: {"query_id": ..., "relevant": [...]}
    #[arg(long)]
    qrels: PathBuf,
    /// Cutoff depth; repeat the flag to evaluate several
    #[arg(long = "k", default_values_t = vec![5, 10])]
    ks: Vec<usize>,
    /// Term weighting scheme: "tfidf" or "counts"
    #[arg(long, default_value = "tfidf")]
    scheme: WeightingScheme,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let docs = load_corpus(&args.corpus)?;
    let ranker = Ranker::build(docs, args.scheme)?;

    let queries: Vec<QueryRecord> = read_jsonl(&args.queries)?;
    let qrels: Vec<QrelRecord> = read_jsonl(&args.qrels)?;
    let judgments: HashMap<String, HashSet<String>> = qrels
        .into_iter()
        .map(|r| (r.query_id, r.relevant.into_iter().collect()))
        .collect();
    tracing::info!(queries = queries.len(), judged = judgments.len(), "loaded evaluation set");

    let mut precision_sums = vec![0.0f64; args.ks.len()];
    let mut recall_sums = vec![0.0f64; args.ks.len()];
    let mut evaluated = 0usize;

    for query in &queries {
        let relevant = match judgments.get(&query.id) {
            Some(r) if !r.is_empty() => r,
            Some(_) => {
                tracing::warn!(query_id = %query.id, "empty relevant set; skipping");
                continue;
            }
            None => {
                tracing::warn!(query_id = %query.id, "no judgments for query; skipping");
                continue;
            }
        };
        let retrieved: Vec<String> = ranker
            .rank(&query.text)
            .into_iter()
            .map(|r| r.doc_id)
            .collect();
        evaluated += 1;

        for (i, &k) in args.ks.iter().enumerate() {
            let precision = precision_at_k(&retrieved, relevant, k);
            let recall = recall_at_k(&retrieved, relevant, k)?;
            precision_sums[i] += precision;
            recall_sums[i] += recall;
            println!(
                "{}",
                serde_json::json!({
                    "query_id": query.id,
                    "k": k,
                    "precision": precision,
                    "recall": recall,
                })
            );
        }
    }

    if evaluated == 0 {
        tracing::warn!("no queries were evaluated");
        return Ok(());
    }
    for (i, &k) in args.ks.iter().enumerate() {
        println!(
            "{}",
            serde_json::json!({
                "k": k,
                "queries": evaluated,
                "mean_precision": precision_sums[i] / evaluated as f64,
                "mean_recall": recall_sums[i] / evaluated as f64,
            })
        );
    }
    Ok(())
}

fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(f);
    let mut out = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let rec = serde_json::from_str(&line)
            .with_context(|| format!("bad record on line {} of {}", line_no + 1, path.display()))?;
        out.push(rec);
    }
    Ok(out)
}
