use anyhow::{Context, Result};
use axum::{extract::{Query, State}, http::{HeaderMap, StatusCode}, routing::{get, post}, Json, Router};
use parking_lot::RwLock;
use ranker_core::{load_corpus, DocScore, Ranker, WeightingScheme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct QueryParams {
    pub q: String,
    /// Optional cutoff; the full ranking is returned when absent.
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<DocScore>,
}

#[derive(Clone)]
pub struct AppState {
    /// Current engine; reloads swap the inner Arc rather than mutate in place.
    pub snapshot: Arc<RwLock<Arc<Ranker>>>,
    pub corpus_path: PathBuf,
    pub scheme: WeightingScheme,
    pub admin_token: Option<String>,
}

pub fn build_app(corpus_path: &Path, scheme: WeightingScheme) -> Result<Router> {
    // Load the corpus and build the engine at startup
    let docs = load_corpus(corpus_path)
        .with_context(|| format!("failed to load corpus from {}", corpus_path.display()))?;
    let ranker = Ranker::build(docs, scheme).context("failed to build ranking engine")?;
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    let state = AppState {
        snapshot: Arc::new(RwLock::new(Arc::new(ranker))),
        corpus_path: corpus_path.to_path_buf(),
        scheme,
        admin_token,
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/query", get(query_handler))
        .route("/reload", post(reload_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

pub async fn query_handler(State(state): State<AppState>, Query(params): Query<QueryParams>) -> Json<QueryResponse> {
    let start = std::time::Instant::now();
    // grab the current snapshot; the guard is released before any ranking work
    let ranker = state.snapshot.read().clone();
    let mut results = ranker.rank(&params.q);
    let total_hits = results.len();
    if let Some(k) = params.k {
        results.truncate(k);
    }
    let elapsed = start.elapsed();
    Json(QueryResponse { query: params.q, took_s: elapsed.as_secs_f64(), total_hits, results })
}

async fn reload_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    authorize(&state, &headers)?;
    // rebuild fully before swapping; the old snapshot keeps serving on failure
    let docs = load_corpus(&state.corpus_path)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("reload failed: {e:#}")))?;
    let ranker = Ranker::build(docs, state.scheme)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("reload failed: {e}")))?;
    let ranker = Arc::new(ranker);
    let (num_docs, vocab_size) = (ranker.num_docs(), ranker.vocab_size());
    *state.snapshot.write() = ranker;
    tracing::info!(num_docs, vocab_size, "corpus reloaded");
    Ok(Json(serde_json::json!({
        "status": "reloaded",
        "num_docs": num_docs,
        "vocab_size": vocab_size,
    })))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let required = match &state.admin_token {
        Some(t) => t,
        None => return Err((StatusCode::SERVICE_UNAVAILABLE, "ADMIN_TOKEN not set".into())),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err((StatusCode::UNAUTHORIZED, "invalid admin token".into()))
    }
}
