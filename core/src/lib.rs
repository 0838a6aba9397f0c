pub mod corpus;
pub mod error;
pub mod eval;
pub mod idf;
pub mod rank;
pub mod tokenizer;
pub mod vector;
pub mod weight;

pub use corpus::{load_corpus, Document};
pub use error::RankError;
pub use eval::{precision_at_k, recall_at_k};
pub use idf::IdfTable;
pub use rank::{cosine_similarity, DocScore, Ranker};
pub use tokenizer::tokenize;
pub use vector::{count_terms, TermCounts, TermVector};
pub use weight::WeightingScheme;
