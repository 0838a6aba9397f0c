use ranker_core::{Document, RankError, Ranker, WeightingScheme};

fn doc(id: &str, text: &str) -> Document {
    Document {
        id: id.to_string(),
        text: text.to_string(),
    }
}

fn cat_dog_corpus() -> Vec<Document> {
    vec![
        doc("d1", "the cat sat"),
        doc("d2", "the dog ran"),
        doc("d3", "cat and dog"),
    ]
}

#[test]
fn ranks_matching_documents_above_non_matching() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    let ranked = ranker.rank("cat");

    assert_eq!(ranked.len(), 3);
    // d1 and d3 contain "cat"; d2 shares no terms with the query at all
    assert_eq!(ranked[0].doc_id, "d3");
    assert_eq!(ranked[1].doc_id, "d1");
    assert_eq!(ranked[2].doc_id, "d2");
    assert!(ranked[0].score > ranked[1].score);
    assert!(ranked[1].score > 0.0);
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn scores_are_strictly_descending_for_distinct_documents() {
    let corpus = vec![
        doc("d1", "apple apple apple"),
        doc("d2", "apple apple banana"),
        doc("d3", "banana cherry"),
    ];
    let ranker = Ranker::build(corpus, WeightingScheme::TfIdf).unwrap();
    let ranked = ranker.rank("apple");

    assert_eq!(ranked[0].doc_id, "d1");
    assert_eq!(ranked[1].doc_id, "d2");
    assert_eq!(ranked[2].doc_id, "d3");
    assert!(ranked[0].score > ranked[1].score);
    assert!(ranked[1].score > ranked[2].score);
}

#[test]
fn tied_scores_keep_corpus_insertion_order() {
    // identical documents produce identical vectors, hence identical scores
    let corpus = vec![doc("d1", "apple"), doc("d2", "apple"), doc("d3", "banana")];
    let ranker = Ranker::build(corpus, WeightingScheme::TfIdf).unwrap();
    let ranked = ranker.rank("apple");

    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].doc_id, "d1");
    assert_eq!(ranked[1].doc_id, "d2");
    assert_eq!(ranked[2].doc_id, "d3");
}

#[test]
fn raw_count_scheme_ranks_and_ties_deterministically() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::RawCount).unwrap();
    let ranked = ranker.rank("cat");

    // under raw counts d1 and d3 tie exactly, so corpus order decides
    assert_eq!(ranked[0].doc_id, "d1");
    assert_eq!(ranked[1].doc_id, "d3");
    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[2].doc_id, "d2");
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn empty_query_returns_whole_corpus_with_zero_scores() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    for query in ["", "the of and", "?!#"] {
        let ranked = ranker.rank(query);
        assert_eq!(ranked.len(), 3);
        let ids: Vec<&str> = ranked.iter().map(|r| r.doc_id.as_str()).collect();
        assert_eq!(ids, ["d1", "d2", "d3"]);
        assert!(ranked.iter().all(|r| r.score == 0.0));
        assert!(ranked.iter().all(|r| r.score.is_finite()));
    }
}

#[test]
fn query_terms_unknown_to_the_corpus_score_zero() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    let ranked = ranker.rank("zebra quasar");
    assert!(ranked.iter().all(|r| r.score == 0.0));
    let ids: Vec<&str> = ranked.iter().map(|r| r.doc_id.as_str()).collect();
    assert_eq!(ids, ["d1", "d2", "d3"]);
}

#[test]
fn empty_corpus_is_rejected_at_build_time() {
    let err = Ranker::build(Vec::new(), WeightingScheme::TfIdf);
    assert!(matches!(err, Err(RankError::EmptyCorpus)));
}

#[test]
fn idf_is_monotone_in_rarity() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    let idf = ranker.idf();
    // "sat" appears in one document of three, "cat" in two
    assert!((idf.idf("sat") - 3.0f64.ln()).abs() < 1e-12);
    assert!(idf.idf("sat") > idf.idf("cat"));
    assert!(idf.idf("cat") > 0.0);
}

#[test]
fn result_entries_carry_document_text() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    let ranked = ranker.rank("cat");
    let top = &ranked[0];
    assert_eq!(top.doc_id, "d3");
    assert_eq!(top.text, "cat and dog");
}

#[test]
fn exposes_corpus_shape() {
    let ranker = Ranker::build(cat_dog_corpus(), WeightingScheme::TfIdf).unwrap();
    assert_eq!(ranker.num_docs(), 3);
    // cat, sat, dog, ran
    assert_eq!(ranker.vocab_size(), 4);
    assert_eq!(ranker.scheme(), WeightingScheme::TfIdf);
}
