use criterion::{criterion_group, criterion_main, Criterion};
use ranker_core::{tokenize, Document, Ranker, WeightingScheme};

const VOCAB: &[&str] = &[
    "flow", "boundary", "layer", "shock", "plate", "heat", "transfer", "mach", "pressure", "wing",
    "velocity", "supersonic", "laminar", "turbulent", "wake",
];

fn synth_corpus(num_docs: usize, words_per_doc: usize) -> Vec<Document> {
    (0..num_docs)
        .map(|i| {
            let words: Vec<&str> = (0..words_per_doc)
                .map(|j| VOCAB[(i * 7 + j * 3) % VOCAB.len()])
                .collect();
            Document {
                id: format!("d{i}"),
                text: words.join(" "),
            }
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synth_corpus(50, 40)
        .into_iter()
        .map(|d| d.text)
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("tokenize_2k_words", |b| b.iter(|| tokenize(&text)));
}

fn bench_rank(c: &mut Criterion) {
    let ranker = Ranker::build(synth_corpus(1000, 40), WeightingScheme::TfIdf).unwrap();
    c.bench_function("rank_1k_docs", |b| {
        b.iter(|| ranker.rank("boundary layer heat transfer"))
    });
}

criterion_group!(benches, bench_tokenize, bench_rank);
criterion_main!(benches);
