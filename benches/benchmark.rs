use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_ranker::{parse_documents, Document, Lexicon, Query, TFIDFRanker, WordSet, MAX_RESULTS};

const WORDS: [&str; 16] = [
    "rust", "memory", "safety", "thread", "borrow", "owner", "lifetime", "trait",
    "generic", "macro", "crate", "module", "cargo", "compile", "error", "the",
];

/// Synthetic corpus in the form-feed separated format
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> String {
    let mut out = String::new();
    let mut x: u64 = 0x2545_F491_4F6C_DD1D;
    for d in 0..docs {
        out.push_str(&format!("\u{0C}\nDOC-{d}\n"));
        for w in 0..words_per_doc {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            out.push_str(WORDS[(x % WORDS.len() as u64) as usize]);
            out.push(if w % 12 == 11 { '\n' } else { ' ' });
        }
        out.push('\n');
    }
    out
}

fn ranking_benchmark(c: &mut Criterion) {
    let text = synthetic_corpus(2_000, 300);
    let lexicon = Lexicon::new(WordSet::from_words(WORDS), WordSet::from_words(["the"]));
    let query = Query::new(["borrow", "lifetime", "macro"]).expect("valid query");

    c.bench_function("parse_documents", |b| {
        b.iter(|| parse_documents(&text));
    });

    let documents: Vec<Document> = parse_documents(&text);
    c.bench_function("build_ranker", |b| {
        b.iter(|| TFIDFRanker::<f64>::from_documents(&documents, &lexicon));
    });

    let ranker: TFIDFRanker = TFIDFRanker::from_documents(&documents, &lexicon);
    c.bench_function("search", |b| {
        b.iter(|| ranker.search(&query, 10, MAX_RESULTS));
    });
}

criterion_group!(benches, ranking_benchmark);
criterion_main!(benches);
