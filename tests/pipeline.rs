use std::{
    fs,
    io::{self, Write},
    path::Path,
    process::Command,
};

use tempfile::TempDir;
use tf_idf_ranker::{
    emit, emit_to, load_documents, LoadStatus, Query, RankConfig, RankError, TFIDFRanker, WordSet,
};

const CAT_DOG_CORPUS: &str = "\u{0C}\nA1\nThe cat runs\n\u{0C}\nB1\nThe dog runs\n";

fn write_inputs(dir: &Path, dictionary: &str, stopwords: &str, corpus: &str) {
    fs::write(dir.join("dictionary.txt"), dictionary).unwrap();
    fs::write(dir.join("stopwords.txt"), stopwords).unwrap();
    fs::write(dir.join("article.txt"), corpus).unwrap();
}

fn run_binary(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tf-idf-ranker"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TFIDF_DICTIONARY")
        .env_remove("TFIDF_STOPWORDS")
        .env_remove("TFIDF_CORPUS")
        .env_remove("TFIDF_OUTPUT")
        .output()
        .unwrap()
}

#[test]
fn test_library_round_trip() {
    let tmp_dir = TempDir::new().unwrap();
    write_inputs(tmp_dir.path(), "cat dog runs", "", CAT_DOG_CORPUS);
    let config = RankConfig::in_dir(tmp_dir.path());

    let ranker: TFIDFRanker = TFIDFRanker::load(&config);
    let hits = ranker.search(&Query::new(["cat"]).unwrap(), 10, config.max_results);
    assert_eq!(hits.to_string(), "15.051500 1 A1\n");

    emit(&hits, &config.output).unwrap();
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "15.051500 1 A1\n");
}

#[test]
fn test_missing_dictionary_yields_no_results() {
    let tmp_dir = TempDir::new().unwrap();
    fs::write(tmp_dir.path().join("article.txt"), CAT_DOG_CORPUS).unwrap();
    let config = RankConfig::in_dir(tmp_dir.path());

    let dictionary = WordSet::load(&config.dictionary);
    assert!(matches!(dictionary.status(), LoadStatus::Missing(_)));

    let ranker: TFIDFRanker = TFIDFRanker::load(&config);
    assert_eq!(ranker.doc_num(), 2);
    assert!(ranker.documents.iter().all(|doc| doc.tf_map.is_empty()));
    assert!(ranker.rank(&Query::new(["cat"]).unwrap()).is_empty());
}

#[test]
fn test_missing_corpus_file() {
    let tmp_dir = TempDir::new().unwrap();
    let (docs, status) = load_documents(tmp_dir.path().join("article.txt"));
    assert!(docs.is_empty());
    assert!(!status.is_loaded());
}

#[test]
fn test_result_count_is_capped() {
    let tmp_dir = TempDir::new().unwrap();
    let mut corpus = String::new();
    for i in 0..150 {
        corpus.push_str(&format!("\u{0C}\nDOC{i}\n"));
        // every document mentions cat, only some mention it twice
        if i % 3 == 0 {
            corpus.push_str("cat cat filler\n");
        } else {
            corpus.push_str("cat filler filler\n");
        }
    }
    corpus.push_str("\u{0C}\nNOCAT\nfiller\n");
    write_inputs(tmp_dir.path(), "cat filler", "", &corpus);

    let config = RankConfig::in_dir(tmp_dir.path());
    let ranker: TFIDFRanker = TFIDFRanker::load(&config);
    let query = Query::new(["cat"]).unwrap();

    assert_eq!(ranker.rank(&query).len(), 150);
    assert_eq!(ranker.search(&query, 1000, config.max_results).len(), 100);
    assert_eq!(ranker.search(&query, 7, config.max_results).len(), 7);
    assert_eq!(ranker.search(&query, 0, config.max_results).len(), 0);

    // the double-cat documents come first, in corpus order
    let hits = ranker.search(&query, 3, config.max_results);
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![1, 4, 7]);
}

#[test]
fn test_binary_prints_and_writes_results() {
    let tmp_dir = TempDir::new().unwrap();
    write_inputs(tmp_dir.path(), "cat dog runs", "", CAT_DOG_CORPUS);
    fs::write(tmp_dir.path().join("results.txt"), "old\nold\nold\n").unwrap();

    let output = run_binary(tmp_dir.path(), &["10", "CAT"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "15.051500 1 A1\n");
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("results.txt")).unwrap(),
        "15.051500 1 A1\n"
    );
}

#[test]
fn test_binary_usage_error() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run_binary(tmp_dir.path(), &["10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
    assert!(!tmp_dir.path().join("results.txt").exists());
}

#[test]
fn test_binary_rejects_non_numeric_count() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run_binary(tmp_dir.path(), &["many", "cat"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!tmp_dir.path().join("results.txt").exists());
}

#[test]
fn test_binary_without_inputs_creates_empty_results() {
    let tmp_dir = TempDir::new().unwrap();
    let output = run_binary(tmp_dir.path(), &["5", "cat"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(tmp_dir.path().join("results.txt")).unwrap(), "");
}

#[test]
fn test_binary_custom_paths() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("words.lst"), "cat dog runs").unwrap();
    fs::write(dir.join("docs.txt"), CAT_DOG_CORPUS).unwrap();

    let output = run_binary(
        dir,
        &[
            "--dictionary",
            "words.lst",
            "--corpus",
            "docs.txt",
            "--output",
            "ranked.txt",
            "3",
            "dog",
        ],
    );
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "15.051500 2 B1\n");
    assert_eq!(fs::read_to_string(dir.join("ranked.txt")).unwrap(), "15.051500 2 B1\n");
    assert!(!dir.join("results.txt").exists());
}

/// Stands in for a console whose device is full
struct FullConsole;

impl Write for FullConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_failure_still_truncates_results_file() {
    let tmp_dir = TempDir::new().unwrap();
    write_inputs(tmp_dir.path(), "cat dog runs", "", CAT_DOG_CORPUS);
    let config = RankConfig::in_dir(tmp_dir.path());
    fs::write(&config.output, "STALE\n").unwrap();

    let ranker: TFIDFRanker = TFIDFRanker::load(&config);
    let hits = ranker.search(&Query::new(["cat"]).unwrap(), 10, config.max_results);
    let err = emit_to(&hits, &mut FullConsole, &config.output).unwrap_err();

    assert!(matches!(err, RankError::Io(_)));
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "15.051500 1 A1\n");
}

#[test]
fn test_binary_hyphen_keyword_scores_nothing() {
    let tmp_dir = TempDir::new().unwrap();
    write_inputs(tmp_dir.path(), "cat dog runs", "", CAT_DOG_CORPUS);
    fs::write(tmp_dir.path().join("results.txt"), "STALE\n").unwrap();

    let output = run_binary(tmp_dir.path(), &["10", "-cat"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(tmp_dir.path().join("results.txt")).unwrap(), "");
}

#[test]
fn test_binary_hyphen_keyword_after_plain_keyword() {
    let tmp_dir = TempDir::new().unwrap();
    write_inputs(tmp_dir.path(), "cat dog runs", "", CAT_DOG_CORPUS);

    let output = run_binary(tmp_dir.path(), &["10", "cat", "-cat", "--output", "x"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "15.051500 1 A1\n");
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("results.txt")).unwrap(),
        "15.051500 1 A1\n"
    );
    assert!(!tmp_dir.path().join("x").exists());
}
