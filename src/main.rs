use std::{path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser};
use tf_idf_ranker::{
    config::{DEFAULT_CORPUS, DEFAULT_DICTIONARY, DEFAULT_OUTPUT, DEFAULT_STOPWORDS},
    emit, Query, RankConfig, RankError, TFIDFRanker,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rank corpus documents against query keywords by TF-IDF relevance
#[derive(Parser, Debug)]
#[command(name = "tf-idf-ranker", version)]
struct Cli {
    /// Number of results to print (capped at 100)
    #[arg(value_name = "NUM", value_parser = parse_count, allow_negative_numbers = true)]
    count: i64,

    /// Query keywords; everything after NUM is a keyword, even if it starts with '-'
    #[arg(
        value_name = "K",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    keywords: Vec<String>,

    /// Dictionary file
    #[arg(long, env = "TFIDF_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Stopword file
    #[arg(long, env = "TFIDF_STOPWORDS", default_value = DEFAULT_STOPWORDS)]
    stopwords: PathBuf,

    /// Corpus file
    #[arg(long, env = "TFIDF_CORPUS", default_value = DEFAULT_CORPUS)]
    corpus: PathBuf,

    /// Results file, overwritten on every run
    #[arg(long, env = "TFIDF_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn parse_count(raw: &str) -> Result<i64, RankError> {
    raw.trim()
        .parse()
        .map_err(|_| RankError::InvalidCount(raw.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout with success; everything else is a usage error
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let query = match Query::new(&cli.keywords) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    let config = RankConfig::default()
        .with_dictionary(cli.dictionary)
        .with_stopwords(cli.stopwords)
        .with_corpus(cli.corpus)
        .with_output(cli.output);

    let ranker: TFIDFRanker = TFIDFRanker::load(&config);
    let hits = ranker.search(&query, cli.count, config.max_results);
    info!(requested = cli.count, emitted = hits.len(), "ranking done");

    // a failed write is reported but does not change the exit status
    if let Err(e) = emit(&hits, &config.output) {
        error!(error = %e, "could not emit results");
    }
    ExitCode::SUCCESS
}
