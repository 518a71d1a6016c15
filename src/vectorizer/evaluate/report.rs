//! Writing ranked results.
//!
//! Every destination is a [`ResultSink`]; the console and the results file
//! receive the same lines through the same code path.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{RankError, Result},
    vectorizer::evaluate::scoring::Hits,
};

/// A destination for ranked result lines.
pub trait ResultSink {
    /// Write one `score position key` line per hit, then flush.
    fn write_hits<K: Display>(&mut self, hits: &Hits<K>) -> io::Result<()>;
}

impl<W: Write> ResultSink for W {
    fn write_hits<K: Display>(&mut self, hits: &Hits<K>) -> io::Result<()> {
        for hit in hits.iter() {
            writeln!(self, "{hit}")?;
        }
        self.flush()
    }
}

/// Write `hits` to `path`, truncating any previous content.
/// The file is created even when there are no hits.
pub fn write_results_file<K: Display, P: AsRef<Path>>(hits: &Hits<K>, path: P) -> Result<()> {
    let path = path.as_ref();
    let output_err = |source| RankError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_err)?;
    BufWriter::new(file).write_hits(hits).map_err(output_err)?;
    debug!(path = %path.display(), lines = hits.len(), "results file written");
    Ok(())
}

/// Write `hits` to `console` and then to the results file.
/// The file is written even if the console fails; the first error is returned.
pub fn emit_to<W, K, P>(hits: &Hits<K>, console: &mut W, output: P) -> Result<()>
where
    W: Write,
    K: Display,
    P: AsRef<Path>,
{
    let console_result = console.write_hits(hits);
    let file_result = write_results_file(hits, output);
    console_result?;
    file_result
}

/// Write `hits` to standard output and to the results file.
pub fn emit<K: Display, P: AsRef<Path>>(hits: &Hits<K>, output: P) -> Result<()> {
    emit_to(hits, &mut io::stdout().lock(), output)
}
