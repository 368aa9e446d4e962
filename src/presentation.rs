// src/presentation.rs
use corpus_count_engine::Corpus;
use corpus_count_engine::config::Config;
use corpus_count_engine::error::Result;
use corpus_count_engine::report;
use std::io::{self, BufWriter};

/// Writes both tables to stdout.
///
/// # Errors
/// Fails if stdout cannot be written to.
pub fn print_report(corpus: &Corpus, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_report(corpus, config, &mut out)
}
