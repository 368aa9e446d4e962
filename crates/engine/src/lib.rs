// crates/engine/src/lib.rs
use log::info;
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod normalize;
pub mod processor;
pub mod report;
pub mod stats;
pub mod stitch;
pub mod transform;

use crate::config::Config;
use crate::error::Result;
use crate::stats::Stats;
use crate::transform::Transformer;

/// Shared statistics for one run over a set of corpus files.
///
/// Files may be scanned concurrently through `&self`; the words and letters
/// [`Stats`] are only meant to be read once every file has finished.
#[derive(Debug)]
pub struct Corpus {
    transformer: Transformer,
    remove_html: bool,
    max_line_bytes: usize,
    words: Stats,
    letters: Stats,
}

impl Corpus {
    pub fn new(config: &Config) -> Self {
        Self {
            transformer: Transformer::from_config(config),
            remove_html: config.remove_html,
            max_line_bytes: config.max_line_bytes,
            words: Stats::new(),
            letters: Stats::new(),
        }
    }

    pub fn words(&self) -> &Stats {
        &self.words
    }

    pub fn letters(&self) -> &Stats {
        &self.letters
    }
}

/// Validate every path, then scan all of them in parallel.
///
/// Returns once every file has been processed, so the returned corpus has no
/// concurrent writers left.
///
/// # Errors
///
/// Validation errors are returned before any file is opened. The first file
/// that fails to process stops the scheduling of the remaining files; counts
/// already gathered are discarded with the corpus.
pub fn run(config: &Config, paths: &[PathBuf]) -> Result<Corpus> {
    filesystem::validate_inputs(paths)?;

    let corpus = Corpus::new(config);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()?;

    pool.install(|| paths.par_iter().try_for_each(|path| corpus.run_file(path)))?;

    let words = corpus.words.totals();
    info!(
        "scanned {} files: {} words, {} letters",
        paths.len(),
        words.universal,
        corpus.letters.totals().universal
    );

    Ok(corpus)
}
