// src/app.rs
use anyhow::{Context, Result};
use corpus_count_engine::config::Config;

use crate::cli::Args;

/// Parse flags, scan every file, then print the words and letters tables.
///
/// # Errors
///
/// Returns an error for malformed flags or inputs, or when any file fails to
/// process. Nothing is printed in that case.
pub fn run(args: Args) -> Result<()> {
    let files = args.files.clone();
    let config = Config::try_from(args).context("parsing flags")?;

    tracing::debug!(
        files = files.len(),
        swaps = config.swaps.len(),
        removed_words = config.remove_words.len(),
        jobs = config.jobs,
        "starting run"
    );

    let corpus = corpus_count_engine::run(&config, &files).context("executing command")?;

    crate::presentation::print_report(&corpus, &config).context("printing report")
}
