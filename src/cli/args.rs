// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use corpus_count_engine::config::{DEFAULT_MAX_LINE_BYTES, DEFAULT_TOP_WORDS};

use super::parsers::parse_positive_usize;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "corpus_count",
    version = crate::VERSION,
    about = "Count all letters and words in the provided corpora",
    long_about = Some(include_str!("../../usage.txt")),
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// A comma separated from/to letter pair, ex: -s th,ð (repeatable, applied in order)
    #[arg(short = 's', long = "swap-ngram", value_name = "FROM,TO", help_heading = "Transform")]
    pub swap_ngram: Vec<String>,

    /// Comma separated words to remove, ex: -r the,a
    #[arg(
        short = 'r',
        long = "remove-word",
        value_name = "WORDS",
        value_delimiter = ',',
        help_heading = "Transform"
    )]
    pub remove_word: Vec<String>,

    /// Drop anything that looks like an html tag
    #[arg(short = 'w', long, help_heading = "Transform")]
    pub remove_html: bool,

    /// Apply each swap to the previous swap's output instead of the raw word
    #[arg(long, help_heading = "Transform")]
    pub chain_swaps: bool,

    /// Rows in the words table (0 = all)
    #[arg(long, default_value_t = DEFAULT_TOP_WORDS, help_heading = "Output")]
    pub top_words: usize,

    /// Rows in the letters table (0 = all)
    #[arg(long, default_value_t = 0, help_heading = "Output")]
    pub top_letters: usize,

    /// Files scanned in parallel (defaults to the number of CPUs)
    #[arg(short = 'j', long, value_parser = parse_positive_usize, help_heading = "Scan")]
    pub jobs: Option<usize>,

    /// Longest accepted line, in bytes
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_LINE_BYTES,
        value_parser = parse_positive_usize,
        help_heading = "Scan"
    )]
    pub max_line_bytes: usize,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Paths to .txt corpus files
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
