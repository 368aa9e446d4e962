// src/config.rs
use crate::cli::Args;
use corpus_count_engine::config::{Config, ConfigBuilder};
use corpus_count_engine::error::EngineError;
use corpus_count_engine::transform::parse_swap;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    /// Swap specs are parsed here so a malformed one is reported before any
    /// file is opened.
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let swaps = args
            .swap_ngram
            .iter()
            .map(|s| parse_swap(s))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = ConfigBuilder::default();
        builder
            .swaps(swaps)
            .remove_word_list(&args.remove_word)
            .remove_html(args.remove_html)
            .chain_swaps(args.chain_swaps)
            .top_words(args.top_words)
            .top_letters(args.top_letters)
            .max_line_bytes(args.max_line_bytes);
        if let Some(jobs) = args.jobs {
            builder.jobs(jobs);
        }

        builder
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))
    }
}
