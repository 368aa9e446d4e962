// crates/engine/src/transform.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use hashbrown::HashSet;
use std::borrow::Cow;

/// A literal substring replacement, e.g. `th` -> `ð`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramSwap {
    pub from: String,
    pub to: String,
}

impl NGramSwap {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Parses a `from,to` pair. The input is lowercased and must contain exactly one comma.
///
/// # Errors
/// Returns [`EngineError::InvalidSwap`] carrying the original input otherwise.
pub fn parse_swap(spec: &str) -> Result<NGramSwap> {
    let lowered = spec.to_lowercase();
    let mut parts = lowered.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok(NGramSwap::new(from, to)),
        _ => Err(EngineError::InvalidSwap {
            input: spec.to_string(),
        }),
    }
}

/// A token after swaps, and whether the raw token is excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed<'a> {
    pub swapped: Cow<'a, str>,
    pub removed: bool,
}

/// Applies the configured swaps and the remove set to tokens.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    swaps: Vec<NGramSwap>,
    remove: HashSet<String>,
    chain: bool,
}

impl Transformer {
    pub fn new(swaps: Vec<NGramSwap>, remove: HashSet<String>) -> Self {
        Self {
            swaps,
            remove,
            chain: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            chain: config.chain_swaps,
            ..Self::new(config.swaps.clone(), config.remove_words.clone())
        }
    }

    /// Each swap replaces against the raw token, so when several swaps are
    /// configured only the last one shows in the result. Chained mode feeds
    /// each swap the previous output instead.
    pub fn apply<'a>(&self, token: &'a str) -> Transformed<'a> {
        let mut swapped = Cow::Borrowed(token);

        for swap in &self.swaps {
            let source: &str = if self.chain { &swapped } else { token };
            if source.contains(swap.from.as_str()) {
                swapped = Cow::Owned(source.replace(swap.from.as_str(), &swap.to));
            } else if !self.chain {
                swapped = Cow::Borrowed(token);
            }
        }

        Transformed {
            swapped,
            removed: self.remove.contains(token),
        }
    }
}
