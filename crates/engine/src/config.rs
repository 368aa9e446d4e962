use crate::transform::NGramSwap;
use derive_builder::Builder;
use hashbrown::HashSet;

/// Matches the default token limit of a buffered line scanner.
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024;

pub const DEFAULT_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Substitutions in declaration order.
    #[builder(default)]
    pub swaps: Vec<NGramSwap>,
    /// Lowercase words excluded from the removed and both views.
    #[builder(default)]
    pub remove_words: HashSet<String>,
    #[builder(default)]
    pub remove_html: bool,
    /// Feed each swap the previous swap's output instead of the raw token.
    #[builder(default)]
    pub chain_swaps: bool,

    #[builder(default = "DEFAULT_TOP_WORDS")]
    pub top_words: usize,
    /// 0 means unlimited.
    #[builder(default)]
    pub top_letters: usize,

    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,
    #[builder(default = "DEFAULT_MAX_LINE_BYTES")]
    pub max_line_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            swaps: vec![],
            remove_words: HashSet::new(),
            remove_html: false,
            chain_swaps: false,
            top_words: DEFAULT_TOP_WORDS,
            top_letters: 0,
            jobs: num_cpus::get(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl ConfigBuilder {
    /// Adds words to the remove set, lowercased so they can match normalized tokens.
    pub fn remove_word_list<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = self.remove_words.get_or_insert_with(HashSet::new);
        set.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }
}
