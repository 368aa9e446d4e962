use corpus_count_engine::Corpus;
use corpus_count_engine::config::{Config, ConfigBuilder};
use corpus_count_engine::stats::View;
use corpus_count_engine::transform::NGramSwap;
use proptest::prelude::*;
use std::io::Cursor;
use std::path::Path;

fn scan(config: &Config, text: &str) -> Corpus {
    let corpus = Corpus::new(config);
    corpus
        .process_reader(Cursor::new(text.as_bytes()), Path::new("prop.txt"))
        .unwrap();
    corpus
}

proptest! {
    #[test]
    fn without_swaps_or_removals_all_totals_agree(
        lines in prop::collection::vec("[a-z ]{0,40}", 0..20)
    ) {
        let text = lines.join("\n");
        let corpus = scan(&Config::default(), &text);

        let expected: u64 = lines
            .iter()
            .map(|l| l.split_whitespace().count() as u64)
            .sum();
        let totals = corpus.words().totals();
        prop_assert_eq!(totals.universal.value(), expected);
        for view in View::ALL {
            prop_assert_eq!(totals.of(view), totals.universal);
            prop_assert_eq!(corpus.words().view(view).sum(), expected);
        }
    }

    #[test]
    fn removal_partitions_raw_counts(
        words in prop::collection::vec(prop::sample::select(vec!["the", "a", "cat", "sat", "mat"]), 0..200)
    ) {
        let config = ConfigBuilder::default()
            .swaps(vec![NGramSwap::new("a", "")])
            .remove_word_list(["the", "a"])
            .build()
            .unwrap();
        let corpus = scan(&config, &words.join(" "));
        let stats = corpus.words();
        let totals = stats.totals();

        let removed = words.iter().filter(|w| **w == "the" || **w == "a").count() as u64;
        prop_assert_eq!(totals.universal.value(), words.len() as u64);
        prop_assert_eq!(totals.filtered.value(), removed);
        prop_assert_eq!(stats.view(View::Removed).sum(), totals.of(View::Removed).value());
        prop_assert_eq!(stats.view(View::Removed).get("the"), 0);
        // "a" swaps to an empty token and is never counted as swapped
        prop_assert!(totals.both <= totals.swapped);
        prop_assert_eq!(stats.view(View::Both).sum(), totals.both.value());
        prop_assert_eq!(stats.view(View::Swapped).sum(), totals.swapped.value());
    }

    #[test]
    fn letters_follow_raw_characters(text in "[A-Za-z0-9 ,.!-]{0,200}") {
        let corpus = scan(&Config::default(), &text);
        let expected = text
            .to_lowercase()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .count() as u64;
        prop_assert_eq!(corpus.letters().totals().universal.value(), expected);
    }
}
