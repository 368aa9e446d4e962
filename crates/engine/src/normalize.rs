// crates/engine/src/normalize.rs
use regex::Regex;
use std::sync::OnceLock;

/// One input line reduced to countable tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedLine {
    pub tokens: Vec<String>,
    /// The trimmed source line ended in a hyphen, splitting its last word.
    pub broken: bool,
}

fn keep_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9 ]+").unwrap())
}

fn keep_chars_and_angles() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9 <>]+").unwrap())
}

fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" ?</?[a-zA-Z0-9]+> ?").unwrap())
}

/// Lowercases a line and strips everything but ASCII letters, digits and spaces.
///
/// With `remove_html`, anything shaped like `<tag>` or `</tag>` is dropped
/// first. The heuristic is deliberately crude: every word wrapped in angle
/// brackets is treated as markup.
pub fn normalize(line: &str, remove_html: bool) -> NormalizedLine {
    let line = line.trim();
    if line.is_empty() {
        return NormalizedLine::default();
    }

    // a lone "-" is not a broken word
    let broken = line.len() > 1 && line.ends_with('-');

    let mut text = line.to_lowercase();

    if remove_html {
        text = keep_chars_and_angles().replace_all(&text, "").into_owned();
        text = html_tag().replace_all(&text, "").into_owned();
    }

    let text = keep_chars().replace_all(&text, "");

    NormalizedLine {
        tokens: text.split_whitespace().map(str::to_owned).collect(),
        broken,
    }
}
