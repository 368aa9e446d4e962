// crates/engine/src/stitch.rs
use crate::normalize::NormalizedLine;

/// Re-joins words hyphenated across a line break.
///
/// Each pushed line is held back until the next one arrives, so a trailing
/// fragment (`"won-"`) can absorb the first token of the following line
/// (`"der land"`) before the held line is released as `["wonder"]`.
#[derive(Debug, Default)]
pub struct LineStitcher {
    pending: Option<NormalizedLine>,
}

impl LineStitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the next line and returns the tokens of the previous one, if any.
    pub fn push(&mut self, mut next: NormalizedLine) -> Option<Vec<String>> {
        let released = self.pending.take().map(|mut prev| {
            if prev.broken
                && !next.tokens.is_empty()
                && let Some(last) = prev.tokens.last_mut()
            {
                last.push_str(&next.tokens.remove(0));
            }
            prev.tokens
        });

        self.pending = Some(next);
        released
    }

    /// Releases the held line, unstitched.
    pub fn finish(&mut self) -> Option<Vec<String>> {
        self.pending.take().map(|line| line.tokens)
    }
}
