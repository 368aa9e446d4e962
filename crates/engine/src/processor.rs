use crate::Corpus;
use crate::error::{EngineError, Result};
use crate::normalize::normalize;
use crate::stitch::LineStitcher;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

impl Corpus {
    /// Scans one file and folds its tokens into the shared statistics.
    ///
    /// # Errors
    /// Fails if the file cannot be opened or read, or if a line exceeds the
    /// configured length limit. Counts already recorded for the file are kept.
    pub fn run_file(&self, path: &Path) -> Result<()> {
        debug!("processing {}", path.display());

        let file = File::open(path).map_err(|e| EngineError::FileOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let lines = self.process_reader(BufReader::new(file), path)?;

        debug!("finished {} ({lines} lines)", path.display());
        Ok(())
    }

    /// Line loop behind [`Corpus::run_file`]; returns the number of lines read.
    ///
    /// Stitching is sequential: a line is only recorded once its successor
    /// has been seen.
    pub fn process_reader<R: BufRead>(&self, mut reader: R, path: &Path) -> Result<usize> {
        let mut stitcher = LineStitcher::new();
        let mut buf = Vec::new();
        let mut line_no = 0;
        // room for a "\r\n" terminator past the limit
        let limit = (self.max_line_bytes as u64).saturating_add(2);

        loop {
            buf.clear();
            let read = (&mut reader)
                .take(limit)
                .read_until(b'\n', &mut buf)
                .map_err(|e| EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = trim_line_ending(&buf);
            if line.len() > self.max_line_bytes {
                return Err(EngineError::LineTooLong {
                    path: path.to_path_buf(),
                    line: line_no,
                    len: line.len(),
                    max: self.max_line_bytes,
                });
            }

            // Use lossy conversion; anything non-ASCII is dropped by normalize anyway
            let text = String::from_utf8_lossy(line);
            if let Some(tokens) = stitcher.push(normalize(&text, self.remove_html)) {
                self.record_line(&tokens);
            }
        }

        if let Some(tokens) = stitcher.finish() {
            self.record_line(&tokens);
        }

        Ok(line_no)
    }

    /// Counts every token of a stitched line in both dimensions.
    pub(crate) fn record_line(&self, tokens: &[String]) {
        let mut utf8 = [0u8; 4];

        for token in tokens {
            let out = self.transformer.apply(token);

            self.words.increment(token, &out.swapped, out.removed);

            for c in token.chars() {
                self.letters
                    .increment(c.encode_utf8(&mut utf8), "", out.removed);
            }
            for c in out.swapped.chars() {
                self.letters
                    .increment("", c.encode_utf8(&mut utf8), out.removed);
            }
        }
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
