/*!
 * Bounded incremental reading of text sources.
 *
 * A bounded read consumes a source line by line and stops as soon as the
 * accumulated text satisfies the tightest of up to three independent limits
 * (characters, words, sentences). Lines are never split, so the result may
 * overshoot a limit by at most one line.
 *
 * Line breaks are universal: `\n`, `\r\n` and a lone `\r` all end a line and
 * are returned as `\n`.
 */

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::AppError;
use crate::text_stats::TextStats;

/// Size limits for a bounded read; 0 disables a dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadLimits {
    pub max_chars: usize,
    pub max_words: usize,
    pub max_sentences: usize,
}

impl ReadLimits {
    pub fn new(max_chars: usize, max_words: usize, max_sentences: usize) -> Self {
        Self { max_chars, max_words, max_sentences }
    }

    /// No limit on any dimension
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// True when any active limit is met or exceeded by `stats`
    pub fn reached_by(&self, stats: &TextStats) -> bool {
        (self.max_chars > 0 && stats.chars >= self.max_chars)
            || (self.max_words > 0 && stats.words >= self.max_words)
            || (self.max_sentences > 0 && stats.sentences >= self.max_sentences)
    }
}

/// Line-oriented reader that stops at the first satisfied limit
#[derive(Debug, Clone, Copy)]
pub struct BoundedReader {
    limits: ReadLimits,
}

impl BoundedReader {
    pub fn new(limits: ReadLimits) -> Self {
        Self { limits }
    }

    /// Read from `source` until a limit is reached or the input ends
    ///
    /// Stats are recomputed over the whole accumulated text after each line,
    /// with the same rules as `TextStats::count`.
    pub fn read<R: BufRead>(&self, mut source: R) -> io::Result<String> {
        let mut accumulated = String::new();
        let mut line = Vec::new();
        let mut lines = 0usize;

        loop {
            line.clear();
            if read_universal_line(&mut source, &mut line)? == 0 {
                break;
            }
            let text = std::str::from_utf8(&line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            accumulated.push_str(text);
            lines += 1;

            let stats = TextStats::count(&accumulated);
            if self.limits.reached_by(&stats) {
                debug!(
                    "Bounded read stopped after {} line(s): {} chars, {} words, {} sentences",
                    lines, stats.chars, stats.words, stats.sentences
                );
                break;
            }
        }

        Ok(accumulated)
    }

    /// Bounded read of a UTF-8 text file
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::IoFailure(format!("Failed to open {:?}: {}", path, e)))?;
        self.read(BufReader::new(file))
            .map_err(|e| AppError::IoFailure(format!("Failed to read {:?}: {}", path, e)))
    }
}

/// Append one line to `line`, ending it with `\n` when a break was found
///
/// Returns the number of bytes consumed from `source`; 0 means end of input.
/// Break bytes never occur inside a multi-byte UTF-8 sequence, so splitting
/// on raw bytes is safe.
fn read_universal_line<R: BufRead>(source: &mut R, line: &mut Vec<u8>) -> io::Result<usize> {
    let mut consumed = 0;

    loop {
        let available = source.fill_buf()?;
        if available.is_empty() {
            return Ok(consumed);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(idx) => {
                let ends_with_cr = available[idx] == b'\r';
                line.extend_from_slice(&available[..idx]);
                line.push(b'\n');
                source.consume(idx + 1);
                consumed += idx + 1;

                // The \n of a \r\n pair may sit in the next buffer
                if ends_with_cr && source.fill_buf()?.first() == Some(&b'\n') {
                    source.consume(1);
                    consumed += 1;
                }
                return Ok(consumed);
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                source.consume(len);
                consumed += len;
            }
        }
    }
}
