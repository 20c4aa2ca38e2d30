/*!
 * Tests for the limit-aware reader
 */

use anyhow::Result;
use std::io::Cursor;
use textrans::bounded_reader::{BoundedReader, ReadLimits};
use textrans::errors::AppError;
use textrans::text_stats::TextStats;
use crate::common;

const POEM: &str = "Roses are red.\nViolets are blue!\nSugar is sweet?\nAnd so are you\n";

fn read(limits: ReadLimits, text: &str) -> String {
    BoundedReader::new(limits).read(Cursor::new(text)).unwrap()
}

/// A single-line file overshoots a word limit up to its line boundary
#[test]
fn test_readFile_withWordLimitOnSingleLine_shouldReturnWholeLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "hello.txt", "Hello world. How are you?\n")?;

    let chunk = BoundedReader::new(ReadLimits::new(0, 3, 0)).read_file(&path)?;

    assert_eq!(chunk, "Hello world. How are you?\n");
    assert_eq!(TextStats::count(&chunk), TextStats { chars: 26, words: 5, sentences: 2 });
    Ok(())
}

/// A file with classic Mac line breaks is still read one line at a time
#[test]
fn test_readFile_withCarriageReturnBreaks_shouldStopAfterFirstLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "mac.txt", "One two.\rThree four.\rFive six.\r")?;

    let chunk = BoundedReader::new(ReadLimits::new(5, 0, 0)).read_file(&path)?;

    assert_eq!(chunk, "One two.\n");
    Ok(())
}

#[test]
fn test_read_withCrlfPoem_shouldMatchUnixPoem() {
    let crlf = POEM.replace('\n', "\r\n");
    for limits in [ReadLimits::new(20, 0, 0), ReadLimits::new(0, 5, 0), ReadLimits::new(0, 0, 3)] {
        assert_eq!(read(limits, &crlf), read(limits, POEM));
    }
}

#[test]
fn test_read_withCharLimit_shouldReturnShortestLineAlignedPrefix() {
    let total = TextStats::count(POEM).chars;
    for max_chars in 1..=total {
        let chunk = read(ReadLimits::new(max_chars, 0, 0), POEM);
        assert!(POEM.starts_with(&chunk));
        assert!(chunk.ends_with('\n'));
        assert!(TextStats::count(&chunk).chars >= max_chars);

        // Dropping the last line would fall below the limit
        let trimmed = &chunk[..chunk.len() - 1];
        let previous = trimmed.rfind('\n').map(|index| &chunk[..=index]).unwrap_or("");
        assert!(TextStats::count(previous).chars < max_chars);
    }
}

#[test]
fn test_read_withSentenceLimit_shouldStopAtFirstSatisfyingLine() {
    assert_eq!(read(ReadLimits::new(0, 0, 2), POEM), "Roses are red.\nViolets are blue!\n");
}

#[test]
fn test_read_withSeveralLimits_shouldStopAtWhicheverIsMetFirst() {
    // Two words are reached on line one, long before 50 chars
    assert_eq!(read(ReadLimits::new(50, 2, 10), POEM), "Roses are red.\n");
}

#[test]
fn test_read_withLimitBeyondText_shouldReturnEverything() {
    assert_eq!(read(ReadLimits::new(0, 1000, 0), POEM), POEM);
}

#[test]
fn test_read_withEmptySource_shouldReturnEmptyString() {
    assert_eq!(read(ReadLimits::new(10, 0, 0), ""), "");
}

#[test]
fn test_readFile_withMissingFile_shouldReportIoFailure() {
    let result = BoundedReader::new(ReadLimits::unlimited()).read_file("definitely_missing_12345.txt");
    assert!(matches!(result, Err(AppError::IoFailure(_))));
}
