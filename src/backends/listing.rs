use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::backends::ListDestination;
use crate::errors::BackendError;
use crate::file_utils::FileManager;
use crate::language_utils::LanguageTable;
use crate::providers::TextTranslator;

// @module: Language listing shared by all backends

/// One row of a language listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    /// Lowercased language name
    pub name: String,
    /// Language code
    pub code: String,
    /// Sample text translated into this language; `None` when no sample was given
    pub translated: Option<String>,
}

/// Build listing rows sorted by name
///
/// Only a non-empty `sample` triggers provider calls, one per row. A failed
/// row translation is recorded in the cell instead of aborting the listing.
pub async fn build_rows(table: &LanguageTable, sample: &str, translator: &dyn TextTranslator) -> Vec<LanguageRow> {
    let entries = table.sorted_by_name();
    if sample.is_empty() {
        return entries
            .into_iter()
            .map(|entry| LanguageRow { name: entry.name, code: entry.code, translated: None })
            .collect();
    }

    let progress_bar = ProgressBar::new(entries.len() as u64);
    let template_result = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} languages ({percent}%) {msg}")
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress_bar.set_style(template_result.progress_chars("█▓▒░"));

    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        progress_bar.set_message(entry.name.clone());
        let translated = match translator.translate(sample, "auto", &entry.code).await {
            Ok(text) => text,
            Err(e) => {
                debug!("Sample translation into {} failed: {}", entry.code, e);
                format!("(err: {})", e)
            }
        };
        rows.push(LanguageRow { name: entry.name, code: entry.code, translated: Some(translated) });
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    rows
}

/// Render rows as a column-aligned table with a dashed rule under the header
pub fn render_table(rows: &[LanguageRow], with_sample: bool) -> String {
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once("language".len()))
        .max()
        .unwrap_or_default();
    let code_width = rows
        .iter()
        .map(|row| row.code.chars().count())
        .chain(std::iter::once("code".len()))
        .max()
        .unwrap_or_default();

    let mut header = format!("{:<name_width$}  {:<code_width$}", "language", "code");
    if with_sample {
        header.push_str("  translated_text");
    }

    let mut output = String::new();
    output.push_str(&header);
    output.push('\n');
    output.push_str(&"-".repeat(header.chars().count()));
    output.push('\n');

    for row in rows {
        let mut line = format!("{:<name_width$}  {:<code_width$}", row.name, row.code);
        if with_sample {
            line.push_str("  ");
            line.push_str(row.translated.as_deref().unwrap_or_default());
        }
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Write rows as semicolon-delimited CSV with a header record and `\r\n` endings
///
/// Cells are quoted only when they hold the delimiter, a quote or a line break.
pub fn write_csv<W: io::Write>(writer: W, rows: &[LanguageRow], with_sample: bool) -> Result<(), BackendError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    if with_sample {
        writer.write_record(["language", "code", "translated_text"])?;
    } else {
        writer.write_record(["language", "code"])?;
    }

    for row in rows {
        if with_sample {
            writer.write_record([row.name.as_str(), row.code.as_str(), row.translated.as_deref().unwrap_or_default()])?;
        } else {
            writer.write_record([row.name.as_str(), row.code.as_str()])?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Create the listing file, with its parent directories, and fill it
fn write_csv_file(path: &Path, rows: &[LanguageRow], with_sample: bool) -> Result<(), BackendError> {
    if let Some(parent) = path.parent() {
        FileManager::ensure_dir(parent).map_err(|e| BackendError::IoFailure(e.to_string()))?;
    }
    write_csv(File::create(path)?, rows, with_sample)
}

/// Build the rows for `table` and send them to `destination`
pub async fn list_languages(
    table: &LanguageTable,
    destination: &ListDestination,
    sample: &str,
    translator: &dyn TextTranslator,
) -> Result<Vec<LanguageRow>, BackendError> {
    let with_sample = !sample.is_empty();
    let rows = build_rows(table, sample, translator).await;

    match destination {
        ListDestination::Screen => print!("{}", render_table(&rows, with_sample)),
        ListDestination::File(path) => {
            write_csv_file(path, &rows, with_sample)?;
            debug!("Wrote {} languages to {:?}", rows.len(), path);
        }
    }

    Ok(rows)
}
