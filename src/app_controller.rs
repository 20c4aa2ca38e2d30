use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::{Config, OutputTarget};
use crate::backends::{BackendKind, BackendRegistry, DetectMode, TranslationBackend};
use crate::bounded_reader::BoundedReader;
use crate::errors::{AppError, ErrorKind};
use crate::file_utils::FileManager;
use crate::text_stats::TextStats;

// @module: Application controller for text translation runs

/// What is known about the input file before translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub stats: TextStats,
    /// Detected language code, or `unknown`
    pub detected_language: String,
}

/// Main application controller for text translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Backend factory built from the provider settings
    registry: BackendRegistry,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let registry = BackendRegistry::new(config.provider.clone());
        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    // @returns: Backend selected by the `module` setting
    pub fn backend(&self) -> Result<Box<dyn TranslationBackend>, AppError> {
        self.registry.resolve(&self.config.run.module)
    }

    /// Size, statistics and language of the whole input file
    pub async fn inspect(&self, backend: &dyn TranslationBackend) -> Result<FileReport, AppError> {
        let path = &self.config.run.text_file;
        if !FileManager::file_exists(path) {
            return Err(AppError::FileNotFound(path.clone()));
        }

        let size_bytes = FileManager::file_size(path)?;
        let full_text = FileManager::read_to_string(path)?;
        let stats = TextStats::count(&full_text);
        info!("Read {:?}: {} bytes, {} words", path, size_bytes, stats.words);

        let detected_language = self.detect_language(backend, &full_text).await;

        Ok(FileReport { path: path.clone(), size_bytes, stats, detected_language })
    }

    // Detection never aborts a run: backends without it defer to the default
    // backend, other failures are reported as `unknown`.
    async fn detect_language(&self, backend: &dyn TranslationBackend, text: &str) -> String {
        let result = match backend.detect_language(text, DetectMode::Lang).await {
            Err(e) if e.kind() == ErrorKind::Unsupported => {
                debug!("{}; using the {} backend for detection", e, BackendKind::default());
                self.registry
                    .create(BackendKind::default())
                    .detect_language(text, DetectMode::Lang)
                    .await
            }
            other => other,
        };

        result.unwrap_or_else(|e| {
            warn!("Language detection failed: {}", e);
            "unknown".to_string()
        })
    }

    /// Bounded chunk of the input and its translation
    pub async fn translate_chunk(&self, backend: &dyn TranslationBackend) -> Result<(String, String), AppError> {
        let reader = BoundedReader::new(self.config.run.limits());
        let chunk = reader.read_file(&self.config.run.text_file)?;
        debug!("Translating chunk of {} chars with {}", chunk.chars().count(), backend.kind());

        let translated = backend.translate(&chunk, "auto", &self.config.run.dest_lang).await?;
        Ok((chunk, translated))
    }

    pub fn print_file_report(&self, report: &FileReport, out: &mut dyn Write) -> Result<(), AppError> {
        writeln!(out, "File: {}", report.path.display())?;
        writeln!(out, "Size: {} bytes", report.size_bytes)?;
        writeln!(out, "Chars: {}", report.stats.chars)?;
        writeln!(out, "Words: {}", report.stats.words)?;
        writeln!(out, "Sentences: {}", report.stats.sentences)?;
        writeln!(out, "Detected language: {}", report.detected_language)?;
        Ok(())
    }

    /// Print the translation or write it next to the input
    ///
    /// Returns the written path for file output.
    pub fn emit_translation(
        &self,
        translated: &str,
        backend: BackendKind,
        out: &mut dyn Write,
    ) -> Result<Option<PathBuf>, AppError> {
        let run = &self.config.run;
        match run.output_target() {
            OutputTarget::Screen => {
                writeln!(out, "Target language: {}", run.dest_lang)?;
                writeln!(out, "Module used: {}", backend)?;
                writeln!(out, "Translated text:")?;
                writeln!(out, "{}", translated)?;
                Ok(None)
            }
            OutputTarget::File => {
                let output_path = FileManager::generate_output_path(&run.text_file, &run.dest_lang);
                FileManager::write_to_file(&output_path, translated)?;
                info!("Translation written to {:?}", output_path);
                writeln!(out, "Ok")?;
                Ok(Some(output_path))
            }
        }
    }

    /// Full run: report on the file, translate the bounded chunk, emit the result
    pub async fn run(&self, backend: &dyn TranslationBackend, out: &mut dyn Write) -> Result<Option<PathBuf>, AppError> {
        let report = self.inspect(backend).await?;
        self.print_file_report(&report, out)?;

        let (_, translated) = self.translate_chunk(backend).await?;
        self.emit_translation(&translated, backend.kind(), out)
    }
}
