/*!
 * Integration tests for full controller runs
 */

use anyhow::Result;
use std::fs;
use textrans::app_controller::Controller;
use textrans::backends::{FileOrientedBackend, MinimalBackend, RichBackend};
use textrans::errors::{AppError, BackendError};
use textrans::providers::mock::{MockIdentifier, MockProvider};
use crate::common;

fn file_oriented(provider: &MockProvider, identifier: MockIdentifier) -> FileOrientedBackend {
    FileOrientedBackend::new(Box::new(provider.clone()), Box::new(identifier))
}

/// Test a screen run prints the report followed by the bounded translation
#[tokio::test]
async fn test_run_toScreen_shouldPrintReportAndTranslation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "story.txt", "Hello world. How are you?\nSecond line.\n")?;

    let mut config = common::run_config(&text_file, "uk", "screen");
    config.run.limit_words = 3;
    let controller = Controller::with_config(config)?;

    let provider = MockProvider::working();
    let backend = file_oriented(&provider, MockIdentifier::new("en", &["en:0.9900"]));

    let mut out = Vec::new();
    let written = controller.run(&backend, &mut out).await?;

    assert!(written.is_none());
    let expected = format!(
        "File: {}\nSize: 39 bytes\nChars: 39\nWords: 7\nSentences: 3\nDetected language: en\n\
         Target language: uk\nModule used: file-oriented\nTranslated text:\n\
         [TRANSLATED to ukrainian] Hello world. How are you?\n\n",
        text_file.display()
    );
    assert_eq!(String::from_utf8(out)?, expected);

    // Only the first line was sent, from an auto-detected source
    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "Hello world. How are you?\n");
    assert_eq!(requests[0].source_language, "auto");
    Ok(())
}

/// Test a file run writes `<stem>_<lang><ext>` next to the input and prints Ok
#[tokio::test]
async fn test_run_toFile_shouldWriteDerivedFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "story.txt", common::ENGLISH_TEXT)?;

    let controller = Controller::with_config(common::run_config(&text_file, "de", "FILE"))?;
    let backend = RichBackend::new(Box::new(MockProvider::working().with_detection("en", Some(0.98))));

    let mut out = Vec::new();
    let written = controller.run(&backend, &mut out).await?;

    let output_path = temp_dir.path().join("story_de.txt");
    assert_eq!(written.as_deref(), Some(output_path.as_path()));
    assert_eq!(
        fs::read_to_string(&output_path)?,
        format!("[TRANSLATED to de] {}", common::ENGLISH_TEXT)
    );

    let printed = String::from_utf8(out)?;
    assert!(printed.contains("Detected language: en\n"));
    assert!(printed.ends_with("Ok\n"));
    assert!(!printed.contains("Translated text:"));
    Ok(())
}

/// Test a backend without detection borrows it from the default backend
#[tokio::test]
async fn test_run_withMinimalBackend_shouldStillDetectLanguage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "story.txt", common::ENGLISH_TEXT)?;

    let controller = Controller::with_config(common::run_config(&text_file, "french", "screen"))?;
    let provider = MockProvider::working();
    let backend = MinimalBackend::new(Box::new(provider.clone()));

    let mut out = Vec::new();
    controller.run(&backend, &mut out).await?;

    let printed = String::from_utf8(out)?;
    assert!(printed.contains("Detected language: en\n"), "{}", printed);
    assert!(printed.contains("Module used: minimal\n"));
    assert_eq!(provider.requests()[0].target_language, "fr");
    Ok(())
}

#[tokio::test]
async fn test_run_withFailingDetector_shouldReportUnknownAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "story.txt", "Bonjour tout le monde.\n")?;

    let controller = Controller::with_config(common::run_config(&text_file, "en", "screen"))?;
    let backend = file_oriented(&MockProvider::working(), MockIdentifier::failing());

    let mut out = Vec::new();
    controller.run(&backend, &mut out).await?;

    let printed = String::from_utf8(out)?;
    assert!(printed.contains("Detected language: unknown\n"));
    assert!(printed.contains("[TRANSLATED to english] Bonjour tout le monde."));
    Ok(())
}

/// Test a translation failure aborts after the report was printed
#[tokio::test]
async fn test_run_withFailingProvider_shouldFailAfterReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "story.txt", common::ENGLISH_TEXT)?;

    let controller = Controller::with_config(common::run_config(&text_file, "uk", "screen"))?;
    let backend = file_oriented(&MockProvider::failing(), MockIdentifier::new("en", &[]));

    let mut out = Vec::new();
    let error = controller.run(&backend, &mut out).await.unwrap_err();

    assert!(matches!(error, AppError::Backend(BackendError::ProviderFailure(_))));
    let printed = String::from_utf8(out)?;
    assert!(printed.contains("Detected language: en\n"));
    assert!(!printed.contains("Translated text:"));
    Ok(())
}

#[tokio::test]
async fn test_run_withMissingTextFile_shouldFailWithoutOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("absent.txt");

    let controller = Controller::with_config(common::run_config(&missing, "en", "screen"))?;
    let backend = MinimalBackend::new(Box::new(MockProvider::working()));

    let mut out = Vec::new();
    let error = controller.run(&backend, &mut out).await.unwrap_err();

    assert!(matches!(error, AppError::FileNotFound(_)));
    assert!(error.to_string().starts_with("file not found"));
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_withEmptyTextFile_shouldFailWithEmptyText() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "empty.txt", "")?;

    let controller = Controller::with_config(common::run_config(&text_file, "en", "screen"))?;
    let backend = file_oriented(&MockProvider::working(), MockIdentifier::new("en", &[]));

    let mut out = Vec::new();
    let error = controller.run(&backend, &mut out).await.unwrap_err();

    assert!(matches!(error, AppError::Backend(BackendError::EmptyText)));
    let printed = String::from_utf8(out)?;
    assert!(printed.contains("Size: 0 bytes\n"));
    assert!(printed.contains("Detected language: unknown\n"));
    Ok(())
}

#[test]
fn test_withConfig_withUnknownModule_shouldFail() {
    let mut config = textrans::Config::default();
    config.run.module = "deepl".to_string();

    let error = Controller::with_config(config).err().unwrap();
    assert_eq!(error.to_string(), "cannot load backend 'deepl'");
}

/// Test a CRLF file reports raw bytes but counts each line break once
#[test]
fn test_inspect_withCrlfFile_shouldCountLineBreaksOnce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "dos.txt", "Hello world.\r\nHow are you?\r\n")?;

    let controller = Controller::with_config(common::run_config(&text_file, "en", "screen"))?;
    let backend = file_oriented(&MockProvider::working(), MockIdentifier::new("en", &[]));

    let report = tokio_test::block_on(controller.inspect(&backend))?;

    assert_eq!(report.size_bytes, 28);
    assert_eq!(report.stats.chars, 26);
    assert_eq!(report.stats.sentences, 2);
    Ok(())
}

/// Test inspection alone never reaches the translation provider
#[test]
fn test_inspect_shouldReportStatsWithoutTranslating() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "uk.txt", "Привіт, світе! Як справи?\n")?;

    let controller = Controller::with_config(common::run_config(&text_file, "en", "screen"))?;
    let provider = MockProvider::working();
    let backend = file_oriented(&provider, MockIdentifier::new("uk", &["uk:0.9500"]));

    let report = tokio_test::block_on(controller.inspect(&backend))?;

    assert_eq!(report.size_bytes, 45);
    assert_eq!(report.stats.chars, 26);
    assert_eq!(report.stats.words, 4);
    assert_eq!(report.stats.sentences, 2);
    assert_eq!(report.detected_language, "uk");
    assert_eq!(provider.request_count(), 0);
    Ok(())
}
