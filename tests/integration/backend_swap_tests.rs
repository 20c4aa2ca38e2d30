/*!
 * Integration tests for swapping backends behind the shared contract
 */

use anyhow::Result;
use std::fs;
use textrans::app_config::ProviderConfig;
use textrans::app_controller::Controller;
use textrans::backends::{
    BackendKind, BackendRegistry, FileOrientedBackend, ListDestination, MinimalBackend, RichBackend, TranslationBackend,
};
use textrans::errors::ErrorKind;
use textrans::language_utils::LanguageTable;
use textrans::providers::mock::{MockIdentifier, MockProvider};
use crate::common;

/// Test every configured module name yields a backend of the matching kind
#[test]
fn test_registry_shouldSwapBackendsByConfiguration() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "a.txt", "text")?;

    for (module, kind) in [
        ("rich", BackendKind::Rich),
        ("minimal", BackendKind::Minimal),
        ("file-oriented", BackendKind::FileOriented),
    ] {
        let mut config = common::run_config(&text_file, "en", "screen");
        config.run.module = module.to_string();
        let controller = Controller::with_config(config)?;
        assert_eq!(controller.backend()?.kind(), kind);
    }
    Ok(())
}

/// Test the same request is shaped differently by each backend
#[tokio::test]
async fn test_translate_sameRequest_shouldBeNormalizedPerBackend() -> Result<()> {
    let provider = MockProvider::working();
    let backends: Vec<Box<dyn TranslationBackend>> = vec![
        Box::new(RichBackend::new(Box::new(provider.clone()))),
        Box::new(MinimalBackend::new(Box::new(provider.clone()))),
        Box::new(FileOrientedBackend::new(Box::new(provider.clone()), Box::new(MockIdentifier::new("en", &[])))),
    ];

    for backend in &backends {
        backend.translate("Good morning", "english", "de").await?;
    }

    let targets: Vec<(String, String)> = provider
        .requests()
        .into_iter()
        .map(|request| (request.source_language, request.target_language))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("en".to_string(), "de".to_string()),
            ("en".to_string(), "de".to_string()),
            ("english".to_string(), "german".to_string()),
        ]
    );
    Ok(())
}

/// Test an unreachable language list still resolves the five fallback languages
#[tokio::test]
async fn test_resolveLanguage_withListOutage_shouldResolveFallbackLanguages() {
    let backend = FileOrientedBackend::new(
        Box::new(MockProvider::failing()),
        Box::new(MockIdentifier::new("en", &[])),
    );

    for entry in LanguageTable::fallback().iter() {
        assert_eq!(backend.resolve_language(&entry.name).await.unwrap(), entry.code);
        assert_eq!(backend.resolve_language(&entry.code).await.unwrap(), entry.name);
    }
    assert!(backend.used_fallback());
}

/// Test English resolves both ways against a one-entry table
#[tokio::test]
async fn test_resolveLanguage_withSingleEntryTable_shouldBeMutualInverses() {
    let table = LanguageTable::from_pairs([("english", "en")]);
    let backend = RichBackend::with_table(Box::new(MockProvider::working()), table);

    assert_eq!(backend.resolve_language("English").await.unwrap(), "en");
    assert_eq!(backend.resolve_language("en").await.unwrap(), "english");
    assert_eq!(
        backend.resolve_language("french").await.unwrap_err().kind(),
        ErrorKind::UnknownLanguage
    );
}

/// Test a listing file without sample has exactly the two-column header
#[tokio::test]
async fn test_listLanguages_toRegistryPath_shouldWriteHeaderOnlyColumns() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut settings = ProviderConfig::default();
    settings.listing_dir = temp_dir.path().join("lists");
    let registry = BackendRegistry::new(settings);

    let path = registry.listing_path(BackendKind::FileOriented);
    let backend = FileOrientedBackend::new(
        Box::new(MockProvider::without_language_list()),
        Box::new(MockIdentifier::new("en", &[])),
    );
    backend.list_languages(&ListDestination::parse("File", path.clone()), "").await?;

    let content = fs::read_to_string(&path)?;
    assert_eq!(content.lines().next(), Some("language;code"));
    assert_eq!(
        content,
        "language;code\r\nenglish;en\r\nfrench;fr\r\ngerman;de\r\nspanish;es\r\nukrainian;uk\r\n"
    );
    Ok(())
}

/// Test the bounded chunk overshoots a word limit to the end of the line
#[tokio::test]
async fn test_translateChunk_withWordLimit_shouldSendWholeFirstLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let text_file = common::create_test_file(temp_dir.path(), "hello.txt", "Hello world. How are you?")?;

    let mut config = common::run_config(&text_file, "es", "screen");
    config.run.limit_words = 3;
    let controller = Controller::with_config(config)?;
    let backend = MinimalBackend::new(Box::new(MockProvider::working()));

    let (chunk, translated) = controller.translate_chunk(&backend).await?;

    assert_eq!(chunk, "Hello world. How are you?");
    assert_eq!(translated, "[TRANSLATED to es] Hello world. How are you?");
    Ok(())
}
