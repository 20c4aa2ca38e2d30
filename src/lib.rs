/*!
 * # textrans - swappable text translation backends
 *
 * A Rust library for translating plain-text files through interchangeable
 * translation backends.
 *
 * ## Features
 *
 * - Text statistics (characters, words, sentences)
 * - Bounded reading of a file prefix by character, word and sentence limits
 * - Three backends behind one contract, selected by configuration:
 *   - Rich (the provider's full catalog, provider-side detection)
 *   - Minimal (five fixed languages, no detection)
 *   - File-oriented (provider-fetched table with fallback, local detection)
 * - Language listing to screen or semicolon-delimited file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `backends`: The `TranslationBackend` contract and its variants:
 *   - `backends::rich`, `backends::minimal`, `backends::file_oriented`
 *   - `backends::listing`: Shared language listing
 *   - `backends::registry`: Backend selection by identifier
 * - `bounded_reader`: Limit-aware line reader
 * - `text_stats`: Character/word/sentence counting
 * - `file_utils`: File system operations
 * - `language_utils`: Language tables and ISO code utilities
 * - `providers`: Translation and language identification collaborators
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod backends;
pub mod bounded_reader;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod text_stats;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use backends::{BackendKind, BackendRegistry, DetectMode, ListDestination, TranslationBackend};
pub use bounded_reader::{BoundedReader, ReadLimits};
pub use errors::{AppError, BackendError, ErrorKind, ProviderError};
pub use language_utils::LanguageTable;
pub use text_stats::TextStats;
