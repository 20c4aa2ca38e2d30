// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use textrans::app_config::{Config, LogLevel};
use textrans::backends::{BackendKind, DetectMode, ListDestination};
use textrans::file_utils::FileManager;
use textrans::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for DetectMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDetectMode {
    Lang,
    Confidence,
    All,
}

impl From<CliDetectMode> for DetectMode {
    fn from(mode: CliDetectMode) -> Self {
        match mode {
            CliDetectMode::Lang => DetectMode::Lang,
            CliDetectMode::Confidence => DetectMode::Confidence,
            CliDetectMode::All => DetectMode::All,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the configured text file (default command)
    Translate(RunOverrides),

    /// List the languages a backend supports
    Languages {
        /// Backend to query (rich, minimal, file-oriented)
        #[arg(short, long)]
        module: Option<String>,

        /// Where to send the listing: screen or file
        #[arg(short, long, default_value = "screen")]
        output: String,

        /// Sample text to translate into every language
        #[arg(short, long, default_value = "")]
        sample: String,
    },

    /// Detect the language of a text file
    Detect {
        /// Text file to inspect
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Backend to use
        #[arg(short, long)]
        module: Option<String>,

        /// What to print
        #[arg(long, value_enum, default_value = "all")]
        mode: CliDetectMode,
    },

    /// Resolve a language name to its code, or a code to its name
    Resolve {
        /// Language name or code
        #[arg(value_name = "TOKEN")]
        token: String,

        /// Backend to use
        #[arg(short, long)]
        module: Option<String>,
    },

    /// Generate shell completions for textrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Overrides of the `run` section of the configuration
#[derive(Args, Debug, Clone, Default)]
struct RunOverrides {
    /// Text file to translate
    #[arg(long)]
    text_file: Option<PathBuf>,

    /// Destination language (name or code)
    #[arg(short, long)]
    dest_lang: Option<String>,

    /// Backend to use (rich, minimal, file-oriented)
    #[arg(short, long)]
    module: Option<String>,

    /// Where the translation goes: screen or file
    #[arg(short, long)]
    output: Option<String>,

    /// Stop reading once this many characters are reached (0 = no limit)
    #[arg(long)]
    limit_chars: Option<usize>,

    /// Stop reading once this many words are reached (0 = no limit)
    #[arg(long)]
    limit_words: Option<usize>,

    /// Stop reading once this many sentences are reached (0 = no limit)
    #[arg(long)]
    limit_sentences: Option<usize>,
}

impl RunOverrides {
    fn apply(self, config: &mut Config) {
        let run = &mut config.run;
        if let Some(text_file) = self.text_file {
            run.text_file = text_file;
        }
        if let Some(dest_lang) = self.dest_lang {
            run.dest_lang = dest_lang;
        }
        if let Some(module) = self.module {
            run.module = module;
        }
        if let Some(output) = self.output {
            run.output = output;
        }
        if let Some(limit) = self.limit_chars {
            run.limit_chars = limit;
        }
        if let Some(limit) = self.limit_words {
            run.limit_words = limit;
        }
        if let Some(limit) = self.limit_sentences {
            run.limit_sentences = limit;
        }
    }
}

/// textrans - translate text files through swappable backends
///
/// Reads a text file, reports its size, statistics and language, then
/// translates a bounded prefix of it with the configured backend.
#[derive(Parser, Debug)]
#[command(name = "textrans")]
#[command(version)]
#[command(about = "Text file translation with swappable backends")]
#[command(long_about = "textrans reports statistics about a text file and translates a bounded part of it.

EXAMPLES:
    textrans                                   # Translate using conf.json
    textrans -m minimal -d uk                  # Minimal backend, into Ukrainian
    textrans --limit-words 50 -o file          # First ~50 words, written to <name>_<lang>.txt
    textrans languages -m rich -s 'Hello'      # List languages with a sample translation
    textrans languages -o file                 # Write languages_<backend>.csv
    textrans detect notes.txt --mode lang      # Print the detected language code
    textrans resolve german                    # Print 'de'
    textrans completions bash > textrans.bash  # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json by default (see --config). The file
    must contain a \"run\" section; command line flags override its values.

BACKENDS:
    rich          - Full provider catalog, provider-side detection
    minimal       - english, ukrainian, french, german, spanish; no detection
    file-oriented - Provider language list with fallback, local detection (default)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    #[command(flatten)]
    overrides: RunOverrides,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The filter lives in `log::max_level`, so the logger itself accepts everything
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() {
    // Stdout carries the report, so stay quiet until the config says otherwise
    if let Err(e) = CustomLogger::init(LevelFilter::Warn) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    if let Err(e) = run(cli).await {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CommandLineOptions) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "textrans", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::from_file(&cli.config)?;

    // Command line log level wins over the config file
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));
    debug!("Loaded configuration from {:?}", cli.config);

    match cli.command {
        Some(Commands::Translate(overrides)) => run_translate(config, overrides).await,
        None => run_translate(config, cli.overrides).await,
        Some(Commands::Languages { module, output, sample }) => {
            let controller = Controller::with_config(config)?;
            let kind = selected_kind(controller.config(), module)?;
            let destination = ListDestination::parse(&output, controller.registry().listing_path(kind));

            let backend = controller.registry().create(kind);
            backend.list_languages(&destination, &sample).await?;
            if let ListDestination::File(path) = destination {
                println!("Ok: {}", path.display());
            }
            Ok(())
        }
        Some(Commands::Detect { file, module, mode }) => {
            let controller = Controller::with_config(config)?;
            let kind = selected_kind(controller.config(), module)?;
            let text = FileManager::read_to_string(&file)?;

            let backend = controller.registry().create(kind);
            println!("{}", backend.detect_language(&text, mode.into()).await?);
            Ok(())
        }
        Some(Commands::Resolve { token, module }) => {
            let controller = Controller::with_config(config)?;
            let kind = selected_kind(controller.config(), module)?;

            let backend = controller.registry().create(kind);
            println!("{}", backend.resolve_language(&token).await?);
            Ok(())
        }
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

fn selected_kind(config: &Config, module: Option<String>) -> Result<BackendKind> {
    let identifier = module.unwrap_or_else(|| config.run.module.clone());
    Ok(identifier.parse::<BackendKind>()?)
}

async fn run_translate(mut config: Config, overrides: RunOverrides) -> Result<()> {
    overrides.apply(&mut config);

    let controller = Controller::with_config(config)?;
    let backend = controller.backend()?;

    let mut stdout = std::io::stdout();
    controller.run(backend.as_ref(), &mut stdout).await?;
    stdout.flush()?;
    Ok(())
}
