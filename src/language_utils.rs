use isolang::Language;
use once_cell::sync::Lazy;

use crate::errors::BackendError;

/// Language utilities
///
/// This module provides the language table shared by every backend: an
/// ordered name → code mapping with reverse lookup, the static fallback
/// table, the translate endpoint's own catalog and `isolang` code
/// normalization.

/// One row of a language table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Lowercased canonical name
    pub name: String,
    /// Short code
    pub code: String,
}

/// Ordered mapping from lowercased language name to code
///
/// Reverse lookups scan in insertion order, so when several names share a
/// code the first one inserted wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, code)` pairs
    pub fn from_pairs<I, N, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut table = Self::new();
        for (name, code) in pairs {
            table.insert(name.as_ref(), code.as_ref());
        }
        table
    }

    /// The static table used when no other source is available
    pub fn fallback() -> Self {
        Self::from_pairs([
            ("english", "en"),
            ("ukrainian", "uk"),
            ("french", "fr"),
            ("german", "de"),
            ("spanish", "es"),
        ])
    }

    /// Insert or replace an entry; a replaced name keeps its position
    pub fn insert(&mut self, name: &str, code: &str) {
        let name = name.trim().to_lowercase();
        let code = code.trim().to_string();
        if name.is_empty() || code.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.code = code,
            None => self.entries.push(LanguageEntry { name, code }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    /// Code for an exact (lowercased) name
    pub fn code_for(&self, name: &str) -> Option<&str> {
        let name = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code.as_str())
    }

    /// First name whose code matches, case-insensitively
    pub fn name_for(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
            .map(|entry| entry.name.as_str())
    }

    /// Resolve a token: a name yields its code, a code yields its name
    pub fn resolve(&self, token: &str) -> Result<String, BackendError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BackendError::EmptyArgument);
        }
        if let Some(code) = self.code_for(token) {
            return Ok(code.to_string());
        }
        if let Some(name) = self.name_for(token) {
            return Ok(name.to_string());
        }
        Err(BackendError::UnknownLanguage(token.to_lowercase()))
    }

    /// Normalize a token (name or code) to the table's code
    pub fn code_of(&self, token: &str) -> Result<String, BackendError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BackendError::EmptyArgument);
        }
        if let Some(code) = self.code_for(token) {
            return Ok(code.to_string());
        }
        match self.entries.iter().find(|entry| entry.code.eq_ignore_ascii_case(token)) {
            Some(entry) => Ok(entry.code.clone()),
            None => Err(BackendError::UnknownLanguage(token.to_lowercase())),
        }
    }

    /// Entries sorted by name
    pub fn sorted_by_name(&self) -> Vec<LanguageEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }
}

// Names as the public translate endpoint spells them, in its own order
const CATALOG_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"), ("albanian", "sq"), ("amharic", "am"), ("arabic", "ar"),
    ("armenian", "hy"), ("azerbaijani", "az"), ("basque", "eu"), ("belarusian", "be"),
    ("bengali", "bn"), ("bosnian", "bs"), ("bulgarian", "bg"), ("catalan", "ca"),
    ("cebuano", "ceb"), ("chichewa", "ny"), ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"), ("corsican", "co"), ("croatian", "hr"),
    ("czech", "cs"), ("danish", "da"), ("dutch", "nl"), ("english", "en"),
    ("esperanto", "eo"), ("estonian", "et"), ("filipino", "tl"), ("finnish", "fi"),
    ("french", "fr"), ("frisian", "fy"), ("galician", "gl"), ("georgian", "ka"),
    ("german", "de"), ("greek", "el"), ("gujarati", "gu"), ("haitian creole", "ht"),
    ("hausa", "ha"), ("hawaiian", "haw"), ("hebrew", "he"), ("hindi", "hi"),
    ("hmong", "hmn"), ("hungarian", "hu"), ("icelandic", "is"), ("igbo", "ig"),
    ("indonesian", "id"), ("irish", "ga"), ("italian", "it"), ("japanese", "ja"),
    ("javanese", "jw"), ("kannada", "kn"), ("kazakh", "kk"), ("khmer", "km"),
    ("korean", "ko"), ("kurdish (kurmanji)", "ku"), ("kyrgyz", "ky"), ("lao", "lo"),
    ("latin", "la"), ("latvian", "lv"), ("lithuanian", "lt"), ("luxembourgish", "lb"),
    ("macedonian", "mk"), ("malagasy", "mg"), ("malay", "ms"), ("malayalam", "ml"),
    ("maltese", "mt"), ("maori", "mi"), ("marathi", "mr"), ("mongolian", "mn"),
    ("myanmar (burmese)", "my"), ("nepali", "ne"), ("norwegian", "no"), ("odia", "or"),
    ("pashto", "ps"), ("persian", "fa"), ("polish", "pl"), ("portuguese", "pt"),
    ("punjabi", "pa"), ("romanian", "ro"), ("russian", "ru"), ("samoan", "sm"),
    ("scots gaelic", "gd"), ("serbian", "sr"), ("sesotho", "st"), ("shona", "sn"),
    ("sindhi", "sd"), ("sinhala", "si"), ("slovak", "sk"), ("slovenian", "sl"),
    ("somali", "so"), ("spanish", "es"), ("sundanese", "su"), ("swahili", "sw"),
    ("swedish", "sv"), ("tajik", "tg"), ("tamil", "ta"), ("telugu", "te"),
    ("thai", "th"), ("turkish", "tr"), ("ukrainian", "uk"), ("urdu", "ur"),
    ("uyghur", "ug"), ("uzbek", "uz"), ("vietnamese", "vi"), ("welsh", "cy"),
    ("xhosa", "xh"), ("yiddish", "yi"), ("yoruba", "yo"), ("zulu", "zu"),
];

static CATALOG: Lazy<LanguageTable> = Lazy::new(|| LanguageTable::from_pairs(CATALOG_LANGUAGES.iter().copied()));

/// Catalog of every language the translate endpoint offers
pub fn catalog() -> &'static LanguageTable {
    &CATALOG
}

/// Normalize an ISO 639-1 or 639-3 code to ISO 639-1 when one exists
///
/// Codes without a two-letter form are returned as lowercased 639-3 codes.
pub fn to_part1(code: &str) -> Option<String> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code).map(|_| normalized_code),
        3 => Language::from_639_3(&normalized_code).map(|lang| {
            lang.to_639_1()
                .map(|part1| part1.to_string())
                .unwrap_or(normalized_code)
        }),
        _ => None,
    }
}
