use anyhow::Result;
use rust_i18n::t;

/// Locales the translated pages exist for, in match order.
pub const DEFAULT_SUPPORTED: &[&str] = &["en", "de", "fa", "ru"];

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en";

/// The set of supported locales plus the fallback locale.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    supported: Vec<String>,
    fallback: String,
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            supported: DEFAULT_SUPPORTED.iter().map(|s| s.to_string()).collect(),
            fallback: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl LocaleSet {
    /// Validates that every entry is a lowercase two-letter code and that
    /// the fallback is one of them.
    pub fn new(supported: &[String], fallback: &str) -> Result<Self> {
        if supported.is_empty() {
            anyhow::bail!(t!("error_no_locales"));
        }
        for code in supported {
            if !is_code(code) {
                anyhow::bail!(t!("error_bad_locale", code = code.as_str()));
            }
        }
        if !supported.iter().any(|c| c == fallback) {
            anyhow::bail!(t!("error_fallback_unsupported", code = fallback));
        }
        Ok(Self {
            supported: supported.to_vec(),
            fallback: fallback.to_string(),
        })
    }

    /// Matches a reported language tag (e.g. "de-DE", "ru_RU.UTF-8")
    /// against the set: lowercase, keep the first two characters, return
    /// the first equal entry.
    pub fn match_tag(&self, tag: &str) -> Option<&str> {
        let lang: String = tag.to_lowercase().chars().take(2).collect();
        self.supported
            .iter()
            .find(|code| **code == lang)
            .map(String::as_str)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

fn is_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}
