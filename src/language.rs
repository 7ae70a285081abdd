use sys_locale::get_locale;

/// The environment's reported language: a primary source with a secondary
/// fallback when the primary is unavailable.
pub trait LanguageProbe {
    fn primary(&self) -> Option<String>;
    fn secondary(&self) -> Option<String>;

    fn report(&self) -> Option<String> {
        self.primary().or_else(|| self.secondary())
    }
}

pub struct SystemLanguage;

impl LanguageProbe for SystemLanguage {
    fn primary(&self) -> Option<String> {
        get_locale()
    }

    fn secondary(&self) -> Option<String> {
        std::env::var("LANG").ok().filter(|v| !v.is_empty())
    }
}
