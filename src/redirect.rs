use anyhow::Result;

use crate::cookie;
use crate::language::LanguageProbe;
use crate::locale::LocaleSet;
use crate::navigate::Navigator;
use crate::store::CookieStore;

/// Name of the preference cookie.
pub const PREFERENCE_COOKIE: &str = "language";

/// Which tier of the lookup chain chose the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cookie,
    Reported,
    Fallback,
}

pub struct Outcome {
    pub locale: String,
    pub source: Source,
    pub target: String,
}

/// Redirects a page to its translated counterpart. The root (the
/// directory holding the current page) is captured at construction, not
/// per call.
pub struct Redirector {
    root: String,
    locales: LocaleSet,
}

impl Redirector {
    /// `current_url` is the address of the page being redirected; the
    /// root is everything before its last `/` (empty when there is none).
    pub fn new(current_url: &str, locales: LocaleSet) -> Self {
        let root = match current_url.rfind('/') {
            Some(idx) => current_url[..idx].to_string(),
            None => String::new(),
        };
        Self { root, locales }
    }

    /// Picks the target locale (stored preference, then reported
    /// language, then fallback), saves it back into the preference
    /// cookie, and navigates to `<root>/<locale>/<page>`.
    pub fn redirect(
        &self,
        page: &str,
        store: &dyn CookieStore,
        probe: &dyn LanguageProbe,
        nav: &dyn Navigator,
    ) -> Result<Outcome> {
        // Last used language.
        let mut selected = self
            .stored_preference(store)
            .map(|locale| (locale, Source::Cookie));

        // Environment's preferred language.
        if selected.is_none() {
            if let Some(tag) = probe.report() {
                selected = self
                    .locales
                    .match_tag(&tag)
                    .map(|locale| (locale.to_string(), Source::Reported));
            }
        }

        let (locale, source) = selected
            .unwrap_or_else(|| (self.locales.fallback().to_string(), Source::Fallback));

        // Save the preference; a store failure must not stop the redirect.
        if let Err(e) = store.set(PREFERENCE_COOKIE, &locale) {
            eprintln!("langredirect: warning: {e:#}");
        }

        let target = format!("{}/{}/{}", self.root, locale, page);
        if nav.supports_replace() {
            nav.replace(&target)?;
        } else {
            nav.assign(&target)?;
        }

        Ok(Outcome {
            locale,
            source,
            target,
        })
    }

    fn stored_preference(&self, store: &dyn CookieStore) -> Option<String> {
        let header = match store.header() {
            Ok(header) => header?,
            Err(e) => {
                eprintln!("langredirect: warning: {e:#}");
                return None;
            }
        };
        cookie::get(&header, PREFERENCE_COOKIE)
    }
}
