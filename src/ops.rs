use anyhow::Result;
use rust_i18n::t;

use crate::cli::Cli;
use crate::language::LanguageProbe;
use crate::locale::LocaleSet;
use crate::navigate::Navigator;
use crate::redirect::{Outcome, Redirector, Source};
use crate::store::CookieStore;

pub fn run(
    cli: &Cli,
    store: &dyn CookieStore,
    probe: &dyn LanguageProbe,
    nav: &dyn Navigator,
) -> Result<Outcome> {
    let locales = LocaleSet::new(&cli.locales, &cli.fallback)?;
    let redirector = Redirector::new(&cli.url, locales);

    let outcome = redirector.redirect(&cli.page, store, probe, nav)?;

    if cli.verbose {
        let key = match outcome.source {
            Source::Cookie => "verbose_from_cookie",
            Source::Reported => "verbose_from_language",
            Source::Fallback => "verbose_from_fallback",
        };
        eprintln!("{}", t!(key, code = outcome.locale.as_str()));
        eprintln!("{}", t!("verbose_target", target = outcome.target.as_str()));
    }

    Ok(outcome)
}
