use sys_locale::get_locale;

use crate::locale::LocaleSet;

pub fn init() {
    let locales = LocaleSet::default();
    let lang = get_locale()
        .and_then(|tag| locales.match_tag(&tag).map(str::to_string))
        .unwrap_or_else(|| locales.fallback().to_string());
    rust_i18n::set_locale(&lang);
}
