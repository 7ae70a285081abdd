pub mod cli;
pub mod cookie;
pub mod i18n;
pub mod language;
pub mod locale;
pub mod navigate;
pub mod ops;
pub mod redirect;
pub mod store;

rust_i18n::i18n!("locales", fallback = "en");
