use clap::Parser;
use std::path::PathBuf;

use crate::locale;

/// Redirects a page to its translated counterpart: picks a target
/// language from the stored preference or the system language and prints
/// the locale-prefixed address.
#[derive(Parser, Debug)]
#[command(name = "langredirect", version, about)]
pub struct Cli {
    /// Page to redirect (e.g. index.html)
    pub page: String,

    /// Address of the current page; the redirect root is everything
    /// before its last `/`
    #[arg(short, long, default_value = "./index.html")]
    pub url: String,

    /// Supported locales, in match order
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = locale::DEFAULT_SUPPORTED.iter().map(ToString::to_string)
    )]
    pub locales: Vec<String>,

    /// Locale used when neither the preference nor the system language
    /// matches
    #[arg(short, long, default_value = locale::DEFAULT_LOCALE)]
    pub fallback: String,

    /// Preference store location (overrides LANGREDIRECT_COOKIE_FILE and
    /// the default under the user data directory)
    #[arg(long)]
    pub cookie_file: Option<PathBuf>,

    /// Explain how the language was chosen
    #[arg(short, long)]
    pub verbose: bool,
}
