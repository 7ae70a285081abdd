use anyhow::Result;
use clap::Parser;

use langredirect::cli::Cli;
use langredirect::language::SystemLanguage;
use langredirect::navigate::StdoutNavigator;
use langredirect::ops;
use langredirect::store;

fn main() -> Result<()> {
    langredirect::i18n::init();

    let cli = Cli::parse();
    let store = store::create_store(cli.cookie_file.as_deref());
    let probe = SystemLanguage;
    let nav = StdoutNavigator;

    ops::run(&cli, store.as_ref(), &probe, &nav)?;

    Ok(())
}
