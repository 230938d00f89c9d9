use anyhow::Context;
use log::info;
use movie_buddy::input::{BufReadSource, EditorSource, LineSource};
use movie_buddy::{ActionTable, Config, Dispatcher, InMemoryCatalog, MessageCatalog, logging};
use std::io::{self, IsTerminal};

fn main() -> anyhow::Result<()> {
    // `.env` may carry RUST_LOG, so it has to be loaded before the logger.
    let dotenv = dotenvy::dotenv();
    logging::init();
    if let Ok(path) = dotenv {
        info!("loaded environment from {}", path.display());
    }

    let config = Config::from_env().context("invalid configuration")?;
    let catalog = match &config.metadata {
        Some(path) => InMemoryCatalog::from_path(path),
        None => InMemoryCatalog::bundled(),
    }
    .context("can't load movie metadata")?;
    let messages = MessageCatalog::bundled();
    let locale = config.resolve_locale();
    info!("using locale {}", locale.as_str());

    let dispatcher = Dispatcher::new(ActionTable::default(), &catalog, &messages, locale);

    let mut input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorSource::new().context("can't initialize line editor")?)
    } else {
        Box::new(BufReadSource::new(io::stdin().lock()))
    };
    dispatcher.run(input.as_mut(), &mut io::stdout())
}
