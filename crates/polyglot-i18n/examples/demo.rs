//! Resolve a few messages for several locales.
//!
//! Run with `cargo run -p polyglot-i18n --example demo [locale...]`. Set
//! `POLYGLOT_LOG_FILE` to write JSON log records to a file instead.

use anyhow::Context;
use polyglot_common::{init_logging, LoggingConfig, PolyglotError};
use polyglot_i18n::{targs, with_locale, I18nConfig, Locale, Translations, Translator, TRANSLATIONS_SURFACE};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logging = match std::env::var("POLYGLOT_LOG_FILE") {
        Ok(path) => LoggingConfig::production(path),
        Err(_) => LoggingConfig::development(),
    };
    init_logging(logging)?;

    let mut config = I18nConfig::load().context("loading i18n configuration")?;
    if config.catalogs_dir.is_none() {
        config.catalogs_dir = Some(Path::new(env!("CARGO_MANIFEST_DIR")).join("locales"));
    }
    let translator = Translator::from_config(&config, &TRANSLATIONS_SURFACE)?;

    let mut tags: Vec<String> = std::env::args().skip(1).collect();
    if tags.is_empty() {
        tags = ["und", "fr", "fr-CA", "de-AT", "tr"].map(String::from).to_vec();
    }

    for tag in tags {
        let locale = Locale::parse(&tag).map_err(PolyglotError::from)?;
        let lines = with_locale(locale.clone(), async {
            anyhow::Ok([
                translator.get_translation_by(&Translations::Greeting, targs!["Ana"])?,
                translator.get_translation_by(&Translations::Farewell, targs!["Ana", "tomorrow"])?,
                translator.get_translation("ItemsInCart", targs![3])?,
                translator.get_translation_by_to_lower(&Translations::Title, targs![])?,
            ])
        })
        .await?;

        info!("Resolved {} messages for {}", lines.len(), locale);
        println!("[{locale}]");
        for line in lines {
            println!("  {line}");
        }
    }

    let keys: Vec<&str> = translator.list_known_keys().collect();
    println!("known keys: {}", keys.join(", "));
    Ok(())
}
