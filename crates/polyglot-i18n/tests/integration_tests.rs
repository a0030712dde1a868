//! Integration tests for message resolution against the shipped catalogs

use polyglot_common::test_utils::{init_test_logging, write_fixture};
use polyglot_i18n::generated::DEFAULT_CATALOG;
use polyglot_i18n::{
    targs, with_locale_sync, CatalogLoader, FixedLocale, I18nConfig, I18nError, Locale,
    MemoryCatalogStore, Translations, Translator, TRANSLATIONS_SURFACE,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn locales_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
}

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

/// Store built from `locales/`, with the compiled default catalog
fn shipped_store() -> MemoryCatalogStore {
    CatalogLoader::new(locales_dir())
        .load_with_default(DEFAULT_CATALOG.clone())
        .unwrap()
        .build()
}

fn translator_for(tag: &str) -> Translator<MemoryCatalogStore, FixedLocale> {
    init_test_logging();
    Translator::new(shipped_store(), FixedLocale(locale(tag))).with_surface(&TRANSLATIONS_SURFACE)
}

#[test]
fn test_exact_locale_match() {
    let t = translator_for("fr");
    assert_eq!(t.get_translation("Greeting", targs!["Ana"]).unwrap(), "Bonjour, Ana!");
    assert_eq!(t.get_translation("Settings", targs![]).unwrap(), "Paramètres");
}

#[test]
fn test_regional_locale_falls_back_to_parent() {
    let t = translator_for("fr-CA");
    assert_eq!(t.get_translation("SignIn", targs![]).unwrap(), "Ouvrir une Session");
    assert_eq!(t.get_translation("Greeting", targs!["Ana"]).unwrap(), "Bonjour, Ana!");
    assert_eq!(
        t.get_translation("Farewell", targs!["Ana", "demain"]).unwrap(),
        "Au revoir, Ana. À demain!"
    );
}

#[test]
fn test_falls_back_to_default_catalog() {
    let t = translator_for("fr-CA");
    assert_eq!(
        t.get_translation("ItemsInCart", targs![3]).unwrap(),
        "You have 3 items in your cart"
    );

    let t = translator_for("ja-JP");
    assert_eq!(t.get_translation("Greeting", targs!["Ana"]).unwrap(), "Hello, Ana!");
}

#[test]
fn test_invariant_locale() {
    let t = translator_for("und");
    assert_eq!(t.get_translation("SignIn", targs![]).unwrap(), "Sign In");
    assert_eq!(
        t.get_translation("Escaped", targs!["x"]).unwrap(),
        "Use {0} to insert x"
    );
}

#[test]
fn test_unknown_and_empty_keys() {
    let t = translator_for("de");
    assert_eq!(t.get_translation("NoSuchKey", targs![]).unwrap(), "");
    assert_eq!(t.get_translation("NoSuchKey", targs!["extra", 1]).unwrap(), "");
    assert_eq!(t.get_translation("", targs!["Ana"]).unwrap(), "");
}

#[test]
fn test_typed_accessors() {
    let t = translator_for("de-AT");
    assert_eq!(
        t.get_translation_by(&Translations::Greeting, targs!["Ana"]).unwrap(),
        "Hallo, Ana!"
    );
    assert_eq!(
        t.get_translation_by(&Translations::SignIn, targs![]).unwrap(),
        "Sign In"
    );
    assert_eq!(t.get_translation_by(None::<&Translations>, targs![]).unwrap(), "");
}

#[test]
fn test_accessor_and_key_agree() {
    let t = translator_for("fr-CA");
    for accessor in Translations::ALL {
        let args = targs!["a", "b"];
        assert_eq!(
            t.get_translation_by(accessor, args).unwrap(),
            t.get_translation(accessor.key(), args).unwrap(),
            "{accessor:?}"
        );
    }
}

#[test]
fn test_lowercase_variants() {
    let t = translator_for("fr");
    assert_eq!(
        t.get_translation_to_lower("Greeting", targs!["Ana"]).unwrap(),
        "bonjour, ana!"
    );
    assert_eq!(
        t.get_translation_by_to_lower(&Translations::SignIn, targs![]).unwrap(),
        "se connecter"
    );

    let t = translator_for("tr");
    assert_eq!(t.get_translation_to_lower("Title", targs![]).unwrap(), "başlık isim");
    assert_eq!(
        t.get_translation_to_lower("Greeting", targs!["IRMAK"]).unwrap(),
        "merhaba, ırmak!"
    );
}

#[test]
fn test_argument_count_mismatch() {
    let t = translator_for("fr");
    let err = t.get_translation("Farewell", targs!["Ana"]).unwrap_err();
    assert!(matches!(err, I18nError::Format { .. }));
    assert!(err.to_string().contains("needs at least 2 arguments, got 1"));
}

#[test]
fn test_list_known_keys_for_regional_locale() {
    let t = translator_for("fr-CA");
    let keys: Vec<&str> = t.list_known_keys().collect();

    // fr-CA's own keys come first, then fr's, then the default catalog's.
    assert_eq!(keys[0], "SignIn");
    assert_eq!(&keys[1..4], &["Farewell", "Greeting", "Settings"]);
    assert_eq!(keys.len(), Translations::ALL.len());
    for accessor in Translations::ALL {
        assert!(keys.contains(&accessor.key()));
    }
}

#[test]
fn test_parent_override() {
    init_test_logging();
    let store = CatalogLoader::new(locales_dir())
        .load_with_default(DEFAULT_CATALOG.clone())
        .unwrap()
        .parent(locale("lb"), locale("de"))
        .build();
    let t = Translator::new(store, FixedLocale(locale("lb-LU")));

    assert_eq!(t.get_translation("Settings", targs![]).unwrap(), "Einstellungen");
}

#[test]
fn test_from_config() {
    init_test_logging();
    let config = I18nConfig {
        catalogs_dir: Some(locales_dir()),
        fallback_locale: Some(locale("fr-CA")),
        ..I18nConfig::default()
    };
    let t = Translator::from_config(&config, &TRANSLATIONS_SURFACE).unwrap();

    assert_eq!(t.get_translation("SignIn", targs![]).unwrap(), "Ouvrir une Session");
    let scoped = with_locale_sync(locale("de"), || t.get_translation("Greeting", targs!["Ana"]));
    assert_eq!(scoped.unwrap(), "Hallo, Ana!");
    assert_eq!(
        t.get_translation_by(&Translations::Welcome, targs!["Polyglot"]).unwrap(),
        "Welcome to Polyglot"
    );
}

#[test]
fn test_from_config_with_custom_catalogs() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "es.json", r#"{ "Greeting": "¡Hola, {0}!" }"#);
    write_fixture(dir.path(), "pt-PT.toml", "Settings = \"Definições\"\n");

    let config = I18nConfig::from_toml_str(&format!(
        "catalogs_dir = {:?}\nfallback_locale = \"pt-BR\"\n\n[parents]\npt-BR = \"pt-PT\"\n",
        dir.path()
    ))
    .unwrap();
    let t = Translator::from_config(&config, &TRANSLATIONS_SURFACE).unwrap();

    assert_eq!(t.get_translation("Settings", targs![]).unwrap(), "Definições");
    let spanish = with_locale_sync(locale("es-MX"), || t.get_translation("Greeting", targs!["Ana"]));
    assert_eq!(spanish.unwrap(), "¡Hola, Ana!");
}

#[test]
fn test_from_config_without_catalogs() {
    let t = Translator::from_config(&I18nConfig::default(), &TRANSLATIONS_SURFACE).unwrap();
    assert_eq!(t.get_translation("Greeting", targs!["Ana"]).unwrap(), "Hello, Ana!");
    assert_eq!(t.list_known_keys().count(), TRANSLATIONS_SURFACE.len());
}

#[test]
fn test_from_config_missing_directory() {
    let config = I18nConfig {
        catalogs_dir: Some(PathBuf::from("/no/such/catalogs")),
        ..I18nConfig::default()
    };
    assert!(matches!(
        Translator::from_config(&config, &TRANSLATIONS_SURFACE),
        Err(I18nError::CatalogLoad { .. })
    ));
}
