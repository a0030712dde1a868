//! Property tests for the translator and the formatter

use polyglot_i18n::generated::DEFAULT_CATALOG;
use polyglot_i18n::{
    fallback_chain, formatter, targs, Catalog, FixedLocale, Locale, MemoryCatalogStore,
    Translations, Translator, TRANSLATIONS_SURFACE,
};
use proptest::prelude::*;
use std::collections::HashSet;

const TAGS: &[&str] = &["und", "en", "fr", "fr-CA", "de", "de-AT", "tr", "az-Latn-AZ", "ja"];

fn store() -> MemoryCatalogStore {
    let fr = Catalog::new(
        Locale::parse("fr").unwrap(),
        [("Greeting", "Bonjour, {0}!"), ("Settings", "Paramètres")],
    )
    .unwrap();
    let fr_ca = Catalog::new(Locale::parse("fr-CA").unwrap(), [("SignIn", "Ouvrir une Session")]).unwrap();
    let tr = Catalog::new(Locale::parse("tr").unwrap(), [("Title", "BAŞLIK İSİM")]).unwrap();

    MemoryCatalogStore::builder(DEFAULT_CATALOG.clone())
        .catalog(fr)
        .catalog(fr_ca)
        .catalog(tr)
        .build()
}

fn translator(tag: &str) -> Translator<MemoryCatalogStore, FixedLocale> {
    Translator::new(store(), FixedLocale(Locale::parse(tag).unwrap())).with_surface(&TRANSLATIONS_SURFACE)
}

fn any_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TAGS)
}

fn any_accessor() -> impl Strategy<Value = Translations> {
    prop::sample::select(Translations::ALL)
}

proptest! {
    #[test]
    fn lowercase_variant_matches_lowercased_result(tag in any_tag(), accessor in any_accessor(), arg in "[A-Za-zİIı ]{0,12}") {
        let t = translator(tag);
        let locale = t.current_locale();
        let args = targs![arg.as_str(), arg.as_str()];

        let plain = t.get_translation(accessor.key(), args).unwrap();
        let lower = t.get_translation_to_lower(accessor.key(), args).unwrap();
        prop_assert_eq!(lower, formatter::to_lowercase(&plain, &locale));

        let plain = t.get_translation_by(&accessor, args).unwrap();
        let lower = t.get_translation_by_to_lower(&accessor, args).unwrap();
        prop_assert_eq!(lower, formatter::to_lowercase(&plain, &locale));
    }

    #[test]
    fn empty_key_is_always_empty(tag in any_tag(), args in prop::collection::vec(".*", 0..4)) {
        let t = translator(tag);
        let args: Vec<&dyn std::fmt::Display> = args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        prop_assert_eq!(t.get_translation("", &args).unwrap(), "");
        prop_assert_eq!(t.get_translation_to_lower("", &args).unwrap(), "");
    }

    #[test]
    fn unknown_keys_are_empty(tag in any_tag(), key in "[a-z]{1,16}") {
        // Declared keys are PascalCase, so lowercase keys are never known.
        let t = translator(tag);
        prop_assert_eq!(t.get_translation(&key, targs![]).unwrap(), "");
    }

    #[test]
    fn known_keys_are_unique_and_cover_the_chain(tag in any_tag()) {
        let t = translator(tag);
        let keys: Vec<&str> = t.list_known_keys().collect();
        let unique: HashSet<&str> = keys.iter().copied().collect();
        prop_assert_eq!(keys.len(), unique.len());

        let store = t.store();
        let mut expected = HashSet::new();
        for locale in fallback_chain(&t.current_locale()) {
            if let Some(catalog) = polyglot_i18n::CatalogStore::catalog(store, &locale) {
                expected.extend(catalog.keys());
            }
        }
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn chains_end_with_the_invariant_locale(tag in any_tag()) {
        let locale = Locale::parse(tag).unwrap();
        let chain = fallback_chain(&locale);
        prop_assert_eq!(chain.first(), Some(&locale));
        prop_assert!(chain.last().is_some_and(Locale::is_invariant));
        prop_assert_eq!(chain.iter().filter(|l| l.is_invariant()).count(), 1);
    }

    #[test]
    fn placeholder_free_text_is_unchanged(text in "[^{}]*") {
        prop_assert_eq!(formatter::format(&text, targs!["unused"]).unwrap(), text);
    }
}
