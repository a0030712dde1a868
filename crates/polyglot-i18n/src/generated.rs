//! Accessors generated from `locales/invariant.toml` at build time

use crate::catalog::Catalog;
use crate::store::MemoryCatalogStore;
use once_cell::sync::Lazy;

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// The compiled-in default catalog
pub static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::from(&TRANSLATIONS_SURFACE));

/// A store holding only the compiled-in default catalog
pub fn default_store() -> MemoryCatalogStore {
    MemoryCatalogStore::with_default(DEFAULT_CATALOG.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::MessageAccessor;

    #[test]
    fn test_accessors_match_catalog() {
        for accessor in Translations::ALL {
            assert_eq!(DEFAULT_CATALOG.get(accessor.key()), Some(accessor.default_value()));
            assert_eq!(accessor.symbol(), accessor.key());
            assert_eq!(accessor.evaluate(), accessor.default_value());
        }
        assert_eq!(DEFAULT_CATALOG.len(), Translations::ALL.len());
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(Translations::Greeting.key(), "Greeting");
        assert_eq!(Translations::Greeting.default_value(), "Hello, {0}!");
        assert_eq!(Translations::Empty.default_value(), "");
    }
}
