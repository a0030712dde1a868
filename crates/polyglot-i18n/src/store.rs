//! Catalog store: the read-only set of catalogs a translator resolves against

use crate::catalog::Catalog;
use crate::Locale;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Source of catalogs, consumed by the resolver and the translator.
///
/// Implementations must be immutable after construction: every method takes
/// `&self` and lookups must be side-effect free.
pub trait CatalogStore: Send + Sync {
    /// Catalog for exactly `locale`. The invariant locale maps to the default
    /// catalog.
    fn catalog(&self, locale: &Locale) -> Option<&Catalog>;

    /// The invariant-locale catalog; the source of truth for valid keys.
    fn default_catalog(&self) -> &Catalog;

    /// Compiled-in default template for `key`
    fn default_value(&self, key: &str) -> Option<&str> {
        self.default_catalog().get(key)
    }

    /// Designated parent of `locale`, `None` once the invariant root is
    /// reached.
    fn fallback_parent(&self, locale: &Locale) -> Option<Locale> {
        locale.parent()
    }
}

/// In-memory map of locale to catalog with optional parent overrides.
#[derive(Debug, Clone)]
pub struct MemoryCatalogStore {
    default: Catalog,
    catalogs: HashMap<Locale, Catalog>,
    parents: HashMap<Locale, Locale>,
}

impl MemoryCatalogStore {
    /// Start building a store around the default catalog
    pub fn builder(default: Catalog) -> MemoryCatalogStoreBuilder {
        MemoryCatalogStoreBuilder::new(default)
    }

    /// A store holding only the default catalog
    pub fn with_default(default: Catalog) -> Self {
        Self::builder(default).build()
    }

    /// Locales with a dedicated catalog, excluding the invariant one
    pub fn locales(&self) -> Vec<&Locale> {
        self.catalogs.keys().collect()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn catalog(&self, locale: &Locale) -> Option<&Catalog> {
        if locale.is_invariant() {
            return Some(&self.default);
        }
        self.catalogs.get(locale)
    }

    fn default_catalog(&self) -> &Catalog {
        &self.default
    }

    fn fallback_parent(&self, locale: &Locale) -> Option<Locale> {
        if locale.is_invariant() {
            return None;
        }
        self.parents
            .get(locale)
            .cloned()
            .or_else(|| locale.parent())
    }
}

/// Builder for [`MemoryCatalogStore`]
#[derive(Debug)]
pub struct MemoryCatalogStoreBuilder {
    default: Catalog,
    catalogs: HashMap<Locale, Catalog>,
    parents: HashMap<Locale, Locale>,
}

impl MemoryCatalogStoreBuilder {
    fn new(default: Catalog) -> Self {
        if !default.locale().is_invariant() {
            warn!(
                "Default catalog is tagged {} but is used as the invariant catalog",
                default.locale()
            );
        }
        Self {
            default,
            catalogs: HashMap::new(),
            parents: HashMap::new(),
        }
    }

    /// Add a locale catalog. An invariant catalog is ignored in favour of the
    /// default one; a second catalog for the same locale replaces the first.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        if catalog.locale().is_invariant() {
            warn!("Ignoring extra invariant catalog; the default catalog is authoritative");
            return self;
        }

        let locale = catalog.locale().clone();
        if self.catalogs.insert(locale.clone(), catalog).is_some() {
            debug!("Replaced catalog for locale: {}", locale);
        }
        self
    }

    /// Override the parent of `child` (e.g. `pt-BR` falling back to `pt-PT`)
    pub fn parent(mut self, child: Locale, parent: Locale) -> Self {
        if child == parent || child.is_invariant() {
            warn!("Ignoring parent override {} -> {}", child, parent);
            return self;
        }
        self.parents.insert(child, parent);
        self
    }

    /// Finish the store
    pub fn build(self) -> MemoryCatalogStore {
        debug!(
            "Built catalog store: {} default keys, {} locales, {} parent overrides",
            self.default.len(),
            self.catalogs.len(),
            self.parents.len()
        );
        MemoryCatalogStore {
            default: self.default,
            catalogs: self.catalogs,
            parents: self.parents,
        }
    }
}
