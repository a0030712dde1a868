//! Locale fallback resolution

use crate::store::CatalogStore;
use crate::Locale;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A template together with the locale whose catalog supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'s> {
    /// Locale of the catalog that contained the key
    pub locale: Locale,
    /// Raw template
    pub template: &'s str,
}

/// Walks a store's fallback chain to find the first catalog holding a key.
///
/// Pure in-memory probing: no caching, no mutation, bounded by the chain
/// length.
#[derive(Debug)]
pub struct LocaleResolver<'s, S: CatalogStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: CatalogStore + ?Sized> LocaleResolver<'s, S> {
    /// Create a resolver over `store`
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Fallback chain for `locale` as designated by the store.
    ///
    /// Starts with `locale`, follows `fallback_parent` without revisiting a
    /// locale, and always ends with the invariant locale.
    pub fn chain(&self, locale: &Locale) -> Vec<Locale> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(locale.clone());

        while let Some(current) = next {
            if !seen.insert(current.clone()) {
                debug!("Fallback cycle detected at {}, stopping walk", current);
                break;
            }
            next = self.store.fallback_parent(&current);
            chain.push(current);
        }

        if !seen.contains(&Locale::invariant()) {
            chain.push(Locale::invariant());
        }
        chain
    }

    /// First template for `key` along the chain of `locale`, with its source
    pub fn resolve_with_source(&self, key: &str, locale: &Locale) -> Option<Resolved<'s>> {
        if key.is_empty() {
            return None;
        }

        let store = self.store;
        self.chain(locale).into_iter().find_map(|candidate| {
            let template = store.catalog(&candidate)?.get(key)?;
            trace!("Resolved '{}' for {} from {}", key, locale, candidate);
            Some(Resolved {
                locale: candidate,
                template,
            })
        })
    }

    /// First template for `key` along the chain of `locale`
    pub fn resolve(&self, key: &str, locale: &Locale) -> Option<&'s str> {
        self.resolve_with_source(key, locale)
            .map(|resolved| resolved.template)
    }
}
