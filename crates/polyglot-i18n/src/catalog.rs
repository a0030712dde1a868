//! Immutable per-locale message catalogs

use crate::accessor::AccessorSurface;
use crate::error::{I18nError, I18nResult};
use crate::Locale;
use std::collections::BTreeMap;

/// Read-only mapping from key to template for exactly one locale.
///
/// Keys iterate in sorted order, so enumeration is stable for a given
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locale: Locale,
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Build a catalog, rejecting empty keys.
    pub fn new<I, K, V>(locale: Locale, entries: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, template) in entries {
            let key = key.into();
            if key.is_empty() {
                return Err(I18nError::InvalidKey(key));
            }
            map.insert(key, template.into());
        }

        Ok(Self {
            locale,
            entries: map,
        })
    }

    /// A catalog with no entries
    pub fn empty(locale: Locale) -> Self {
        Self {
            locale,
            entries: BTreeMap::new(),
        }
    }

    /// Locale this catalog belongs to
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Template for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has an entry
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All entries, sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&AccessorSurface> for Catalog {
    /// Invariant catalog holding a surface's compiled-in defaults
    fn from(surface: &AccessorSurface) -> Self {
        Self {
            locale: Locale::invariant(),
            entries: surface
                .entries()
                .iter()
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, template)| ((*key).to_string(), (*template).to_string()))
                .collect(),
        }
    }
}
