//! Translation facade

use crate::accessor::{extract_key, AccessorSurface, MessageAccessor};
use crate::catalog::Catalog;
use crate::config::I18nConfig;
use crate::context::{AmbientLocale, LocaleProvider};
use crate::error::I18nResult;
use crate::formatter;
use crate::loader::CatalogLoader;
use crate::resolver::LocaleResolver;
use crate::store::{CatalogStore, MemoryCatalogStore};
use crate::Locale;
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;
use tracing::info;

/// Resolves messages for the active locale.
///
/// Lookups are total for missing translations: an unknown key, an empty key
/// or an invalid accessor yields `Ok("")`. Only malformed formatting input
/// (for example fewer arguments than the template references) is an `Err`.
#[derive(Debug)]
pub struct Translator<S = MemoryCatalogStore, P = AmbientLocale> {
    store: Arc<S>,
    locale_provider: P,
    surface: Option<&'static AccessorSurface>,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    report_missing: bool,
}

impl Translator {
    /// Build a translator from configuration and the accessor surface whose
    /// compiled defaults form the default catalog.
    pub fn from_config(config: &I18nConfig, surface: &'static AccessorSurface) -> I18nResult<Self> {
        config.validate()?;

        let default = Catalog::from(surface);
        let builder = match &config.catalogs_dir {
            Some(dir) => CatalogLoader::new(dir).load_with_default(default)?,
            None => MemoryCatalogStore::builder(default),
        };
        let store = config
            .parent_overrides()?
            .into_iter()
            .fold(builder, |builder, (child, parent)| builder.parent(child, parent))
            .build();

        info!(
            "Translator ready: {} default keys, catalogs from {:?}",
            store.default_catalog().len(),
            config.catalogs_dir
        );

        Ok(Translator::new(store, config.locale_provider())
            .with_surface(surface)
            .report_missing_translations(config.report_missing_translations))
    }
}

impl<S: CatalogStore, P: LocaleProvider> Translator<S, P> {
    /// Create a translator over `store`, reading the active locale from
    /// `locale_provider`. Accessor lookups stay empty until a surface is set.
    pub fn new(store: S, locale_provider: P) -> Self {
        Self::with_shared_store(Arc::new(store), locale_provider)
    }

    /// Like [`Translator::new`], sharing a store with other translators
    pub fn with_shared_store(store: Arc<S>, locale_provider: P) -> Self {
        Self {
            store,
            locale_provider,
            surface: None,
            report_missing: true,
        }
    }

    /// Accept accessors declared on `surface`
    pub fn with_surface(mut self, surface: &'static AccessorSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Toggle missing-translation diagnostics (only ever emitted in debug
    /// builds)
    pub fn report_missing_translations(mut self, enabled: bool) -> Self {
        self.report_missing = enabled;
        self
    }

    /// The underlying catalog store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active locale, read fresh from the provider
    pub fn current_locale(&self) -> Locale {
        self.locale_provider.current_locale()
    }

    /// Resolve `key` for the active locale and substitute `args`.
    pub fn get_translation(&self, key: &str, args: &[&dyn Display]) -> I18nResult<String> {
        let locale = self.current_locale();
        self.translate_key(key, args, &locale)
    }

    /// [`Translator::get_translation`], lowercased with the active locale's
    /// casing rules.
    pub fn get_translation_to_lower(&self, key: &str, args: &[&dyn Display]) -> I18nResult<String> {
        let locale = self.current_locale();
        self.translate_key(key, args, &locale)
            .map(|text| formatter::to_lowercase(&text, &locale))
    }

    /// Resolve the entry a typed accessor denotes and substitute `args`.
    ///
    /// An absent or foreign accessor yields `Ok("")` without touching any
    /// catalog. When no catalog holds the key, the accessor's own default
    /// value is used.
    pub fn get_translation_by<'a, A>(
        &self,
        accessor: impl Into<Option<&'a A>>,
        args: &[&dyn Display],
    ) -> I18nResult<String>
    where
        A: MessageAccessor + ?Sized + 'a,
    {
        let locale = self.current_locale();
        self.translate_accessor(accessor.into(), args, &locale)
    }

    /// [`Translator::get_translation_by`], lowercased with the active
    /// locale's casing rules.
    pub fn get_translation_by_to_lower<'a, A>(
        &self,
        accessor: impl Into<Option<&'a A>>,
        args: &[&dyn Display],
    ) -> I18nResult<String>
    where
        A: MessageAccessor + ?Sized + 'a,
    {
        let locale = self.current_locale();
        self.translate_accessor(accessor.into(), args, &locale)
            .map(|text| formatter::to_lowercase(&text, &locale))
    }

    /// Keys known to the active locale: its catalog and every catalog on its
    /// fallback chain, default catalog last. Lazily produced, without
    /// duplicates, in a stable order for a given set of catalogs.
    pub fn list_known_keys(&self) -> impl Iterator<Item = &str> + '_ {
        let locale = self.current_locale();
        let store = &*self.store;
        let default = store.default_catalog();

        let mut catalogs: Vec<&Catalog> = LocaleResolver::new(store)
            .chain(&locale)
            .iter()
            .filter_map(|candidate| store.catalog(candidate))
            .collect();
        if !catalogs.iter().any(|catalog| std::ptr::eq(*catalog, default)) {
            catalogs.push(default);
        }

        let mut seen = HashSet::new();
        catalogs
            .into_iter()
            .flat_map(Catalog::keys)
            .filter(move |key| seen.insert(*key))
    }

    fn translate_key(&self, key: &str, args: &[&dyn Display], locale: &Locale) -> I18nResult<String> {
        match self.lookup(key, locale) {
            Some(template) => formatter::format(template, args),
            None => formatter::format_or_empty(self.store.default_value(key), args),
        }
    }

    fn translate_accessor<A>(
        &self,
        accessor: Option<&A>,
        args: &[&dyn Display],
        locale: &Locale,
    ) -> I18nResult<String>
    where
        A: MessageAccessor + ?Sized,
    {
        let key = self
            .surface
            .and_then(|surface| extract_key(accessor, surface));
        let (Some(accessor), Some(key)) = (accessor, key) else {
            return Ok(String::new());
        };

        match self.lookup(key, locale) {
            Some(template) => formatter::format(template, args),
            None => formatter::format_or_empty(Some(accessor.evaluate().as_ref()), args),
        }
    }

    fn lookup(&self, key: &str, locale: &Locale) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        let template = LocaleResolver::new(&*self.store).resolve(key, locale);
        if template.is_none() {
            self.report_missing(key, locale);
        }
        template
    }

    #[cfg(debug_assertions)]
    fn report_missing(&self, key: &str, locale: &Locale) {
        if self.report_missing {
            tracing::debug!(
                target: "polyglot::missing",
                "[Missing translation] Key: '{}' in locale: {}", key, locale
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn report_missing(&self, _key: &str, _locale: &Locale) {}
}
