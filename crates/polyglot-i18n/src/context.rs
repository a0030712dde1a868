//! Active-locale context
//!
//! The active locale is ambient state owned by the caller. It is scoped to a
//! task (or a synchronous call) rather than stored in a process-wide global,
//! so parallel requests and parallel tests never see each other's locale.
//! Providers read it fresh on every call.

use crate::Locale;
use std::future::Future;
use tracing::debug;

tokio::task_local! {
    static ACTIVE_LOCALE: Locale;
}

/// Source of the active locale, consulted on every lookup.
pub trait LocaleProvider: Send + Sync {
    /// The locale in effect right now
    fn current_locale(&self) -> Locale;
}

impl<F> LocaleProvider for F
where
    F: Fn() -> Locale + Send + Sync,
{
    fn current_locale(&self) -> Locale {
        self()
    }
}

/// Run `future` with `locale` as the active locale.
pub async fn with_locale<F: Future>(locale: Locale, future: F) -> F::Output {
    ACTIVE_LOCALE.scope(locale, future).await
}

/// Run `f` with `locale` as the active locale.
pub fn with_locale_sync<R>(locale: Locale, f: impl FnOnce() -> R) -> R {
    ACTIVE_LOCALE.sync_scope(locale, f)
}

/// The scoped active locale, if a scope is in effect.
pub fn current_locale() -> Option<Locale> {
    ACTIVE_LOCALE.try_with(Locale::clone).ok()
}

/// Provider that reads the scoped locale, falling back to a fixed locale
/// outside any scope.
#[derive(Debug, Clone, Default)]
pub struct AmbientLocale {
    fallback: Locale,
}

impl AmbientLocale {
    /// Fall back to `fallback` outside a locale scope
    pub fn new(fallback: Locale) -> Self {
        Self { fallback }
    }

    /// Fall back to the operating system's locale, or the invariant locale if
    /// it is unavailable or unparsable.
    pub fn from_system() -> Self {
        let fallback = sys_locale::get_locale()
            .and_then(|tag| Locale::parse(&tag).ok())
            .unwrap_or_default();
        debug!("System locale resolved to {}", fallback);
        Self { fallback }
    }

    /// Locale used outside a scope
    pub fn fallback(&self) -> &Locale {
        &self.fallback
    }
}

impl LocaleProvider for AmbientLocale {
    fn current_locale(&self) -> Locale {
        current_locale().unwrap_or_else(|| self.fallback.clone())
    }
}

/// Provider that always reports the same locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Locale);

impl LocaleProvider for FixedLocale {
    fn current_locale(&self) -> Locale {
        self.0.clone()
    }
}
