//! Locale-sensitive message resolution
//!
//! This crate resolves user-facing strings for the active locale. It includes:
//!
//! - Locale identifiers with parent-chain fallback down to the invariant locale
//! - Immutable per-locale catalogs, loaded from TOML or JSON files
//! - Positional `{0}` template formatting and locale-aware lowercasing
//! - Typed accessors generated from the default catalog at build time
//! - A task-scoped active locale
//!
//! # Example
//!
//! ```rust
//! use polyglot_i18n::{generated::default_store, targs, FixedLocale, Locale, Translations, Translator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let translator = Translator::new(default_store(), FixedLocale(Locale::parse("fr-CA")?))
//!     .with_surface(&polyglot_i18n::TRANSLATIONS_SURFACE);
//!
//! let message = translator.get_translation_by(&Translations::Greeting, targs!["Ana"])?;
//! assert_eq!(message, "Hello, Ana!");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod accessor;
pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod formatter;
pub mod generated;
pub mod loader;
pub mod locale;
pub mod manager;
pub mod resolver;
pub mod store;

pub use accessor::{extract_key, AccessorSurface, MessageAccessor};
pub use catalog::Catalog;
pub use config::I18nConfig;
pub use context::{with_locale, with_locale_sync, AmbientLocale, FixedLocale, LocaleProvider};
pub use error::{FormatErrorReason, I18nError, I18nResult};
pub use generated::{Translations, TRANSLATIONS_SURFACE};
pub use loader::{CatalogFormat, CatalogLoader};
pub use locale::{fallback_chain, Locale};
pub use manager::Translator;
pub use resolver::{LocaleResolver, Resolved};
pub use store::{CatalogStore, MemoryCatalogStore, MemoryCatalogStoreBuilder};
