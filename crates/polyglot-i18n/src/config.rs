//! Translator configuration loading

use crate::context::AmbientLocale;
use crate::error::{I18nError, I18nResult};
use crate::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "POLYGLOT_CONFIG_PATH";
/// Environment override for `catalogs_dir`
pub const CATALOGS_DIR_VAR: &str = "POLYGLOT_CATALOGS_DIR";
/// Environment override for `fallback_locale`
pub const LOCALE_VAR: &str = "POLYGLOT_LOCALE";
/// Environment override for `report_missing_translations`
pub const REPORT_MISSING_VAR: &str = "POLYGLOT_REPORT_MISSING";

/// Configuration for building a [`crate::Translator`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Directory holding `<locale>.toml` / `<locale>.json` catalogs. Without
    /// one, only the compiled default catalog is available.
    pub catalogs_dir: Option<PathBuf>,
    /// Locale used when no locale scope is active. `None` defers to the
    /// operating system locale when `use_system_locale` is set, else the
    /// invariant locale.
    pub fallback_locale: Option<Locale>,
    /// Seed the fallback locale from the operating system
    pub use_system_locale: bool,
    /// Explicit parent overrides, child tag to parent tag
    pub parents: BTreeMap<String, String>,
    /// Emit missing-translation diagnostics (debug builds only)
    pub report_missing_translations: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            catalogs_dir: None,
            fallback_locale: None,
            use_system_locale: false,
            parents: BTreeMap::new(),
            report_missing_translations: true,
        }
    }
}

impl I18nConfig {
    /// Parse a TOML document, without environment overrides
    pub fn from_toml_str(content: &str) -> I18nResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file and apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> I18nResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_overrides(|var| env::var(var).ok())?;
        config.validate()?;

        info!("Loaded i18n configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `$POLYGLOT_CONFIG_PATH`, then `polyglot.toml`, else defaults;
    /// environment overrides apply in every case.
    pub fn load() -> I18nResult<Self> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(path);
        }
        if Path::new("polyglot.toml").exists() {
            return Self::load_from_file("polyglot.toml");
        }

        debug!("No i18n configuration file found, using defaults");
        let mut config = Self::default();
        config.apply_overrides(|var| env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`I18nConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> I18nResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(CATALOGS_DIR_VAR) {
            self.catalogs_dir = Some(PathBuf::from(dir));
        }

        if let Some(tag) = lookup(LOCALE_VAR) {
            let locale = Locale::parse(&tag).map_err(|_| {
                I18nError::config(format!("{LOCALE_VAR}: invalid locale '{tag}'"))
            })?;
            self.fallback_locale = Some(locale);
        }

        if let Some(flag) = lookup(REPORT_MISSING_VAR) {
            self.report_missing_translations = flag.trim().parse().map_err(|_| {
                I18nError::config(format!("{REPORT_MISSING_VAR}: expected true or false, got '{flag}'"))
            })?;
        }

        Ok(())
    }

    /// Check parent overrides
    pub fn validate(&self) -> I18nResult<()> {
        self.parent_overrides().map(|_| ())
    }

    /// Parent overrides as parsed locales
    pub fn parent_overrides(&self) -> I18nResult<Vec<(Locale, Locale)>> {
        self.parents
            .iter()
            .map(|(child, parent)| {
                let child_locale = Locale::parse(child)
                    .map_err(|_| I18nError::config(format!("invalid parent key '{child}'")))?;
                let parent_locale = Locale::parse(parent)
                    .map_err(|_| I18nError::config(format!("invalid parent '{parent}' for '{child}'")))?;
                if child_locale == parent_locale {
                    return Err(I18nError::config(format!("locale '{child}' cannot be its own parent")));
                }
                if child_locale.is_invariant() {
                    return Err(I18nError::config("the invariant locale cannot have a parent"));
                }
                Ok((child_locale, parent_locale))
            })
            .collect()
    }

    /// Active-locale provider described by this configuration
    pub fn locale_provider(&self) -> AmbientLocale {
        match &self.fallback_locale {
            Some(locale) => AmbientLocale::new(locale.clone()),
            None if self.use_system_locale => AmbientLocale::from_system(),
            None => AmbientLocale::default(),
        }
    }
}
