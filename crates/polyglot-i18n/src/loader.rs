//! Loading catalogs from a directory of `<locale>.toml` / `<locale>.json` files

use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::store::{MemoryCatalogStore, MemoryCatalogStoreBuilder};
use crate::Locale;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads every catalog file of a directory into a [`MemoryCatalogStore`].
///
/// File stems are locale tags; `invariant` or `und` names the default
/// catalog. Files must hold a flat table of strings.
#[derive(Debug)]
pub struct CatalogLoader {
    base_dir: PathBuf,
}

impl CatalogLoader {
    /// Create a loader for `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Base directory catalogs are read from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load the directory, using its invariant catalog file as the default.
    pub fn load(&self) -> I18nResult<MemoryCatalogStoreBuilder> {
        let mut catalogs = self.load_catalogs()?;
        let default = catalogs.remove(&Locale::invariant()).ok_or_else(|| {
            I18nError::catalog_load(&self.base_dir, "no invariant catalog (invariant.toml)")
        })?;
        Ok(Self::assemble(default, catalogs))
    }

    /// Load the directory against a compiled-in default catalog. An invariant
    /// file in the directory is ignored.
    pub fn load_with_default(&self, default: Catalog) -> I18nResult<MemoryCatalogStoreBuilder> {
        let mut catalogs = self.load_catalogs()?;
        if catalogs.remove(&Locale::invariant()).is_some() {
            debug!("Compiled default catalog takes precedence over the invariant file");
        }
        Ok(Self::assemble(default, catalogs))
    }

    fn assemble(default: Catalog, catalogs: HashMap<Locale, Catalog>) -> MemoryCatalogStoreBuilder {
        for catalog in catalogs.values() {
            for key in catalog.keys().filter(|key| !default.contains(key)) {
                warn!(
                    "Catalog {} has key '{}' that the default catalog does not declare",
                    catalog.locale(),
                    key
                );
            }
        }

        catalogs
            .into_values()
            .fold(MemoryCatalogStore::builder(default), MemoryCatalogStoreBuilder::catalog)
    }

    fn load_catalogs(&self) -> I18nResult<HashMap<Locale, Catalog>> {
        if !self.base_dir.is_dir() {
            return Err(I18nError::catalog_load(&self.base_dir, "not a directory"));
        }

        let mut catalogs = HashMap::new();
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.base_dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        paths.sort();

        for path in paths {
            let Some(format) = CatalogFormat::from_path(&path) else {
                continue;
            };
            let catalog = Self::load_file(&path, format)?;
            let locale = catalog.locale().clone();
            if catalogs.insert(locale.clone(), catalog).is_some() {
                return Err(I18nError::catalog_load(
                    &path,
                    format!("duplicate catalog for locale {locale}"),
                ));
            }
        }

        info!(
            "Loaded {} catalogs from {}",
            catalogs.len(),
            self.base_dir.display()
        );
        Ok(catalogs)
    }

    /// Load a single catalog file
    pub fn load_file(path: &Path, format: CatalogFormat) -> I18nResult<Catalog> {
        let tag = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| I18nError::catalog_load(path, "file name is not a locale tag"))?;
        let locale = Locale::parse(tag)?;

        debug!("Loading catalog file: {:?}", path);
        let content = fs::read_to_string(path)?;
        let entries = match format {
            CatalogFormat::Toml => parse_toml(&content).map_err(|e| I18nError::catalog_load(path, e))?,
            CatalogFormat::Json => parse_json(&content).map_err(|e| I18nError::catalog_load(path, e))?,
        };

        Catalog::new(locale, entries)
    }
}

/// Catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// Flat TOML table
    Toml,
    /// Flat JSON object
    Json,
}

impl CatalogFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn parse_toml(content: &str) -> Result<BTreeMap<String, String>, String> {
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| e.to_string())?;
    table
        .into_iter()
        .map(|(key, value)| match value {
            toml::Value::String(template) => Ok((key, template)),
            other => Err(format!(
                "entry '{}' must be a string, found {}",
                key,
                other.type_str()
            )),
        })
        .collect()
}

fn parse_json(content: &str) -> Result<BTreeMap<String, String>, String> {
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|e| e.to_string())?;
    object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(template) => Ok((key, template)),
            other => Err(format!("entry '{}' must be a string, found {}", key, other)),
        })
        .collect()
}
