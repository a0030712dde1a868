//! Locale identifiers and fallback chains

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A culture identifier such as `fr-CA`, or the invariant locale.
///
/// The invariant locale is the undetermined language (`und`) and is the root
/// of every fallback chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    /// The invariant locale
    pub fn invariant() -> Self {
        Self(LanguageIdentifier::default())
    }

    /// Parse a BCP 47 style tag. `""`, `"und"` and `"invariant"` map to the
    /// invariant locale; `_` is accepted as a subtag separator.
    pub fn parse(tag: &str) -> I18nResult<Self> {
        let normalized = tag.trim().replace('_', "-");
        if normalized.is_empty() || normalized.eq_ignore_ascii_case("invariant") {
            return Ok(Self::invariant());
        }

        normalized
            .parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| I18nError::InvalidLanguageId(tag.to_string()))
    }

    /// Whether this is the invariant locale
    pub fn is_invariant(&self) -> bool {
        self.0 == LanguageIdentifier::default()
    }

    /// Primary language subtag (`"und"` for the invariant locale)
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// Borrow the underlying language identifier
    pub fn as_language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// The next less specific locale, derived from the tag alone.
    ///
    /// Subtags are removed in the order variants, region, script, language.
    /// The invariant locale has no parent.
    pub fn parent(&self) -> Option<Locale> {
        if self.is_invariant() {
            return None;
        }

        let mut id = self.0.clone();
        if id.variants().len() > 0 {
            id.clear_variants();
        } else if id.region.is_some() {
            id.region = None;
        } else if id.script.is_some() {
            id.script = None;
        } else {
            return Some(Self::invariant());
        }
        Some(Self(id))
    }
}

/// Fallback chain derived from tags alone: `locale`, its parents, then the
/// invariant locale. Always non-empty and always ends at the invariant locale.
pub fn fallback_chain(locale: &Locale) -> Vec<Locale> {
    let mut chain = vec![locale.clone()];
    let mut current = locale.clone();
    while let Some(parent) = current.parent() {
        chain.push(parent.clone());
        current = parent;
    }
    chain
}

impl From<LanguageIdentifier> for Locale {
    fn from(id: LanguageIdentifier) -> Self {
        Self(id)
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}
