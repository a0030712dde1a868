//! Typed catalog accessors and key extraction
//!
//! The build script turns every default-catalog entry into a variant of
//! [`crate::generated::Translations`] plus a row in a static
//! [`AccessorSurface`]. Callers name translations through those variants, so
//! a renamed or misspelled key fails to compile, while lookups still go
//! through the same key-based path as literal keys.

use std::borrow::Cow;
use std::fmt;

/// Generated symbol table: symbol name to compiled-in default template.
pub struct AccessorSurface {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl AccessorSurface {
    /// Create a surface. Entries must be sorted by symbol.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Name of the accessor type that declares the symbols
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a declared symbol, returning its canonical `'static` name
    pub fn symbol(&self, symbol: &str) -> Option<&'static str> {
        self.entry(symbol).map(|(name, _)| name)
    }

    /// Compiled-in default template of a declared symbol
    pub fn default_value(&self, symbol: &str) -> Option<&'static str> {
        self.entry(symbol).map(|(_, template)| template)
    }

    /// Every declared symbol, sorted
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Every `(symbol, default template)` pair, sorted
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Number of declared symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no symbols are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, symbol: &str) -> Option<(&'static str, &'static str)> {
        self.entries
            .binary_search_by(|(name, _)| (*name).cmp(symbol))
            .ok()
            .map(|i| self.entries[i])
    }

    /// Surfaces are statics; only the same static is the same surface.
    fn is(&self, other: &AccessorSurface) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for AccessorSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorSurface")
            .field("name", &self.name)
            .field("symbols", &self.entries.len())
            .finish()
    }
}

/// A typed reference to a catalog entry.
pub trait MessageAccessor {
    /// Symbol name this accessor denotes. Must not require evaluating the
    /// entry.
    fn symbol(&self) -> &str;

    /// Evaluate the accessor: its default-locale value.
    fn evaluate(&self) -> Cow<'_, str>;

    /// Surface the symbol is declared on
    fn surface(&self) -> &'static AccessorSurface;
}

impl<A: MessageAccessor + ?Sized> MessageAccessor for &A {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn evaluate(&self) -> Cow<'_, str> {
        (**self).evaluate()
    }

    fn surface(&self) -> &'static AccessorSurface {
        (**self).surface()
    }
}

/// Derive the catalog key an accessor denotes.
///
/// Returns `None` when the accessor is absent, is declared on a surface other
/// than `default_surface`, names a symbol the surface does not declare, or the
/// name is empty. Never evaluates the accessor.
pub fn extract_key<A>(accessor: Option<&A>, default_surface: &AccessorSurface) -> Option<&'static str>
where
    A: MessageAccessor + ?Sized,
{
    let accessor = accessor?;
    let symbol = accessor.symbol();

    if !accessor.surface().is(default_surface) {
        report_foreign_accessor(symbol, accessor.surface().name(), default_surface.name());
        return None;
    }

    match default_surface.symbol(symbol) {
        Some(key) if !key.is_empty() => Some(key),
        Some(_) => None,
        None => {
            report_foreign_accessor(symbol, accessor.surface().name(), default_surface.name());
            None
        }
    }
}

#[cfg(debug_assertions)]
fn report_foreign_accessor(symbol: &str, declared_on: &str, expected: &str) {
    tracing::warn!(
        "Accessor '{}' (declared on {}) must reference a member of {}",
        symbol,
        declared_on,
        expected
    );
}

#[cfg(not(debug_assertions))]
fn report_foreign_accessor(_symbol: &str, _declared_on: &str, _expected: &str) {}
