//! Build script for polyglot-i18n crate
//!
//! Reads the default catalog (`locales/invariant.toml`) and generates the
//! typed accessor surface in `$OUT_DIR/translations.rs`. It also checks the
//! other catalogs in `locales/`:
//! - every default key must be a valid Rust identifier
//! - every catalog must be a flat table of strings
//! - keys unknown to the default catalog are reported
//! - placeholder indices should agree with the default template

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_CATALOG_FILE: &str = "invariant.toml";

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Parse a flat `key = "template"` catalog file
fn read_catalog(path: &Path) -> Result<BTreeMap<String, String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let table: toml::Table = content
        .parse()
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    let mut entries = BTreeMap::new();
    for (key, value) in table {
        match value {
            toml::Value::String(template) => {
                entries.insert(key, template);
            }
            other => {
                return Err(format!(
                    "{}: entry '{}' must be a string, found {}",
                    path.display(),
                    key,
                    other.type_str()
                ));
            }
        }
    }

    Ok(entries)
}

/// Check that a key can be emitted as an enum variant
fn validate_identifier(key: &str) -> Result<(), String> {
    let mut chars = key.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Key '{}' is not a valid Rust identifier", key));
    }
    if key == "_" || RUST_KEYWORDS.contains(&key) {
        return Err(format!("Key '{}' is a reserved word", key));
    }
    Ok(())
}

/// Collect the positional indices a template references, ignoring `{{` escapes
fn placeholder_indices(template: &str) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            continue;
        }
        let digits: String = std::iter::from_fn(|| chars.next_if(char::is_ascii_digit)).collect();
        if let Ok(index) = digits.parse() {
            indices.insert(index);
        }
    }

    indices
}

/// Find every `<tag>.toml` catalog next to the default one
fn find_catalog_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    let mut files = BTreeMap::new();

    for entry in fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {}", e))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            continue;
        }
        let tag = path
            .file_stem()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid catalog file name: {}", path.display()))?;

        if path.file_name().and_then(|n| n.to_str()) != Some(DEFAULT_CATALOG_FILE) {
            files.insert(tag.to_string(), path);
        }
    }

    Ok(files)
}

/// Emit the accessor enum and the symbol table
fn generate_accessors(defaults: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    out.push_str("// @generated by polyglot-i18n build.rs. Do not edit.\n\n");
    out.push_str("/// Typed accessors for every entry of the default catalog.\n");
    out.push_str("#[allow(non_camel_case_types)]\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum Translations {\n");
    for (key, template) in defaults {
        let _ = writeln!(out, "    /// Default: {:?}", template);
        let _ = writeln!(out, "    {},", key);
    }
    out.push_str("}\n\n");

    out.push_str("impl Translations {\n");
    out.push_str("    /// Every accessor, in key order.\n");
    out.push_str("    pub const ALL: &'static [Translations] = &[\n");
    for key in defaults.keys() {
        let _ = writeln!(out, "        Translations::{},", key);
    }
    out.push_str("    ];\n\n");

    out.push_str("    /// Symbolic key of this entry.\n");
    out.push_str("    pub const fn key(self) -> &'static str {\n        match self {\n");
    for key in defaults.keys() {
        let _ = writeln!(out, "            Self::{} => {:?},", key, key);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    /// Compiled-in default-locale template.\n");
    out.push_str("    pub const fn default_value(self) -> &'static str {\n        match self {\n");
    for (key, template) in defaults {
        let _ = writeln!(out, "            Self::{} => {:?},", key, template);
    }
    out.push_str("        }\n    }\n}\n\n");

    out.push_str("impl crate::accessor::MessageAccessor for Translations {\n");
    out.push_str("    fn symbol(&self) -> &str {\n        self.key()\n    }\n\n");
    out.push_str("    fn evaluate(&self) -> ::std::borrow::Cow<'_, str> {\n");
    out.push_str("        ::std::borrow::Cow::Borrowed(self.default_value())\n    }\n\n");
    out.push_str("    fn surface(&self) -> &'static crate::accessor::AccessorSurface {\n");
    out.push_str("        &TRANSLATIONS_SURFACE\n    }\n}\n\n");

    out.push_str("/// Symbol table of the default catalog: key to compiled-in template.\n");
    out.push_str("pub static TRANSLATIONS_SURFACE: crate::accessor::AccessorSurface =\n");
    out.push_str("    crate::accessor::AccessorSurface::new(\"Translations\", &[\n");
    for (key, template) in defaults {
        let _ = writeln!(out, "        ({:?}, {:?}),", key, template);
    }
    out.push_str("    ]);\n");

    out
}

fn run() -> Result<(), String> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales");
    println!("cargo:rerun-if-env-changed=POLYGLOT_LOCALES_DIR");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let out_dir = env::var("OUT_DIR").map_err(|_| "OUT_DIR not set")?;

    let locales_dir = env::var("POLYGLOT_LOCALES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(&manifest_dir).join("locales"));

    let default_path = locales_dir.join(DEFAULT_CATALOG_FILE);
    if !default_path.exists() {
        return Err(format!("Default catalog not found: {}", default_path.display()));
    }

    let defaults = read_catalog(&default_path)?;
    let mut errors: Vec<String> = defaults
        .keys()
        .filter_map(|key| validate_identifier(key).err())
        .collect();

    for (tag, path) in find_catalog_files(&locales_dir)? {
        let entries = match read_catalog(&path) {
            Ok(entries) => entries,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        for (key, template) in &entries {
            match defaults.get(key) {
                None => println!(
                    "cargo:warning={}: key '{}' is not declared in the default catalog",
                    tag, key
                ),
                Some(default) => {
                    let expected = placeholder_indices(default);
                    let found = placeholder_indices(template);
                    if expected != found {
                        println!(
                            "cargo:warning={}: placeholder mismatch for '{}'. Expected: {:?}, Found: {:?}",
                            tag, key, expected, found
                        );
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(format!("Catalog errors:\n{}", errors.join("\n")));
    }

    let generated = generate_accessors(&defaults);
    let target = Path::new(&out_dir).join("translations.rs");
    fs::write(&target, generated)
        .map_err(|e| format!("Failed to write {}: {}", target.display(), e))?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Catalog validation failed:\n{}", e);
        process::exit(1);
    }
}
