//! Positional template formatting and locale-aware lowercasing
//!
//! Templates use composite-format placeholders: `{0}`, `{1}`, ... with an
//! optional alignment (`{0,8}` pads left, `{0,-8}` pads right) and an optional
//! `G` or `D[n]` specifier (`{0:D3}` zero-pads integers). `{{` and `}}`
//! produce literal braces. Referencing an argument that was not supplied is an
//! error, never a silent partial substitution.

use crate::error::{FormatErrorReason, I18nError, I18nResult};
use crate::Locale;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::CharIndices;

/// Build a positional argument list for the formatting APIs.
///
/// ```rust
/// use polyglot_i18n::{formatter, targs};
///
/// let text = formatter::format("{0} has {1} items", targs!["Ana", 3]).unwrap();
/// assert_eq!(text, "Ana has 3 items");
/// ```
#[macro_export]
macro_rules! targs {
    () => {
        &[]
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),+]
    };
}

/// Widest alignment or zero-padding a placeholder may request
pub const MAX_ALIGNMENT: usize = u16::MAX as usize;

#[derive(Debug)]
struct Placeholder {
    index: usize,
    alignment: i64,
    specifier: Specifier,
}

/// Supported subset of composite-format specifiers
#[derive(Debug, Clone, PartialEq, Eq)]
enum Specifier {
    /// No specifier, or `G`: the argument's `Display` output
    General,
    /// `D` or `Dn`: an integer, zero-padded to `n` digits
    Decimal { spec: String, digits: usize },
}

/// Substitute `args` into `template`.
pub fn format(template: &str, args: &[&dyn Display]) -> I18nResult<String> {
    let fail = |reason| I18nError::format(template, reason);

    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if next_is(&mut chars, '{') => out.push('{'),
            '}' if next_is(&mut chars, '}') => out.push('}'),
            '}' => return Err(fail(FormatErrorReason::UnbalancedBrace { position })),
            '{' => {
                let body = placeholder_body(&mut chars)
                    .ok_or_else(|| fail(FormatErrorReason::UnbalancedBrace { position }))?;
                let placeholder = parse_placeholder(&body, position).map_err(fail)?;

                let value = args.get(placeholder.index).ok_or_else(|| {
                    fail(FormatErrorReason::MissingArgument {
                        index: placeholder.index,
                        provided: args.len(),
                    })
                })?;
                let text = apply_specifier(*value, &placeholder).map_err(fail)?;
                write_aligned(&mut out, &text, placeholder.alignment);
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Format `template`, or return an empty string when it is absent or empty.
pub fn format_or_empty(template: Option<&str>, args: &[&dyn Display]) -> I18nResult<String> {
    match template {
        Some(template) if !template.is_empty() => format(template, args),
        _ => Ok(String::new()),
    }
}

/// Lowercase `text` using the casing rules of `locale`.
///
/// Turkish and Azerbaijani distinguish dotted and dotless i; every other
/// locale uses the Unicode default mapping.
pub fn to_lowercase(text: &str, locale: &Locale) -> String {
    match locale.language() {
        "tr" | "az" => text.replace('İ', "i").replace('I', "ı").to_lowercase(),
        _ => text.to_lowercase(),
    }
}

fn next_is(chars: &mut Peekable<CharIndices<'_>>, expected: char) -> bool {
    chars.next_if(|&(_, c)| c == expected).is_some()
}

/// Text between `{` and the matching `}`. `None` if the template ends first.
fn placeholder_body(chars: &mut Peekable<CharIndices<'_>>) -> Option<String> {
    let mut body = String::new();
    for (_, c) in chars.by_ref() {
        if c == '}' {
            return Some(body);
        }
        body.push(c);
    }
    None
}

fn parse_placeholder(body: &str, position: usize) -> Result<Placeholder, FormatErrorReason> {
    let malformed = || FormatErrorReason::MalformedPlaceholder { position };

    let (head, spec) = match body.split_once(':') {
        Some((head, spec)) => (head, Some(spec)),
        None => (body, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index = index.trim_end();
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let index = index.parse::<usize>().map_err(|_| malformed())?;

    let alignment = match alignment {
        Some(alignment) => alignment.trim().parse::<i64>().map_err(|_| malformed())?,
        None => 0,
    };
    if alignment.unsigned_abs() > MAX_ALIGNMENT as u64 {
        return Err(FormatErrorReason::AlignmentOutOfRange { position });
    }

    let specifier = match spec {
        Some(spec) => parse_specifier(spec, position)?,
        None => Specifier::General,
    };

    Ok(Placeholder {
        index,
        alignment,
        specifier,
    })
}

fn parse_specifier(spec: &str, position: usize) -> Result<Specifier, FormatErrorReason> {
    let unsupported = || FormatErrorReason::UnsupportedSpecifier {
        spec: spec.to_string(),
    };

    let mut chars = spec.chars();
    match chars.next() {
        None => Ok(Specifier::General),
        Some('G' | 'g') if chars.as_str().is_empty() => Ok(Specifier::General),
        Some('D' | 'd') => {
            let digits = chars.as_str();
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unsupported());
            }
            let digits = if digits.is_empty() {
                0
            } else {
                digits.parse::<usize>().map_err(|_| unsupported())?
            };
            if digits > MAX_ALIGNMENT {
                return Err(FormatErrorReason::AlignmentOutOfRange { position });
            }
            Ok(Specifier::Decimal {
                spec: spec.to_string(),
                digits,
            })
        }
        Some(_) => Err(unsupported()),
    }
}

fn apply_specifier(value: &dyn Display, placeholder: &Placeholder) -> Result<String, FormatErrorReason> {
    let text = value.to_string();
    match &placeholder.specifier {
        Specifier::General => Ok(text),
        Specifier::Decimal { spec, digits } => {
            let (sign, magnitude) = match text.strip_prefix('-') {
                Some(magnitude) => ("-", magnitude),
                None => ("", text.as_str()),
            };
            if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FormatErrorReason::SpecifierMismatch {
                    index: placeholder.index,
                    spec: spec.clone(),
                });
            }
            let padding = digits.saturating_sub(magnitude.len());
            Ok(format!("{sign}{}{magnitude}", "0".repeat(padding)))
        }
    }
}

/// Pad `text` with spaces to `|alignment|` characters: on the left when
/// positive, on the right when negative.
fn write_aligned(out: &mut String, text: &str, alignment: i64) {
    let width = usize::try_from(alignment.unsigned_abs()).unwrap_or(MAX_ALIGNMENT);
    let padding = width.saturating_sub(text.chars().count());

    if alignment < 0 {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(padding));
    } else {
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(text);
    }
}
