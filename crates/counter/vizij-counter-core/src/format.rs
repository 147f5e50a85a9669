//! Locale-aware display formatting for counter values.
//!
//! Separators, grouping style and minus sign come from CLDR data shipped with
//! `num-format`. Fraction digits are fixed (min = max = `decimals`) and rounded
//! half away from zero.

use log::debug;
use num_format::{Grouping, Locale};
use serde::{Deserialize, Serialize};

/// Locale used when a requested tag is not recognized.
pub const FALLBACK_LOCALE: Locale = Locale::en;

/// Upper bound accepted for `decimals`.
pub const MAX_DECIMALS: u32 = 20;

fn default_locale() -> String {
    "en".to_string()
}

/// Display options for one counter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySpec {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Normalize case and separators of a BCP-47 tag: `sv_se` → `sv-SE`,
/// `zh-hant-tw` → `zh-Hant-TW`.
pub fn canonicalize_tag(tag: &str) -> String {
    tag.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_ascii_lowercase()
            } else if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut s = part[..1].to_ascii_uppercase();
                s.push_str(&part[1..].to_ascii_lowercase());
                s
            } else if (part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
                || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
            {
                part.to_ascii_uppercase()
            } else {
                part.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a tag to CLDR locale data: full tag, then language-region, then
/// bare language. Returns `None` when nothing matches.
pub fn lookup_locale(tag: &str) -> Option<Locale> {
    let canonical = canonicalize_tag(tag);
    let parts: Vec<&str> = canonical.split('-').collect();
    let lang = parts.first().copied().unwrap_or_default();
    if lang.is_empty() {
        return None;
    }

    let mut candidates = vec![canonical.clone()];
    if let Some(region) = parts
        .iter()
        .skip(1)
        .find(|p| p.len() == 2 || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit())))
    {
        candidates.push(format!("{lang}-{region}"));
    }
    candidates.push(lang.to_string());

    candidates
        .iter()
        .find_map(|name| Locale::from_name(name.as_str()).ok())
}

/// Same as [`lookup_locale`] but never fails; unknown tags use [`FALLBACK_LOCALE`].
pub fn resolve_locale(tag: &str) -> Locale {
    lookup_locale(tag).unwrap_or_else(|| {
        debug!(
            "unrecognized locale '{tag}', falling back to '{}'",
            FALLBACK_LOCALE.name()
        );
        FALLBACK_LOCALE
    })
}

/// Fixed-point digits of a non-negative finite value, rounding ties away from zero.
///
/// Rounds the shortest round-trip decimal form (what the value prints as), not
/// the exact binary expansion, so `1.005` at two decimals gives `1.01`.
fn fixed_digits(abs: f64, decimals: u32) -> String {
    let d = decimals as usize;
    // f64 Display never uses exponent notation
    let shortest = abs.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let int_len = digits.len();
    let frac = frac_part.as_bytes();
    digits.extend((0..d).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(d).is_some_and(|&next| next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - d;
    debug_assert!(split >= int_len);
    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..split].iter().map(|&b| b as char));
    if d > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&b| b as char));
    }
    out
}

#[inline]
fn is_group_boundary(remaining: usize, grouping: Grouping) -> bool {
    match grouping {
        Grouping::Standard => remaining % 3 == 0,
        Grouping::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        Grouping::Posix => false,
    }
}

fn group_integer(int_digits: &str, grouping: Grouping, separator: &str) -> String {
    let n = int_digits.len();
    let mut out = String::with_capacity(n + (n / 2) * separator.len());
    for (i, c) in int_digits.chars().enumerate() {
        if i > 0 && is_group_boundary(n - i, grouping) {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Formatter bound to one resolved locale and display options.
#[derive(Clone, Debug)]
pub struct Formatter {
    locale: Locale,
    decimals: u32,
    prefix: String,
    suffix: String,
}

impl Formatter {
    pub fn new(spec: &DisplaySpec) -> Self {
        Self {
            locale: resolve_locale(&spec.locale),
            decimals: spec.decimals.min(MAX_DECIMALS),
            prefix: spec.prefix.clone(),
            suffix: spec.suffix.clone(),
        }
    }

    /// CLDR name of the locale actually used (after fallback).
    pub fn locale_name(&self) -> &'static str {
        self.locale.name()
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Localized number without prefix/suffix.
    pub fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return self.locale.nan().to_string();
        }
        let negative = value.is_sign_negative();
        let mut out = String::new();
        if negative {
            out.push_str(self.locale.minus_sign());
        }
        if value.is_infinite() {
            out.push_str(self.locale.infinity());
            return out;
        }

        let digits = fixed_digits(value.abs(), self.decimals);
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };
        out.push_str(&group_integer(
            int_part,
            self.locale.grouping(),
            self.locale.separator(),
        ));
        if let Some(frac) = frac_part {
            out.push_str(self.locale.decimal());
            out.push_str(frac);
        }
        out
    }

    /// `prefix + localized number + suffix`.
    pub fn format(&self, value: f64) -> String {
        let number = self.format_number(value);
        let mut out = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&number);
        out.push_str(&self.suffix);
        out
    }
}
