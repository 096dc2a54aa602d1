//! Locale-driven currency formatting.
//!
//! The active locale is read from the process environment and mapped onto a
//! [`CurrencyFormat`] describing the symbol, its placement, the separators
//! and the number of minor-unit digits. Formatting and parsing are inverse
//! operations under the same format.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_to_minor_units;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Environment variables consulted for the monetary locale, highest priority first.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Error returned when a currency string cannot be parsed back into an amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyParseError {
    #[error("'{input}' does not contain the currency symbol '{symbol}'")]
    MissingSymbol { input: String, symbol: &'static str },

    #[error("'{input}' is not a valid amount")]
    InvalidAmount { input: String },
}

/// A language/region pair such as `de_DE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    pub language: String,
    pub region: Option<String>,
}

impl Locale {
    pub fn new(
        language: impl Into<String>,
        region: Option<&str>,
    ) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    /// The locale used when the environment names none, or names `C`/`POSIX`.
    pub fn fallback() -> Self {
        Self::new("en", Some("US"))
    }

    /// Parses a POSIX or BCP 47 style tag (`de_DE.UTF-8`, `fr-CA`, `ja`).
    ///
    /// Returns `None` for empty tags and for the `C`/`POSIX` pseudo-locales.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        if tag.is_empty() || tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
            return None;
        }

        let mut parts = tag.split(['_', '-']);
        let language = parts.next().filter(|l| !l.is_empty())?;
        if !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let region = parts.next().filter(|r| !r.is_empty());

        Some(Self::new(language, region))
    }

    /// Reads the active locale from `LC_ALL`, `LC_MONETARY` and `LANG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the locale through `lookup`, which maps a variable name to its value.
    ///
    /// The first non-empty variable decides; later ones are not consulted
    /// even when the deciding value is `C` or unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_VARIABLES
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse(&value))
            .unwrap_or_else(Self::fallback)
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency formatting rules for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub position: SymbolPosition,
    /// Separate symbol and number with a non-breaking space.
    pub spaced: bool,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// Number of minor-unit digits (2 for cents, 0 for yen).
    pub fraction_digits: u32,
}

const fn prefix(
    symbol: &'static str,
    spaced: bool,
    decimal_separator: char,
    grouping_separator: char,
    fraction_digits: u32,
) -> CurrencyFormat {
    CurrencyFormat {
        symbol,
        position: SymbolPosition::Prefix,
        spaced,
        decimal_separator,
        grouping_separator,
        fraction_digits,
    }
}

const fn suffix(
    symbol: &'static str,
    decimal_separator: char,
    grouping_separator: char,
) -> CurrencyFormat {
    CurrencyFormat {
        symbol,
        position: SymbolPosition::Suffix,
        spaced: true,
        decimal_separator,
        grouping_separator,
        fraction_digits: 2,
    }
}

/// Built-in formats keyed by language and region.
const LOCALE_FORMATS: &[(&str, &str, CurrencyFormat)] = &[
    ("en", "US", prefix("$", false, '.', ',', 2)),
    ("en", "GB", prefix("£", false, '.', ',', 2)),
    ("en", "CA", prefix("$", false, '.', ',', 2)),
    ("en", "AU", prefix("$", false, '.', ',', 2)),
    ("en", "IE", prefix("€", false, '.', ',', 2)),
    ("de", "DE", suffix("€", ',', '.')),
    ("de", "AT", prefix("€", true, ',', '.', 2)),
    ("de", "CH", prefix("CHF", true, '.', '’', 2)),
    ("fr", "FR", suffix("€", ',', NARROW_NBSP)),
    ("fr", "CA", suffix("$", ',', NBSP)),
    ("es", "ES", suffix("€", ',', '.')),
    ("es", "MX", prefix("$", false, '.', ',', 2)),
    ("it", "IT", suffix("€", ',', '.')),
    ("nl", "NL", prefix("€", true, ',', '.', 2)),
    ("pt", "BR", prefix("R$", true, ',', '.', 2)),
    ("pt", "PT", suffix("€", ',', NBSP)),
    ("sv", "SE", suffix("kr", ',', NBSP)),
    ("pl", "PL", suffix("zł", ',', NBSP)),
    ("ru", "RU", suffix("₽", ',', NBSP)),
    ("ja", "JP", prefix("¥", false, '.', ',', 0)),
    ("zh", "CN", prefix("¥", false, '.', ',', 2)),
    ("ko", "KR", prefix("₩", false, '.', ',', 0)),
];

/// Format used for locales missing from the table: the generic currency sign.
const GENERIC_FORMAT: CurrencyFormat = prefix("¤", false, '.', ',', 2);

impl CurrencyFormat {
    /// Looks up the format for `locale`.
    ///
    /// A bare language (`de`) uses the first region listed for it; unknown
    /// locales get the generic `¤` sign with `.`/`,` separators.
    pub fn for_locale(locale: &Locale) -> Self {
        let exact = locale.region.as_deref().and_then(|region| {
            LOCALE_FORMATS
                .iter()
                .find(|(lang, reg, _)| *lang == locale.language && *reg == region)
        });

        let by_language = || {
            LOCALE_FORMATS
                .iter()
                .find(|(lang, _, _)| locale.region.is_none() && *lang == locale.language)
        };

        exact
            .or_else(by_language)
            .map(|(_, _, format)| *format)
            .unwrap_or(GENERIC_FORMAT)
    }

    /// Locales with a built-in format, as `language_REGION` tags.
    pub fn known_locales() -> impl Iterator<Item = Locale> {
        LOCALE_FORMATS
            .iter()
            .map(|(lang, region, _)| Locale::new(*lang, Some(*region)))
    }

    /// Renders `amount` as a currency string, e.g. `$1,234.56` or `1.234,56 €`.
    ///
    /// The amount is rounded half-to-even to the format's minor units first.
    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let rounded = round_to_minor_units(amount, self.fraction_digits);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let fixed = format!("{:.*}", self.fraction_digits as usize, rounded.abs());

        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = self.group_digits(whole);
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if negative { "-" } else { "" };
        let space = if self.spaced { NBSP.to_string() } else { String::new() };
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{space}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number}{space}{}", self.symbol),
        }
    }

    /// Parses a string produced by [`CurrencyFormat::format`] back into an amount.
    ///
    /// Any whitespace around the symbol is tolerated.
    pub fn parse(
        &self,
        text: &str,
    ) -> Result<Decimal, CurrencyParseError> {
        let invalid = || CurrencyParseError::InvalidAmount {
            input: text.to_string(),
        };

        if !text.contains(self.symbol) {
            return Err(CurrencyParseError::MissingSymbol {
                input: text.to_string(),
                symbol: self.symbol,
            });
        }

        let number: String = text
            .replacen(self.symbol, "", 1)
            .chars()
            .filter(|c| !c.is_whitespace() && *c != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();

        if number.is_empty() || number.starts_with('+') {
            return Err(invalid());
        }

        Decimal::from_str(&number).map_err(|_| invalid())
    }

    fn group_digits(
        &self,
        digits: &str,
    ) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_locale(&Locale::fallback())
    }
}
