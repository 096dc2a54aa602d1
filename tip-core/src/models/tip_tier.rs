use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known tip tier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tip tier '{0}' (expected one of: 20, 18, 15)")]
pub struct TipTierParseError(pub String);

/// The fixed set of tip percentages offered on the calculator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TipTier {
    #[serde(rename = "twenty")]
    TwentyPercent,
    #[serde(rename = "eighteen")]
    EighteenPercent,
    /// Fallback tier used whenever no explicit choice is made.
    #[default]
    #[serde(rename = "fifteen")]
    FifteenPercent,
}

impl TipTier {
    /// All tiers in the order they are presented to the user.
    pub fn all() -> &'static [TipTier] {
        &[
            TipTier::TwentyPercent,
            TipTier::EighteenPercent,
            TipTier::FifteenPercent,
        ]
    }

    /// Tip rate as a fraction of the cost (e.g. `0.20`).
    pub fn rate(&self) -> Decimal {
        match self {
            Self::TwentyPercent => Decimal::new(20, 2),
            Self::EighteenPercent => Decimal::new(18, 2),
            Self::FifteenPercent => Decimal::new(15, 2),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwentyPercent => "20%",
            Self::EighteenPercent => "18%",
            Self::FifteenPercent => "15%",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwentyPercent => "twenty",
            Self::EighteenPercent => "eighteen",
            Self::FifteenPercent => "fifteen",
        }
    }

    /// Maps a possibly-missing selection onto a tier.
    ///
    /// Anything other than the two higher tiers falls through to 15%; a
    /// missing selection is not an error.
    pub fn resolve(selection: Option<TipTier>) -> TipTier {
        match selection {
            Some(Self::TwentyPercent) => Self::TwentyPercent,
            Some(Self::EighteenPercent) => Self::EighteenPercent,
            _ => Self::FifteenPercent,
        }
    }

    /// Position of this tier within [`TipTier::all`].
    pub fn index(&self) -> usize {
        match self {
            Self::TwentyPercent => 0,
            Self::EighteenPercent => 1,
            Self::FifteenPercent => 2,
        }
    }

    /// Inverse of [`TipTier::index`]. Out-of-range indexes yield `None`.
    pub fn from_index(index: usize) -> Option<TipTier> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for TipTier {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TipTier {
    type Err = TipTierParseError;

    /// Accepts `20`, `20%`, `0.20`, or `twenty` (case-insensitive), and the
    /// same forms for 18 and 15.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_end_matches('%').trim().to_ascii_lowercase();
        match normalized.as_str() {
            "20" | "0.20" | "0.2" | ".20" | ".2" | "twenty" => Ok(Self::TwentyPercent),
            "18" | "0.18" | ".18" | "eighteen" => Ok(Self::EighteenPercent),
            "15" | "0.15" | ".15" | "fifteen" => Ok(Self::FifteenPercent),
            _ => Err(TipTierParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rates_match_the_offered_percentages() {
        assert_eq!(TipTier::TwentyPercent.rate(), dec!(0.20));
        assert_eq!(TipTier::EighteenPercent.rate(), dec!(0.18));
        assert_eq!(TipTier::FifteenPercent.rate(), dec!(0.15));
    }

    #[test]
    fn resolve_falls_back_to_fifteen_percent() {
        assert_eq!(TipTier::resolve(None), TipTier::FifteenPercent);
        assert_eq!(
            TipTier::resolve(Some(TipTier::FifteenPercent)),
            TipTier::FifteenPercent
        );
        assert_eq!(
            TipTier::resolve(Some(TipTier::EighteenPercent)),
            TipTier::EighteenPercent
        );
    }

    #[test]
    fn default_is_the_fallback_tier() {
        assert_eq!(TipTier::default(), TipTier::resolve(None));
    }

    #[test]
    fn index_round_trips_through_all() {
        for tier in TipTier::all() {
            assert_eq!(TipTier::from_index(tier.index()), Some(*tier));
        }
        assert_eq!(TipTier::from_index(3), None);
    }

    #[test]
    fn from_str_accepts_common_spellings() {
        assert_eq!("20".parse::<TipTier>(), Ok(TipTier::TwentyPercent));
        assert_eq!(" 18% ".parse::<TipTier>(), Ok(TipTier::EighteenPercent));
        assert_eq!("0.15".parse::<TipTier>(), Ok(TipTier::FifteenPercent));
        assert_eq!("Twenty".parse::<TipTier>(), Ok(TipTier::TwentyPercent));
    }

    #[test]
    fn from_str_rejects_unknown_tiers() {
        let err = "25".parse::<TipTier>().unwrap_err();

        assert_eq!(err, TipTierParseError("25".to_string()));
    }

    #[test]
    fn display_uses_percentage_label() {
        assert_eq!(TipTier::EighteenPercent.to_string(), "18%");
    }
}
