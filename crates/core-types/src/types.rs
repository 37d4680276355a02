// In crates/core-types/src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A trading symbol, e.g. `EURUSD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A candle aggregation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    H8,
    D1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 8] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::H8,
        Timeframe::D1,
    ];

    /// The bare tag, e.g. `"H4"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H4 => "H4",
            Timeframe::H8 => "H8",
            Timeframe::D1 => "D1",
        }
    }

    /// Length of one candle in minutes.
    pub fn minutes(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M5 => 5,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
            Timeframe::H4 => 240,
            Timeframe::H8 => 480,
            Timeframe::D1 => 1440,
        }
    }

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tf| tf.minutes() == minutes)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    /// Accepts both `"H4"` and the platform spelling `"PERIOD_H4"`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let tag = upper.strip_prefix("PERIOD_").unwrap_or(&upper);
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str() == tag)
            .ok_or_else(|| Error::UnknownTimeframe(s.to_string()))
    }
}

/// The price series an indicator is computed from.
///
/// The integer codes follow the trading platform's `ENUM_APPLIED_PRICE`
/// numbering, which is how flattened parameter sets store them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppliedPrice {
    #[default]
    Close,
    Open,
    High,
    Low,
    Median,
    Typical,
    Weighted,
}

impl AppliedPrice {
    pub fn code(self) -> i32 {
        match self {
            AppliedPrice::Close => 0,
            AppliedPrice::Open => 1,
            AppliedPrice::High => 2,
            AppliedPrice::Low => 3,
            AppliedPrice::Median => 4,
            AppliedPrice::Typical => 5,
            AppliedPrice::Weighted => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(AppliedPrice::Close),
            1 => Some(AppliedPrice::Open),
            2 => Some(AppliedPrice::High),
            3 => Some(AppliedPrice::Low),
            4 => Some(AppliedPrice::Median),
            5 => Some(AppliedPrice::Typical),
            6 => Some(AppliedPrice::Weighted),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeframe_parses_bare_and_platform_tags() {
        assert_eq!("H4".parse::<Timeframe>().unwrap(), Timeframe::H4);
        assert_eq!("PERIOD_M15".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert_eq!("period_h8".parse::<Timeframe>().unwrap(), Timeframe::H8);
        assert_eq!(
            "W1".parse::<Timeframe>(),
            Err(Error::UnknownTimeframe("W1".to_string()))
        );
    }

    #[test]
    fn timeframe_minutes_round_trip() {
        for tf in Timeframe::ALL {
            assert_eq!(Timeframe::from_minutes(tf.minutes()), Some(tf));
        }
        assert_eq!(Timeframe::from_minutes(7), None);
    }

    #[test]
    fn applied_price_codes() {
        assert_eq!(AppliedPrice::from_code(3), Some(AppliedPrice::Low));
        assert_eq!(AppliedPrice::from_code(7), None);
        assert_eq!(AppliedPrice::default().code(), 0);
    }
}
