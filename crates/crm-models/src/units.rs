//! Area units used on dimensioned material lines
//!
//! Factors are exact conversions to square meters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AreaUnit {
    #[default]
    #[serde(rename = "m²", alias = "m2")]
    SquareMeter,
    #[serde(rename = "cm²", alias = "cm2")]
    SquareCentimeter,
    #[serde(rename = "mm²", alias = "mm2")]
    SquareMillimeter,
    #[serde(rename = "ft²", alias = "ft2")]
    SquareFoot,
    #[serde(rename = "in²", alias = "in2")]
    SquareInch,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 5] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareFoot,
        AreaUnit::SquareInch,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::SquareMeter => "m²",
            Self::SquareCentimeter => "cm²",
            Self::SquareMillimeter => "mm²",
            Self::SquareFoot => "ft²",
            Self::SquareInch => "in²",
        }
    }

    /// Square meters in one of this unit.
    pub fn to_square_meters(&self) -> f64 {
        match self {
            Self::SquareMeter => 1.0,
            Self::SquareCentimeter => 0.0001,
            Self::SquareMillimeter => 0.000_001,
            Self::SquareFoot => 0.092_903_04,
            Self::SquareInch => 0.000_645_16,
        }
    }

    /// Convert an area expressed in `self` into `target`.
    pub fn convert(&self, value: f64, target: AreaUnit) -> f64 {
        value * self.to_square_meters() / target.to_square_meters()
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m²" | "m2" => Ok(Self::SquareMeter),
            "cm²" | "cm2" => Ok(Self::SquareCentimeter),
            "mm²" | "mm2" => Ok(Self::SquareMillimeter),
            "ft²" | "ft2" => Ok(Self::SquareFoot),
            "in²" | "in2" => Ok(Self::SquareInch),
            other => Err(format!("unknown area unit '{}'", other)),
        }
    }
}
