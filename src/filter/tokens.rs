//! Fixed filter/sort token enumerations.
//!
//! Price brackets and sort strategies are presentation-defined tokens, not
//! product attributes: their option lists are hand-specified here, never
//! derived from the catalog. Token strings are part of the external
//! interface (shared links, tests) and must match exactly, case-sensitive.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::StoreError;

// =============================================================================
// Facet keys
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetKey {
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "color")]
    Color,
}

impl FacetKey {
    pub const ALL: [FacetKey; 3] = [FacetKey::Type, FacetKey::Size, FacetKey::Color];

    pub fn as_str(self) -> &'static str {
        match self {
            FacetKey::Type => "type",
            FacetKey::Size => "size",
            FacetKey::Color => "color",
        }
    }

    /// Caption shown on the facet's dropdown panel.
    pub fn label(self) -> &'static str {
        match self {
            FacetKey::Type => "Product Type",
            FacetKey::Size => "Size",
            FacetKey::Color => "Colour",
        }
    }
}

impl FromStr for FacetKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(FacetKey::Type),
            "size" => Ok(FacetKey::Size),
            "color" => Ok(FacetKey::Color),
            _ => Err(StoreError::UnknownToken {
                kind: "facet",
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Price brackets
// =============================================================================

/// One sub-range of the fixed price filter. Bounds are inclusive on BOTH
/// ends, so a price sitting exactly on a boundary (say 200) belongs to both
/// adjoining brackets. That overlap is intentional and load-bearing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBracket {
    #[default]
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "0-200")]
    UpTo200,
    #[serde(rename = "200-500")]
    From200To500,
    #[serde(rename = "500-700")]
    From500To700,
    #[serde(rename = "700-1000")]
    From700To1000,
    #[serde(rename = "1000-1500")]
    From1000To1500,
    #[serde(rename = "1500-2000")]
    From1500To2000,
    #[serde(rename = "2000-2500")]
    From2000To2500,
    #[serde(rename = "2500P")]
    Above2500,
}

impl PriceBracket {
    /// Fixed display order for the price dropdown. Hand-specified, not sorted.
    pub const ALL_BRACKETS: [PriceBracket; 9] = [
        PriceBracket::All,
        PriceBracket::UpTo200,
        PriceBracket::From200To500,
        PriceBracket::From500To700,
        PriceBracket::From700To1000,
        PriceBracket::From1000To1500,
        PriceBracket::From1500To2000,
        PriceBracket::From2000To2500,
        PriceBracket::Above2500,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PriceBracket::All => "ALL",
            PriceBracket::UpTo200 => "0-200",
            PriceBracket::From200To500 => "200-500",
            PriceBracket::From500To700 => "500-700",
            PriceBracket::From700To1000 => "700-1000",
            PriceBracket::From1000To1500 => "1000-1500",
            PriceBracket::From1500To2000 => "1500-2000",
            PriceBracket::From2000To2500 => "2000-2500",
            PriceBracket::Above2500 => "2500P",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBracket::All => "All Prices",
            PriceBracket::UpTo200 => "Rs. 0 - 200",
            PriceBracket::From200To500 => "Rs. 200 - 500",
            PriceBracket::From500To700 => "Rs. 500 - 700",
            PriceBracket::From700To1000 => "Rs. 700 - 1000",
            PriceBracket::From1000To1500 => "Rs. 1000 - 1500",
            PriceBracket::From1500To2000 => "Rs. 1500 - 2000",
            PriceBracket::From2000To2500 => "Rs. 2000 - 2500",
            PriceBracket::Above2500 => "Rs. 2500 and above",
        }
    }

    /// Inclusive lower bound and optional inclusive upper bound.
    fn bounds(self) -> (Decimal, Option<Decimal>) {
        let range = |lo: u32, hi: u32| (Decimal::from(lo), Some(Decimal::from(hi)));
        match self {
            PriceBracket::All => (Decimal::ZERO, None),
            PriceBracket::UpTo200 => range(0, 200),
            PriceBracket::From200To500 => range(200, 500),
            PriceBracket::From500To700 => range(500, 700),
            PriceBracket::From700To1000 => range(700, 1000),
            PriceBracket::From1000To1500 => range(1000, 1500),
            PriceBracket::From1500To2000 => range(1500, 2000),
            PriceBracket::From2000To2500 => range(2000, 2500),
            PriceBracket::Above2500 => (Decimal::from(2500u32), None),
        }
    }

    pub fn contains(self, price: Decimal) -> bool {
        if self == PriceBracket::All {
            return true;
        }
        let (lower, upper) = self.bounds();
        lower <= price && upper.is_none_or(|u| price <= u)
    }
}

impl FromStr for PriceBracket {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_BRACKETS
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| StoreError::UnknownToken {
                kind: "price",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sort strategies
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "pop")]
    Popularity,
    #[serde(rename = "phl")]
    PriceHighLow,
    #[serde(rename = "plh")]
    PriceLowHigh,
    #[serde(rename = "new")]
    Newest,
}

impl SortKey {
    /// Fixed display order for the sort dropdown.
    pub const ALL_KEYS: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::PriceHighLow,
        SortKey::PriceLowHigh,
        SortKey::Newest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "pop",
            SortKey::PriceHighLow => "phl",
            SortKey::PriceLowHigh => "plh",
            SortKey::Newest => "new",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::PriceHighLow => "Price High to Low",
            SortKey::PriceLowHigh => "Price Low to High",
            SortKey::Newest => "Newest",
        }
    }
}

impl FromStr for SortKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_KEYS
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| StoreError::UnknownToken {
                kind: "sort",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
