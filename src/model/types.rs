use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bond order code: '{0}' (expected 1-8)")]
pub struct ParseBondOrderError(String);

/// Bond-order class of a bond, after folding raw file codes into `1..=4`.
///
/// Raw codes `5..=8` carry an extra stereo/query flag on top of the base class
/// and are folded by subtracting 4. Codes outside `1..=8` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
    Other = 4,
}

impl BondOrder {
    /// Folds a raw bond-order code from an input file into a bond class.
    pub fn from_code(code: i64) -> Result<Self, ParseBondOrderError> {
        let folded = if (5..=8).contains(&code) { code - 4 } else { code };
        match folded {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            4 => Ok(BondOrder::Other),
            _ => Err(ParseBondOrderError(code.to_string())),
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BondOrder::Single => "single",
            BondOrder::Double => "double",
            BondOrder::Triple => "triple",
            BondOrder::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for BondOrder {
    type Err = ParseBondOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseBondOrderError(s.to_string()))?;
        Self::from_code(code)
    }
}
