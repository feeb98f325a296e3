//! Currencies of the remittance corridor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two currencies of the JPY→VND corridor.
///
/// The service is deliberately not generalized beyond this pair: JPY is
/// always the source currency and VND always the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    JPY,
    VND,
}

impl Currency {
    /// Returns the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::JPY => "¥",
            Currency::VND => "₫",
        }
    }

    /// Both JPY and VND are quoted in whole units in practice.
    pub fn decimal_places(&self) -> u8 {
        0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_iso_code() {
        assert_eq!(Currency::JPY.to_string(), "JPY");
        assert_eq!(Currency::VND.to_string(), "VND");
    }

    #[test]
    fn symbols() {
        assert_eq!(Currency::JPY.symbol(), "¥");
        assert_eq!(Currency::VND.symbol(), "₫");
    }
}
