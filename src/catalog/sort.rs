//! Sort orders for the product list.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::collate::NameCollator;
use super::product::Product;

/// Sort order requested by the UI.
///
/// Unknown mode strings are kept as [`SortOrder::Unrecognized`] rather than
/// rejected; the reducer treats them as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    Unrecognized(String),
}

impl SortOrder {
    /// Wire name of the order, e.g. `price-asc`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Unrecognized(mode) => mode,
        }
    }

    /// Stable in-place sort of `items` in this order.
    ///
    /// Returns `false`, leaving `items` untouched, when the mode is unknown.
    pub fn sort(&self, items: &mut [Product]) -> bool {
        match self {
            Self::PriceAsc => items.sort_by(|a, b| price_cmp(a.price, b.price)),
            Self::PriceDesc => items.sort_by(|a, b| price_cmp(b.price, a.price)),
            Self::NameAsc => {
                let mut collator = NameCollator::new();
                items.sort_by(|a, b| collator.compare(&a.name, &b.name));
            }
            Self::NameDesc => {
                let mut collator = NameCollator::new();
                items.sort_by(|a, b| collator.compare(&b.name, &a.name));
            }
            Self::Unrecognized(_) => return false,
        }
        true
    }
}

/// Numeric comparison where `-0.0 == 0.0` and NaN ties with everything.
fn price_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl From<&str> for SortOrder {
    fn from(mode: &str) -> Self {
        match mode {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortOrder {
    fn from(mode: String) -> Self {
        Self::from(mode.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Unrecognized(mode) => mode,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!(SortOrder::from("price-asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::from("price-desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::from("name-asc"), SortOrder::NameAsc);
        assert_eq!(SortOrder::from("name-desc"), SortOrder::NameDesc);
    }

    #[test]
    fn keeps_unknown_mode() {
        let order = SortOrder::from("bogus-mode");
        assert_eq!(order, SortOrder::Unrecognized("bogus-mode".into()));
        let mut items = vec![Product::default()];
        assert!(!order.sort(&mut items));
        assert_eq!(order.to_string(), "bogus-mode");
    }

    #[test]
    fn signed_zero_prices_tie() {
        let mut items = vec![
            Product { id: 1, price: 0.0, ..Default::default() },
            Product { id: 2, price: -0.0, ..Default::default() },
        ];
        assert!(SortOrder::PriceAsc.sort(&mut items));
        let ids: Vec<i64> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn deserializes_from_plain_string() {
        let order: SortOrder = serde_json::from_str("\"name-desc\"").unwrap();
        assert_eq!(order, SortOrder::NameDesc);
        assert_eq!(serde_json::to_string(&order).unwrap(), "\"name-desc\"");
    }
}
