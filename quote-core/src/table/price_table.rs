//! Two-dimensional price table keyed by outer dimension and width.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{QuoteError, Result};

/// Prices indexed by width only (parapet strips).
pub type WidthPrices = BTreeMap<u32, f64>;

/// Price table: outer dimension (projection or height, cm) -> width (cm) -> price.
///
/// Keys are sparse. A missing cell means the size is not manufactured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    rows: BTreeMap<u32, BTreeMap<u32, f64>>,
}

impl PriceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a price sheet.
    ///
    /// `widths` is the header row. Each row lists prices left to right; a row
    /// shorter than the header leaves the trailing widths unpriced.
    pub fn from_sheet(widths: &[u32], rows: &[(u32, &[f64])]) -> Self {
        let mut table = Self::new();
        for (outer, prices) in rows {
            for (width, price) in widths.iter().zip(prices.iter()) {
                table.insert(*outer, *width, *price);
            }
        }
        table
    }

    /// Set the price of one cell.
    pub fn insert(&mut self, outer: u32, width: u32, price: f64) {
        self.rows.entry(outer).or_default().insert(width, price);
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of priced cells.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// Get one row of the table.
    pub fn row(&self, outer: u32) -> Option<&BTreeMap<u32, f64>> {
        self.rows.get(&outer)
    }

    /// Available outer dimensions in ascending order.
    pub fn outer_keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Every width that appears in at least one row, ascending.
    pub fn all_widths(&self) -> BTreeSet<u32> {
        self.rows
            .values()
            .flat_map(|row| row.keys().copied())
            .collect()
    }

    /// Exact cell lookup without any rounding.
    pub fn price_at(&self, outer: u32, width: u32) -> Option<f64> {
        self.rows.get(&outer).and_then(|row| row.get(&width)).copied()
    }

    /// Smallest outer dimension.
    pub fn min_outer(&self) -> Option<u32> {
        self.rows.keys().next().copied()
    }

    /// Largest outer dimension.
    pub fn max_outer(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Check the table invariants: no empty rows, no negative prices.
    pub fn validate(&self, name: &str) -> Result<()> {
        for (outer, row) in &self.rows {
            if row.is_empty() {
                return Err(QuoteError::InvalidTable {
                    table: name.to_string(),
                    message: format!("row {} has no widths", outer),
                });
            }
            for (width, price) in row {
                if !price.is_finite() || *price < 0.0 {
                    return Err(QuoteError::InvalidTable {
                        table: name.to_string(),
                        message: format!("price {} at {}x{} is not valid", price, outer, width),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheet_sparse_rows() {
        let table = PriceTable::from_sheet(
            &[100, 150, 200],
            &[(200, &[10.0, 20.0, 30.0]), (250, &[15.0, 25.0])],
        );
        assert_eq!(table.cell_count(), 5);
        assert_eq!(table.price_at(250, 150), Some(25.0));
        assert_eq!(table.price_at(250, 200), None);
    }

    #[test]
    fn test_all_widths_is_union_of_rows() {
        let mut table = PriceTable::new();
        table.insert(100, 300, 1.0);
        table.insert(200, 250, 1.0);
        let widths: Vec<u32> = table.all_widths().into_iter().collect();
        assert_eq!(widths, vec![250, 300]);
    }

    #[test]
    fn test_min_max_outer() {
        let table = PriceTable::from_sheet(&[100], &[(300, &[1.0]), (150, &[1.0])]);
        assert_eq!(table.min_outer(), Some(150));
        assert_eq!(table.max_outer(), Some(300));
        assert_eq!(PriceTable::new().max_outer(), None);
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let table = PriceTable::from_sheet(&[100], &[(200, &[-1.0])]);
        assert!(matches!(
            table.validate("demo"),
            Err(QuoteError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_json_uses_string_keys() {
        let table = PriceTable::from_sheet(&[300], &[(200, &[3170.0])]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"200":{"300":3170.0}}"#);
        let back: PriceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
