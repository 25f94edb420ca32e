//! Price table store, rounding and lookup.

mod data;
mod price_table;
mod rounding;

pub use price_table::{PriceTable, WidthPrices};
pub use rounding::{
    get_price_from_table, nearest_option, round_up_to_next_available_projection,
    round_up_to_next_available_width, snap_to_nearest,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{QuoteError, Result};

/// Identifier of a two-dimensional price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    Pro100,
    Pro150,
    ProMega,
    StandardMotor,
    Hanging,
    Flat,
    Bioclimatic,
    OpenSky,
    OpenRoof,
    FixedBlades,
    Balloon,
    Danae,
    /// On/off LED spots.
    LightsStandard,
    /// Dimmable LED spots.
    LightsLux,
    /// Roof cover ("στέγαστρο").
    Cover,
    Cassette530,
    Cassette732,
    Epica,
    ZipScreen,
    CassettePhi10,
    WireCabrio,
    VerticalVt,
}

/// Identifier of a width-indexed price strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthTableId {
    ParapetLux,
    ParapetPanel,
}

/// All price tables used by the pricing families.
///
/// Immutable once built; shared read-only by every pricing pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTables {
    /// Two-dimensional tables.
    #[serde(default)]
    pub grids: BTreeMap<TableId, PriceTable>,
    /// Width-only tables.
    #[serde(default)]
    pub width_tables: BTreeMap<WidthTableId, WidthPrices>,
}

impl PriceTables {
    /// The compiled-in price list.
    pub fn builtin() -> Self {
        data::builtin()
    }

    /// Parse tables from JSON and check them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: PriceTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let json = std::fs::read_to_string(path)?;
        let tables = Self::from_json_str(&json)?;
        tracing::debug!(
            "Loaded {} price tables from {}",
            tables.grids.len(),
            path.display()
        );
        Ok(tables)
    }

    /// Serialize tables as pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Get a two-dimensional table.
    pub fn grid(&self, id: TableId) -> Option<&PriceTable> {
        self.grids.get(&id)
    }

    /// Get a width-indexed table.
    pub fn width_table(&self, id: WidthTableId) -> Option<&WidthPrices> {
        self.width_tables.get(&id)
    }

    /// Round-up lookup against one table. Missing tables price as zero.
    pub fn lookup(&self, id: TableId, projection: u32, width: u32) -> f64 {
        self.grid(id)
            .map(|table| get_price_from_table(table, projection, width))
            .unwrap_or(crate::config::UNPRICEABLE)
    }

    /// Exact lookup in a width strip. Missing widths price as zero.
    pub fn width_price(&self, id: WidthTableId, width: u32) -> f64 {
        self.width_table(id)
            .and_then(|strip| strip.get(&width))
            .copied()
            .unwrap_or(crate::config::UNPRICEABLE)
    }

    /// Check every table invariant.
    pub fn validate(&self) -> Result<()> {
        for (id, table) in &self.grids {
            table.validate(&format!("{:?}", id))?;
        }
        for (id, strip) in &self.width_tables {
            if let Some((width, price)) = strip.iter().find(|(_, p)| !p.is_finite() || **p < 0.0) {
                return Err(QuoteError::InvalidTable {
                    table: format!("{:?}", id),
                    message: format!("price {} at width {} is not valid", price, width),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = PriceTables::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.grids.len(), 22);
        assert_eq!(tables.width_tables.len(), 2);
    }

    #[test]
    fn test_builtin_pro100_corner() {
        let tables = PriceTables::builtin();
        assert_eq!(tables.lookup(TableId::Pro100, 200, 300), 3170.0);
    }

    #[test]
    fn test_builtin_pro100_is_sparse_at_deep_projections() {
        let tables = PriceTables::builtin();
        assert!(tables.lookup(TableId::Pro100, 400, 1300) > 0.0);
        assert_eq!(tables.lookup(TableId::Pro100, 450, 1300), 0.0);
    }

    #[test]
    fn test_missing_table_prices_zero() {
        let tables = PriceTables::default();
        assert_eq!(tables.lookup(TableId::Pro100, 200, 300), 0.0);
        assert_eq!(tables.width_price(WidthTableId::ParapetLux, 300), 0.0);
    }

    #[test]
    fn test_width_price_exact_only() {
        let tables = PriceTables::builtin();
        assert!(tables.width_price(WidthTableId::ParapetLux, 300) > 0.0);
        assert_eq!(tables.width_price(WidthTableId::ParapetLux, 310), 0.0);
    }

    #[test]
    fn test_from_json_str_rejects_negative_price() {
        let json = r#"{"grids":{"pro100":{"200":{"300":-5.0}}}}"#;
        assert!(matches!(
            PriceTables::from_json_str(json),
            Err(QuoteError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_from_json_str_partial_override() {
        let json = r#"{"grids":{"danae":{"150":{"150":1000.0}}}}"#;
        let tables = PriceTables::from_json_str(json).unwrap();
        assert_eq!(tables.lookup(TableId::Danae, 150, 150), 1000.0);
        assert!(tables.width_tables.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = PriceTables::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(QuoteError::FileNotFound { .. })));
    }
}
