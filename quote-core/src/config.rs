//! Pricing constants and engine-wide settings.

use serde::{Deserialize, Serialize};

/// Currency comparison epsilon (half a cent).
pub const EPS: f64 = 0.005;

/// Greek VAT rate applied to every quote.
pub const DEFAULT_VAT_RATE: f64 = 0.24;

/// Price returned by a table lookup that has no cell for the requested size.
pub const UNPRICEABLE: f64 = 0.0;

/// Grid step used by the parapet width rounding of the Pro line.
pub const PARAPET_WIDTH_STEP_CM: u32 = 50;

/// Width covered by a single column span.
pub const COLUMN_SPAN_CM: u32 = 400;

/// Minimum number of front columns on any pergola.
pub const MIN_COLUMNS: u32 = 2;

/// Centimetres per metre.
pub const CM_PER_M: f64 = 100.0;

/// Engine settings injected into every pricing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// VAT rate as a fraction (0.24 = 24%).
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vat_rate: default_vat_rate(),
        }
    }
}

impl PricingConfig {
    /// Create a configuration with a custom VAT rate.
    pub fn with_vat_rate(vat_rate: f64) -> Self {
        Self { vat_rate }
    }
}

const fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

/// Currency helpers.
pub mod money {
    use super::EPS;

    /// Round a currency amount to whole cents.
    #[inline]
    pub fn round_cents(amount: f64) -> f64 {
        let rounded = (amount * 100.0).round() / 100.0;
        // Avoid printing "-0.00".
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Check if two amounts are equal to the cent.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if an amount is zero to the cent.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}

/// Dimension helpers shared by several families.
pub mod dims {
    use super::{COLUMN_SPAN_CM, CM_PER_M, MIN_COLUMNS, PARAPET_WIDTH_STEP_CM};

    /// Convert centimetres to metres.
    #[inline]
    pub fn cm_to_m(cm: u32) -> f64 {
        f64::from(cm) / CM_PER_M
    }

    /// Round a width up to the next multiple of 50cm.
    pub fn round_up_to_next_50(width: u32) -> u32 {
        width
            .div_ceil(PARAPET_WIDTH_STEP_CM)
            .saturating_mul(PARAPET_WIDTH_STEP_CM)
    }

    /// Number of front columns needed to carry a given width.
    ///
    /// One column per started 4m span plus one, never fewer than two.
    pub fn column_count(width: u32) -> u32 {
        (width.div_ceil(COLUMN_SPAN_CM) + 1).max(MIN_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vat_rate() {
        assert_eq!(PricingConfig::default().vat_rate, 0.24);
    }

    #[test]
    fn test_pricing_config_missing_fields_use_defaults() {
        let config: PricingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(money::round_cents(10.004), 10.0);
        assert_eq!(money::round_cents(10.006), 10.01);
        assert_eq!(money::round_cents(-0.001), 0.0);
    }

    #[test]
    fn test_round_up_to_next_50() {
        assert_eq!(dims::round_up_to_next_50(300), 300);
        assert_eq!(dims::round_up_to_next_50(301), 350);
        assert_eq!(dims::round_up_to_next_50(349), 350);
        assert_eq!(dims::round_up_to_next_50(0), 0);
        assert_eq!(dims::round_up_to_next_50(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_column_count() {
        assert_eq!(dims::column_count(0), 2);
        assert_eq!(dims::column_count(300), 2);
        assert_eq!(dims::column_count(400), 2);
        assert_eq!(dims::column_count(401), 3);
        assert_eq!(dims::column_count(800), 3);
        assert_eq!(dims::column_count(1300), 5);
    }
}
