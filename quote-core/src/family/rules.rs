//! Declarative description of a pricing family.
//!
//! A family is data: which table prices the base, which optional lines it
//! offers, how colour is charged and which constraints apply. The pricing
//! pipeline interprets these rules; no family carries its own code.

use serde::{Deserialize, Serialize};

use crate::model::{Configuration, LightTone};
use crate::parts::PartsCatalog;
use crate::table::TableId;
use crate::validation::{DimensionRange, OuterAxis};

/// Product category as listed in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Awning,
    Pergola,
    VerticalScreen,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Category::Awning => "Awning",
            Category::Pergola => "Pergola",
            Category::VerticalScreen => "Vertical screen",
        })
    }
}

/// How the base price is read from the family table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLookup {
    /// Round both dimensions up to the next grid value.
    RoundUp(TableId),
    /// Snap both dimensions to the nearest grid value and read that cell.
    Nearest(TableId),
}

impl BaseLookup {
    pub fn table(&self) -> TableId {
        match self {
            BaseLookup::RoundUp(id) | BaseLookup::Nearest(id) => *id,
        }
    }
}

/// Colour surcharge, applied only when a custom colour is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorSurcharge {
    /// Fixed amount.
    Flat(f64),
    /// Fraction of the subtotal (0.10 = 10%).
    Percent(f64),
}

impl ColorSurcharge {
    /// Amount charged for a subtotal.
    pub fn amount(&self, subtotal: f64, custom_color: bool) -> f64 {
        if !custom_color {
            return 0.0;
        }
        match self {
            ColorSurcharge::Flat(fee) => *fee,
            ColorSurcharge::Percent(rate) => subtotal * rate,
        }
    }
}

/// One fee per LED colour temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneFees {
    pub warm: f64,
    pub cold: f64,
    pub rgb: f64,
}

impl ToneFees {
    pub fn fee(&self, tone: LightTone) -> f64 {
        match tone {
            LightTone::Warm => self.warm,
            LightTone::Cold => self.cold,
            LightTone::Rgb => self.rgb,
        }
    }
}

/// How the width is rounded before reading the parapet strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParapetWidth {
    /// Next multiple of 50cm.
    NextFifty,
    /// Next width available in the family base table.
    BaseTable,
}

/// How parapet prices are found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParapetPricing {
    /// Lux and panel from the width strips; the beam parapet is computed.
    ///
    /// Beam = rounded width in cm + column height in m x columns x `beam_column_rate`.
    Strips {
        width: ParapetWidth,
        beam_column_rate: f64,
    },
    /// Fixed prices regardless of size.
    Flat { lux: f64, panel: f64, beam: f64 },
}

/// Fee for keeping the existing gutter under a beam parapet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OldParapetFee {
    Flat(f64),
    /// Per metre of rounded parapet width.
    PerMeter(f64),
    /// Per centimetre of rounded parapet width.
    PerCentimeter(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParapetRule {
    pub pricing: ParapetPricing,
    pub old_parapet: OldParapetFee,
}

/// Surcharge for heavier front column profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProfileRule {
    /// Per column for 150x100.
    pub fee_150x100: f64,
    /// Per column for 150x150; `None` when the profile is not offered.
    pub fee_150x150: Option<f64>,
    /// Only charge when a lux or panel parapet is selected.
    pub with_strip_parapet_only: bool,
}

/// One optional surcharge or discount line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurchargeRule {
    /// Flat motor fee. Not charged in parts mode.
    Motor { fee: f64 },
    /// Spot lighting priced from a table by switching mode.
    TableLighting { on_off: TableId, dimmer: TableId },
    /// Lighting priced per tone; standard = on/off, lux = dimmer.
    ToneLighting { standard: ToneFees, lux: ToneFees },
    /// LED strip around the perimeter plus a control box.
    PerimeterLed { per_meter: f64, control_box: f64 },
    /// Extra LED spots on top of the perimeter strip.
    SpotLights { on_off: TableId, dimmer: TableId },
    /// Fixed lighting kit.
    LightingKit { fee: f64 },
    TableCover(TableId),
    FlatCover(f64),
    Parapet(ParapetRule),
    ColumnProfile(ColumnProfileRule),
    /// Manually chosen column count.
    ManualColumns { per_column: f64 },
    WallBases { per_base: f64 },
    /// Gutter per metre of width plus end caps.
    Drainage { per_meter: f64, end_caps: f64 },
    /// Frame per metre of (perimeter + column height).
    Frame { per_meter: f64 },
    AutoLock { fee: f64 },
    /// Discount per cm of width.
    Cabrio { per_cm: f64 },
}

/// Input check run before pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Stated width and outer dimension limits.
    Range(DimensionRange),
    /// Column height must be set; always, or only when columns are chosen.
    ColumnHeight { always: bool },
    /// Folded arms must fit in the width.
    ArmClearance,
}

/// A pricing family.
#[derive(Debug, Clone)]
pub struct FamilySpec {
    /// Product id.
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub base: BaseLookup,
    /// Whether the second dimension is a projection or a height.
    pub outer_axis: OuterAxis,
    pub constraints: Vec<Constraint>,
    /// Lines in the order they appear on the quote.
    pub surcharges: Vec<SurchargeRule>,
    pub color: ColorSurcharge,
    /// Bill of materials for parts mode.
    pub parts: Option<PartsCatalog>,
    /// Default width and outer dimension for a new quote.
    pub default_size: (u32, u32),
}

impl FamilySpec {
    /// Check if this family takes part in the alternative-match search.
    pub fn is_comparable(&self) -> bool {
        self.category == Category::Pergola
    }

    /// Stated input range, if the family declares one.
    pub fn stated_range(&self) -> Option<DimensionRange> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::Range(range) => Some(*range),
            _ => None,
        })
    }

    /// Check if the family offers manually chosen columns.
    pub fn has_manual_columns(&self) -> bool {
        self.surcharges
            .iter()
            .any(|rule| matches!(rule, SurchargeRule::ManualColumns { .. }))
    }

    /// A fresh configuration for this family.
    pub fn default_configuration(&self) -> Configuration {
        let (width, outer) = self.default_size;
        let mut config = Configuration::new(width, outer);
        if self.has_manual_columns() {
            config.column_count = crate::config::dims::column_count(width);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_surcharge() {
        assert_eq!(ColorSurcharge::Flat(360.0).amount(2165.0, true), 360.0);
        assert_eq!(ColorSurcharge::Flat(360.0).amount(2165.0, false), 0.0);
        assert!((ColorSurcharge::Percent(0.10).amount(3170.0, true) - 317.0).abs() < 1e-9);
        assert_eq!(ColorSurcharge::Percent(0.10).amount(3170.0, false), 0.0);
    }

    #[test]
    fn test_tone_fees() {
        let fees = ToneFees {
            warm: 1.0,
            cold: 2.0,
            rgb: 3.0,
        };
        assert_eq!(fees.fee(LightTone::Cold), 2.0);
        assert_eq!(fees.fee(LightTone::Rgb), 3.0);
    }

    #[test]
    fn test_base_lookup_table() {
        assert_eq!(BaseLookup::Nearest(TableId::Epica).table(), TableId::Epica);
        assert_eq!(BaseLookup::RoundUp(TableId::Pro100).table(), TableId::Pro100);
    }
}
