//! Itemised price breakdown.

use serde::{Deserialize, Serialize};

/// Kind of a surcharge or discount line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Motor,
    Lighting,
    SpotLighting,
    LightingKit,
    Cover,
    Parapet,
    OldParapet,
    ColumnProfile,
    Columns,
    WallBases,
    Drainage,
    Frame,
    AutoLock,
    /// Cabrio conversion, always negative.
    Cabrio,
}

/// One named surcharge or discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineKind,
    pub label: String,
    /// Signed amount; discounts are negative.
    pub amount: f64,
}

impl LineItem {
    pub fn new(kind: LineKind, label: impl Into<String>, amount: f64) -> Self {
        Self {
            kind,
            label: label.into(),
            amount,
        }
    }
}

/// One bill-of-materials position in parts mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentLine {
    pub name: String,
    /// Quantity and unit price as shown to the customer.
    pub detail: String,
    pub cost: f64,
}

/// Dimensions after snapping to the family's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedDimensions {
    pub width: u32,
    pub projection: u32,
}

/// Derived price breakdown. Recomputed on every configuration change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Table price, or 0 when out of range or in parts mode.
    pub base_price: f64,
    /// Optional lines in the order they were applied.
    pub lines: Vec<LineItem>,
    /// Base price (or parts total) plus every line, before colour.
    pub subtotal: f64,
    pub color_surcharge: f64,
    pub subtotal_without_vat: f64,
    pub vat: f64,
    pub total: f64,
    /// Grid dimensions the base price was read at.
    pub rounded: Option<RoundedDimensions>,
    /// Bill of materials when priced in parts mode.
    pub components: Option<Vec<ComponentLine>>,
}

impl Breakdown {
    /// Find a line by kind.
    pub fn line(&self, kind: LineKind) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.kind == kind)
    }

    /// Amount of a line, 0 when the line is absent.
    pub fn line_amount(&self, kind: LineKind) -> f64 {
        self.line(kind).map(|l| l.amount).unwrap_or(0.0)
    }

    /// Check if a line of this kind was applied.
    pub fn has_line(&self, kind: LineKind) -> bool {
        self.line(kind).is_some()
    }

    /// Sum of every line amount.
    pub fn lines_total(&self) -> f64 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    /// Sum of the bill of materials.
    pub fn components_total(&self) -> f64 {
        self.components
            .as_ref()
            .map(|parts| parts.iter().map(|p| p.cost).sum())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookup() {
        let breakdown = Breakdown {
            lines: vec![
                LineItem::new(LineKind::Motor, "Motor", 230.0),
                LineItem::new(LineKind::Cabrio, "Cabrio", -3600.0),
            ],
            ..Default::default()
        };
        assert_eq!(breakdown.line_amount(LineKind::Motor), 230.0);
        assert_eq!(breakdown.line_amount(LineKind::Cover), 0.0);
        assert!(breakdown.has_line(LineKind::Cabrio));
        assert_eq!(breakdown.lines_total(), -3370.0);
    }

    #[test]
    fn test_components_total() {
        let mut breakdown = Breakdown::default();
        assert_eq!(breakdown.components_total(), 0.0);
        breakdown.components = Some(vec![
            ComponentLine {
                name: "A".to_string(),
                detail: String::new(),
                cost: 10.5,
            },
            ComponentLine {
                name: "B".to_string(),
                detail: String::new(),
                cost: 4.5,
            },
        ]);
        assert_eq!(breakdown.components_total(), 15.0);
    }
}
