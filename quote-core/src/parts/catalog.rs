//! Hardware and fabric catalogs for bill-of-materials pricing.

use crate::model::AxisChoice;
use crate::table::nearest_option;

/// A part billed per piece.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPart {
    pub name: &'static str,
    pub quantity: u32,
    pub unit: &'static str,
    pub price: f64,
}

impl FixedPart {
    pub const fn new(name: &'static str, quantity: u32, unit: &'static str, price: f64) -> Self {
        Self {
            name,
            quantity,
            unit,
            price,
        }
    }

    /// Price of the whole quantity.
    pub fn cost(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// How the billable length of a linear part is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBasis {
    /// The product width.
    Width,
    /// The product width minus an offset, never below zero.
    WidthLess { offset_cm: u32 },
    /// Two side guides, each the height minus a deduction.
    SideGuides { deduction_cm: u32 },
}

/// A part billed per linear metre.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPart {
    pub name: &'static str,
    pub price_per_meter: f64,
    /// Minimum billable length.
    pub min_meters: f64,
    pub basis: LengthBasis,
}

/// One pair of folding arms for a given projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmSet {
    pub projection: u32,
    /// Price of the pair.
    pub price: f64,
    /// Width of one folded arm in cm.
    pub folded_width: u32,
}

/// Selectable roller axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOption {
    pub choice: AxisChoice,
    pub name: &'static str,
    pub price_per_meter: f64,
}

/// Selectable crank for manual operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CrankOption {
    pub length: u32,
    pub name: &'static str,
    pub price: f64,
}

/// A fabric sold at wholesale price per m².
#[derive(Debug, Clone, PartialEq)]
pub struct Fabric {
    pub id: u32,
    pub name: &'static str,
    pub company: &'static str,
    pub wholesale_price: f64,
}

/// How fabric is priced.
#[derive(Debug, Clone, PartialEq)]
pub enum FabricPricing {
    /// One fabric at a fixed retail price.
    Fixed {
        name: &'static str,
        price_per_sqm: f64,
    },
    /// Customer picks a fabric; retail = wholesale x markup.
    Catalog {
        fabrics: Vec<Fabric>,
        retail_markup: f64,
    },
}

/// Seam and hem allowance added to each side before computing m².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FabricArea {
    pub width_margin_cm: u32,
    pub height_margin_cm: u32,
}

impl FabricArea {
    /// Fabric area in m² for a width and height (or projection) in cm.
    pub fn square_meters(&self, width: u32, height: u32) -> f64 {
        let w = (f64::from(width) + f64::from(self.width_margin_cm)) / 100.0;
        let h = (f64::from(height) + f64::from(self.height_margin_cm)) / 100.0;
        w * h
    }
}

/// Everything needed to price a product from its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct PartsCatalog {
    /// Parts that do not depend on the size.
    pub fixed: Vec<FixedPart>,
    pub linear: Vec<LinearPart>,
    /// Mechanism when motorized.
    pub motor_kit: Vec<FixedPart>,
    /// Mechanism when operated by hand.
    pub manual_kit: Vec<FixedPart>,
    pub arms: Vec<ArmSet>,
    pub axes: Vec<AxisOption>,
    /// Cranks; only billed for manual operation.
    pub cranks: Vec<CrankOption>,
    pub fabric: FabricPricing,
    pub fabric_area: FabricArea,
}

impl PartsCatalog {
    /// Arm pair whose projection is closest to the requested one.
    pub fn arm_for(&self, projection: u32) -> Option<&ArmSet> {
        let projections: Vec<u32> = self.arms.iter().map(|a| a.projection).collect();
        if projections.is_empty() {
            return None;
        }
        let nearest = nearest_option(&projections, projection);
        self.arms.iter().find(|a| a.projection == nearest)
    }

    pub fn axis(&self, choice: AxisChoice) -> Option<&AxisOption> {
        self.axes.iter().find(|a| a.choice == choice)
    }

    pub fn crank(&self, length: u32) -> Option<&CrankOption> {
        self.cranks.iter().find(|c| c.length == length)
    }

    /// Parts of the cassette 530 awning.
    pub fn cassette_530() -> Self {
        Self {
            fixed: vec![
                FixedPart::new("Cassette 530 end caps", 1, "set", 38.0),
                FixedPart::new("Wall brackets", 3, "pcs", 14.5),
                FixedPart::new("Screws and anchors", 1, "set", 9.0),
            ],
            linear: vec![LinearPart {
                name: "Cassette 530 profile set",
                price_per_meter: 32.0,
                min_meters: 4.0,
                basis: LengthBasis::Width,
            }],
            motor_kit: vec![FixedPart::new("Somfy motor kit", 1, "pcs", 310.0)],
            manual_kit: vec![FixedPart::new("Gearbox 1:9", 1, "pcs", 48.0)],
            arms: vec![
                ArmSet {
                    projection: 150,
                    price: 180.0,
                    folded_width: 95,
                },
                ArmSet {
                    projection: 200,
                    price: 210.0,
                    folded_width: 120,
                },
                ArmSet {
                    projection: 250,
                    price: 245.0,
                    folded_width: 145,
                },
                ArmSet {
                    projection: 300,
                    price: 280.0,
                    folded_width: 170,
                },
            ],
            axes: vec![
                AxisOption {
                    choice: AxisChoice::Standard,
                    name: "Axis Φ70",
                    price_per_meter: 7.5,
                },
                AxisOption {
                    choice: AxisChoice::Reinforced,
                    name: "Axis Φ78",
                    price_per_meter: 9.8,
                },
            ],
            cranks: vec![
                CrankOption {
                    length: 150,
                    name: "Crank 150cm",
                    price: 12.0,
                },
                CrankOption {
                    length: 180,
                    name: "Crank 180cm",
                    price: 14.0,
                },
                CrankOption {
                    length: 220,
                    name: "Crank 220cm",
                    price: 17.0,
                },
            ],
            fabric: FabricPricing::Catalog {
                fabrics: vec![
                    Fabric {
                        id: 201,
                        name: "Para Acrylic",
                        company: "Para",
                        wholesale_price: 9.5,
                    },
                    Fabric {
                        id: 202,
                        name: "Sattler Acrylic",
                        company: "Sattler",
                        wholesale_price: 8.8,
                    },
                    Fabric {
                        id: 203,
                        name: "Dickson Orchestra",
                        company: "Dickson",
                        wholesale_price: 10.2,
                    },
                ],
                retail_markup: 2.0,
            },
            fabric_area: FabricArea {
                width_margin_cm: 0,
                height_margin_cm: 30,
            },
        }
    }

    /// Parts of the zip screen.
    pub fn zip_screen() -> Self {
        Self {
            fixed: vec![
                FixedPart::new("Cassette end caps", 1, "set", 18.0),
                FixedPart::new("Guide brackets", 4, "pcs", 3.2),
                FixedPart::new("Bottom bar end caps", 2, "pcs", 4.5),
            ],
            linear: vec![
                LinearPart {
                    name: "Square cassette",
                    price_per_meter: 24.0,
                    min_meters: 1.0,
                    basis: LengthBasis::Width,
                },
                LinearPart {
                    name: "Axis Φ45",
                    price_per_meter: 6.5,
                    min_meters: 1.0,
                    basis: LengthBasis::Width,
                },
                LinearPart {
                    name: "Zip guide",
                    price_per_meter: 11.0,
                    min_meters: 2.0,
                    basis: LengthBasis::SideGuides { deduction_cm: 11 },
                },
                LinearPart {
                    name: "Hard plastic zip",
                    price_per_meter: 2.4,
                    min_meters: 2.0,
                    basis: LengthBasis::SideGuides { deduction_cm: 11 },
                },
                LinearPart {
                    name: "Counterweight bar",
                    price_per_meter: 8.0,
                    min_meters: 1.0,
                    basis: LengthBasis::Width,
                },
                LinearPart {
                    name: "Weight rod",
                    price_per_meter: 1.8,
                    min_meters: 0.0,
                    basis: LengthBasis::WidthLess { offset_cm: 20 },
                },
            ],
            motor_kit: vec![
                FixedPart::new("Somfy RTS motor", 1, "pcs", 245.0),
                FixedPart::new("Motor adapter set", 1, "set", 22.0),
            ],
            manual_kit: vec![
                FixedPart::new("Crank gear 1:5", 1, "pcs", 38.0),
                FixedPart::new("Crank 180cm", 1, "pcs", 14.0),
            ],
            arms: Vec::new(),
            axes: Vec::new(),
            cranks: Vec::new(),
            fabric: FabricPricing::Fixed {
                name: "Vertical screen fabric",
                price_per_sqm: 22.0,
            },
            fabric_area: FabricArea {
                width_margin_cm: 10,
                height_margin_cm: 20,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabric_area() {
        let area = FabricArea {
            width_margin_cm: 10,
            height_margin_cm: 20,
        };
        assert!((area.square_meters(200, 180) - 2.1 * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_arm_for_nearest_projection() {
        let catalog = PartsCatalog::cassette_530();
        assert_eq!(catalog.arm_for(180).unwrap().projection, 200);
        assert_eq!(catalog.arm_for(300).unwrap().projection, 300);
        assert_eq!(catalog.arm_for(175).unwrap().projection, 150);
        assert!(PartsCatalog::zip_screen().arm_for(200).is_none());
    }

    #[test]
    fn test_fixed_part_cost() {
        assert_eq!(FixedPart::new("Bracket", 3, "pcs", 14.5).cost(), 43.5);
    }
}
