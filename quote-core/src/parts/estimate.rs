//! Bill-of-materials estimator.

use super::catalog::{FabricPricing, FixedPart, LengthBasis, LinearPart, PartsCatalog};
use crate::config::dims::cm_to_m;
use crate::config::money::round_cents;
use crate::model::{ComponentLine, Configuration};
use crate::validation::ValidationResult;

/// Result of pricing a configuration from its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct PartsEstimate {
    pub components: Vec<ComponentLine>,
    /// Sum of every component cost.
    pub total: f64,
    pub validation: ValidationResult,
}

/// Price a configuration as a list of components.
///
/// Order: fixed parts, linear parts, mechanism, arms, axis, crank, fabric.
/// A missing fabric, axis or crank selection is reported as an error and
/// left out of the list.
pub fn estimate_parts(catalog: &PartsCatalog, config: &Configuration) -> PartsEstimate {
    let mut components = Vec::new();
    let mut validation = ValidationResult::ok();

    for part in &catalog.fixed {
        components.push(fixed_line(part));
    }

    for part in &catalog.linear {
        components.push(linear_line(part, config));
    }

    let mechanism = if config.motorized {
        &catalog.motor_kit
    } else {
        &catalog.manual_kit
    };
    for part in mechanism {
        components.push(fixed_line(part));
    }

    if let Some(arm) = catalog.arm_for(config.projection) {
        components.push(ComponentLine {
            name: format!("Arms {}cm", arm.projection),
            detail: format!("1 pair, folded {}cm", arm.folded_width),
            cost: round_cents(arm.price),
        });
    }

    if !catalog.axes.is_empty() {
        match catalog.axis(config.axis) {
            Some(axis) => {
                let meters = cm_to_m(config.width);
                components.push(ComponentLine {
                    name: axis.name.to_string(),
                    detail: format!("{:.2}m x {:.2}€/m", meters, axis.price_per_meter),
                    cost: round_cents(meters * axis.price_per_meter),
                });
            }
            None => validation.add_error("Selected axis is not available for this product"),
        }
    }

    if !config.motorized && !catalog.cranks.is_empty() {
        match catalog.crank(config.crank_length) {
            Some(crank) => components.push(ComponentLine {
                name: crank.name.to_string(),
                detail: "1 pcs".to_string(),
                cost: round_cents(crank.price),
            }),
            None => validation.add_error(format!(
                "Crank length {}cm is not available",
                config.crank_length
            )),
        }
    }

    let area = catalog
        .fabric_area
        .square_meters(config.width, config.projection);
    match &catalog.fabric {
        FabricPricing::Fixed {
            name,
            price_per_sqm,
        } => components.push(fabric_line(name, area, *price_per_sqm)),
        FabricPricing::Catalog {
            fabrics,
            retail_markup,
        } => match fabrics.iter().find(|f| f.id == config.fabric_id) {
            Some(fabric) => components.push(fabric_line(
                &format!("{} ({})", fabric.name, fabric.company),
                area,
                fabric.wholesale_price * retail_markup,
            )),
            None => validation.add_error(format!("Fabric {} is not available", config.fabric_id)),
        },
    }

    let total = round_cents(components.iter().map(|c| c.cost).sum());
    tracing::debug!(
        "Parts estimate: {} components, total {:.2}",
        components.len(),
        total
    );

    PartsEstimate {
        components,
        total,
        validation,
    }
}

/// Folded arms need twice their folded width to fit inside the cassette.
pub fn check_arm_clearance(catalog: &PartsCatalog, config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if let Some(arm) = catalog.arm_for(config.projection) {
        let required = arm.folded_width * 2;
        if config.width < required {
            result.add_error(format!(
                "Width must be at least {}cm for {}cm arms",
                required, arm.projection
            ));
        }
    }
    result
}

fn fixed_line(part: &FixedPart) -> ComponentLine {
    ComponentLine {
        name: part.name.to_string(),
        detail: format!("{} {} x {:.2}€", part.quantity, part.unit, part.price),
        cost: round_cents(part.cost()),
    }
}

fn linear_line(part: &LinearPart, config: &Configuration) -> ComponentLine {
    let measured = match part.basis {
        LengthBasis::Width => cm_to_m(config.width),
        LengthBasis::WidthLess { offset_cm } => cm_to_m(config.width.saturating_sub(offset_cm)),
        LengthBasis::SideGuides { deduction_cm } => {
            cm_to_m(config.projection.saturating_sub(deduction_cm)) * 2.0
        }
    };
    let meters = measured.max(part.min_meters);

    ComponentLine {
        name: part.name.to_string(),
        detail: format!("{:.2}m x {:.2}€/m", meters, part.price_per_meter),
        cost: round_cents(meters * part.price_per_meter),
    }
}

fn fabric_line(name: &str, area: f64, price_per_sqm: f64) -> ComponentLine {
    ComponentLine {
        name: name.to_string(),
        detail: format!("{:.2}m² x {:.2}€/m²", area, price_per_sqm),
        cost: round_cents(area * price_per_sqm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::money::approx_eq;

    #[test]
    fn test_zip_screen_motorized() {
        let catalog = PartsCatalog::zip_screen();
        let config = Configuration {
            width: 300,
            projection: 250,
            motorized: true,
            ..Default::default()
        };
        let estimate = estimate_parts(&catalog, &config);
        assert!(estimate.validation.can_save());

        // 3 fixed + 6 linear + 2 motor + fabric
        assert_eq!(estimate.components.len(), 12);
        assert_eq!(estimate.components[10].name, "Motor adapter set");

        // Guides: (250 - 11) / 100 * 2 = 4.78m
        let guide = &estimate.components[5];
        assert_eq!(guide.name, "Zip guide");
        assert!(approx_eq(guide.cost, 52.58));

        // Weight rod: 3.00 - 0.20 = 2.80m
        assert!(approx_eq(estimate.components[8].cost, 5.04));

        // Fabric: 3.10 x 2.70 = 8.37m2
        let fabric = estimate.components.last().unwrap();
        assert!(approx_eq(fabric.cost, 184.14));

        let sum: f64 = estimate.components.iter().map(|c| c.cost).sum();
        assert!(approx_eq(estimate.total, sum));
    }

    #[test]
    fn test_minimum_length_applies() {
        let catalog = PartsCatalog::zip_screen();
        let config = Configuration::new(15, 60);
        let estimate = estimate_parts(&catalog, &config);

        // Cassette billed at 1m minimum
        assert!(approx_eq(estimate.components[3].cost, 24.0));
        // Guides billed at 2m minimum
        assert!(approx_eq(estimate.components[5].cost, 22.0));
        // Rod cannot go negative
        assert!(approx_eq(estimate.components[8].cost, 0.0));
    }

    #[test]
    fn test_cassette_manual_includes_crank() {
        let catalog = PartsCatalog::cassette_530();
        let config = Configuration {
            width: 400,
            projection: 250,
            ..Default::default()
        };
        let estimate = estimate_parts(&catalog, &config);
        assert!(estimate.validation.can_save());
        assert!(estimate.components.iter().any(|c| c.name == "Crank 180cm"));
        assert!(estimate.components.iter().any(|c| c.name == "Gearbox 1:9"));
        assert!(estimate.components.iter().any(|c| c.name == "Arms 250cm"));

        // Para acrylic at 9.50 x 2 on 4.00 x 2.80
        let fabric = estimate.components.last().unwrap();
        assert_eq!(fabric.name, "Para Acrylic (Para)");
        assert!(approx_eq(fabric.cost, 212.8));
    }

    #[test]
    fn test_cassette_motorized_skips_crank() {
        let catalog = PartsCatalog::cassette_530();
        let config = Configuration {
            width: 400,
            projection: 250,
            motorized: true,
            ..Default::default()
        };
        let estimate = estimate_parts(&catalog, &config);
        assert!(!estimate.components.iter().any(|c| c.name.starts_with("Crank")));
        assert!(estimate.components.iter().any(|c| c.name == "Somfy motor kit"));
    }

    #[test]
    fn test_unknown_fabric_and_crank_are_errors() {
        let catalog = PartsCatalog::cassette_530();
        let config = Configuration {
            width: 400,
            projection: 250,
            fabric_id: 999,
            crank_length: 100,
            ..Default::default()
        };
        let estimate = estimate_parts(&catalog, &config);
        assert_eq!(estimate.validation.errors.len(), 2);
        assert!(!estimate.validation.can_save());
    }

    #[test]
    fn test_arm_clearance() {
        let catalog = PartsCatalog::cassette_530();
        // 250cm arms fold to 145cm each
        assert!(!check_arm_clearance(&catalog, &Configuration::new(280, 250)).passed);
        assert!(check_arm_clearance(&catalog, &Configuration::new(290, 250)).passed);
        assert!(check_arm_clearance(&PartsCatalog::zip_screen(), &Configuration::new(10, 250)).passed);
    }
}
