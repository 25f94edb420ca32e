//! The pricing pass shared by every family.

use tracing::debug;

use super::surcharge::{apply_rule, LineContext, LineSink};
use super::Quote;
use crate::config::money::round_cents;
use crate::config::{PricingConfig, UNPRICEABLE};
use crate::family::{BaseLookup, Constraint, FamilySpec};
use crate::model::{Breakdown, Configuration, RoundedDimensions};
use crate::parts::{check_arm_clearance, estimate_parts};
use crate::table::{
    get_price_from_table, round_up_to_next_available_projection,
    round_up_to_next_available_width, snap_to_nearest, PriceTables,
};
use crate::validation::{
    out_of_range_message, validate_color, validate_column_height, validate_dimension_range,
    ValidationResult,
};

/// Base price and the grid cell it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePrice {
    pub price: f64,
    pub rounded: RoundedDimensions,
}

/// Read the base price of a family for a width and outer dimension.
///
/// Round-up families report the rounded cell even when the lookup fails;
/// nearest-snap families report the snapped cell. A missing table prices as zero.
pub fn base_price(family: &FamilySpec, tables: &PriceTables, width: u32, outer: u32) -> BasePrice {
    let Some(table) = tables.grid(family.base.table()) else {
        return BasePrice {
            price: UNPRICEABLE,
            rounded: RoundedDimensions {
                width,
                projection: outer,
            },
        };
    };

    match family.base {
        BaseLookup::RoundUp(_) => BasePrice {
            price: get_price_from_table(table, outer, width),
            rounded: RoundedDimensions {
                width: round_up_to_next_available_width(table, outer, width),
                projection: round_up_to_next_available_projection(table, outer),
            },
        },
        BaseLookup::Nearest(_) => {
            let (snapped_outer, snapped_width) = snap_to_nearest(table, outer, width);
            BasePrice {
                price: get_price_from_table(table, snapped_outer, snapped_width),
                rounded: RoundedDimensions {
                    width: snapped_width,
                    projection: snapped_outer,
                },
            }
        }
    }
}

fn check_constraints(family: &FamilySpec, config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult::ok();
    for constraint in &family.constraints {
        match constraint {
            Constraint::Range(range) => {
                result.merge(validate_dimension_range(config, range, family.outer_axis))
            }
            Constraint::ColumnHeight { always } => {
                result.merge(validate_column_height(config, *always))
            }
            Constraint::ArmClearance => {
                if let Some(catalog) = &family.parts {
                    result.merge(check_arm_clearance(catalog, config));
                }
            }
        }
    }
    result.merge(validate_color(config));
    result
}

/// Price one configuration of one family.
///
/// Never fails: problems are reported in the quote's validation result and
/// the breakdown is always filled in.
pub fn price_family(
    family: &FamilySpec,
    config: &Configuration,
    tables: &PriceTables,
    pricing: &PricingConfig,
) -> Quote {
    let mut validation = check_constraints(family, config);
    let mut breakdown = Breakdown::default();

    match (&family.parts, config.parts_mode) {
        (Some(catalog), true) => {
            let estimate = estimate_parts(catalog, config);
            validation.merge(estimate.validation);
            breakdown.subtotal = estimate.total;
            breakdown.components = Some(estimate.components);
        }
        _ => {
            let base = base_price(family, tables, config.width, config.projection);
            if base.price == UNPRICEABLE {
                let (width, outer) = match family.base {
                    BaseLookup::RoundUp(_) => (config.width, config.projection),
                    BaseLookup::Nearest(_) => (base.rounded.width, base.rounded.projection),
                };
                validation.add_error(out_of_range_message(width, outer));
            } else if matches!(family.base, BaseLookup::Nearest(_))
                && (base.rounded.width, base.rounded.projection)
                    != (config.width, config.projection)
            {
                validation.add_warning(format!(
                    "Priced at the nearest available size {}cm x {}cm",
                    base.rounded.width, base.rounded.projection
                ));
            }
            breakdown.base_price = base.price;
            breakdown.rounded = Some(base.rounded);

            let ctx = LineContext {
                config,
                tables,
                base_table: family.base.table(),
            };
            let mut sink = LineSink::new();
            for rule in &family.surcharges {
                apply_rule(rule, &ctx, &mut sink);
            }
            validation.merge(sink.validation);
            breakdown.lines = sink.lines;
            breakdown.subtotal = round_cents(breakdown.base_price + breakdown.lines_total());
        }
    }

    if breakdown.subtotal < 0.0 {
        validation.add_warning("Discounts exceed the base price");
    }

    breakdown.color_surcharge = family.color.amount(breakdown.subtotal, config.custom_color);
    breakdown.subtotal_without_vat = round_cents(breakdown.subtotal + breakdown.color_surcharge);
    breakdown.vat = round_cents(breakdown.subtotal_without_vat * pricing.vat_rate);
    breakdown.total = round_cents(breakdown.subtotal_without_vat + breakdown.vat);

    debug!(
        "Priced {} ({}x{}): subtotal {:.2}, total {:.2}, {} errors",
        family.name,
        config.width,
        config.projection,
        breakdown.subtotal,
        breakdown.total,
        validation.errors.len()
    );

    Quote {
        product_id: family.id,
        family: family.name.to_string(),
        breakdown,
        validation,
    }
}
