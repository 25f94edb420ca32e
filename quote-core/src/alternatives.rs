//! Cross-family comparison of pergolas at the same size.

use serde::{Deserialize, Serialize};

use crate::config::UNPRICEABLE;
use crate::family::FamilyRegistry;
use crate::model::RoundedDimensions;
use crate::pricing::base_price;
use crate::table::PriceTables;

/// A pergola family that prices the requested size exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeMatch {
    pub product_id: u32,
    pub product_name: String,
    pub base_price: f64,
    pub rounded_dimensions: RoundedDimensions,
    /// Always true; only exact grid matches are returned.
    pub exact_match: bool,
}

/// Base price of one product at a size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensions {
    pub product_id: u32,
    pub product_name: String,
    pub base_price: f64,
    pub rounded_dimensions: RoundedDimensions,
}

/// Extent of a product's base table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRange {
    pub product_name: String,
    pub min_projection: u32,
    pub max_projection: u32,
    pub min_width: u32,
    pub max_width: u32,
}

/// Find other pergolas whose grid contains exactly `width` x `projection`.
///
/// Families whose rounding would move either dimension are skipped, as are
/// families with no price at that cell. Results are sorted by base price,
/// then by product id.
pub fn find_matching_pergolas(
    registry: &FamilyRegistry,
    tables: &PriceTables,
    width: u32,
    projection: u32,
    exclude: Option<u32>,
) -> Vec<AlternativeMatch> {
    let mut matches: Vec<AlternativeMatch> = registry
        .comparable()
        .filter(|family| Some(family.id) != exclude)
        .filter_map(|family| {
            let base = base_price(family, tables, width, projection);
            let exact = base.rounded.width == width && base.rounded.projection == projection;
            if !exact || base.price <= UNPRICEABLE {
                return None;
            }
            Some(AlternativeMatch {
                product_id: family.id,
                product_name: family.name.to_string(),
                base_price: base.price,
                rounded_dimensions: base.rounded,
                exact_match: true,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        a.base_price
            .total_cmp(&b.base_price)
            .then(a.product_id.cmp(&b.product_id))
    });

    tracing::debug!(
        "{} alternatives for {}x{} (excluding {:?})",
        matches.len(),
        width,
        projection,
        exclude
    );
    matches
}

/// Base price of a comparable product at a size.
///
/// `None` when the product is not a comparable family or the size is unpriceable.
pub fn check_product_dimensions(
    registry: &FamilyRegistry,
    tables: &PriceTables,
    product_id: u32,
    width: u32,
    projection: u32,
) -> Option<ProductDimensions> {
    let family = registry.get(product_id).filter(|f| f.is_comparable())?;
    let base = base_price(family, tables, width, projection);
    if base.price <= UNPRICEABLE {
        return None;
    }
    Some(ProductDimensions {
        product_id,
        product_name: family.name.to_string(),
        base_price: base.price,
        rounded_dimensions: base.rounded,
    })
}

/// Minimum and maximum projection and width over a product's base table.
pub fn product_dimension_range(
    registry: &FamilyRegistry,
    tables: &PriceTables,
    product_id: u32,
) -> Option<ProductRange> {
    let family = registry.get(product_id)?;
    let table = tables.grid(family.base.table())?;
    let widths = table.all_widths();

    Some(ProductRange {
        product_name: family.name.to_string(),
        min_projection: table.min_outer()?,
        max_projection: table.max_outer()?,
        min_width: widths.first().copied()?,
        max_width: widths.last().copied()?,
    })
}
