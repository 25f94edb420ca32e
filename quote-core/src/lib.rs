//! quote-core - Pricing engine for pergolas, awnings and vertical screens.
//!
//! This library turns a customer [`Configuration`] into an itemised price
//! [`Breakdown`] using per-family rules over a set of price tables. It also
//! finds alternative pergolas at the same size and estimates bills of
//! materials for products sold by parts.
//!
//! # Example
//!
//! ```no_run
//! use quote_core::{quote, render_quote, Configuration};
//!
//! let config = Configuration::new(300, 200);
//! let quote = quote(18, &config).unwrap();
//! println!("{}", render_quote(&quote, "Pergola Pro 100"));
//! ```

pub mod alternatives;
pub mod catalog;
pub mod config;
pub mod error;
pub mod family;
pub mod model;
pub mod parts;
pub mod pricing;
pub mod report;
pub mod session;
pub mod table;
pub mod validation;

// Re-exports for convenience
pub use alternatives::{
    check_product_dimensions, find_matching_pergolas, product_dimension_range, AlternativeMatch,
    ProductDimensions, ProductRange,
};
pub use catalog::{Catalog, CatalogCategory, CatalogEntry, StaticCatalog};
pub use config::PricingConfig;
pub use error::{ErrorCode, QuoteError, Result};
pub use family::{FamilyRegistry, FamilySpec};
pub use model::{Breakdown, Configuration, LineItem, LineKind, RoundedDimensions};
pub use pricing::{price_family, Quote};
pub use report::render_quote;
pub use session::QuoteSession;
pub use table::{PriceTable, PriceTables, TableId};
pub use validation::ValidationResult;

/// Price a configuration against the built-in families and tables.
///
/// This is the main high-level entry point:
/// 1. Look up the product's family
/// 2. Validate the configuration
/// 3. Compute the breakdown
///
/// Validation errors do not fail the call; they are logged and returned in
/// the quote. Only an unknown product id is an error.
pub fn quote(product_id: u32, config: &Configuration) -> Result<Quote> {
    let registry = FamilyRegistry::builtin();
    let tables = PriceTables::builtin();
    quote_with(&registry, &tables, &PricingConfig::default(), product_id, config)
}

/// Price a configuration against explicit families, tables and settings.
pub fn quote_with(
    registry: &FamilyRegistry,
    tables: &PriceTables,
    pricing: &PricingConfig,
    product_id: u32,
    config: &Configuration,
) -> Result<Quote> {
    let family = registry.require(product_id)?;
    let quote = price_family(family, config, tables, pricing);

    if !quote.can_save() {
        for error in &quote.validation.errors {
            tracing::warn!("{}: {}", family.name, error);
        }
    }

    Ok(quote)
}
