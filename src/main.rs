//! pergola-quote - CLI tool to price pergolas, awnings and vertical screens.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use quote_core::{
    find_matching_pergolas, product_dimension_range, quote_with, render_quote, Catalog,
    Configuration, FamilyRegistry, PriceTables, PricingConfig, StaticCatalog,
};

/// Price pergola, awning and vertical screen configurations.
#[derive(Parser, Debug)]
#[command(name = "pergola-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Price tables JSON file (defaults to the built-in price list)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// VAT rate as a fraction
    #[arg(long, global = true)]
    vat: Option<f64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List priceable families
    Families,

    /// Price one configuration
    Quote {
        /// Product id
        #[arg(short, long)]
        product: u32,

        /// Configuration JSON file (defaults to the family's defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Width in cm
        #[arg(short, long)]
        width: Option<u32>,

        /// Projection (or height) in cm
        #[arg(long)]
        projection: Option<u32>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,

        /// Fail when the quote has validation errors
        #[arg(long)]
        save: bool,
    },

    /// List other pergolas available at exactly this size
    Alternatives {
        /// Width in cm
        #[arg(short, long)]
        width: u32,

        /// Projection in cm
        #[arg(long)]
        projection: u32,

        /// Product id to leave out
        #[arg(short = 'x', long)]
        exclude: Option<u32>,
    },

    /// Show the size range of a product's price table
    Range {
        /// Product id
        #[arg(short, long)]
        product: u32,
    },

    /// Write the active price tables as JSON
    ExportTables {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let tables = load_tables(args.tables.as_deref())?;
    let pricing = pricing_config(args.vat)?;
    let registry = FamilyRegistry::builtin();
    let catalog = StaticCatalog::builtin();

    match args.command {
        Command::Families => {
            for family in registry.iter() {
                let display = catalog
                    .product(family.id)
                    .map(|p| p.name.as_str())
                    .unwrap_or(family.name);
                println!(
                    "{:>3}  {:<20} {:<16} {}",
                    family.id, family.name, family.category, display
                );
            }
        }

        Command::Quote {
            product,
            config,
            width,
            projection,
            json,
            save,
        } => {
            let family = registry.require(product)?;
            let mut configuration = match &config {
                Some(path) => load_configuration(path)?,
                None => family.default_configuration(),
            };
            if let Some(width) = width {
                configuration.width = width;
            }
            if let Some(projection) = projection {
                configuration.projection = projection;
            }

            let quote = quote_with(&registry, &tables, &pricing, product, &configuration)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                let name = catalog
                    .product(product)
                    .map(|p| p.name.as_str())
                    .unwrap_or(family.name);
                print!("{}", render_quote(&quote, name));
            }

            if save {
                for err in &quote.validation.errors {
                    error!("{}", err);
                }
                let saved = quote
                    .into_saveable()
                    .with_context(|| format!("Quote for product {} was not saved", product))?;
                info!(
                    "Quote for {} saved: {:.2}€",
                    saved.family, saved.breakdown.total
                );
            }
        }

        Command::Alternatives {
            width,
            projection,
            exclude,
        } => {
            let matches = find_matching_pergolas(&registry, &tables, width, projection, exclude);
            if matches.is_empty() {
                info!("No other pergola is available at {}x{}", width, projection);
            }
            for found in matches {
                println!(
                    "{:>3}  {:<20} {:>10.2}€",
                    found.product_id, found.product_name, found.base_price
                );
            }
        }

        Command::Range { product } => {
            let range = product_dimension_range(&registry, &tables, product)
                .with_context(|| format!("No price table for product {}", product))?;
            println!("{}", range.product_name);
            println!(
                "  projection: {}-{}cm",
                range.min_projection, range.max_projection
            );
            println!("  width:      {}-{}cm", range.min_width, range.max_width);
            if let Some(stated) = registry.get(product).and_then(|f| f.stated_range()) {
                println!(
                    "  accepted:   {}-{}cm x {}-{}cm",
                    stated.min_width, stated.max_width, stated.min_projection, stated.max_projection
                );
            }
        }

        Command::ExportTables { output } => {
            let json = tables.to_json_string()?;
            std::fs::write(&output, json)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!("Exported: {}", output.display());
        }
    }

    Ok(())
}

fn load_tables(path: Option<&Path>) -> Result<PriceTables> {
    match path {
        Some(path) => {
            let tables = PriceTables::load(path)
                .with_context(|| format!("Failed to load price tables from {}", path.display()))?;
            info!("Using price tables from {}", path.display());
            Ok(tables)
        }
        None => Ok(PriceTables::builtin()),
    }
}

fn pricing_config(vat: Option<f64>) -> Result<PricingConfig> {
    match vat {
        Some(rate) if !(0.0..1.0).contains(&rate) => {
            anyhow::bail!("VAT rate {} must be a fraction between 0 and 1", rate)
        }
        Some(rate) => {
            if rate != quote_core::config::DEFAULT_VAT_RATE {
                warn!("Using non-standard VAT rate {}", rate);
            }
            Ok(PricingConfig::with_vat_rate(rate))
        }
        None => Ok(PricingConfig::default()),
    }
}

fn load_configuration(path: &Path) -> Result<Configuration> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
