//! Editing session for one product configuration.

use crate::config::PricingConfig;
use crate::error::Result;
use crate::family::{FamilyRegistry, FamilySpec};
use crate::model::{Configuration, Parapet};
use crate::pricing::{price_family, Quote};
use crate::table::PriceTables;

/// Owns one product's configuration and keeps its quote current.
///
/// Every edit goes through [`update`](Self::update) or one of the setters,
/// after which the quote is recomputed from scratch.
#[derive(Debug)]
pub struct QuoteSession<'a> {
    family: &'a FamilySpec,
    tables: &'a PriceTables,
    pricing: PricingConfig,
    config: Configuration,
    quote: Quote,
}

impl<'a> QuoteSession<'a> {
    /// Start a session with the family's default configuration.
    pub fn new(
        registry: &'a FamilyRegistry,
        tables: &'a PriceTables,
        pricing: PricingConfig,
        product_id: u32,
    ) -> Result<Self> {
        let family = registry.require(product_id)?;
        Ok(Self::with_configuration(
            family,
            tables,
            pricing,
            family.default_configuration(),
        ))
    }

    /// Start a session from an existing configuration.
    pub fn with_configuration(
        family: &'a FamilySpec,
        tables: &'a PriceTables,
        pricing: PricingConfig,
        config: Configuration,
    ) -> Self {
        let quote = price_family(family, &config, tables, &pricing);
        Self {
            family,
            tables,
            pricing,
            config,
            quote,
        }
    }

    pub fn family(&self) -> &FamilySpec {
        self.family
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The quote for the current configuration.
    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    /// Apply an edit and recompute.
    ///
    /// An edit that moves the parapet away from the beam variant drops the
    /// old-gutter flag. Any other combination is left for validation to report.
    pub fn update(&mut self, edit: impl FnOnce(&mut Configuration)) -> &Quote {
        let previous = self.config.parapet;
        edit(&mut self.config);
        let parapet = self.config.parapet;
        if parapet != previous {
            self.config.set_parapet(parapet);
        }
        self.recompute()
    }

    pub fn set_dimensions(&mut self, width: u32, projection: u32) -> &Quote {
        self.update(|config| config.set_dimensions(width, projection))
    }

    pub fn set_parapet(&mut self, parapet: Parapet) -> &Quote {
        self.update(|config| config.set_parapet(parapet))
    }

    fn recompute(&mut self) -> &Quote {
        self.quote = price_family(self.family, &self.config, self.tables, &self.pricing);
        &self.quote
    }

    /// Hand out the quote if it has no validation errors.
    pub fn save(&self) -> Result<Quote> {
        self.quote.clone().into_saveable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use crate::model::LineKind;

    fn fixtures() -> (FamilyRegistry, PriceTables) {
        (FamilyRegistry::builtin(), PriceTables::builtin())
    }

    #[test]
    fn test_new_session_prices_defaults() {
        let (registry, tables) = fixtures();
        let session = QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        assert!(session.quote().breakdown.base_price > 0.0);
        assert!(session.save().is_ok());
    }

    #[test]
    fn test_unknown_product() {
        let (registry, tables) = fixtures();
        let result = QuoteSession::new(&registry, &tables, PricingConfig::default(), 99);
        assert!(matches!(result, Err(QuoteError::UnknownProduct { id: 99 })));
    }

    #[test]
    fn test_edit_recomputes() {
        let (registry, tables) = fixtures();
        let mut session =
            QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        let quote = session.set_dimensions(300, 200);
        assert_eq!(quote.breakdown.base_price, 3170.0);

        let quote = session.update(|c| c.cover = true);
        assert!(quote.breakdown.has_line(LineKind::Cover));
    }

    #[test]
    fn test_leaving_beam_parapet_clears_old_parapet() {
        let (registry, tables) = fixtures();
        let mut session =
            QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        session.update(|c| {
            c.parapet = Parapet::Kilodokos;
            c.old_parapet = true;
        });
        assert!(session.quote().breakdown.has_line(LineKind::OldParapet));

        session.update(|c| c.parapet = Parapet::Lux);
        assert!(!session.configuration().old_parapet);
        assert!(!session.quote().breakdown.has_line(LineKind::OldParapet));
        assert!(session.save().is_ok());
    }

    #[test]
    fn test_old_parapet_without_beam_is_reported() {
        let (registry, tables) = fixtures();
        let mut session =
            QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        session.set_parapet(Parapet::Panel);
        let quote = session.update(|c| c.old_parapet = true);
        assert!(!quote.validation.errors.is_empty());
        assert!(!quote.breakdown.has_line(LineKind::OldParapet));
        assert!(session.configuration().old_parapet);
        assert!(matches!(
            session.save(),
            Err(QuoteError::ValidationFailed { .. })
        ));

        session.set_parapet(Parapet::Kilodokos);
        assert!(session.configuration().old_parapet);
        assert!(session.quote().breakdown.has_line(LineKind::OldParapet));
    }

    #[test]
    fn test_unrelated_edit_keeps_old_parapet() {
        let (registry, tables) = fixtures();
        let mut session =
            QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        session.update(|c| {
            c.parapet = Parapet::Kilodokos;
            c.old_parapet = true;
        });
        session.update(|c| c.cover = true);
        assert!(session.configuration().old_parapet);
        assert!(session.quote().breakdown.has_line(LineKind::OldParapet));
    }

    #[test]
    fn test_save_blocked_by_errors() {
        let (registry, tables) = fixtures();
        let mut session =
            QuoteSession::new(&registry, &tables, PricingConfig::default(), 18).unwrap();
        session.set_dimensions(300, 900);
        match session.save() {
            Err(QuoteError::ValidationFailed { errors }) => assert_eq!(errors.len(), 1),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }
}
