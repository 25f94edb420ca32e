//! Pricing families and their registry.

mod builtin;
mod rules;

pub use rules::{
    BaseLookup, Category, ColorSurcharge, ColumnProfileRule, Constraint, FamilySpec,
    OldParapetFee, ParapetPricing, ParapetRule, ParapetWidth, SurchargeRule, ToneFees,
};

use crate::error::{QuoteError, Result};

/// Product id to family lookup.
#[derive(Debug, Clone)]
pub struct FamilyRegistry {
    families: Vec<FamilySpec>,
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FamilyRegistry {
    /// Registry with every family the configurator sells.
    pub fn builtin() -> Self {
        Self::from_families(builtin::families())
    }

    /// Registry from an explicit list. Later entries replace earlier ones with the same id.
    pub fn from_families(families: Vec<FamilySpec>) -> Self {
        let mut registry = Self {
            families: Vec::with_capacity(families.len()),
        };
        for family in families {
            registry.register(family);
        }
        registry
    }

    /// Add or replace a family, keeping ids sorted.
    pub fn register(&mut self, family: FamilySpec) {
        match self.families.binary_search_by_key(&family.id, |f| f.id) {
            Ok(index) => self.families[index] = family,
            Err(index) => self.families.insert(index, family),
        }
    }

    pub fn get(&self, id: u32) -> Option<&FamilySpec> {
        self.families
            .binary_search_by_key(&id, |f| f.id)
            .ok()
            .map(|index| &self.families[index])
    }

    /// Like [`get`](Self::get) but fails with [`QuoteError::UnknownProduct`].
    pub fn require(&self, id: u32) -> Result<&FamilySpec> {
        self.get(id).ok_or(QuoteError::UnknownProduct { id })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FamilySpec> {
        self.families.iter()
    }

    /// Families taking part in the alternative-match search.
    pub fn comparable(&self) -> impl Iterator<Item = &FamilySpec> {
        self.families.iter().filter(|f| f.is_comparable())
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
