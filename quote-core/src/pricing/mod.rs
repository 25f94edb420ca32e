//! Quote computation.

mod pipeline;
mod surcharge;

pub use pipeline::{base_price, price_family, BasePrice};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Breakdown;
use crate::validation::ValidationResult;

/// A priced configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub product_id: u32,
    /// Family display name.
    pub family: String,
    pub breakdown: Breakdown,
    pub validation: ValidationResult,
}

impl Quote {
    /// Check if the quote has no validation errors.
    pub fn can_save(&self) -> bool {
        self.validation.can_save()
    }

    /// Return the quote if it may be saved, otherwise its errors.
    pub fn into_saveable(self) -> Result<Self> {
        self.validation.clone().into_result()?;
        Ok(self)
    }
}
