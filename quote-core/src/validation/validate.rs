//! Validation of configurations against family constraints.

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};
use crate::model::{Configuration, Parapet};

/// Validation result with warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages. Any error blocks saving.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Check if the quote may be saved.
    pub fn can_save(&self) -> bool {
        self.passed && self.errors.is_empty()
    }

    /// Turn errors into a [`QuoteError::ValidationFailed`].
    pub fn into_result(self) -> Result<()> {
        if self.can_save() {
            Ok(())
        } else {
            Err(QuoteError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

/// Allowed input range of a family, in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_projection: u32,
    pub max_projection: u32,
}

impl DimensionRange {
    pub const fn new(min_width: u32, max_width: u32, min_projection: u32, max_projection: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_projection,
            max_projection,
        }
    }

    /// Check if both dimensions lie inside the range.
    pub fn contains(&self, width: u32, projection: u32) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_projection..=self.max_projection).contains(&projection)
    }
}

/// Label used for the outer dimension in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OuterAxis {
    Projection,
    Height,
}

impl std::fmt::Display for OuterAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OuterAxis::Projection => write!(f, "Projection"),
            OuterAxis::Height => write!(f, "Height"),
        }
    }
}

/// Check width and outer dimension against a family's stated range.
pub fn validate_dimension_range(
    config: &Configuration,
    range: &DimensionRange,
    axis: OuterAxis,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if config.width < range.min_width || config.width > range.max_width {
        result.add_error(format!(
            "Width must be between {}-{}cm",
            range.min_width, range.max_width
        ));
    }
    if config.projection < range.min_projection || config.projection > range.max_projection {
        result.add_error(format!(
            "{} must be between {}-{}cm",
            axis, range.min_projection, range.max_projection
        ));
    }

    result
}

/// Error text for a zero base price.
pub fn out_of_range_message(width: u32, projection: u32) -> String {
    format!(
        "Dimensions {}cm x {}cm are outside the available range",
        width, projection
    )
}

/// Column height is mandatory when columns are installed.
pub fn validate_column_height(config: &Configuration, always_required: bool) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let columns_present = always_required || config.column_count > 0;
    if columns_present && config.column_height == 0 {
        result.add_error(if always_required {
            "Column height is required for this product"
        } else {
            "Column height is required when columns are selected"
        });
    }

    result
}

/// The old-gutter flag is only legal with the beam parapet.
pub fn validate_old_parapet(config: &Configuration) -> ValidationResult {
    if config.old_parapet && config.parapet != Parapet::Kilodokos {
        ValidationResult::error("\"Old parapet\" can only be selected with the 80x80 beam parapet")
    } else {
        ValidationResult::ok()
    }
}

/// A custom colour needs a colour code to be manufactured.
pub fn validate_color(config: &Configuration) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if config.custom_color && config.custom_color_code.trim().is_empty() {
        result.add_warning("Custom colour selected without a RAL code");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_ok() {
        let result = ValidationResult::ok();
        assert!(result.passed);
        assert!(result.can_save());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validation_result_add_warning_keeps_passing() {
        let mut result = ValidationResult::ok();
        result.add_warning("This is a warning");
        assert!(result.can_save());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 2);
        assert_eq!(result1.errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        match ValidationResult::error("bad").into_result() {
            Err(QuoteError::ValidationFailed { errors }) => assert_eq!(errors, vec!["bad"]),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    // ==================== rule tests ====================

    #[test]
    fn test_dimension_range() {
        let range = DimensionRange::new(100, 300, 150, 300);
        let ok = validate_dimension_range(&Configuration::new(150, 200), &range, OuterAxis::Height);
        assert!(ok.passed);

        let bad = validate_dimension_range(&Configuration::new(50, 400), &range, OuterAxis::Height);
        assert_eq!(bad.errors.len(), 2);
        assert!(bad.errors[0].contains("Width must be between 100-300cm"));
        assert!(bad.errors[1].contains("Height must be between 150-300cm"));
    }

    #[test]
    fn test_column_height_required_with_columns() {
        let mut config = Configuration {
            column_count: 4,
            column_height: 0,
            ..Default::default()
        };
        assert!(!validate_column_height(&config, false).passed);
        config.column_count = 0;
        assert!(validate_column_height(&config, false).passed);
        assert!(!validate_column_height(&config, true).passed);
    }

    #[test]
    fn test_old_parapet_only_with_kilodokos() {
        let mut config = Configuration {
            old_parapet: true,
            parapet: Parapet::Lux,
            ..Default::default()
        };
        assert!(!validate_old_parapet(&config).passed);
        config.parapet = Parapet::Kilodokos;
        assert!(validate_old_parapet(&config).passed);
    }

    #[test]
    fn test_custom_color_without_code_warns() {
        let config = Configuration {
            custom_color: true,
            ..Default::default()
        };
        let result = validate_color(&config);
        assert!(result.passed);
        assert_eq!(result.warnings.len(), 1);
    }
}
