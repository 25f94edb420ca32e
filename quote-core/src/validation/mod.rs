//! Configuration validation.

mod validate;

pub use validate::{
    out_of_range_message, validate_color, validate_column_height, validate_dimension_range,
    validate_old_parapet, DimensionRange, OuterAxis, ValidationResult,
};
