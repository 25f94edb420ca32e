//! Data model types for configurations and price breakdowns.

mod breakdown;
mod configuration;

pub use breakdown::{Breakdown, ComponentLine, LineItem, LineKind, RoundedDimensions};
pub use configuration::{
    AxisChoice, ColumnProfile, Configuration, LightTone, Lighting, MotorSide, Parapet,
    SupportType,
};
