//! Parts-mode pricing for products sold as a bill of materials.

mod catalog;
mod estimate;

pub use catalog::{
    ArmSet, AxisOption, CrankOption, Fabric, FabricArea, FabricPricing, FixedPart, LengthBasis,
    LinearPart, PartsCatalog,
};
pub use estimate::{check_arm_clearance, estimate_parts, PartsEstimate};
