//! Customer configuration record.

use serde::{Deserialize, Serialize};

/// Which side the motor or crank sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorSide {
    Left,
    #[default]
    Right,
}

/// How the pergola is carried at the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    /// Wall-mounted awning-style bracket.
    #[default]
    Markiza,
    /// Free-standing on columns.
    Columns,
    /// Fixed to a beam.
    Beam,
}

/// Switching mode of a lighting option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lighting {
    #[default]
    None,
    /// Plain on/off LEDs ("standard").
    OnOff,
    /// Dimmable LEDs ("lux").
    Dimmer,
}

/// Colour temperature of the LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightTone {
    #[default]
    Warm,
    Cold,
    Rgb,
}

/// Parapet / gutter trim variant ("στηθαίο" / "υδρορροή").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parapet {
    #[default]
    None,
    Lux,
    Panel,
    /// 80x80 beam parapet ("κιλοδοκός").
    Kilodokos,
}

/// Front column profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnProfile {
    #[default]
    #[serde(rename = "130x100")]
    P130x100,
    #[serde(rename = "150x100")]
    P150x100,
    #[serde(rename = "150x150")]
    P150x150,
}

impl std::fmt::Display for ColumnProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnProfile::P130x100 => write!(f, "130x100"),
            ColumnProfile::P150x100 => write!(f, "150x100"),
            ColumnProfile::P150x150 => write!(f, "150x150"),
        }
    }
}

/// Roller axis used by the parts estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisChoice {
    #[default]
    Standard,
    Reinforced,
}

/// One product configuration as edited by the customer.
///
/// Every field has a default so a breakdown can always be computed. Vertical
/// screens store their height in `projection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Width in cm.
    pub width: u32,
    /// Projection in cm (height for vertical screens).
    pub projection: u32,
    /// Back height in cm.
    pub height_back: u32,
    /// Front height in cm.
    pub height_front: u32,
    /// Column height in cm.
    pub column_height: u32,
    /// Manually chosen number of columns.
    pub column_count: u32,
    /// Manually chosen number of wall bases.
    pub wall_base_count: u32,
    pub motorized: bool,
    pub motor_side: MotorSide,
    pub support: SupportType,
    /// Spot lighting mode for table-priced lighting.
    pub lighting: Lighting,
    pub light_tone: LightTone,
    /// Perimeter LED strip or fixed lighting kit.
    pub has_lighting: bool,
    /// Additional LED spots on top of the perimeter strip.
    pub spot_lights: bool,
    pub spot_mode: Lighting,
    pub cover: bool,
    pub parapet: Parapet,
    /// Keep the existing gutter; only valid with the beam parapet.
    pub old_parapet: bool,
    pub column_profile: ColumnProfile,
    pub drainage: bool,
    pub auto_lock: bool,
    pub cabrio: bool,
    pub ral_color: String,
    pub custom_color: bool,
    pub custom_color_code: String,
    /// Price as a bill of materials instead of the base table.
    pub parts_mode: bool,
    pub fabric_id: u32,
    pub axis: AxisChoice,
    /// Crank length in cm (manual parts mode).
    pub crank_length: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            width: 300,
            projection: 200,
            height_back: 250,
            height_front: 220,
            column_height: 250,
            column_count: 0,
            wall_base_count: 0,
            motorized: false,
            motor_side: MotorSide::default(),
            support: SupportType::default(),
            lighting: Lighting::None,
            light_tone: LightTone::default(),
            has_lighting: false,
            spot_lights: false,
            spot_mode: Lighting::OnOff,
            cover: false,
            parapet: Parapet::None,
            old_parapet: false,
            column_profile: ColumnProfile::default(),
            drainage: false,
            auto_lock: false,
            cabrio: false,
            ral_color: "RAL9016".to_string(),
            custom_color: false,
            custom_color_code: String::new(),
            parts_mode: false,
            fabric_id: 201,
            axis: AxisChoice::default(),
            crank_length: 180,
        }
    }
}

impl Configuration {
    /// Create a configuration with the given dimensions and default options.
    pub fn new(width: u32, projection: u32) -> Self {
        Self {
            width,
            projection,
            ..Default::default()
        }
    }

    /// Set dimensions.
    pub fn set_dimensions(&mut self, width: u32, projection: u32) {
        self.width = width;
        self.projection = projection;
    }

    /// Change the parapet. Any variant but the beam drops the old-gutter flag.
    pub fn set_parapet(&mut self, parapet: Parapet) {
        self.parapet = parapet;
        if parapet != Parapet::Kilodokos {
            self.old_parapet = false;
        }
    }

    /// Select a non-standard RAL colour.
    pub fn set_custom_color(&mut self, code: impl Into<String>) {
        self.custom_color = true;
        self.custom_color_code = code.into();
    }

    /// Go back to the standard colour range.
    pub fn set_standard_color(&mut self, ral: impl Into<String>) {
        self.custom_color = false;
        self.custom_color_code.clear();
        self.ral_color = ral.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_parapet_clears_old_parapet() {
        let mut config = Configuration::new(400, 300);
        config.set_parapet(Parapet::Kilodokos);
        config.old_parapet = true;
        config.set_parapet(Parapet::Lux);
        assert!(!config.old_parapet);
    }

    #[test]
    fn test_set_parapet_kilodokos_keeps_old_parapet() {
        let mut config = Configuration::new(400, 300);
        config.old_parapet = true;
        config.set_parapet(Parapet::Kilodokos);
        assert!(config.old_parapet);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"width": 450, "parapet": "kilodokos", "column_profile": "150x150"}"#)
                .unwrap();
        assert_eq!(config.width, 450);
        assert_eq!(config.projection, 200);
        assert_eq!(config.parapet, Parapet::Kilodokos);
        assert_eq!(config.column_profile, ColumnProfile::P150x150);
        assert_eq!(config.ral_color, "RAL9016");
    }

    #[test]
    fn test_color_switching() {
        let mut config = Configuration::default();
        config.set_custom_color("RAL7016");
        assert!(config.custom_color);
        config.set_standard_color("RAL9005");
        assert!(!config.custom_color);
        assert!(config.custom_color_code.is_empty());
        assert_eq!(config.ral_color, "RAL9005");
    }
}
