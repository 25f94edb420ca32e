//! The product families sold by the configurator.

use super::rules::{
    BaseLookup, Category, ColorSurcharge, ColumnProfileRule, Constraint, FamilySpec,
    OldParapetFee, ParapetPricing, ParapetRule, ParapetWidth, SurchargeRule, ToneFees,
};
use crate::parts::PartsCatalog;
use crate::table::TableId;
use crate::validation::{DimensionRange, OuterAxis};

/// Colour surcharge of the pergola line.
const PERGOLA_COLOR: ColorSurcharge = ColorSurcharge::Percent(0.10);

/// Beam parapet: per metre of column height, per column.
const BEAM_COLUMN_RATE: f64 = 40.0;

const TABLE_LIGHTING: SurchargeRule = SurchargeRule::TableLighting {
    on_off: TableId::LightsStandard,
    dimmer: TableId::LightsLux,
};

const SPOT_LIGHTS: SurchargeRule = SurchargeRule::SpotLights {
    on_off: TableId::LightsStandard,
    dimmer: TableId::LightsLux,
};

const PERIMETER_LED: SurchargeRule = SurchargeRule::PerimeterLed {
    per_meter: 24.0,
    control_box: 440.0,
};

const MANUAL_COLUMNS: SurchargeRule = SurchargeRule::ManualColumns { per_column: 400.0 };

const WALL_BASES: SurchargeRule = SurchargeRule::WallBases { per_base: 27.0 };

/// Lines shared by the Pro 100 and Pro 150.
fn pro_lines() -> Vec<SurchargeRule> {
    vec![
        TABLE_LIGHTING,
        SurchargeRule::TableCover(TableId::Cover),
        SurchargeRule::Parapet(ParapetRule {
            pricing: ParapetPricing::Strips {
                width: ParapetWidth::NextFifty,
                beam_column_rate: BEAM_COLUMN_RATE,
            },
            old_parapet: OldParapetFee::PerMeter(50.0),
        }),
    ]
}

fn pergola(
    id: u32,
    name: &'static str,
    table: TableId,
    surcharges: Vec<SurchargeRule>,
    default_size: (u32, u32),
) -> FamilySpec {
    FamilySpec {
        id,
        name,
        category: Category::Pergola,
        base: BaseLookup::RoundUp(table),
        outer_axis: OuterAxis::Projection,
        constraints: Vec::new(),
        surcharges,
        color: PERGOLA_COLOR,
        parts: None,
        default_size,
    }
}

fn vertical_cassette(id: u32, name: &'static str, table: TableId) -> FamilySpec {
    FamilySpec {
        id,
        name,
        category: Category::VerticalScreen,
        base: BaseLookup::Nearest(table),
        outer_axis: OuterAxis::Height,
        constraints: vec![Constraint::Range(DimensionRange::new(100, 300, 150, 300))],
        surcharges: vec![
            SurchargeRule::Motor { fee: 230.0 },
            SurchargeRule::AutoLock { fee: 540.0 },
            SurchargeRule::Cabrio { per_cm: 24.0 },
        ],
        color: ColorSurcharge::Flat(120.0),
        parts: None,
        default_size: (200, 200),
    }
}

/// Every registered family, ordered by product id.
pub(super) fn families() -> Vec<FamilySpec> {
    vec![
        FamilySpec {
            id: 12,
            name: "Cassette 530",
            category: Category::Awning,
            base: BaseLookup::Nearest(TableId::Cassette530),
            outer_axis: OuterAxis::Projection,
            constraints: vec![
                Constraint::Range(DimensionRange::new(220, 500, 180, 300)),
                Constraint::ArmClearance,
            ],
            surcharges: vec![SurchargeRule::Motor { fee: 260.0 }],
            color: ColorSurcharge::Flat(160.0),
            parts: Some(PartsCatalog::cassette_530()),
            default_size: (400, 250),
        },
        FamilySpec {
            id: 13,
            name: "Cassette 732",
            category: Category::Awning,
            base: BaseLookup::Nearest(TableId::Cassette732),
            outer_axis: OuterAxis::Projection,
            constraints: vec![Constraint::Range(DimensionRange::new(250, 600, 200, 350))],
            surcharges: vec![SurchargeRule::Motor { fee: 260.0 }],
            color: ColorSurcharge::Flat(160.0),
            parts: None,
            default_size: (400, 250),
        },
        FamilySpec {
            id: 16,
            name: "Epica",
            category: Category::Awning,
            base: BaseLookup::Nearest(TableId::Epica),
            outer_axis: OuterAxis::Projection,
            constraints: vec![Constraint::Range(DimensionRange::new(350, 700, 200, 350))],
            surcharges: vec![SurchargeRule::LightingKit { fee: 620.0 }],
            color: ColorSurcharge::Flat(220.0),
            parts: None,
            default_size: (500, 250),
        },
        pergola(18, "Pergola Pro 100", TableId::Pro100, pro_lines(), (400, 300)),
        pergola(
            19,
            "Pergola Pro 150",
            TableId::Pro150,
            {
                let mut lines = pro_lines();
                lines.push(SurchargeRule::ColumnProfile(ColumnProfileRule {
                    fee_150x100: 50.0,
                    fee_150x150: Some(100.0),
                    with_strip_parapet_only: true,
                }));
                lines
            },
            (500, 400),
        ),
        pergola(
            20,
            "Pergola Pro Mega",
            TableId::ProMega,
            vec![
                TABLE_LIGHTING,
                SurchargeRule::TableCover(TableId::Cover),
                SurchargeRule::Parapet(ParapetRule {
                    pricing: ParapetPricing::Strips {
                        width: ParapetWidth::BaseTable,
                        beam_column_rate: BEAM_COLUMN_RATE,
                    },
                    old_parapet: OldParapetFee::PerCentimeter(50.0),
                }),
                SurchargeRule::ColumnProfile(ColumnProfileRule {
                    fee_150x100: 50.0,
                    fee_150x150: Some(100.0),
                    with_strip_parapet_only: true,
                }),
            ],
            (800, 800),
        ),
        pergola(
            22,
            "Standard Motor",
            TableId::StandardMotor,
            vec![
                SurchargeRule::ToneLighting {
                    standard: ToneFees {
                        warm: 380.0,
                        cold: 380.0,
                        rgb: 520.0,
                    },
                    lux: ToneFees {
                        warm: 540.0,
                        cold: 540.0,
                        rgb: 690.0,
                    },
                },
                SurchargeRule::FlatCover(420.0),
                SurchargeRule::Parapet(ParapetRule {
                    pricing: ParapetPricing::Flat {
                        lux: 480.0,
                        panel: 390.0,
                        beam: 480.0,
                    },
                    old_parapet: OldParapetFee::Flat(140.0),
                }),
                SurchargeRule::ColumnProfile(ColumnProfileRule {
                    fee_150x100: 50.0,
                    fee_150x150: None,
                    with_strip_parapet_only: false,
                }),
            ],
            (400, 300),
        ),
        pergola(
            23,
            "Hanging",
            TableId::Hanging,
            vec![
                TABLE_LIGHTING,
                SurchargeRule::TableCover(TableId::Cover),
                SurchargeRule::Drainage {
                    per_meter: 58.0,
                    end_caps: 10.0,
                },
            ],
            (400, 300),
        ),
        {
            let mut flat = pergola(
                24,
                "Flat",
                TableId::Flat,
                vec![PERIMETER_LED, SPOT_LIGHTS, MANUAL_COLUMNS, WALL_BASES],
                (400, 300),
            );
            flat.constraints = vec![Constraint::ColumnHeight { always: false }];
            flat
        },
        pergola(
            25,
            "Bioclimatic",
            TableId::Bioclimatic,
            vec![PERIMETER_LED, MANUAL_COLUMNS, WALL_BASES],
            (400, 300),
        ),
        {
            let mut open_sky = pergola(
                26,
                "Open Sky",
                TableId::OpenSky,
                vec![PERIMETER_LED, MANUAL_COLUMNS, WALL_BASES],
                (400, 300),
            );
            open_sky.constraints = vec![Constraint::ColumnHeight { always: false }];
            open_sky
        },
        pergola(
            27,
            "Open Roof",
            TableId::OpenRoof,
            vec![PERIMETER_LED, MANUAL_COLUMNS, WALL_BASES],
            (400, 400),
        ),
        {
            let mut fixed_blades = pergola(
                28,
                "Fixed Blades",
                TableId::FixedBlades,
                vec![SurchargeRule::Frame { per_meter: 70.0 }],
                (400, 300),
            );
            fixed_blades.constraints = vec![Constraint::ColumnHeight { always: true }];
            fixed_blades
        },
        FamilySpec {
            color: ColorSurcharge::Flat(360.0),
            ..pergola(
                29,
                "Balloon",
                TableId::Balloon,
                vec![SurchargeRule::Motor { fee: 400.0 }],
                (300, 250),
            )
        },
        FamilySpec {
            color: ColorSurcharge::Flat(200.0),
            ..pergola(30, "Danae", TableId::Danae, Vec::new(), (300, 250))
        },
        FamilySpec {
            id: 31,
            name: "Zip Screen",
            category: Category::VerticalScreen,
            base: BaseLookup::Nearest(TableId::ZipScreen),
            outer_axis: OuterAxis::Height,
            constraints: vec![Constraint::Range(DimensionRange::new(200, 400, 175, 350))],
            surcharges: vec![SurchargeRule::Motor { fee: 260.0 }],
            color: ColorSurcharge::Flat(160.0),
            parts: Some(PartsCatalog::zip_screen()),
            default_size: (300, 250),
        },
        vertical_cassette(33, "Cassette Φ10", TableId::CassettePhi10),
        vertical_cassette(34, "Wire Cabrio", TableId::WireCabrio),
        vertical_cassette(35, "Cassette Φ10 Cabrio", TableId::CassettePhi10),
        FamilySpec {
            id: 36,
            name: "Vertical VT",
            category: Category::VerticalScreen,
            base: BaseLookup::Nearest(TableId::VerticalVt),
            outer_axis: OuterAxis::Height,
            constraints: vec![Constraint::Range(DimensionRange::new(100, 300, 150, 300))],
            surcharges: vec![SurchargeRule::Motor { fee: 230.0 }],
            color: ColorSurcharge::Flat(120.0),
            parts: None,
            default_size: (200, 200),
        },
    ]
}
