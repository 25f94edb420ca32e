//! Evaluation of optional surcharge and discount lines.

use crate::config::dims::{cm_to_m, column_count, round_up_to_next_50};
use crate::config::money::round_cents;
use crate::family::{
    ColumnProfileRule, OldParapetFee, ParapetPricing, ParapetRule, ParapetWidth, SurchargeRule,
};
use crate::model::{
    ColumnProfile, Configuration, LightTone, LineItem, LineKind, Lighting, Parapet,
};
use crate::table::{round_up_to_next_available_width, PriceTables, TableId, WidthTableId};
use crate::validation::{validate_old_parapet, ValidationResult};

/// Inputs shared by every rule of one pricing pass.
pub(super) struct LineContext<'a> {
    pub config: &'a Configuration,
    pub tables: &'a PriceTables,
    /// Base table of the family.
    pub base_table: TableId,
}

impl LineContext<'_> {
    fn lookup(&self, table: TableId) -> f64 {
        self.tables
            .lookup(table, self.config.projection, self.config.width)
    }

    fn perimeter_m(&self) -> f64 {
        2.0 * (cm_to_m(self.config.width) + cm_to_m(self.config.projection))
    }
}

/// Collects lines and validation messages for one pass.
pub(super) struct LineSink {
    pub lines: Vec<LineItem>,
    pub validation: ValidationResult,
}

impl LineSink {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            validation: ValidationResult::ok(),
        }
    }

    fn push(&mut self, kind: LineKind, label: impl Into<String>, amount: f64) {
        self.lines.push(LineItem::new(kind, label, round_cents(amount)));
    }

    /// Push a table-priced line, warning when the table has no price for the size.
    fn push_looked_up(&mut self, kind: LineKind, label: &str, amount: f64) {
        if amount <= 0.0 {
            self.validation
                .add_warning(format!("{} is not priced for this size", label));
        }
        self.push(kind, label, amount);
    }
}

/// Apply one rule to the configuration.
pub(super) fn apply_rule(rule: &SurchargeRule, ctx: &LineContext<'_>, sink: &mut LineSink) {
    let config = ctx.config;

    match *rule {
        SurchargeRule::Motor { fee } => {
            if config.motorized {
                sink.push(LineKind::Motor, "Motor", fee);
            }
        }
        SurchargeRule::TableLighting { on_off, dimmer } => match config.lighting {
            Lighting::None => {}
            Lighting::OnOff => {
                sink.push_looked_up(LineKind::Lighting, "LED lighting (on/off)", ctx.lookup(on_off))
            }
            Lighting::Dimmer => {
                sink.push_looked_up(LineKind::Lighting, "LED lighting (dimmer)", ctx.lookup(dimmer))
            }
        },
        SurchargeRule::ToneLighting { standard, lux } => {
            let (fees, mode) = match config.lighting {
                Lighting::None => return,
                Lighting::OnOff => (standard, "standard"),
                Lighting::Dimmer => (lux, "lux"),
            };
            let tone = match config.light_tone {
                LightTone::Warm => "warm",
                LightTone::Cold => "cold",
                LightTone::Rgb => "RGB",
            };
            sink.push(
                LineKind::Lighting,
                format!("LED lighting {} ({})", mode, tone),
                fees.fee(config.light_tone),
            );
        }
        SurchargeRule::PerimeterLed {
            per_meter,
            control_box,
        } => {
            if config.has_lighting {
                let meters = ctx.perimeter_m();
                sink.push(
                    LineKind::Lighting,
                    format!("Perimeter LED ({:.2}m + control box)", meters),
                    meters * per_meter + control_box,
                );
            }
        }
        SurchargeRule::SpotLights { on_off, dimmer } => {
            if config.spot_lights {
                match config.spot_mode {
                    Lighting::None => {}
                    Lighting::OnOff => sink.push_looked_up(
                        LineKind::SpotLighting,
                        "LED spots (on/off)",
                        ctx.lookup(on_off),
                    ),
                    Lighting::Dimmer => sink.push_looked_up(
                        LineKind::SpotLighting,
                        "LED spots (dimmer)",
                        ctx.lookup(dimmer),
                    ),
                }
            }
        }
        SurchargeRule::LightingKit { fee } => {
            if config.has_lighting {
                sink.push(LineKind::LightingKit, "LED lighting kit", fee);
            }
        }
        SurchargeRule::TableCover(table) => {
            if config.cover {
                sink.push_looked_up(LineKind::Cover, "Cover", ctx.lookup(table));
            }
        }
        SurchargeRule::FlatCover(fee) => {
            if config.cover {
                sink.push(LineKind::Cover, "Cover", fee);
            }
        }
        SurchargeRule::Parapet(ref parapet) => apply_parapet(parapet, ctx, sink),
        SurchargeRule::ColumnProfile(ref profile) => apply_column_profile(profile, config, sink),
        SurchargeRule::ManualColumns { per_column } => {
            if config.column_count > 0 {
                sink.push(
                    LineKind::Columns,
                    format!("Columns 150x150 ({} pcs)", config.column_count),
                    f64::from(config.column_count) * per_column,
                );
            }
        }
        SurchargeRule::WallBases { per_base } => {
            if config.wall_base_count > 0 {
                sink.push(
                    LineKind::WallBases,
                    format!("Wall bases ({} pcs)", config.wall_base_count),
                    f64::from(config.wall_base_count) * per_base,
                );
            }
        }
        SurchargeRule::Drainage {
            per_meter,
            end_caps,
        } => {
            if config.drainage {
                let meters = cm_to_m(config.width);
                sink.push(
                    LineKind::Drainage,
                    format!("Drainage ({:.2}m + end caps)", meters),
                    meters * per_meter + end_caps,
                );
            }
        }
        SurchargeRule::Frame { per_meter } => {
            let meters = ctx.perimeter_m() + cm_to_m(config.column_height);
            sink.push(
                LineKind::Frame,
                format!("Frame with 130x100 column ({:.2}m)", meters),
                meters * per_meter,
            );
        }
        SurchargeRule::AutoLock { fee } => {
            if config.auto_lock {
                sink.push(LineKind::AutoLock, "Auto lock", fee);
            }
        }
        SurchargeRule::Cabrio { per_cm } => {
            if config.cabrio {
                sink.push(
                    LineKind::Cabrio,
                    "Cabrio",
                    -(f64::from(config.width) * per_cm),
                );
            }
        }
    }
}

/// Width used to read the parapet strips.
fn parapet_width(pricing: &ParapetPricing, ctx: &LineContext<'_>) -> u32 {
    match pricing {
        ParapetPricing::Strips {
            width: ParapetWidth::NextFifty,
            ..
        } => round_up_to_next_50(ctx.config.width),
        ParapetPricing::Strips {
            width: ParapetWidth::BaseTable,
            ..
        } => ctx
            .tables
            .grid(ctx.base_table)
            .map(|table| {
                round_up_to_next_available_width(table, ctx.config.projection, ctx.config.width)
            })
            .unwrap_or(ctx.config.width),
        ParapetPricing::Flat { .. } => ctx.config.width,
    }
}

fn apply_parapet(rule: &ParapetRule, ctx: &LineContext<'_>, sink: &mut LineSink) {
    let config = ctx.config;
    let old_parapet_check = validate_old_parapet(config);
    let old_parapet_legal = old_parapet_check.passed;
    sink.validation.merge(old_parapet_check);

    let width = parapet_width(&rule.pricing, ctx);

    match (config.parapet, &rule.pricing) {
        (Parapet::None, _) => {}
        (Parapet::Lux, ParapetPricing::Strips { .. }) => sink.push_looked_up(
            LineKind::Parapet,
            "Lux parapet",
            ctx.tables.width_price(WidthTableId::ParapetLux, width),
        ),
        (Parapet::Panel, ParapetPricing::Strips { .. }) => sink.push_looked_up(
            LineKind::Parapet,
            "Panel parapet",
            ctx.tables.width_price(WidthTableId::ParapetPanel, width),
        ),
        (Parapet::Kilodokos, ParapetPricing::Strips {
            beam_column_rate, ..
        }) => {
            let columns = column_count(config.width);
            let amount = f64::from(width)
                + cm_to_m(config.column_height) * f64::from(columns) * beam_column_rate;
            sink.push(LineKind::Parapet, "Beam parapet 80x80", amount);
        }
        (Parapet::Lux, ParapetPricing::Flat { lux, .. }) => {
            sink.push(LineKind::Parapet, "Lux parapet", *lux)
        }
        (Parapet::Panel, ParapetPricing::Flat { panel, .. }) => {
            sink.push(LineKind::Parapet, "Panel parapet", *panel)
        }
        (Parapet::Kilodokos, ParapetPricing::Flat { beam, .. }) => {
            sink.push(LineKind::Parapet, "Beam parapet 80x80", *beam)
        }
    }

    if config.old_parapet && old_parapet_legal {
        let amount = match rule.old_parapet {
            OldParapetFee::Flat(fee) => fee,
            OldParapetFee::PerMeter(rate) => cm_to_m(width) * rate,
            OldParapetFee::PerCentimeter(rate) => f64::from(width) * rate,
        };
        sink.push(LineKind::OldParapet, "Old parapet", amount);
    }
}

fn apply_column_profile(rule: &ColumnProfileRule, config: &Configuration, sink: &mut LineSink) {
    let strip_parapet = matches!(config.parapet, Parapet::Lux | Parapet::Panel);
    if rule.with_strip_parapet_only && !strip_parapet {
        return;
    }

    let fee = match config.column_profile {
        ColumnProfile::P130x100 => return,
        ColumnProfile::P150x100 => rule.fee_150x100,
        ColumnProfile::P150x150 => match rule.fee_150x150 {
            Some(fee) => fee,
            None => {
                sink.validation
                    .add_error("Column profile 150x150 is not available for this product");
                return;
            }
        },
    };

    let columns = column_count(config.width);
    sink.push(
        LineKind::ColumnProfile,
        format!("Columns {} ({} x {:.0}€)", config.column_profile, columns, fee),
        f64::from(columns) * fee,
    );
}
