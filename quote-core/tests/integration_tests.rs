//! Integration tests for quote pricing.
//!
//! These tests exercise the public API end to end: family lookup, table
//! rounding, surcharge lines, colour and VAT, alternatives and table loading.

use pretty_assertions::assert_eq;
use quote_core::config::money::{approx_eq, round_cents};
use quote_core::model::{ColumnProfile, Lighting, Parapet};
use quote_core::table::{get_price_from_table, round_up_to_next_available_projection};
use quote_core::{
    find_matching_pergolas, quote, quote_with, Configuration, FamilyRegistry, FamilySpec,
    LineKind, PriceTable, PriceTables, PricingConfig, QuoteError, QuoteSession, TableId,
};

// ==================== Pricing scenarios ====================

#[test]
fn test_pro100_reference_quote() {
    let quote = quote(18, &Configuration::new(300, 200)).unwrap();
    let b = &quote.breakdown;

    assert_eq!(b.base_price, 3170.0);
    assert_eq!(b.subtotal, 3170.0);
    assert_eq!(b.color_surcharge, 0.0);
    assert_eq!(b.subtotal_without_vat, 3170.0);
    assert_eq!(b.vat, 760.8);
    assert_eq!(b.total, 3930.8);
    assert!(quote.can_save());
}

#[test]
fn test_balloon_motorized_custom_color() {
    let mut config = Configuration::new(200, 150);
    config.motorized = true;
    config.set_custom_color("RAL3004");
    let quote = quote(29, &config).unwrap();
    let b = &quote.breakdown;

    assert_eq!(b.base_price, 1765.0);
    assert_eq!(b.subtotal, 2165.0);
    assert_eq!(b.color_surcharge, 360.0);
    assert_eq!(b.subtotal_without_vat, 2525.0);
    assert!(approx_eq(b.total, 2525.0 * 1.24));
}

#[test]
fn test_old_parapet_requires_beam_parapet() {
    let config = Configuration {
        parapet: Parapet::Lux,
        old_parapet: true,
        ..Configuration::new(300, 200)
    };
    let quote = quote(18, &config).unwrap();

    assert!(!quote.can_save());
    assert!(!quote.breakdown.has_line(LineKind::OldParapet));
    let expected = 3170.0 + quote.breakdown.line_amount(LineKind::Parapet);
    assert_eq!(quote.breakdown.subtotal, expected);
}

#[test]
fn test_old_parapet_with_beam_parapet() {
    let config = Configuration {
        parapet: Parapet::Kilodokos,
        old_parapet: true,
        column_height: 250,
        ..Configuration::new(300, 200)
    };
    let quote = quote(18, &config).unwrap();

    assert!(quote.can_save());
    // 300 + 2.5m x 2 columns x 40
    assert_eq!(quote.breakdown.line_amount(LineKind::Parapet), 500.0);
    // 3m x 50
    assert_eq!(quote.breakdown.line_amount(LineKind::OldParapet), 150.0);
}

#[test]
fn test_phi10_cabrio_discount() {
    let config = Configuration {
        cabrio: true,
        ..Configuration::new(150, 200)
    };
    let quote = quote(33, &config).unwrap();
    assert_eq!(quote.breakdown.line_amount(LineKind::Cabrio), -3600.0);
    assert_eq!(quote.breakdown.base_price, 3695.0);
    assert_eq!(quote.breakdown.subtotal, 95.0);
}

#[test]
fn test_phi10_and_phi10_cabrio_share_prices() {
    let config = Configuration::new(175, 250);
    let a = quote(33, &config).unwrap();
    let b = quote(35, &config).unwrap();
    assert_eq!(a.breakdown.base_price, b.breakdown.base_price);
}

#[test]
fn test_flat_color_surcharge_is_independent_of_size() {
    for (width, height) in [(100, 150), (200, 200), (300, 300)] {
        let mut config = Configuration::new(width, height);
        config.set_custom_color("RAL7016");
        let quote = quote(36, &config).unwrap();
        assert_eq!(quote.breakdown.color_surcharge, 120.0);
    }
}

#[test]
fn test_percent_color_surcharge_tracks_subtotal() {
    let mut config = Configuration::new(500, 400);
    config.lighting = Lighting::Dimmer;
    config.cover = true;
    config.set_custom_color("RAL7016");
    let quote = quote(19, &config).unwrap();
    let b = &quote.breakdown;
    assert!(approx_eq(b.color_surcharge, b.subtotal * 0.10));
}

#[test]
fn test_no_color_surcharge_without_custom_color() {
    let registry = FamilyRegistry::builtin();
    for family in registry.iter() {
        let quote = quote(family.id, &family.default_configuration()).unwrap();
        assert_eq!(quote.breakdown.color_surcharge, 0.0, "{}", family.name);
    }
}

#[test]
fn test_pro_mega_column_profile_with_panel() {
    let config = Configuration {
        parapet: Parapet::Panel,
        column_profile: ColumnProfile::P150x150,
        ..Configuration::new(800, 800)
    };
    let quote = quote(20, &config).unwrap();
    // 800cm needs 3 columns
    assert_eq!(quote.breakdown.line_amount(LineKind::ColumnProfile), 300.0);
}

#[test]
fn test_standard_motor_rejects_150x150() {
    let config = Configuration {
        column_profile: ColumnProfile::P150x150,
        ..Configuration::new(400, 300)
    };
    let quote = quote(22, &config).unwrap();
    assert!(!quote.can_save());
}

#[test]
fn test_unknown_product() {
    let err = quote(99, &Configuration::default()).unwrap_err();
    assert!(matches!(err, QuoteError::UnknownProduct { id: 99 }));
    assert_eq!(err.code_value(), 100);
}

#[test]
fn test_custom_vat_rate() {
    let registry = FamilyRegistry::builtin();
    let tables = PriceTables::builtin();
    let pricing = PricingConfig::with_vat_rate(0.13);
    let quote = quote_with(&registry, &tables, &pricing, 18, &Configuration::new(300, 200)).unwrap();
    assert_eq!(quote.breakdown.vat, 412.1);
}

fn option_combinations(family: &FamilySpec) -> Vec<Configuration> {
    let base = family.default_configuration();
    let mut custom = base.clone();
    custom.motorized = true;
    custom.set_custom_color("RAL7016");

    vec![
        base.clone(),
        Configuration {
            motorized: true,
            auto_lock: true,
            ..base.clone()
        },
        Configuration {
            lighting: Lighting::Dimmer,
            has_lighting: true,
            spot_lights: true,
            spot_mode: Lighting::OnOff,
            cover: true,
            drainage: true,
            ..base.clone()
        },
        Configuration {
            parapet: Parapet::Kilodokos,
            old_parapet: true,
            column_height: 250,
            column_profile: ColumnProfile::P150x100,
            ..base.clone()
        },
        Configuration {
            cabrio: true,
            ..base.clone()
        },
        Configuration {
            parts_mode: true,
            motorized: true,
            ..base.clone()
        },
        custom,
    ]
}

#[test]
fn test_vat_and_total_follow_subtotal_for_every_family() {
    let registry = FamilyRegistry::builtin();
    for family in registry.iter() {
        for config in option_combinations(family) {
            let quote = quote(family.id, &config).unwrap();
            let b = &quote.breakdown;
            let context = format!("{} {:?}", family.name, config);

            assert_eq!(
                b.subtotal_without_vat,
                round_cents(b.subtotal + b.color_surcharge),
                "{}",
                context
            );
            assert_eq!(b.vat, round_cents(b.subtotal_without_vat * 0.24), "{}", context);
            assert!(approx_eq(b.total, b.subtotal_without_vat + b.vat), "{}", context);
        }
    }
}

// ==================== Rounding properties ====================

#[test]
fn test_projection_rounding_is_monotonic() {
    let tables = PriceTables::builtin();
    for id in [TableId::Pro100, TableId::Hanging, TableId::Cassette530] {
        let table = tables.grid(id).unwrap();
        let mut previous = 0;
        for projection in (0..1200).step_by(7) {
            let rounded = round_up_to_next_available_projection(table, projection);
            assert!(rounded >= previous, "{:?} at {}", id, projection);
            previous = rounded;
        }
    }
}

#[test]
fn test_lookup_above_table_is_unpriceable() {
    let table = PriceTable::from_sheet(&[300, 350], &[(200, &[3170.0, 3380.0])]);
    assert_eq!(get_price_from_table(&table, 201, 300), 0.0);
    assert_eq!(get_price_from_table(&table, 200, 351), 0.0);
    assert_eq!(get_price_from_table(&table, 100, 100), 3170.0);
}

// ==================== Alternatives ====================

#[test]
fn test_alternatives_exclude_current_and_sort() {
    let registry = FamilyRegistry::builtin();
    let tables = PriceTables::builtin();
    let matches = find_matching_pergolas(&registry, &tables, 400, 300, Some(24));

    assert!(!matches.is_empty());
    assert!(matches.iter().all(|m| m.product_id != 24));
    for pair in matches.windows(2) {
        assert!(pair[0].base_price <= pair[1].base_price);
    }
}

// ==================== Sessions ====================

#[test]
fn test_session_save_gate() {
    let registry = FamilyRegistry::builtin();
    let tables = PriceTables::builtin();
    let mut session = QuoteSession::new(&registry, &tables, PricingConfig::default(), 28).unwrap();

    session.update(|c| c.column_height = 0);
    assert!(matches!(
        session.save(),
        Err(QuoteError::ValidationFailed { .. })
    ));

    session.update(|c| c.column_height = 240);
    assert!(session.save().is_ok());
}

// ==================== Table loading ====================

#[test]
fn test_tables_json_round_trip() {
    let tables = PriceTables::builtin();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    std::fs::write(&path, tables.to_json_string().unwrap()).unwrap();

    let loaded = PriceTables::load(&path).unwrap();
    assert_eq!(loaded, tables);
}

#[test]
fn test_loaded_override_changes_price() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    std::fs::write(&path, r#"{"grids":{"pro100":{"200":{"300":2000.0}}}}"#).unwrap();

    let tables = PriceTables::load(&path).unwrap();
    let registry = FamilyRegistry::builtin();
    let quote = quote_with(
        &registry,
        &tables,
        &PricingConfig::default(),
        18,
        &Configuration::new(280, 180),
    )
    .unwrap();
    assert_eq!(quote.breakdown.base_price, 2000.0);
}

#[test]
fn test_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = PriceTables::load(&path).unwrap_err();
    assert!(matches!(err, QuoteError::Json(_)));
    assert_eq!(err.code_value(), -3);
}
