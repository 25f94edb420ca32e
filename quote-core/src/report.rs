//! Plain-text quote rendering.

use crate::config::money::approx_zero;
use crate::pricing::Quote;
use std::fmt::Write;

const RULE_WIDTH: usize = 48;

/// Render an itemised quote.
pub fn render_quote(quote: &Quote, product_name: &str) -> String {
    let mut output = String::new();

    render_header(&mut output, quote, product_name);
    render_items(&mut output, quote);
    render_totals(&mut output, quote);
    render_messages(&mut output, quote);

    output
}

fn render_header(output: &mut String, quote: &Quote, product_name: &str) {
    writeln!(output, "{} (#{})", product_name, quote.product_id).unwrap();
    if let Some(rounded) = quote.breakdown.rounded {
        writeln!(
            output,
            "Priced at {}cm x {}cm",
            rounded.width, rounded.projection
        )
        .unwrap();
    }
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
}

fn render_items(output: &mut String, quote: &Quote) {
    let breakdown = &quote.breakdown;

    match &breakdown.components {
        Some(components) => {
            for component in components {
                item(output, &component.name, component.cost);
                writeln!(output, "    {}", component.detail).unwrap();
            }
        }
        None => item(output, "Base price", breakdown.base_price),
    }

    for line in &breakdown.lines {
        item(output, &line.label, line.amount);
    }
    writeln!(output, "{}", "-".repeat(RULE_WIDTH)).unwrap();
}

fn render_totals(output: &mut String, quote: &Quote) {
    let breakdown = &quote.breakdown;

    item(output, "Subtotal", breakdown.subtotal);
    if !approx_zero(breakdown.color_surcharge) {
        item(output, "Colour surcharge", breakdown.color_surcharge);
    }
    item(output, "Subtotal without VAT", breakdown.subtotal_without_vat);
    item(output, "VAT", breakdown.vat);
    writeln!(output, "{}", "=".repeat(RULE_WIDTH)).unwrap();
    item(output, "Total", breakdown.total);
}

fn render_messages(output: &mut String, quote: &Quote) {
    for warning in &quote.validation.warnings {
        writeln!(output, "Warning: {}", warning).unwrap();
    }
    for error in &quote.validation.errors {
        writeln!(output, "Error: {}", error).unwrap();
    }
}

fn item(output: &mut String, label: &str, amount: f64) {
    let value = format!("{:.2}€", amount);
    let pad = RULE_WIDTH.saturating_sub(label.chars().count() + value.chars().count());
    writeln!(output, "{}{}{}", label, " ".repeat(pad.max(1)), value).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Breakdown, LineItem, LineKind, RoundedDimensions};
    use crate::validation::ValidationResult;

    fn sample_quote() -> Quote {
        Quote {
            product_id: 29,
            family: "Balloon".to_string(),
            breakdown: Breakdown {
                base_price: 1765.0,
                lines: vec![LineItem::new(LineKind::Motor, "Motor", 400.0)],
                subtotal: 2165.0,
                color_surcharge: 360.0,
                subtotal_without_vat: 2525.0,
                vat: 606.0,
                total: 3131.0,
                rounded: Some(RoundedDimensions {
                    width: 200,
                    projection: 150,
                }),
                components: None,
            },
            validation: ValidationResult::ok(),
        }
    }

    #[test]
    fn test_render_quote_lines() {
        let text = render_quote(&sample_quote(), "Πέργκολα Balloon");
        assert!(text.starts_with("Πέργκολα Balloon (#29)\n"));
        assert!(text.contains("Priced at 200cm x 150cm"));
        assert!(text.contains("Motor"));
        assert!(text.contains("400.00€"));
        assert!(text.contains("Colour surcharge"));
        assert!(text.trim_end().ends_with("3131.00€"));
    }

    #[test]
    fn test_render_quote_aligns_amounts() {
        let text = render_quote(&sample_quote(), "Balloon");
        let line = text.lines().find(|l| l.starts_with("Base price")).unwrap();
        assert_eq!(line.chars().count(), RULE_WIDTH);
    }

    #[test]
    fn test_render_quote_lists_errors() {
        let mut quote = sample_quote();
        quote.validation.add_error("Width must be between 100-300cm");
        quote.breakdown.color_surcharge = 0.0;
        let text = render_quote(&quote, "Balloon");
        assert!(text.contains("Error: Width must be between 100-300cm"));
        assert!(!text.contains("Colour surcharge"));
    }
}
