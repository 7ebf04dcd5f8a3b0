use super::ui;
use crate::core::CategoryTotals;
use crate::core::ledger::Ledger;
use anyhow::Result;
use comfy_table::Cell;

impl CategoryTotals {
    pub fn display_as_table(&self) -> String {
        let target_currency = &self.target_currency;

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Category"),
            ui::header_cell(&format!("Total ({target_currency})")),
        ]);

        for (label, total) in [
            ("Work", self.work),
            ("Parts", self.parts),
            ("Expenses", self.expenses),
        ] {
            table.add_row(vec![Cell::new(label), ui::amount_cell(total)]);
        }

        // Summary title at top
        let mut output = format!(
            "{}\n\n",
            ui::style_text(
                &format!("Summary in {target_currency}"),
                ui::StyleType::Title
            )
        );

        // Table in the middle
        output.push_str(&table.to_string());

        // Grand total at bottom
        output.push_str(&format!(
            "\n\nTotal ({}): {}",
            ui::style_text(target_currency, ui::StyleType::TotalLabel),
            ui::style_text(&format!("{:.2}", self.total()), ui::StyleType::TotalValue)
        ));

        output
    }
}

/// Renders the per-category totals for the whole ledger.
pub fn run(ledger: &Ledger, target_currency: &str) -> Result<()> {
    let totals = ledger.summarize(target_currency)?;
    println!("{}", totals.display_as_table());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_rendered_to_two_decimals() {
        let totals = CategoryTotals {
            target_currency: "USD".to_string(),
            work: 100.0,
            parts: 100.004,
            expenses: 10.0 / 3.0,
        };

        let rendered = console::strip_ansi_codes(&totals.display_as_table()).to_string();
        assert!(rendered.contains("Summary in USD"));
        assert!(rendered.contains("100.00"));
        assert!(rendered.contains("3.33"));
        assert!(rendered.contains("Total (USD): 203.34"));
    }

    #[test]
    fn test_empty_totals_render_as_zero() {
        let totals = CategoryTotals {
            target_currency: "KZT".to_string(),
            work: 0.0,
            parts: 0.0,
            expenses: 0.0,
        };

        let rendered = console::strip_ansi_codes(&totals.display_as_table()).to_string();
        assert!(rendered.contains("0.00"));
        assert!(rendered.contains("Total (KZT): 0.00"));
    }
}
