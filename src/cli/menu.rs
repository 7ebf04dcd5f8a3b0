//! Interactive menu, a thin harness over the ledger core.
//!
//! The loop only collects input and dispatches; validation and
//! persistence live in [`Ledger`].

use super::ui;
use crate::core::entry::Category;
use crate::core::ledger::Ledger;
use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};

/// Runs the blocking menu loop until the user exits.
///
/// Invalid menu selections redisplay the menu. Invalid currency input
/// aborts the single operation with a message. Non-numeric price input
/// is a fatal error that ends the session.
pub fn run(ledger: &mut Ledger) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let choice = prompt(&mut input, "Select an action: ")?;

        match choice.as_str() {
            "1" => add_flow(ledger, &mut input, Category::Work)?,
            "2" => add_flow(ledger, &mut input, Category::Parts)?,
            "3" => add_flow(ledger, &mut input, Category::Expenses)?,
            "4" => summary_flow(ledger, &mut input)?,
            "5" => break,
            _ => println!(
                "{}",
                ui::style_text("Invalid choice, try again.", ui::StyleType::Error)
            ),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("1. Add completed work");
    println!("2. Add a parts purchase");
    println!("3. Add other expenses");
    println!("4. Show summary table");
    println!("5. Exit");
}

fn add_flow(ledger: &mut Ledger, input: &mut impl BufRead, category: Category) -> Result<()> {
    let what = match category {
        Category::Work => "work",
        Category::Parts => "part",
        Category::Expenses => "expense",
    };
    let codes = ledger.rates().codes().join(", ");

    let description = prompt(input, &format!("Description of the {what}: "))?;
    let price_raw = prompt(input, &format!("Price of the {what}: "))?;
    // A non-numeric price terminates the session
    let price: f64 = price_raw
        .parse()
        .with_context(|| format!("Invalid price input: {price_raw}"))?;
    let currency = prompt(input, &format!("Currency ({codes}): "))?;

    if let Err(e) = ledger.add_entry(category, &description, price, &currency) {
        println!(
            "{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        );
    }
    Ok(())
}

fn summary_flow(ledger: &Ledger, input: &mut impl BufRead) -> Result<()> {
    let codes = ledger.rates().codes().join(", ");
    let currency = prompt(input, &format!("Currency for the summary table ({codes}): "))?;

    match ledger.summarize(&currency) {
        Ok(totals) => println!("{}", totals.display_as_table()),
        Err(e) => println!(
            "{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        ),
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        bail!("Input stream closed");
    }
    Ok(line.trim().to_string())
}
