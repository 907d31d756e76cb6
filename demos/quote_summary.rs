//! Quotation Summary
//!
//! Reads an editor form state (JSON), refreshes the document number and due
//! date, validates the active items and prints the totals block of the
//! selected template.
//!
//! Usage:
//!   cargo run --example quote_summary -- <state.json>
//!
//! Examples:
//!   cargo run --example quote_summary -- demos/input/government_quote.json
//!   RUST_LOG=quote_core=debug cargo run --example quote_summary -- demos/input/government_quote.json

use anyhow::Context;
use quote_core::{parse_quotation, summarize, FormType};
use thai_text::format_currency;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <state.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example quote_summary -- demos/input/government_quote.json");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let input_json = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input '{input_path}'"))?;

    let mut state = parse_quotation(&input_json)?;

    let today = chrono::Local::now().date_naive();
    state.document.refresh_doc_number(today);
    state.document.refresh_due_date();

    let summary = summarize(&state)?;
    let document = &state.document;
    let totals = &summary.totals;

    tracing::info!(doc_number = %summary.doc_number, "Loaded quotation");

    println!("Document: {}", summary.doc_number);
    println!("Date:     {} (valid until {})", document.date, document.due_date);
    println!("Customer: {}", state.customer.company_name);
    println!();

    for (item, line) in state.active_items().iter().zip(&summary.lines) {
        println!(
            "{:<40} {:>8} {:<8} {:>14}",
            item.description.lines().next().unwrap_or_default(),
            thai_text::format_decimal(item.qty),
            item.unit,
            format_currency(line.net_amount)
        );
    }
    println!();

    let row = |label: &str, amount: f64| println!("{label:<40} {:>32}", format_currency(amount));

    match (summary.form_type, document.vat_enabled && totals.price_include_vat) {
        (FormType::Government, true) => {
            row("รวมเงิน", totals.total_ex_vat);
            if totals.total_discount > 0.0 {
                row("ส่วนลด", -totals.total_discount);
            }
            row("รวมเงินทั้งสิ้น", totals.grand_total);
            row(
                &format!("ถอดภาษีมูลค่าเพิ่ม {}%", document.vat_rate),
                totals.vat_amount,
            );
            row("มูลค่าก่อนภาษี", totals.pre_vat_total);
        }
        _ => {
            row("รวมเงิน", totals.total_ex_vat);
            if totals.total_discount > 0.0 {
                row("ส่วนลด", -totals.total_discount);
                row("ยอดหลังหักส่วนลด", totals.subtotal_after_discount);
            }
            if document.vat_enabled {
                row(
                    &format!("ภาษีมูลค่าเพิ่ม {}%", document.vat_rate),
                    totals.vat_amount,
                );
            }
        }
    }
    row("จำนวนเงินรวมทั้งสิ้น", totals.grand_total);
    println!("({})", totals.grand_total_text);

    Ok(())
}
