//! Keypad Session
//!
//! This example replays keypad presses against a SQLite-backed calculator,
//! standing in for the UI layer that would normally forward button events.
//!
//! Key concepts:
//! - Every press goes through `Calculator::press_label`
//! - `=` records the computation in the ledger
//! - Errors (division by zero, storage) leave the calculator usable
//!
//! The ledger location comes from `CALC_HISTORY_DB` (default
//! `calc_history.db`). Set `RUST_LOG=debug` to watch each transition.
//!
//! Run with: cargo run --example keypad_session

use calcledger::ledger::export_json;
use calcledger::{Calculator, Ledger, LedgerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Keypad Session Example ===\n");

    let config = LedgerConfig::from_env()?;
    let mut calc = Calculator::open(&config)?;
    println!("Ledger: {}\n", config.path().display());

    let sessions: [&[&str]; 5] = [
        &["3", "+", "4", "="],
        &["5", "÷", "0", "="],
        &["1", ".", "5", "0", "="],
        &["9", "×", "×", "="],
        &["5", "0", "%", "±", "+", "2", "=", "AC"],
    ];

    for presses in sessions {
        for label in presses {
            if let Err(error) = calc.press_label(label) {
                println!("  ! {error}");
            }
        }
        println!(
            "{:<24} display: {:<10} history: {}",
            presses.join(" "),
            calc.display(),
            calc.history_line().unwrap_or("")
        );
    }

    println!("\nHistory (newest first):");
    let records = calc.history()?;
    if records.is_empty() {
        println!("  No History");
    }
    for record in records.iter().take(10) {
        println!("  #{:<4} {}", record.id, record.expression);
    }
    println!("  ({} records total)", calc.ledger().count()?);

    println!("\nHistory as JSON (first lines):");
    let ledger = calc.into_ledger();
    let json = export_json(&ledger)?;
    println!("{}", json.lines().take(6).collect::<Vec<_>>().join("\n"));

    println!("\n=== Example Complete ===");
    Ok(())
}
