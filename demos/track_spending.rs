//! Walkthrough: record a few expenses, query them, then check the budget.
//!
//! Run: `cargo run --example track_spending`

use std::process::ExitCode;

use spendbook::models::{RatesPatch, TransactionDraft};
use spendbook::search;
use spendbook::sort::{self, SortDirection, SortField};
use spendbook::stats;
use spendbook::storage::InMemoryStorage;
use spendbook::store::TransactionStore;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TransactionStore::new(InMemoryStorage::new());
    store.init();

    for (description, amount, category, date) in [
        ("Weekly groceries", "5000.50", "Food", "2025-01-13"),
        ("Bus ticket", "300", "Transport", "2025-01-14"),
        ("Coffee beans", "1200.25", "Food", "2025-01-15"),
    ] {
        let added = store.add(TransactionDraft {
            description: description.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: date.to_owned(),
        })?;
        println!("Recorded {} (id: {})", added.description, added.id);
    }

    store.set_budget_cap(Some(6000.0))?;
    store.set_rates(RatesPatch::new().usd(0.0007));

    // Search descriptions and categories with a regex
    let pattern = search::compile_pattern("cof+ee", false);
    let matches = search::filter(store.transactions(), pattern.as_ref());
    println!("Search matched {} transactions:", matches.len());
    for tx in &matches {
        println!("  - {}", search::highlight(&tx.description, pattern.as_ref()));
    }

    // Newest first
    let newest = sort::sort(
        store.transactions(),
        SortField::Date,
        SortDirection::Descending,
    );
    let latest = newest.first().ok_or("no transactions recorded")?;
    println!("Most recent: {} on {}", latest.description, latest.date);

    let total = stats::total_spending(store.transactions());
    println!(
        "{} transactions, {total:.2} spent in total",
        stats::total_count(store.transactions())
    );
    if let Some(category) = stats::top_category(store.transactions()) {
        println!("Top category: {category}");
    }

    let today = "2025-01-15".parse::<chrono::NaiveDate>()?;
    println!(
        "Spent in the last 7 days: {:.2}",
        stats::last_7_days_spending(store.transactions(), today)
    );

    match stats::budget_status(total, store.budget_cap()) {
        stats::BudgetStatus::NoCap => println!("No budget cap set"),
        stats::BudgetStatus::Under { remaining } => {
            println!("Under budget, {remaining:.2} remaining");
        }
        stats::BudgetStatus::Over { overage } => {
            println!("Over budget by {overage:.2}");
        }
    }

    println!("Export file name would be: {}", store.export_file_name());

    Ok(())
}
