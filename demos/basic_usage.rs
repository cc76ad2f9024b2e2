//! Basic usage example for geodir-rs
//!
//! This example demonstrates how to:
//! - Configure a directory client from the environment
//! - Drive a search session the way a search box would
//! - Aggregate the detail page for the selected country
//!
//! Needs network access (or `GEODIR_BASE_URL` pointing at a compatible
//! service).

use geodir_rs::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> geodir_rs::Result<()> {
    println!("=== geodir-rs Basic Usage Example ===\n");

    let client = Arc::new(RestCountriesClient::from_env()?);
    println!("Directory: {}\n", client.config().base_url);

    // Example 1: Typing into the search box
    println!("--- Example 1: Incremental search ---");
    let mut session = SearchSession::new(Arc::clone(&client), RecordingNavigator::new());
    for prefix in ["s", "sw", "swi"] {
        session.input_changed(prefix);
    }
    // "s" and "sw" may finish later than "swi"; they are discarded
    session.settle().await;

    let state = session.state();
    if state.is_not_found() {
        println!("Data not found for {:?}", state.query_text());
    }
    for (i, c) in state.suggestions().iter().enumerate() {
        println!("{}. {} ({})", i + 1, c.display_name(), c.iso_alpha2());
    }
    println!();

    // Example 2: Keyboard navigation and confirm
    println!("--- Example 2: Select a suggestion ---");
    session.key_navigated(NavDirection::Down);
    let Some(name) = session.confirm() else {
        println!("Nothing to select");
        return Ok(());
    };
    println!("Selected: {name} -> {}\n", detail_path(&name));

    // Example 3: Detail page with related countries
    println!("--- Example 3: Detail page ---");
    let aggregator = DetailAggregator::new(client);
    match aggregator.aggregate(&name).await {
        DetailOutcome::Found(view) => {
            let r = &view.record;
            println!("Country: {}", r.display_name());
            println!("Capital: {}", r.capitals_label());
            println!("Region: {} / {}", r.region, r.subregion_label());
            println!(
                "Calling code {}: {}",
                view.derived_calling_code,
                related_count_label(view.same_calling_code.len())
            );
            if let Some(code) = &view.derived_primary_currency_code {
                println!(
                    "Currency {code}: {}",
                    related_count_label(view.same_currency.len())
                );
            }
        }
        DetailOutcome::NotFound { name } => println!("Country not found: {name}"),
    }

    Ok(())
}
