//! Basic usage example for country-explorer
//!
//! This example demonstrates how to:
//! - Load the country catalog through the HTTP gateway
//! - Filter the list by name and region
//! - Open one country with its border countries

use country_explorer::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== Country Explorer Basic Usage Example ===\n");

    let config = ExplorerConfig::default();
    let gateway = HttpGateway::new(&config)?;

    // Example 1: Load the full list
    println!("--- Example 1: Load all countries ---");
    let list = CountryListSession::new(gateway.clone());
    list.mount().await;
    if let Some(err) = list.error() {
        println!("Could not load countries: {err}");
        return Ok(());
    }
    println!("Total countries: {}", list.total_countries());
    println!("Regions: {}\n", list.available_regions().join(", "));

    // Example 2: Filter by region and name
    println!("--- Example 2: Countries in Europe containing \"land\" ---");
    list.set_selected_region("Europe");
    list.set_search_query("land");
    for country in list.countries().iter() {
        println!(
            "{} ({}) capital {}, population {}",
            country.common_name(),
            country.cca3,
            country.capital(),
            country.formatted_population()
        );
    }
    println!();

    // Example 3: Detail page with borders
    println!("--- Example 3: Country detail ---");
    let detail = CountryDetailSession::new(gateway);
    detail.load(Some("PER")).await;
    match detail.country() {
        Some(country) => {
            println!("{} / {}", country.common_name(), country.official_name());
            println!("Languages: {}", country.languages_label());
            println!("Currencies: {}", country.currencies_label());
            let borders: Vec<_> = detail
                .border_countries()
                .iter()
                .map(|c| c.common_name().to_string())
                .collect();
            println!("Borders: {}", borders.join(", "));
        }
        None => println!("{}", detail.error().unwrap_or_default()),
    }

    Ok(())
}
