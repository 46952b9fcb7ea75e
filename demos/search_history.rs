//! Search history example for country-explorer
//!
//! Runs a few searches through the geo search store, persists the history to
//! a directory under the system temp dir and reloads it in a second store.
//! No network access is needed.

use country_explorer::prelude::*;

fn main() -> Result<()> {
    println!("=== Country Explorer Search History Example ===\n");

    let dir = std::env::temp_dir().join("country-explorer-demo");
    let mut storage = FileStorage::new(&dir);
    storage.remove_item("searchHistory")?;

    {
        let mut store = GeoStore::new(&mut storage);
        for raw in ["  Peru ", "8.8.8.8", "12345", "<script>Chile</script>", "2001:db8::1"] {
            match store.begin_search(raw) {
                Some((query, kind)) => {
                    println!("{raw:?} -> {kind} search for {query:?}");
                    store.complete_search(&query, kind, serde_json::Value::Null);
                }
                None => println!(
                    "{raw:?} rejected: {}",
                    store.state().search_error.as_deref().unwrap_or("")
                ),
            }
        }
    }

    println!("\nReloading from {}", dir.display());
    let store = GeoStore::new(storage);
    for (i, entry) in store.state().search_history.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, entry.kind, entry.query);
    }

    Ok(())
}
