use cartwise::{Catalog, CatalogQuery, PlatformId, ProductId, ProductSort, ShopStore};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug together with `--features tracing` shows store and ranker events.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1. Load the fixture catalog and build the store.
    let catalog = Catalog::new(cartwise_mock::products())?;
    let mut store = ShopStore::builder()
        .catalog(catalog)
        .platforms(cartwise_mock::platforms())
        .build()?;

    // 2. Browse: cheapest dairy first.
    let dairy = store.browse(&CatalogQuery::all().category("dairy").sort(ProductSort::PriceAsc));
    for p in dairy.iter() {
        let from = p.lowest_available_price().map(|x| x.price.to_string());
        println!("{:<20} {:<8} from {}", p.name(), p.unit(), from.as_deref().unwrap_or("-"));
    }

    // 3. Fill the cart; atta is pinned to JioMart.
    store.add_to_cart(&ProductId::new("milk-500ml"), 2, None)?;
    store.add_to_cart(&ProductId::new("brown-bread"), 1, None)?;
    store.add_to_cart(&ProductId::new("atta-5kg"), 1, Some(PlatformId::JioMart))?;
    tracing::info!(items = store.item_count(), "cart ready");

    // 4. Compare platforms.
    let cmp = store.comparison();
    for r in cmp.results() {
        match r.total {
            Some(total) => println!("{:<18} {total}", r.platform.name),
            None => {
                let missing: Vec<&str> = r.unavailable_items.iter().map(|e| e.product.name()).collect();
                println!("{:<18} unavailable: {}", r.platform.name, missing.join(", "));
            }
        }
    }

    match cmp.best_deal() {
        Some(best) => println!(
            "best deal: {} (save up to {})",
            best.platform.name,
            cmp.savings().unwrap_or_default()
        ),
        None => println!("no platform can deliver the whole cart"),
    }

    Ok(())
}
