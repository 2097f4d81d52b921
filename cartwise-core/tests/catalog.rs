use cartwise_core::{Catalog, CatalogQuery, CartwiseError, ProductId, ProductSort};

fn catalog() -> Catalog {
    Catalog::new(cartwise_mock::products()).unwrap()
}

fn ids(q: &CatalogQuery) -> Vec<String> {
    catalog()
        .query(q)
        .iter()
        .map(|p| p.id().to_string())
        .collect()
}

#[test]
fn featured_keeps_catalog_order() {
    let expected: Vec<String> = cartwise_mock::PRODUCT_IDS
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    assert_eq!(ids(&CatalogQuery::all()), expected);
}

#[test]
fn text_filter_is_case_insensitive() {
    assert_eq!(ids(&CatalogQuery::all().text("  BREAD ")), vec!["brown-bread"]);
    assert_eq!(ids(&CatalogQuery::all().text("   ")).len(), 8);
}

#[test]
fn category_filter_keeps_catalog_order() {
    assert_eq!(
        ids(&CatalogQuery::all().category("dairy")),
        vec!["milk-500ml", "eggs-6"]
    );
    assert!(ids(&CatalogQuery::all().category("frozen")).is_empty());
}

#[test]
fn price_sort_uses_cheapest_available_price() {
    assert_eq!(
        ids(&CatalogQuery::all().sort(ProductSort::PriceAsc)),
        vec![
            "chips-52g",
            "milk-500ml",
            "cola-750ml",
            "brown-bread",
            "eggs-6",
            "banana-1dz",
            "atta-5kg",
            "saffron-1g",
        ]
    );
    let desc = ids(&CatalogQuery::all().sort(ProductSort::PriceDesc));
    assert_eq!(desc.first().map(String::as_str), Some("atta-5kg"));
    // Unavailable everywhere still sorts last.
    assert_eq!(desc.last().map(String::as_str), Some("saffron-1g"));
}

#[test]
fn name_sort_ignores_case() {
    let asc = ids(&CatalogQuery::all().sort(ProductSort::NameAsc));
    assert_eq!(asc.first().map(String::as_str), Some("brown-bread"));
    assert_eq!(asc.last().map(String::as_str), Some("atta-5kg"));
    let mut desc = ids(&CatalogQuery::all().sort(ProductSort::NameDesc));
    desc.reverse();
    assert_eq!(desc, asc);
}

#[test]
fn categories_are_distinct_and_sorted() {
    assert_eq!(
        catalog().categories(),
        vec!["bakery", "beverages", "dairy", "fruits", "snacks", "spices", "staples"]
    );
}

#[test]
fn loads_from_json_and_looks_up_by_id() {
    let c = Catalog::from_json_str(cartwise_mock::catalog_json()).unwrap();
    assert_eq!(c.len(), 3);
    let coffee = c.get(&ProductId::new("coffee-100g")).unwrap();
    assert_eq!(coffee.prices().len(), 1);
    assert!(c.get(&ProductId::new("missing")).is_none());
}

#[test]
fn rejects_duplicate_product_ids() {
    let milk = cartwise_mock::product("milk-500ml").unwrap();
    let err = Catalog::new([milk.clone(), milk]).unwrap_err();
    assert!(matches!(err, CartwiseError::InvalidArg(_)));
}

#[test]
fn every_sort_order_lists_the_whole_catalog() {
    let all = [
        ProductSort::Featured,
        ProductSort::NameAsc,
        ProductSort::NameDesc,
        ProductSort::PriceAsc,
        ProductSort::PriceDesc,
    ];
    let expected = cartwise_mock::PRODUCT_IDS.len();
    for sort in all {
        // Exhaustive on purpose: a new sort order must be listed above.
        let label = match sort {
            ProductSort::Featured => "featured",
            ProductSort::NameAsc => "name-asc",
            ProductSort::NameDesc => "name-desc",
            ProductSort::PriceAsc => "price-asc",
            ProductSort::PriceDesc => "price-desc",
        };
        let listed = ids(&CatalogQuery::all().sort(sort));
        assert_eq!(listed.len(), expected, "sort {label}");
    }
}
