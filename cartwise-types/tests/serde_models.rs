use cartwise_types::{
    CartwiseError, Decimal, PlatformId, Product, ProductSort, ShopConfig, UnavailableOrder,
};

#[test]
fn product_deserializes_and_keeps_category() {
    let json = r#"{
        "id": "atta-5kg",
        "name": "Whole Wheat Atta",
        "unit": "5 kg",
        "category": "staples",
        "prices": [
            { "platform": "blinkit", "price": "245.00", "available": true },
            { "platform": "zepto", "price": 239, "available": false }
        ]
    }"#;
    let p: Product = serde_json::from_str(json).expect("deserialize product");
    assert_eq!(p.id().as_str(), "atta-5kg");
    assert_eq!(p.category(), Some("staples"));
    assert_eq!(p.prices().len(), 2);
    let zepto = p.price_on(PlatformId::Zepto).unwrap();
    assert_eq!(zepto.price, Decimal::new(239, 0));
    assert!(!zepto.available);
}

#[test]
fn product_deserialization_rejects_duplicate_platforms() {
    let json = r#"{
        "id": "atta-5kg",
        "name": "Whole Wheat Atta",
        "unit": "5 kg",
        "prices": [
            { "platform": "blinkit", "price": "245", "available": true },
            { "platform": "blinkit", "price": "240", "available": true }
        ]
    }"#;
    let res: Result<Product, _> = serde_json::from_str(json);
    let err = res.expect_err("duplicate platform must be rejected");
    assert!(err.to_string().contains("more than one price"));
}

#[test]
fn shop_config_roundtrip() {
    let cfg = ShopConfig {
        selected_platform: PlatformId::Zepto,
        unavailable_order: UnavailableOrder::FewestMissing,
        catalog_cache_capacity: 8,
        ..ShopConfig::default()
    };

    let json = serde_json::to_string(&cfg).expect("serialize shop config");
    let de = ShopConfig::from_json_str(&json).expect("deserialize shop config");

    assert_eq!(de, cfg);
}

#[test]
fn shop_config_fills_missing_fields_with_defaults() {
    let cfg = ShopConfig::from_json_str(r#"{ "selected_platform": "instamart" }"#).unwrap();
    assert_eq!(cfg.selected_platform, PlatformId::Instamart);
    assert_eq!(cfg.platforms.len(), PlatformId::ALL.len());
    assert_eq!(cfg.unavailable_order, UnavailableOrder::InputOrder);
}

#[test]
fn shop_config_rejects_unconfigured_selection() {
    let json = r#"{
        "platforms": [{ "id": "zepto", "name": "Zepto" }],
        "selected_platform": "blinkit"
    }"#;
    let err = ShopConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, CartwiseError::Config(_)));
    assert!(err.is_data_error());
}

#[test]
fn shop_config_rejects_malformed_json() {
    let err = ShopConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, CartwiseError::Config(_)));
}

#[test]
fn product_sort_default_is_featured() {
    assert_eq!(ProductSort::default(), ProductSort::Featured);
}
