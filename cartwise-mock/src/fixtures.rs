use cartwise_types::{PlatformId, PlatformPrice, Product};
use rust_decimal::Decimal;

use PlatformId::{BigBasket, Blinkit, Instamart, JioMart, Zepto};

pub const CATALOG_JSON: &str = r#"[
    {
        "id": "tea-250g",
        "name": "Assam Tea",
        "unit": "250 g",
        "category": "beverages",
        "prices": [
            { "platform": "blinkit", "price": "140.00", "available": true },
            { "platform": "zepto", "price": "135.00", "available": true },
            { "platform": "big-basket", "price": "129.00", "available": false }
        ]
    },
    {
        "id": "sugar-1kg",
        "name": "Sugar",
        "unit": "1 kg",
        "category": "staples",
        "prices": [
            { "platform": "blinkit", "price": "52.00", "available": true },
            { "platform": "zepto", "price": "54.00", "available": true },
            { "platform": "big-basket", "price": "49.00", "available": true }
        ]
    },
    {
        "id": "coffee-100g",
        "name": "Filter Coffee",
        "unit": "100 g",
        "category": "beverages",
        "prices": [
            { "platform": "zepto", "price": "210.00", "available": true }
        ]
    }
]"#;

fn rs(paise: i64) -> Decimal {
    Decimal::new(paise, 2)
}

fn on(platform: PlatformId, paise: i64) -> PlatformPrice {
    PlatformPrice::available(platform, rs(paise))
}

fn off(platform: PlatformId, paise: i64) -> PlatformPrice {
    PlatformPrice::unavailable(platform, rs(paise))
}

fn p(id: &str, name: &str, unit: &str, category: &str, prices: Vec<PlatformPrice>) -> Option<Product> {
    let product = Product::new(id, name, unit, prices).expect("valid fixture");
    Some(product.with_category(category))
}

pub fn by_id(id: &str) -> Option<Product> {
    match id {
        "milk-500ml" => p(
            id,
            "Toned Milk",
            "500 ml",
            "dairy",
            vec![
                on(Blinkit, 2700),
                on(Zepto, 2600),
                on(Instamart, 2700),
                on(JioMart, 2500),
                on(BigBasket, 2650),
            ],
        ),
        "atta-5kg" => p(
            id,
            "Whole Wheat Atta",
            "5 kg",
            "staples",
            vec![
                on(Blinkit, 24500),
                on(Zepto, 23900),
                on(Instamart, 25000),
                on(JioMart, 22900),
                on(BigBasket, 23500),
            ],
        ),
        "brown-bread" => p(
            id,
            "Brown Bread",
            "400 g",
            "bakery",
            vec![
                on(Blinkit, 5000),
                off(Zepto, 4500),
                on(Instamart, 4800),
                on(BigBasket, 4900),
            ],
        ),
        "eggs-6" => p(
            id,
            "Farm Eggs",
            "6 pcs",
            "dairy",
            vec![
                on(Blinkit, 5400),
                on(Zepto, 5200),
                on(Instamart, 5600),
                on(JioMart, 4900),
            ],
        ),
        "banana-1dz" => p(
            id,
            "Robusta Banana",
            "12 pcs",
            "fruits",
            vec![
                on(Blinkit, 6900),
                on(Zepto, 6500),
                off(Instamart, 6000),
                on(JioMart, 5900),
            ],
        ),
        "cola-750ml" => p(
            id,
            "Cola",
            "750 ml",
            "beverages",
            vec![on(Blinkit, 4000), on(Zepto, 4000), on(Instamart, 3800)],
        ),
        "chips-52g" => p(
            id,
            "Salted Chips",
            "52 g",
            "snacks",
            vec![on(Blinkit, 2000), on(Zepto, 2000), on(JioMart, 2000)],
        ),
        "saffron-1g" => p(
            id,
            "Kashmiri Saffron",
            "1 g",
            "spices",
            vec![off(Blinkit, 34900), off(Zepto, 32900)],
        ),
        _ => None,
    }
}
