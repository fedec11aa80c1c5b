//! Demo catalog seeded into the store on startup.

use chrono::{Duration, Utc};
use domain_products::Product;
use rust_decimal::Decimal;

/// The demo catalog: three products with ids 1-3 and staggered creation
/// dates. A freshly seeded store hands out id 4 next.
pub fn demo_catalog() -> Vec<Product> {
    let now = Utc::now();

    vec![
        Product {
            id: 1,
            name: "Laptop".to_string(),
            description: "High-performance laptop".to_string(),
            price: Decimal::new(1299_99, 2),
            stock_quantity: 50,
            created_date: now - Duration::days(30),
        },
        Product {
            id: 2,
            name: "Smartphone".to_string(),
            description: "Latest model smartphone".to_string(),
            price: Decimal::new(899_99, 2),
            stock_quantity: 100,
            created_date: now - Duration::days(20),
        },
        Product {
            id: 3,
            name: "Headphones".to_string(),
            description: "Noise-cancelling headphones".to_string(),
            price: Decimal::new(249_99, 2),
            stock_quantity: 75,
            created_date: now - Duration::days(10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_ids_are_sequential() {
        let catalog = demo_catalog();
        let ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_demo_catalog_prices() {
        let catalog = demo_catalog();
        assert_eq!(catalog[0].price, "1299.99".parse::<Decimal>().unwrap());
        assert_eq!(catalog[1].price, "899.99".parse::<Decimal>().unwrap());
        assert_eq!(catalog[2].price, "249.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_demo_catalog_creation_dates_ascend() {
        let catalog = demo_catalog();
        assert!(catalog[0].created_date < catalog[1].created_date);
        assert!(catalog[1].created_date < catalog[2].created_date);
    }
}
