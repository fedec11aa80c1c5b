use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a single item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store on creation.
    ///
    /// Ids are strictly increasing for the lifetime of the store and are
    /// never reassigned, even after deletion.
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Unit price as a fixed-point decimal (fractional cents survive exactly;
    /// binary floats would not)
    pub price: Decimal,
    /// Units on hand, never negative
    pub stock_quantity: u32,
    /// Set once at creation, never modified by updates
    pub created_date: DateTime<Utc>,
}

/// DTO for creating a new product.
///
/// Carries only the caller-controlled fields: `id` and `created_date` are
/// assigned by the store, and any such keys in the request body are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: u32,
}

/// DTO for updating an existing product.
///
/// Updates overwrite all four mutable fields. The identity fields (`id`,
/// `created_date`) are not representable here, so a payload naming them
/// cannot change them.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: u32,
}

impl Product {
    /// Build a stored product from a create payload.
    ///
    /// The store passes the assigned id; `created_date` is stamped here.
    pub(crate) fn new(id: u64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock_quantity: input.stock_quantity,
            created_date: Utc::now(),
        }
    }

    /// Overwrite the mutable fields from an update payload.
    ///
    /// `id` and `created_date` are identity fields and are never touched.
    pub(crate) fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.stock_quantity = update.stock_quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_ignores_unknown_fields() {
        // Clients may echo back a full product; identity fields must not bind.
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "id": 999,
            "created_date": "2020-01-01T00:00:00Z",
            "name": "Tablet",
            "price": "499.99",
            "stock_quantity": 30
        }))
        .unwrap();

        assert_eq!(input.name, "Tablet");
        assert_eq!(input.price, "499.99".parse::<Decimal>().unwrap());
        assert_eq!(input.stock_quantity, 30);
    }

    #[test]
    fn test_create_product_defaults() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "Tablet",
            "price": "499.99"
        }))
        .unwrap();

        assert_eq!(input.description, "");
        assert_eq!(input.stock_quantity, 0);
    }

    #[test]
    fn test_negative_stock_is_rejected_at_deserialization() {
        let result = serde_json::from_value::<CreateProduct>(serde_json::json!({
            "name": "Tablet",
            "price": "499.99",
            "stock_quantity": -5
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let input = CreateProduct {
            name: String::new(),
            description: String::new(),
            price: "1.00".parse().unwrap(),
            stock_quantity: 0,
        };

        assert!(validator::Validate::validate(&input).is_err());
    }

    #[test]
    fn test_apply_update_preserves_identity_fields() {
        let mut product = Product::new(
            1,
            CreateProduct {
                name: "Laptop".to_string(),
                description: "High-performance laptop".to_string(),
                price: "1299.99".parse().unwrap(),
                stock_quantity: 50,
            },
        );
        let created = product.created_date;

        product.apply_update(UpdateProduct {
            name: "Updated Laptop".to_string(),
            description: "Updated description".to_string(),
            price: "1499.99".parse().unwrap(),
            stock_quantity: 25,
        });

        assert_eq!(product.id, 1);
        assert_eq!(product.created_date, created);
        assert_eq!(product.name, "Updated Laptop");
        assert_eq!(product.price, "1499.99".parse::<Decimal>().unwrap());
        assert_eq!(product.stock_quantity, 25);
    }
}
