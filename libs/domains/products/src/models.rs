use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage-generated product identifier
pub type ProductId = i64;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: ProductId,
    #[schema(example = "Mouse - Testing")]
    pub name: String,
    #[schema(example = 48.0)]
    pub price: f64,
    /// `true` on creation, flipped by the availability toggle
    pub availability: bool,
}

impl Product {
    /// Overwrite every mutable field.
    pub fn apply_replace(&mut self, input: ReplaceProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}

/// Body of `POST /`
///
/// `price` also accepts a numeric string such as `"48.5"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Mouse - Testing")]
    pub name: String,
    #[schema(example = 48.0)]
    pub price: f64,
}

/// Body of `PUT /{id}`
///
/// `availability` also accepts `"true"`, `"false"`, `"1"` and `"0"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReplaceProduct {
    #[schema(example = "Monitor curvo")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    pub availability: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Mouse".to_string(),
            price: 48.0,
            availability: true,
        }
    }

    #[test]
    fn test_apply_replace_keeps_id() {
        let mut p = product();
        p.apply_replace(ReplaceProduct {
            name: "Monitor".to_string(),
            price: 300.0,
            availability: false,
        });

        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Monitor");
        assert_eq!(p.price, 300.0);
        assert!(!p.availability);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut p = product();
        p.toggle_availability();
        assert!(!p.availability);
        p.toggle_availability();
        assert!(p.availability);
    }

    #[test]
    fn test_product_wire_shape() {
        let json = serde_json::to_value(product()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "Mouse", "price": 48.0, "availability": true })
        );
    }
}
