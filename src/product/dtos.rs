use std::fmt;

use chrono::NaiveDateTime;
use garde::Validate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{
    category_length, location_length, price_fits_column, product_name_length, sku_length,
};

/// Input for creating a product. The store assigns the identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductAddRequest {
    #[garde(custom(product_name_length))]
    pub product_name: Option<String>,
    #[garde(custom(sku_length))]
    pub sku: Option<String>,
    #[garde(custom(category_length))]
    pub category: Option<String>,
    #[garde(custom(price_fits_column))]
    pub price: Option<Decimal>,
    #[garde(skip)]
    pub quantity: Option<i32>,
    #[garde(skip)]
    pub date_added: Option<NaiveDateTime>,
    #[garde(custom(location_length))]
    pub location: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub is_active: bool,
}

/// Input for replacing every mutable field of the product selected by `id`.
///
/// Fields left as `None` are written as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    #[garde(skip)]
    pub id: i32,
    #[garde(custom(product_name_length))]
    pub product_name: Option<String>,
    #[garde(custom(sku_length))]
    pub sku: Option<String>,
    #[garde(custom(category_length))]
    pub category: Option<String>,
    #[garde(custom(price_fits_column))]
    pub price: Option<Decimal>,
    #[garde(skip)]
    pub quantity: Option<i32>,
    #[garde(skip)]
    pub date_added: Option<NaiveDateTime>,
    #[garde(custom(location_length))]
    pub location: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub is_active: bool,
}

/// Stock classification derived from a product's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Quantities below this are low stock.
    pub const LOW_STOCK_THRESHOLD: i32 = 10;

    /// `0` is out of stock and anything under the threshold is low stock.
    /// Everything else, an unknown quantity included, counts as in stock.
    pub fn from_quantity(quantity: Option<i32>) -> Self {
        match quantity {
            Some(0) => StockStatus::OutOfStock,
            Some(q) if q < Self::LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        };
        f.write_str(label)
    }
}

/// Read-only projection of a product handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub date_added: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub is_active: bool,
    pub(super) status: StockStatus,
}

impl ProductResponse {
    pub fn status(&self) -> StockStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StockStatus::from_quantity(Some(0)), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(Some(1)), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(Some(9)), StockStatus::LowStock);
        assert_eq!(StockStatus::from_quantity(Some(10)), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(Some(5_000)), StockStatus::InStock);
    }

    #[test]
    fn test_unusual_quantities() {
        assert_eq!(StockStatus::from_quantity(None), StockStatus::InStock);
        assert_eq!(StockStatus::from_quantity(Some(-3)), StockStatus::LowStock);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(StockStatus::InStock.to_string(), "In Stock");
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
        assert_eq!(StockStatus::OutOfStock.to_string(), "Out of Stock");
    }

    #[test]
    fn test_requests_read_camel_case_fields() {
        let request: ProductAddRequest = toml::from_str(
            r#"
            productName = "Wireless Mouse"
            sku = "ELEC-0001"
            price = "29.99"
            quantity = 150
            dateAdded = "2025-06-01T00:00:00"
            "#,
        )
        .unwrap();

        assert_eq!(request.product_name.as_deref(), Some("Wireless Mouse"));
        assert_eq!(request.price, Some(Decimal::new(2999, 2)));
        assert_eq!(request.quantity, Some(150));
        assert!(request.date_added.is_some());
        assert_eq!(request.category, None);
        assert!(!request.is_active);

        let update: ProductUpdateRequest =
            toml::from_str("id = 2\nisActive = true\n").unwrap();
        assert_eq!(update.id, 2);
        assert!(update.is_active);
    }

    #[test]
    fn test_response_writes_camel_case_fields() {
        let response = ProductResponse {
            id: 1,
            product_name: Some("Keyboard".into()),
            sku: None,
            category: Some("Hardware".into()),
            price: Some(Decimal::new(1299, 2)),
            quantity: Some(4),
            date_added: None,
            location: None,
            is_active: true,
            status: StockStatus::from_quantity(Some(4)),
        };

        let written = toml::to_string(&response).unwrap();

        assert!(written.contains("productName = \"Keyboard\""));
        assert!(written.contains("isActive = true"));
        assert!(written.contains("price = \"12.99\""));
        assert!(written.contains("status = \"LowStock\""));
        assert!(!written.contains("product_name"));
    }
}
