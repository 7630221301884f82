//! Stateless conversions between the product DTOs and the entity.

use super::dtos::{ProductAddRequest, ProductResponse, ProductUpdateRequest, StockStatus};
use crate::domain::Product;

impl From<ProductAddRequest> for Product {
    fn from(request: ProductAddRequest) -> Self {
        Self {
            id: 0,
            product_name: request.product_name,
            sku: request.sku,
            category: request.category,
            price: request.price,
            quantity: request.quantity,
            date_added: request.date_added,
            location: request.location,
            is_active: request.is_active,
        }
    }
}

/// Copies every field except `id`; the identity is applied by the update merge.
impl From<ProductUpdateRequest> for Product {
    fn from(request: ProductUpdateRequest) -> Self {
        Self {
            id: 0,
            product_name: request.product_name,
            sku: request.sku,
            category: request.category,
            price: request.price,
            quantity: request.quantity,
            date_added: request.date_added,
            location: request.location,
            is_active: request.is_active,
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            product_name: product.product_name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: product.quantity,
            date_added: product.date_added,
            location: product.location.clone(),
            is_active: product.is_active,
            status: StockStatus::from_quantity(product.quantity),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}

/// Overwrite every mutable field of `target` with the request's values,
/// keeping `target`'s identity.
pub fn apply_update(target: &mut Product, request: ProductUpdateRequest) {
    let id = target.id;
    *target = Product {
        id,
        ..Product::from(request)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn stored() -> Product {
        Product {
            id: 7,
            product_name: Some("Mouse".into()),
            sku: Some("ELEC-0001".into()),
            category: Some("Hardware".into()),
            price: Some(Decimal::new(849, 2)),
            quantity: Some(25),
            date_added: NaiveDate::from_ymd_opt(2025, 6, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            location: Some("A-01".into()),
            is_active: true,
        }
    }

    #[test]
    fn test_add_request_never_carries_an_identity() {
        let request = ProductAddRequest {
            product_name: Some("Keyboard".into()),
            quantity: Some(3),
            is_active: true,
            ..ProductAddRequest::default()
        };

        let product = Product::from(request);

        assert_eq!(product.id, 0);
        assert_eq!(product.product_name.as_deref(), Some("Keyboard"));
        assert_eq!(product.quantity, Some(3));
        assert!(product.is_active);
    }

    #[test]
    fn test_update_replaces_every_field_but_identity() {
        let mut product = stored();
        let request = ProductUpdateRequest {
            id: 999,
            product_name: Some("Mouse (Updated)".into()),
            quantity: Some(42),
            ..ProductUpdateRequest::default()
        };

        apply_update(&mut product, request);

        assert_eq!(product.id, 7);
        assert_eq!(product.product_name.as_deref(), Some("Mouse (Updated)"));
        assert_eq!(product.quantity, Some(42));
        // Omitted fields are cleared, not kept.
        assert_eq!(product.sku, None);
        assert_eq!(product.price, None);
        assert_eq!(product.location, None);
        assert!(!product.is_active);
    }

    #[test]
    fn test_response_copies_fields_and_derives_status() {
        let mut product = stored();
        product.quantity = Some(4);

        let response = ProductResponse::from(&product);

        assert_eq!(response.id, 7);
        assert_eq!(response.sku, product.sku);
        assert_eq!(response.price, product.price);
        assert_eq!(response.date_added, product.date_added);
        assert_eq!(response.status(), StockStatus::LowStock);
    }
}
