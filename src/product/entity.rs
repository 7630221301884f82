use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Product;
use crate::store::Entity;

/// Fractional digits kept by the `decimal(18, 2)` price column.
pub const PRICE_SCALE: u32 = 2;

/// Rounds half away from zero and pads to the column's scale, as the
/// database does on insert.
pub fn round_price(price: Decimal) -> Decimal {
    let mut rounded =
        price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

/// Whether `price` can be stored in `decimal(18, 2)` once rounded.
pub fn fits_price_column(price: &Decimal) -> bool {
    let limit = Decimal::from(10_i64.pow(18 - PRICE_SCALE));
    round_price(*price).abs() < limit
}

impl Entity for Product {
    type Id = i32;

    fn id(&self) -> i32 {
        self.id
    }

    fn is_transient(&self) -> bool {
        self.id == 0
    }

    fn assign_id(&mut self, id: i32) {
        self.id = id;
    }

    fn next_id(last: Option<i32>) -> Option<i32> {
        match last {
            Some(last) => last.checked_add(1),
            None => Some(1),
        }
    }

    /// Rounds the price to the column's scale. String widths are left to the
    /// boundary validation and, on PostgreSQL, to the schema.
    fn enforce_columns(&mut self) -> Result<(), String> {
        if let Some(price) = self.price {
            if !fits_price_column(&price) {
                return Err(format!("Numeric overflow in column price: {}", price));
            }
            self.price = Some(round_price(price));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_rounded_to_two_places() {
        let mut product = Product {
            price: Some(Decimal::new(19_995, 3)),
            ..Product::default()
        };

        product.enforce_columns().unwrap();

        assert_eq!(product.price, Some(Decimal::new(2000, 2)));
    }

    #[test]
    fn test_whole_prices_are_stored_at_column_scale() {
        let mut product = Product {
            price: Some(Decimal::from(5)),
            ..Product::default()
        };

        product.enforce_columns().unwrap();

        let price = product.price.unwrap();
        assert_eq!(price.scale(), PRICE_SCALE);
        assert_eq!(price.to_string(), "5.00");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_price(Decimal::new(12_345, 3)), Decimal::new(1235, 2));
        assert_eq!(round_price(Decimal::new(-12_345, 3)), Decimal::new(-1235, 2));
    }

    #[test]
    fn test_price_overflow_is_rejected() {
        let mut product = Product {
            price: Some(Decimal::from(10_i64.pow(16))),
            ..Product::default()
        };

        let err = product.enforce_columns().unwrap_err();
        assert!(err.contains("price"));
    }

    #[test]
    fn test_price_range() {
        assert!(fits_price_column(&Decimal::new(9_999_999_999_999_999, 0)));
        assert!(!fits_price_column(&Decimal::from(10_i64.pow(16))));
        assert!(fits_price_column(&Decimal::new(-1299, 2)));
    }

    #[test]
    fn test_string_widths_are_not_enforced_in_memory() {
        let mut product = Product {
            sku: Some("SKU-UPDATED".into()),
            ..Product::default()
        };

        assert!(product.enforce_columns().is_ok());
    }

    #[test]
    fn test_identity_sequence() {
        assert_eq!(Product::next_id(None), Some(1));
        assert_eq!(Product::next_id(Some(41)), Some(42));
        assert_eq!(Product::next_id(Some(i32::MAX)), None);
        assert!(Product::default().is_transient());
    }
}
