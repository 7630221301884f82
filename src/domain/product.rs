use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A catalogue item as persisted in the `products` table.
///
/// `id` is assigned by the store on insert; `0` marks a product that has not
/// been stored yet. Every other column is nullable except `is_active`.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub product_name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub date_added: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub is_active: bool,
}
