//! Test fixtures: a running table pre-loaded with three products.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::domain::Product;
use crate::store::messages::Change;
use crate::store::{DbContext, TableActor, TableClient};

pub fn added_on(day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 6, day).and_then(|d| d.and_hms_opt(9, 30, 0))
}

/// Keyboard (10 in stock), Mouse (25) and an inactive Mona Lisa Painting (5),
/// with identities 1, 2 and 3.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            product_name: Some("Keyboard".into()),
            category: Some("Hardware".into()),
            price: Some(Decimal::new(1299, 2)),
            quantity: Some(10),
            date_added: added_on(3),
            is_active: true,
            ..Product::default()
        },
        Product {
            id: 2,
            product_name: Some("Mouse".into()),
            category: Some("Hardware".into()),
            price: Some(Decimal::new(849, 2)),
            quantity: Some(25),
            date_added: added_on(2),
            is_active: true,
            ..Product::default()
        },
        Product {
            id: 3,
            product_name: Some("Mona Lisa Painting".into()),
            category: Some("Decorations".into()),
            price: Some(Decimal::new(19999, 2)),
            quantity: Some(5),
            date_added: added_on(1),
            is_active: false,
            ..Product::default()
        },
    ]
}

pub async fn seeded_table() -> TableClient<Product> {
    let (actor, table) = TableActor::new(16);
    tokio::spawn(actor.run());
    let changes = sample_products().into_iter().map(Change::Insert).collect();
    table.commit(changes).await.expect("fixture rows commit");
    table
}

pub async fn seeded_context() -> (DbContext<Product>, TableClient<Product>) {
    let table = seeded_table().await;
    (DbContext::new(table.clone()), table)
}
