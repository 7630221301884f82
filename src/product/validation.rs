//! Field-shape validation run at the boundary, before a request reaches the
//! service.

use garde::Validate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::entity::fits_price_column;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Validate a request DTO, collecting every violation rather than stopping
/// at the first.
pub fn validate_request<T>(request: &T) -> Result<(), Vec<FieldViolation>>
where
    T: Validate,
    T::Context: Default,
{
    request.validate().map_err(|report| {
        report
            .iter()
            .map(|(path, error)| {
                let field = path.to_string();
                FieldViolation {
                    field: if field.is_empty() { "value".to_string() } else { field },
                    message: error.message().to_string(),
                }
            })
            .collect()
    })
}

/// Character-count bounds for an optional text field, reported with the
/// field's display name.
fn char_length(
    value: &Option<String>,
    label: &str,
    min: usize,
    max: usize,
    example: Option<&str>,
) -> garde::Result {
    let Some(value) = value else {
        return Ok(());
    };
    let len = value.chars().count();
    if (min..=max).contains(&len) {
        return Ok(());
    }

    let mut message = if min == max {
        format!("{} length must be exactly {} characters long.", label, max)
    } else {
        format!("{} length must be between {} and {} characters.", label, min, max)
    };
    if let Some(example) = example {
        message.push_str(&format!(" Example: {}", example));
    }
    Err(garde::Error::new(message))
}

pub(super) fn product_name_length(value: &Option<String>, _ctx: &()) -> garde::Result {
    char_length(value, "Product Name", 3, 50, None)
}

pub(super) fn sku_length(value: &Option<String>, _ctx: &()) -> garde::Result {
    char_length(value, "SKU", 8, 10, Some("TEST-0001"))
}

pub(super) fn category_length(value: &Option<String>, _ctx: &()) -> garde::Result {
    char_length(value, "Category", 3, 20, None)
}

pub(super) fn location_length(value: &Option<String>, _ctx: &()) -> garde::Result {
    char_length(value, "Location", 4, 4, Some("A-01"))
}

pub(super) fn price_fits_column(price: &Option<Decimal>, _ctx: &()) -> garde::Result {
    match price {
        Some(price) if !fits_price_column(price) => Err(garde::Error::new(
            "Price must fit 18 digits with 2 decimal places.",
        )),
        _ => Ok(()),
    }
}
