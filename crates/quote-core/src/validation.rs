//! Input checks for form data before it reaches the calculator
//!
//! The calculator itself accepts anything; this module is the boundary the UI
//! layer calls to refuse values that would print a nonsensical quotation.

use thiserror::Error;
use tracing::debug;

use crate::{DiscountType, LineItem, VatConfig};

/// Maximum number of line items the print layouts have room for
pub const MAX_LINE_ITEMS: usize = 10;

/// A rejected form value
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("item {index}: {field} must be a finite number")]
    NotFinite { index: usize, field: &'static str },

    #[error("item {index}: {field} must not be negative (got {value})")]
    Negative {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("item {index}: percent discount must be at most 100 (got {value})")]
    PercentTooLarge { index: usize, value: f64 },

    #[error("VAT rate must be between 0 and 100 (got {0})")]
    InvalidVatRate(f64),

    #[error("too many line items: {count} (maximum {max})")]
    TooManyItems { count: usize, max: usize },
}

/// Result type for validation
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

fn check_amount(index: usize, field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { index, field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            index,
            field,
            value,
        });
    }
    Ok(())
}

/// Validate one line item.
///
/// `index` is the zero-based row number used in error messages.
pub fn validate_line_item(index: usize, item: &LineItem) -> ValidationResult<()> {
    check_amount(index, "qty", item.qty)?;
    check_amount(index, "pricePerUnit", item.price_per_unit)?;
    check_amount(index, "discountValue", item.discount_value)?;

    if item.discount_type == DiscountType::Percent && item.discount_value > 100.0 {
        return Err(ValidationError::PercentTooLarge {
            index,
            value: item.discount_value,
        });
    }

    Ok(())
}

/// Validate a whole item list, including its length.
pub fn validate_items(items: &[LineItem]) -> ValidationResult<()> {
    if items.len() > MAX_LINE_ITEMS {
        return Err(ValidationError::TooManyItems {
            count: items.len(),
            max: MAX_LINE_ITEMS,
        });
    }

    for (index, item) in items.iter().enumerate() {
        validate_line_item(index, item).inspect_err(|err| {
            debug!(index, error = %err, "Rejected line item");
        })?;
    }

    Ok(())
}

/// Validate VAT settings. A disabled VAT config is accepted as is.
pub fn validate_vat(vat: &VatConfig) -> ValidationResult<()> {
    if vat.enabled && !(vat.rate.is_finite() && (0.0..=100.0).contains(&vat.rate)) {
        return Err(ValidationError::InvalidVatRate(vat.rate));
    }
    Ok(())
}
