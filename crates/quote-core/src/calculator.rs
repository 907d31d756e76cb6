//! Line and document totals
//!
//! Both functions are pure: nothing is rounded here and invalid numbers
//! (negative, NaN, infinite) flow through the arithmetic unchanged. Callers
//! that need guard rails run [`crate::validation`] first.

use thai_text::to_thai_baht_text;
use tracing::debug;

use crate::{DiscountType, LineItem, LineItemResult, TotalsSummary, VatConfig};

/// Compute gross, discount and net amounts of one line.
///
/// The discount is clamped so it never exceeds the line gross.
///
/// # Examples
/// ```
/// use quote_core::{calculate_line_item, LineItem};
///
/// let item = LineItem::new("Mouse", 2.0, "อัน", 450.0).with_percent_discount(10.0);
/// let result = calculate_line_item(&item);
/// assert_eq!(result.gross_amount, 900.0);
/// assert_eq!(result.discount_amount, 90.0);
/// assert_eq!(result.net_amount, 810.0);
/// ```
pub fn calculate_line_item(item: &LineItem) -> LineItemResult {
    let gross_amount = item.qty * item.price_per_unit;

    let raw_discount = match item.discount_type {
        DiscountType::Percent => gross_amount * (item.discount_value / 100.0),
        DiscountType::Amount => item.discount_value,
    };

    // NaN in either operand must stay NaN, which f64::min would hide
    let discount_amount = if gross_amount < raw_discount || gross_amount.is_nan() {
        gross_amount
    } else {
        raw_discount
    };

    LineItemResult {
        gross_amount,
        discount_amount,
        net_amount: gross_amount - discount_amount,
    }
}

/// Compute document totals for a list of items.
///
/// # Arguments
/// * `items` - Line items; order does not matter
/// * `vat_enabled` - Whether VAT applies at all
/// * `vat_rate` - Rate in percent (7 means 7%)
/// * `price_include_vat` - Prices already contain VAT, so it is extracted
///   instead of added
pub fn calculate_totals(
    items: &[LineItem],
    vat_enabled: bool,
    vat_rate: f64,
    price_include_vat: bool,
) -> TotalsSummary {
    calculate_totals_with(
        items,
        &VatConfig {
            enabled: vat_enabled,
            rate: vat_rate,
            price_includes_vat: price_include_vat,
        },
    )
}

/// Same as [`calculate_totals`], taking the VAT settings as one value.
pub fn calculate_totals_with(items: &[LineItem], vat: &VatConfig) -> TotalsSummary {
    let (total_gross, total_discount) =
        items
            .iter()
            .map(calculate_line_item)
            .fold((0.0, 0.0), |(gross, discount), line| {
                (gross + line.gross_amount, discount + line.discount_amount)
            });

    let net_amount = total_gross - total_discount;

    let (vat_amount, grand_total, pre_vat_total) = match (vat.enabled, vat.price_includes_vat) {
        (false, _) => (0.0, net_amount, net_amount),
        (true, false) => {
            let vat_amount = net_amount * (vat.rate / 100.0);
            (vat_amount, net_amount + vat_amount, net_amount)
        }
        (true, true) => {
            // Base * (1 + rate) = grand total
            let grand_total = net_amount;
            let base_amount = grand_total / (1.0 + vat.rate / 100.0);
            (grand_total - base_amount, grand_total, base_amount)
        }
    };

    debug!(
        items = items.len(),
        vat_enabled = vat.enabled,
        vat_rate = vat.rate,
        price_includes_vat = vat.price_includes_vat,
        grand_total,
        "Calculated totals"
    );

    TotalsSummary {
        total_ex_vat: total_gross,
        total_discount,
        subtotal_after_discount: net_amount,
        vat_amount,
        grand_total,
        grand_total_text: to_thai_baht_text(grand_total),
        price_include_vat: vat.price_includes_vat,
        pre_vat_total,
    }
}
