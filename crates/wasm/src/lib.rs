//! WASM bindings for smartquote
//!
//! This crate provides the JavaScript-friendly API the quotation editor calls:
//! - Line and document totals (VAT-exclusive and VAT-inclusive)
//! - Thai baht text and th-TH amount display
//! - Document numbers and due dates
//! - Whole form-state summaries with input validation
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { SmartQuote, ThaiFormatter } from 'smartquote-wasm';
//!
//! await init();
//!
//! const totals = SmartQuote.calculateTotals(items, true, 7, true);
//! totals.grandTotalText; // "สามแสนสี่หมื่นแปดพันบาทถ้วน"
//!
//! ThaiFormatter.formatCurrency(totals.preVatTotal); // "325,233.64"
//!
//! const docNumber = SmartQuote.generateDocNumber(docConfig, 2025, 1, 15);
//! const summary = JSON.parse(SmartQuote.summarize(JSON.stringify(state)));
//! ```

use chrono::NaiveDate;
use quote_core::{DocConfig, LineItem};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

fn items_from_js(items: JsValue) -> Result<Vec<LineItem>, JsValue> {
    serde_wasm_bindgen::from_value(items).map_err(to_js_error)
}

/// Thai text formatting utilities
#[wasm_bindgen]
pub struct ThaiFormatter;

#[wasm_bindgen]
impl ThaiFormatter {
    /// Format a number as Thai text
    ///
    /// @param n - Number to format
    /// @returns Thai text (e.g., "สี่สิบสอง")
    #[wasm_bindgen(js_name = formatNumber)]
    pub fn format_number(n: i64) -> String {
        thai_text::format_thai_number(n)
    }

    /// Format an amount as Thai Baht text
    ///
    /// @param amount - Amount in Baht
    /// @returns Thai text (e.g., "หนึ่งร้อยบาทถ้วน")
    #[wasm_bindgen(js_name = toThaiBahtText)]
    pub fn to_thai_baht_text(amount: f64) -> String {
        thai_text::to_thai_baht_text(amount)
    }

    /// Format an amount with thousands separators and two decimals
    ///
    /// @param amount - Amount in Baht
    /// @returns Display string (e.g., "1,234.50")
    #[wasm_bindgen(js_name = formatCurrency)]
    pub fn format_currency(amount: f64) -> String {
        thai_text::format_currency(amount)
    }

    /// Format a number with thousands separators and up to three decimals
    ///
    /// @param n - Number to format
    /// @returns Display string (e.g., "1,500")
    #[wasm_bindgen(js_name = formatDecimal)]
    pub fn format_decimal(n: f64) -> String {
        thai_text::format_decimal(n)
    }

    /// Render a float with formatting pattern
    ///
    /// @param format - Format pattern (e.g., "#,###.##")
    /// @param n - Number to format
    /// @returns Formatted string
    #[wasm_bindgen(js_name = renderFloat)]
    pub fn render_float(format: &str, n: f64) -> String {
        thai_text::render_float(format, n)
    }

    /// Convert a Gregorian year to the Buddhist calendar
    ///
    /// @param year - Gregorian year
    /// @returns Buddhist year (e.g., 2568)
    #[wasm_bindgen(js_name = buddhistYear)]
    pub fn buddhist_year(year: i32) -> i32 {
        thai_text::to_buddhist_year(year)
    }
}

/// Quotation calculations
#[wasm_bindgen]
pub struct SmartQuote;

#[wasm_bindgen]
impl SmartQuote {
    /// Calculate gross, discount and net amounts of one line
    ///
    /// @param item - LineItem object
    /// @returns { grossAmount, discountAmount, netAmount }
    #[wasm_bindgen(js_name = calculateLineItem)]
    pub fn calculate_line_item(item: JsValue) -> Result<JsValue, JsValue> {
        let item: LineItem = serde_wasm_bindgen::from_value(item).map_err(to_js_error)?;
        to_js(&quote_core::calculate_line_item(&item))
    }

    /// Calculate document totals
    ///
    /// Inputs are not validated; call validateItems first to reject bad rows.
    ///
    /// @param items - Array of LineItem objects
    /// @param vatEnabled - Whether VAT applies
    /// @param vatRate - Rate in percent (e.g., 7)
    /// @param priceIncludeVat - Prices already include VAT
    /// @returns TotalsSummary object
    #[wasm_bindgen(js_name = calculateTotals)]
    pub fn calculate_totals(
        items: JsValue,
        vat_enabled: bool,
        vat_rate: f64,
        price_include_vat: bool,
    ) -> Result<JsValue, JsValue> {
        let items = items_from_js(items)?;
        to_js(&quote_core::calculate_totals(
            &items,
            vat_enabled,
            vat_rate,
            price_include_vat,
        ))
    }

    /// Validate line items before calculation
    ///
    /// @param items - Array of LineItem objects
    /// @throws Error message naming the first rejected row
    #[wasm_bindgen(js_name = validateItems)]
    pub fn validate_items(items: JsValue) -> Result<(), JsValue> {
        let items = items_from_js(items)?;
        quote_core::validation::validate_items(&items).map_err(to_js_error)
    }

    /// Generate a document number for the given date
    ///
    /// @param config - DocConfig object
    /// @param year - Gregorian year
    /// @param month - Month (1-12)
    /// @param day - Day
    /// @returns Document number (e.g., "QT-6801001")
    #[wasm_bindgen(js_name = generateDocNumber)]
    pub fn generate_doc_number(
        config: JsValue,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<String, JsValue> {
        let config: DocConfig = serde_wasm_bindgen::from_value(config).map_err(to_js_error)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid date: {year}-{month}-{day}")))?;
        Ok(quote_core::generate_doc_number(&config, date))
    }

    /// Add valid days to an ISO date
    ///
    /// @param date - ISO date (YYYY-MM-DD)
    /// @param validDays - Days the quotation stays valid
    /// @returns ISO due date, or undefined if it cannot be computed
    #[wasm_bindgen(js_name = computeDueDate)]
    pub fn compute_due_date(date: &str, valid_days: u32) -> Option<String> {
        quote_core::compute_due_date(date, valid_days)
    }

    /// Validate and summarize a whole form state
    ///
    /// @param stateJson - Form state as JSON string
    /// @returns Summary as JSON string ({ docNumber, formType, lines, totals })
    pub fn summarize(state_json: &str) -> Result<String, JsValue> {
        quote_core::summarize_json(state_json).map_err(to_js_error)
    }
}
