//! Form-state JSON parsing and whole-quotation summaries

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::validation::{validate_items, validate_vat};
use crate::{
    calculate_line_item, calculate_totals_with, FormType, LineItemResult, QuotationState,
    QuoteError, Result, TotalsSummary,
};

/// Parse the editor form state from JSON
pub fn parse_quotation(json: &str) -> Result<QuotationState> {
    serde_json::from_str(json).map_err(|e| QuoteError::ParseError(e.to_string()))
}

/// Everything the print layouts need beyond the raw form state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    pub doc_number: String,
    pub form_type: FormType,
    /// One result per active line item, in display order
    pub lines: Vec<LineItemResult>,
    pub totals: TotalsSummary,
}

/// Validate the active items and VAT settings, then compute line results and
/// document totals.
pub fn summarize(state: &QuotationState) -> Result<QuotationSummary> {
    let items = state.active_items();
    let vat = state.document.vat_config();

    validate_items(items)?;
    validate_vat(&vat)?;

    let lines = items.iter().map(calculate_line_item).collect();
    let totals = calculate_totals_with(items, &vat);

    debug!(
        doc_number = %state.document.doc_number,
        form_type = ?state.document.form_type,
        items = items.len(),
        "Summarized quotation"
    );

    Ok(QuotationSummary {
        doc_number: state.document.doc_number.clone(),
        form_type: state.document.form_type,
        lines,
        totals,
    })
}

/// Parse a form state and return its summary as JSON
pub fn summarize_json(json: &str) -> Result<String> {
    let state = parse_quotation(json)?;
    let summary = summarize(&state)?;
    Ok(serde_json::to_string(&summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_parse_minimal_state() {
        let state = parse_quotation("{}").unwrap();
        assert_eq!(state.document.vat_rate, 7.0);
        assert_eq!(state.document.valid_days, 30);
        assert!(state.active_items().is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_quotation("{ not json"),
            Err(QuoteError::ParseError(_))
        ));
    }

    #[test]
    fn test_summarize_rejects_invalid_items() {
        let json = r#"{
            "document": { "formType": "private" },
            "privateItems": [ { "qty": -1, "pricePerUnit": 100 } ]
        }"#;
        let state = parse_quotation(json).unwrap();

        assert!(matches!(
            summarize(&state),
            Err(QuoteError::Validation(ValidationError::Negative { index: 0, .. }))
        ));
    }

    #[test]
    fn test_summarize_json_uses_camel_case() {
        let json = r#"{ "governmentItems": [ { "qty": 2, "pricePerUnit": 50 } ] }"#;
        let output: serde_json::Value = serde_json::from_str(&summarize_json(json).unwrap()).unwrap();

        assert_eq!(output["formType"], "government");
        assert_eq!(output["lines"][0]["netAmount"], 100.0);
        assert_eq!(output["totals"]["subtotalAfterDiscount"], 100.0);
    }

    #[test]
    fn test_summarize_rejects_vat_rate() {
        let json = r#"{ "document": { "vatRate": 150 } }"#;
        let state = parse_quotation(json).unwrap();

        assert!(matches!(
            summarize(&state),
            Err(QuoteError::Validation(ValidationError::InvalidVatRate(_)))
        ));
    }
}
