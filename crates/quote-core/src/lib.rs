//! Quote Core - quotation pricing and VAT totals
//!
//! This crate provides:
//! - Quotation form-state types (company, customer, document, line items)
//! - Per-line discount and net amount calculation
//! - Document totals in VAT-exclusive and VAT-inclusive modes
//! - Grand total read as Thai baht text
//! - Auto-generated document numbers and due dates
//! - Validation of form input before calculation
//!
//! # Example
//!
//! ```
//! use quote_core::{calculate_totals, LineItem};
//!
//! let items = vec![
//!     LineItem::new("Notebook", 10.0, "เครื่อง", 25900.0),
//!     LineItem::new("Office", 10.0, "ชุด", 8900.0),
//! ];
//!
//! let totals = calculate_totals(&items, true, 7.0, true);
//! assert_eq!(totals.grand_total, 348000.0);
//! assert_eq!(totals.grand_total_text, "สามแสนสี่หมื่นแปดพันบาทถ้วน");
//! ```

mod calculator;
pub mod numbering;
pub mod parser;
mod schema;
pub mod validation;

pub use calculator::{calculate_line_item, calculate_totals, calculate_totals_with};
pub use numbering::{compute_due_date, generate_doc_number};
pub use parser::{parse_quotation, summarize, summarize_json, QuotationSummary};
pub use schema::*;
pub use validation::{ValidationError, MAX_LINE_ITEMS};

// Re-export the baht text reader so callers need a single dependency
pub use thai_text::to_thai_baht_text;

use thiserror::Error;

/// Errors that can occur while handling a quotation
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Failed to parse quotation: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for quotation operations
pub type Result<T> = std::result::Result<T, QuoteError>;
