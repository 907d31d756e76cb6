//! Quotation form-state schema types
//!
//! Field names follow the camelCase JSON the browser form keeps, so a saved
//! form state deserializes directly into [`QuotationState`].

use serde::{Deserialize, Serialize};

/// Default VAT rate in percent
pub const DEFAULT_VAT_RATE: f64 = 7.0;

/// Default number of days a quotation stays valid
pub const DEFAULT_VALID_DAYS: u32 = 30;

/// How a line discount is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Fixed amount in baht
    #[default]
    Amount,
    /// Percentage of the line gross
    Percent,
}

/// One row of a quotation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Caller-owned identifier, only used for list diffing in the UI
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub part_number: String,

    #[serde(default)]
    pub description: String,

    /// Quantity (expected non-negative)
    #[serde(default)]
    pub qty: f64,

    #[serde(default)]
    pub unit: String,

    /// Unit price (expected non-negative)
    #[serde(default)]
    pub price_per_unit: f64,

    /// Discount value, read according to `discount_type`
    #[serde(default)]
    pub discount_value: f64,

    #[serde(default)]
    pub discount_type: DiscountType,

    /// Base64 or URL of the product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Image height in pixels for the preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

impl LineItem {
    /// Create a line item without discount
    pub fn new(description: &str, qty: f64, unit: &str, price_per_unit: f64) -> Self {
        Self {
            description: description.to_string(),
            qty,
            unit: unit.to_string(),
            price_per_unit,
            ..Self::default()
        }
    }

    /// Set a fixed-amount discount
    pub fn with_amount_discount(mut self, value: f64) -> Self {
        self.discount_type = DiscountType::Amount;
        self.discount_value = value;
        self
    }

    /// Set a percentage discount
    pub fn with_percent_discount(mut self, percent: f64) -> Self {
        self.discount_type = DiscountType::Percent;
        self.discount_value = percent;
        self
    }
}

/// Per-line amounts derived from a [`LineItem`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResult {
    /// qty × price per unit
    pub gross_amount: f64,
    /// Discount after clamping to the gross
    pub discount_amount: f64,
    /// gross − discount
    pub net_amount: f64,
}

/// VAT settings of a document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VatConfig {
    pub enabled: bool,

    /// Rate in percent (7 means 7%)
    pub rate: f64,

    /// Unit prices already include VAT
    pub price_includes_vat: bool,
}

impl Default for VatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: DEFAULT_VAT_RATE,
            price_includes_vat: false,
        }
    }
}

impl VatConfig {
    /// VAT added on top of the prices
    pub fn exclusive(rate: f64) -> Self {
        Self {
            enabled: true,
            rate,
            price_includes_vat: false,
        }
    }

    /// VAT already contained in the prices
    pub fn inclusive(rate: f64) -> Self {
        Self {
            enabled: true,
            rate,
            price_includes_vat: true,
        }
    }

    /// No VAT at all
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Document-level totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    /// Sum of line gross amounts. In VAT-inclusive mode this is still the raw
    /// gross sum, not a tax-excluded figure.
    pub total_ex_vat: f64,
    pub total_discount: f64,
    pub subtotal_after_discount: f64,
    pub vat_amount: f64,
    pub grand_total: f64,
    /// Grand total read as Thai baht text
    pub grand_total_text: String,
    pub price_include_vat: bool,
    /// Tax base; back-calculated when prices include VAT
    pub pre_vat_total: f64,
}

/// Seller details printed on the document header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub fax: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_pay_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_branch: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// Date part embedded in a generated document number
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[serde(rename = "YYYYMM")]
    YearMonth,
    #[default]
    #[serde(rename = "YYMM")]
    ShortYearMonth,
    #[serde(rename = "YYYY")]
    Year,
    #[serde(rename = "NONE")]
    Omitted,
}

/// Auto-numbering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocConfig {
    pub prefix: String,
    pub date_format: DateFormat,
    pub run_number: u32,
    /// Minimum width of the run number, zero padded
    pub padding: usize,
    #[serde(default)]
    pub suffix: String,
    /// Use the Buddhist calendar year
    pub thai_year: bool,
    /// Regenerate the document number when the config changes
    pub auto_gen: bool,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            prefix: "QT-".to_string(),
            date_format: DateFormat::ShortYearMonth,
            run_number: 1,
            padding: 3,
            suffix: String::new(),
            thai_year: true,
            auto_gen: true,
        }
    }
}

/// Document template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Modern layout for private customers
    Private,
    /// Official layout for government agencies
    #[default]
    Government,
}

/// Document metadata and VAT settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    #[serde(default)]
    pub doc_number: String,

    #[serde(default)]
    pub doc_config: DocConfig,

    /// ISO date string (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,

    #[serde(default = "default_valid_days")]
    pub valid_days: u32,

    /// ISO date string, calculated from `date` and `valid_days`
    #[serde(default)]
    pub due_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    #[serde(default)]
    pub payment_terms: String,

    #[serde(default)]
    pub remarks: String,

    #[serde(default = "default_true")]
    pub vat_enabled: bool,

    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Unit prices already include VAT; new documents start this way
    #[serde(default = "default_true")]
    pub price_include_vat: bool,

    /// Salesperson name
    #[serde(default)]
    pub prepared_by: String,

    #[serde(default)]
    pub form_type: FormType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_position: Option<String>,
}

fn default_valid_days() -> u32 {
    DEFAULT_VALID_DAYS
}

fn default_true() -> bool {
    true
}

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            doc_number: String::new(),
            doc_config: DocConfig::default(),
            date: String::new(),
            valid_days: DEFAULT_VALID_DAYS,
            due_date: String::new(),
            delivery_date: None,
            payment_terms: String::new(),
            remarks: String::new(),
            vat_enabled: true,
            vat_rate: DEFAULT_VAT_RATE,
            price_include_vat: true,
            prepared_by: String::new(),
            form_type: FormType::default(),
            signer_name: None,
            signer_position: None,
        }
    }
}

impl DocumentInfo {
    /// VAT settings of this document
    pub fn vat_config(&self) -> VatConfig {
        VatConfig {
            enabled: self.vat_enabled,
            rate: self.vat_rate,
            price_includes_vat: self.price_include_vat,
        }
    }
}

/// Whole form state of the quotation editor
///
/// Each template keeps its own item list; switching the form type switches
/// which list is edited and printed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuotationState {
    #[serde(default)]
    pub company: CompanyInfo,

    #[serde(default)]
    pub customer: CustomerInfo,

    #[serde(default)]
    pub document: DocumentInfo,

    #[serde(default)]
    pub private_items: Vec<LineItem>,

    #[serde(default)]
    pub government_items: Vec<LineItem>,
}

impl QuotationState {
    /// Items of the template currently selected
    pub fn active_items(&self) -> &[LineItem] {
        match self.document.form_type {
            FormType::Private => &self.private_items,
            FormType::Government => &self.government_items,
        }
    }

    /// Mutable items of the template currently selected
    pub fn active_items_mut(&mut self) -> &mut Vec<LineItem> {
        match self.document.form_type {
            FormType::Private => &mut self.private_items,
            FormType::Government => &mut self.government_items,
        }
    }
}
