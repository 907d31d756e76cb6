//! Thai Text - Thai language number and currency text
//!
//! This crate provides:
//! - Thai number reading (หนึ่ง, สอง, สาม...)
//! - Thai currency reading (บาท, สตางค์)
//! - th-TH style display formatting for amounts
//! - Buddhist calendar year conversion
//!
//! # Example
//!
//! ```
//! use thai_text::{to_thai_baht_text, ThaiFormatter};
//!
//! let text = ThaiFormatter::format_number(42); // "สี่สิบสอง"
//! assert_eq!(text, "สี่สิบสอง");
//!
//! let baht = to_thai_baht_text(100.50);
//! assert_eq!(baht, "หนึ่งร้อยบาทห้าสิบสตางค์");
//! ```

mod formatter;

pub use formatter::ThaiFormatter;

// Re-export commonly used formatting functions
pub use formatter::{
    format_currency, format_decimal, format_thai_number, render_float, to_buddhist_year,
    to_thai_baht_text, BUDDHIST_ERA_OFFSET, ZERO_BAHT_TEXT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thai_number() {
        assert_eq!(format_thai_number(0), "ศูนย์");
        assert_eq!(format_thai_number(1), "หนึ่ง");
        assert_eq!(format_thai_number(10), "สิบ");
        assert_eq!(format_thai_number(11), "สิบเอ็ด");
        assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
        assert_eq!(format_thai_number(100), "หนึ่งร้อย");
    }

    #[test]
    fn test_to_thai_baht_text() {
        assert_eq!(to_thai_baht_text(0.0), ZERO_BAHT_TEXT);
        assert_eq!(to_thai_baht_text(1.0), "หนึ่งบาทถ้วน");
        assert_eq!(to_thai_baht_text(0.50), "ศูนย์บาทห้าสิบสตางค์");
    }
}
