//! Thai number, currency text, and display formatting

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Thai number names (0-9)
const NUMBER_NAMES: [&str; 10] = [
    "ศูนย์",
    "หนึ่ง",
    "สอง",
    "สาม",
    "สี่",
    "ห้า",
    "หก",
    "เจ็ด",
    "แปด",
    "เก้า",
];

/// Thai unit names for each position inside a million group
const UNIT_NAMES: [&str; 6] = ["", "สิบ", "ร้อย", "พัน", "หมื่น", "แสน"];

const MILLION: &str = "ล้าน";
const BAHT: &str = "บาท";
const SATANG: &str = "สตางค์";
const EVEN: &str = "ถ้วน";
const NEGATIVE: &str = "ลบ";

/// Text for a zero amount ("zero baht even")
pub const ZERO_BAHT_TEXT: &str = "ศูนย์บาทถ้วน";

/// Difference between the Buddhist Era and the Gregorian calendar
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Thai text formatting utilities
pub struct ThaiFormatter;

impl ThaiFormatter {
    /// Format a number as Thai text
    pub fn format_number(n: i64) -> String {
        format_thai_number(n)
    }

    /// Format an amount as Thai Baht text
    pub fn format_baht(amount: f64) -> String {
        to_thai_baht_text(amount)
    }

    /// Format an amount for on-screen display with two decimals
    pub fn format_currency(amount: f64) -> String {
        format_currency(amount)
    }

    /// Convert a Gregorian year to the Buddhist calendar
    pub fn format_year(year: i32) -> i32 {
        to_buddhist_year(year)
    }
}

/// Read a string of ASCII digits as Thai words.
///
/// Zero digits are skipped, so an all-zero string reads as the empty string.
/// Strings longer than six digits are split into a leading group and the
/// trailing six digits, joined by ล้าน.
fn read_digits(digits: &str) -> String {
    if digits.len() > 6 {
        let (high, low) = digits.split_at(digits.len() - 6);
        let mut result = read_digits(high);
        result.push_str(MILLION);
        result.push_str(&read_digits(low));
        return result;
    }

    let len = digits.len();
    let mut result = String::new();

    for (i, byte) in digits.bytes().enumerate() {
        debug_assert!(byte.is_ascii_digit());
        let digit = usize::from(byte - b'0');
        let position = len - i - 1;

        if digit == 0 {
            continue;
        }

        let digit_name = match (position, digit) {
            // สิบ position with 2 = ยี่สิบ
            (1, 2) => "ยี่",
            // สิบ position with 1 = สิบ (not หนึ่งสิบ)
            (1, 1) => "",
            // หน่วย position with 1 in a multi-digit string = เอ็ด
            (0, 1) if len > 1 => "เอ็ด",
            _ => NUMBER_NAMES[digit],
        };

        result.push_str(digit_name);
        result.push_str(UNIT_NAMES[position]);
    }

    result
}

/// Format an integer as Thai text
///
/// # Examples
/// ```
/// use thai_text::format_thai_number;
/// assert_eq!(format_thai_number(0), "ศูนย์");
/// assert_eq!(format_thai_number(21), "ยี่สิบเอ็ด");
/// assert_eq!(format_thai_number(100), "หนึ่งร้อย");
/// assert_eq!(format_thai_number(-5), "ลบห้า");
/// ```
pub fn format_thai_number(n: i64) -> String {
    if n == 0 {
        return NUMBER_NAMES[0].to_string();
    }

    let words = read_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("{NEGATIVE}{words}")
    } else {
        words
    }
}

/// Format an amount as Thai Baht text
///
/// The amount is rounded to satang (two decimals) first. Zero and non-finite
/// amounts read as [`ZERO_BAHT_TEXT`]; negative amounts are prefixed with ลบ.
///
/// # Examples
/// ```
/// use thai_text::to_thai_baht_text;
/// assert_eq!(to_thai_baht_text(0.0), "ศูนย์บาทถ้วน");
/// assert_eq!(to_thai_baht_text(100.0), "หนึ่งร้อยบาทถ้วน");
/// assert_eq!(to_thai_baht_text(100.50), "หนึ่งร้อยบาทห้าสิบสตางค์");
/// ```
pub fn to_thai_baht_text(amount: f64) -> String {
    if amount == 0.0 || !amount.is_finite() {
        return ZERO_BAHT_TEXT.to_string();
    }

    let (baht, satang) = split_satang(amount.abs());

    let mut baht_text = read_digits(&baht);
    if baht_text.is_empty() {
        baht_text.push_str(NUMBER_NAMES[0]);
    }

    let satang_text = if satang > 0 {
        // Always read as a two-digit string, so "01" reads as เอ็ด
        format!("{}{SATANG}", read_digits(&format!("{satang:02}")))
    } else {
        EVEN.to_string()
    };

    let rounds_to_zero = satang == 0 && baht.bytes().all(|b| b == b'0');
    let sign = if amount < 0.0 && !rounds_to_zero {
        NEGATIVE
    } else {
        ""
    };

    format!("{sign}{baht_text}{BAHT}{satang_text}")
}

/// Split a non-negative amount into baht digits and satang.
///
/// Rounds the exact binary value of the float, ties away from zero, so 1.605
/// (stored as 1.60499...) gives 60 satang while 0.125 gives 13.
fn split_satang(amount: f64) -> (String, u32) {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let baht = rounded.trunc();
            let satang = ((rounded - baht) * Decimal::ONE_HUNDRED)
                .to_u32()
                .unwrap_or_default();
            (baht.to_string(), satang)
        }
        // Beyond the decimal range every float is a whole number
        None => (format!("{amount:.0}"), 0),
    }
}

/// Convert a Gregorian year to the Buddhist calendar (e.g., 2025 -> 2568)
pub fn to_buddhist_year(year: i32) -> i32 {
    year + BUDDHIST_ERA_OFFSET
}

/// Format an amount the way th-TH currency display does: thousands
/// separators and exactly two decimals (e.g., "1,234.50")
pub fn format_currency(amount: f64) -> String {
    render_float("#,###.##", amount)
}

/// Format a number the way th-TH default number display does: thousands
/// separators and at most three decimals, trailing zeros dropped
/// (e.g., "1,500" or "12.5")
pub fn format_decimal(n: f64) -> String {
    let rendered = render_float("#,###.###", n);
    match rendered.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}.{frac_part}")
            }
        }
        None => rendered,
    }
}

/// Render a float with formatting pattern
///
/// Supports patterns like "#,###.##" for thousand separators and decimal places.
///
/// # Arguments
/// * `format` - Format pattern
/// * `n` - Number to format
pub fn render_float(format: &str, n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (precision, thousand_sep, decimal_sep) = parse_format(format);

    let rounded = round_shortest(n.abs(), u32::from(precision));
    let (int_digits, frac_digits) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), ""));
    let int_str = format_with_thousands(int_digits, thousand_sep);

    let sign = if n.is_sign_negative() { "-" } else { "" };

    if precision > 0 {
        format!("{sign}{int_str}{decimal_sep}{frac_digits}")
    } else {
        format!("{sign}{int_str}")
    }
}

/// Round the shortest decimal form of `n` to `precision` places, ties away
/// from zero, padding the fraction with zeros.
///
/// Display rounding works on the printed value, so 1.005 rounds to 1.01 even
/// though the float itself is slightly below it.
fn round_shortest(n: f64, precision: u32) -> String {
    match Decimal::from_str(&n.to_string()) {
        Ok(value) => {
            let mut rounded =
                value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(precision);
            rounded.to_string()
        }
        Err(_) => {
            // Too large for a decimal means no fraction; too small rounds to zero
            let whole = if n < 1.0 { 0.0 } else { n };
            format!("{whole:.prec$}", prec = precision as usize)
        }
    }
}

/// Parse format pattern to extract precision and separators
fn parse_format(format: &str) -> (u8, &str, &str) {
    if format.is_empty() {
        return (2, ",", ".");
    }

    let decimal_pos = format.rfind('.');

    let precision = match decimal_pos {
        Some(pos) => format[pos + 1..]
            .chars()
            .filter(|c| *c == '#' || *c == '0')
            .count() as u8,
        None => 0,
    };

    let thousand_sep = if format.contains(',') { "," } else { "" };
    let decimal_sep = if precision > 0 { "." } else { "" };

    (precision, thousand_sep, decimal_sep)
}

/// Insert thousand separators into a string of digits
fn format_with_thousands(digits: &str, sep: &str) -> String {
    if sep.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_digits_position_rules() {
        // Units digit 1 is เอ็ด only when something precedes it
        assert_eq!(read_digits("1"), "หนึ่ง");
        assert_eq!(read_digits("11"), "สิบเอ็ด");
        assert_eq!(read_digits("201"), "สองร้อยเอ็ด");
        // Tens digit 1 is silent, 2 is ยี่, others read normally
        assert_eq!(read_digits("10"), "สิบ");
        assert_eq!(read_digits("25"), "ยี่สิบห้า");
        assert_eq!(read_digits("4321"), "สี่พันสามร้อยยี่สิบเอ็ด");
        assert_eq!(read_digits("987654"), "เก้าแสนแปดหมื่นเจ็ดพันหกร้อยห้าสิบสี่");
    }

    #[test]
    fn test_read_digits_leading_zeros() {
        assert_eq!(read_digits("007"), "เจ็ด");
        assert_eq!(read_digits("0021"), "ยี่สิบเอ็ด");
        assert_eq!(read_digits("000100"), "หนึ่งร้อย");
    }

    #[test]
    fn test_read_digits_million_groups() {
        assert_eq!(read_digits("1000000"), "หนึ่งล้าน");
        assert_eq!(read_digits("11000011"), "สิบเอ็ดล้านสิบเอ็ด");
        assert_eq!(read_digits("20000020"), "ยี่สิบล้านยี่สิบ");
        assert_eq!(read_digits("5000000000000"), "ห้าล้านล้าน");
        assert_eq!(read_digits("1000001000000"), "หนึ่งล้านเอ็ดล้าน");
        assert_eq!(read_digits("21000000000000"), "ยี่สิบเอ็ดล้านล้าน");
    }

    #[test]
    fn test_format_thai_number_large() {
        assert_eq!(format_thai_number(1000), "หนึ่งพัน");
        assert_eq!(format_thai_number(10000), "หนึ่งหมื่น");
        assert_eq!(format_thai_number(100000), "หนึ่งแสน");
        assert_eq!(format_thai_number(1000000), "หนึ่งล้าน");
        assert_eq!(format_thai_number(1000001), "หนึ่งล้านเอ็ด");
        assert_eq!(format_thai_number(21000000), "ยี่สิบเอ็ดล้าน");
        assert_eq!(format_thai_number(1_000_000_000_000), "หนึ่งล้านล้าน");
    }

    #[test]
    fn test_format_thai_number_negative() {
        assert_eq!(format_thai_number(-21), "ลบยี่สิบเอ็ด");
        assert!(format_thai_number(i64::MIN).starts_with("ลบ"));
    }

    #[test]
    fn test_read_digits_skips_zero_groups() {
        assert_eq!(read_digits("000000"), "");
        assert_eq!(read_digits("0"), "");
        assert_eq!(read_digits("01"), "เอ็ด");
        assert_eq!(read_digits("05"), "ห้า");
        assert_eq!(read_digits("50"), "ห้าสิบ");
    }

    #[test]
    fn test_baht_text_seed_values() {
        assert_eq!(to_thai_baht_text(0.0), "ศูนย์บาทถ้วน");
        assert_eq!(to_thai_baht_text(1.0), "หนึ่งบาทถ้วน");
        assert_eq!(to_thai_baht_text(21.0), "ยี่สิบเอ็ดบาทถ้วน");
        assert_eq!(to_thai_baht_text(100.0), "หนึ่งร้อยบาทถ้วน");
        assert_eq!(to_thai_baht_text(1000000.0), "หนึ่งล้านบาทถ้วน");
        assert_eq!(
            to_thai_baht_text(1234.50),
            "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบสตางค์"
        );
    }

    #[test]
    fn test_baht_text_satang_only() {
        assert_eq!(to_thai_baht_text(0.25), "ศูนย์บาทยี่สิบห้าสตางค์");
        assert_eq!(to_thai_baht_text(0.50), "ศูนย์บาทห้าสิบสตางค์");
        assert_eq!(to_thai_baht_text(0.01), "ศูนย์บาทเอ็ดสตางค์");
    }

    #[test]
    fn test_baht_text_rounds_to_satang() {
        assert_eq!(to_thai_baht_text(0.004), "ศูนย์บาทถ้วน");
        assert_eq!(to_thai_baht_text(10.999), "สิบเอ็ดบาทถ้วน");
        // Exact binary half rounds up
        assert_eq!(to_thai_baht_text(0.125), "ศูนย์บาทสิบสามสตางค์");
        // Stored just below the half, so these round down
        assert_eq!(to_thai_baht_text(1.605), "หนึ่งบาทหกสิบสตางค์");
        assert_eq!(to_thai_baht_text(26.215), "ยี่สิบหกบาทยี่สิบเอ็ดสตางค์");
        assert_eq!(to_thai_baht_text(34.775), "สามสิบสี่บาทเจ็ดสิบเจ็ดสตางค์");
        assert_eq!(to_thai_baht_text(0.015), "ศูนย์บาทเอ็ดสตางค์");
        assert_eq!(to_thai_baht_text(0.045), "ศูนย์บาทสี่สตางค์");
    }

    #[test]
    fn test_split_satang() {
        assert_eq!(split_satang(1234.5), ("1234".to_string(), 50));
        assert_eq!(split_satang(0.995), ("0".to_string(), 99));
        assert_eq!(split_satang(0.9951), ("1".to_string(), 0));
        assert_eq!(split_satang(1e30), (format!("{:.0}", 1e30), 0));
    }

    #[test]
    fn test_baht_text_millions() {
        assert_eq!(
            to_thai_baht_text(348000.0),
            "สามแสนสี่หมื่นแปดพันบาทถ้วน"
        );
        assert_eq!(
            to_thai_baht_text(12_500_001.75),
            "สิบสองล้านห้าแสนเอ็ดบาทเจ็ดสิบห้าสตางค์"
        );
        assert_eq!(to_thai_baht_text(1e12), "หนึ่งล้านล้านบาทถ้วน");
    }

    #[test]
    fn test_baht_text_negative_and_non_finite() {
        assert_eq!(to_thai_baht_text(-5.5), "ลบห้าบาทห้าสิบสตางค์");
        assert_eq!(to_thai_baht_text(-0.001), "ศูนย์บาทถ้วน");
        assert_eq!(to_thai_baht_text(f64::NAN), ZERO_BAHT_TEXT);
        assert_eq!(to_thai_baht_text(f64::INFINITY), ZERO_BAHT_TEXT);
    }

    #[test]
    fn test_to_buddhist_year() {
        assert_eq!(to_buddhist_year(2025), 2568);
        assert_eq!(ThaiFormatter::format_year(2026), 2569);
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render_float("#,###.##", 22766.355), "22,766.36");
        assert_eq!(render_float("#,###.##", -4500.0), "-4,500.00");
        assert_eq!(render_float("#,###", 1234.56), "1,235");
        assert_eq!(render_float("####.#", 12345.67), "12345.7");
        assert_eq!(render_float("", 0.5), "0.50");
        assert_eq!(render_float("#,###.##", f64::NAN), "NaN");
        assert_eq!(render_float("#,###.##", f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_render_float_out_of_decimal_range() {
        assert_eq!(
            render_float("#,###", 1e30),
            format_with_thousands(&format!("{:.0}", 1e30), ",")
        );
        assert_eq!(render_float("#.##", 1e-40), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(1234.5), "1,234.50");
        assert_eq!(format_currency(325233.6448598131), "325,233.64");
        assert_eq!(format_currency(999.999), "1,000.00");
        // Rounds the printed value, not the stored binary one
        assert_eq!(format_currency(1.005), "1.01");
        assert_eq!(format_currency(1.605), "1.61");
        // Sign survives rounding to zero
        assert_eq!(format_currency(-0.001), "-0.00");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1500.0), "1,500");
        assert_eq!(format_decimal(12.5), "12.5");
        assert_eq!(format_decimal(0.1234), "0.123");
        assert_eq!(format_decimal(1.0005), "1.001");
        assert_eq!(format_decimal(2.0004), "2");
    }

    #[test]
    fn test_format_with_thousands() {
        assert_eq!(format_with_thousands("7", ","), "7");
        assert_eq!(format_with_thousands("348000", ","), "348,000");
        assert_eq!(format_with_thousands("12500001", ","), "12,500,001");
        assert_eq!(format_with_thousands("12500001", ""), "12500001");
    }
}
