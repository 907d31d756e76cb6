//! Document numbers and due dates

use chrono::{Datelike, Days, NaiveDate};
use thai_text::to_buddhist_year;
use tracing::debug;

use crate::{DateFormat, DocConfig, DocumentInfo, QuoteError, Result};

/// ISO date format used by the form (YYYY-MM-DD)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Build a document number such as `QT-6801001`.
///
/// The number is `prefix + date part + zero-padded run number + suffix`. The
/// date part uses the Buddhist year when `thai_year` is set; padding never
/// truncates a run number wider than `padding`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use quote_core::{generate_doc_number, DocConfig};
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(generate_doc_number(&DocConfig::default(), date), "QT-6801001");
/// ```
pub fn generate_doc_number(config: &DocConfig, date: NaiveDate) -> String {
    let year = if config.thai_year {
        to_buddhist_year(date.year())
    } else {
        date.year()
    };
    let year_str = year.to_string();
    let month = format!("{:02}", date.month());

    let date_part = match config.date_format {
        DateFormat::YearMonth => format!("{year_str}{month}"),
        DateFormat::ShortYearMonth => {
            let short_year = year_str.get(2..).unwrap_or_default();
            format!("{short_year}{month}")
        }
        DateFormat::Year => year_str,
        DateFormat::Omitted => String::new(),
    };

    format!(
        "{}{}{:0>width$}{}",
        config.prefix,
        date_part,
        config.run_number,
        config.suffix,
        width = config.padding
    )
}

/// Parse an ISO (YYYY-MM-DD) date from the form.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|e| QuoteError::InvalidDate(format!("{value}: {e}")))
}

/// Add `valid_days` to an ISO date.
///
/// Returns `None` when the date is empty or unparseable, or when
/// `valid_days` is zero (the form leaves the due date untouched then).
pub fn compute_due_date(date: &str, valid_days: u32) -> Option<String> {
    if valid_days == 0 {
        return None;
    }

    let start = parse_iso_date(date).ok()?;
    let due = start.checked_add_days(Days::new(u64::from(valid_days)))?;
    Some(due.format(ISO_DATE_FORMAT).to_string())
}

impl DocumentInfo {
    /// Regenerate `doc_number` from `doc_config` when auto numbering is on.
    ///
    /// Returns true if the number changed.
    pub fn refresh_doc_number(&mut self, today: NaiveDate) -> bool {
        if !self.doc_config.auto_gen {
            return false;
        }

        let doc_number = generate_doc_number(&self.doc_config, today);
        if doc_number == self.doc_number {
            return false;
        }

        debug!(old = %self.doc_number, new = %doc_number, "Regenerated document number");
        self.doc_number = doc_number;
        true
    }

    /// Recalculate `due_date` from `date` and `valid_days`.
    ///
    /// Returns true if the due date changed.
    pub fn refresh_due_date(&mut self) -> bool {
        match compute_due_date(&self.date, self.valid_days) {
            Some(due_date) if due_date != self.due_date => {
                self.due_date = due_date;
                true
            }
            _ => false,
        }
    }
}
