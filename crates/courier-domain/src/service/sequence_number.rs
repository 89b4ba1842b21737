//! Printed document numbers: `{PREFIX}{YYYYMMDD}{NNNN}`

use chrono::NaiveDate;

use courier_types::SequenceKind;

const DATE_FORMAT: &str = "%Y%m%d";

/// Format e.g. `AWB202610190001`.
///
/// The sequence is zero-padded to four digits and widens past 9999.
pub fn format_sequence_number(kind: SequenceKind, date: NaiveDate, seq: u32) -> String {
    format!("{}{}{:04}", kind.prefix(), date.format(DATE_FORMAT), seq)
}

/// Split a printed number back into its parts
pub fn parse_sequence_number(number: &str) -> Option<(SequenceKind, NaiveDate, u32)> {
    let number = number.trim();
    let prefix = number.get(..3)?;
    let kind = SequenceKind::from_prefix(&prefix.to_ascii_uppercase())?;
    let date_part = number.get(3..11)?;
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()?;
    let seq_part = number.get(11..)?;
    if seq_part.len() < 4 || !seq_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let seq = seq_part.parse().ok()?;
    Some((kind, date, seq))
}
