//! Token conventions shared by every dialect
//!
//! Number tokens are kept as written. Prices are read with the same leniency
//! the pasted message corpus relies on: the longest leading decimal wins, so
//! `12.5.3` reads as `12.5` and a lone `.` is rejected.

use super::{KnownNumbers, Update};
use tracing::trace;

/// Split on a literal separator, trimming pieces and dropping empty ones
pub(crate) fn pieces<'a>(raw: &'a str, separator: &'a str) -> impl Iterator<Item = &'a str> {
    raw.split(separator).map(str::trim).filter(|p| !p.is_empty())
}

/// Split on runs of whitespace
pub(crate) fn words(raw: &str) -> impl Iterator<Item = &str> {
    raw.split_whitespace()
}

/// Parse the leading decimal of `text`
///
/// Accepts `digits`, `digits.`, `digits.digits` and `.digits` prefixes and
/// ignores whatever follows. Returns `None` when no digit leads the text.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_len;

    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }

    if end == 0 {
        return None;
    }

    text[..end].parse::<f64>().ok()
}

/// Push one update per known number in a separator-delimited list
pub(crate) fn push_known(
    updates: &mut Vec<Update>,
    number_list: &str,
    separator: &str,
    price: f64,
    known: &dyn KnownNumbers,
) {
    for number in pieces(number_list, separator) {
        push_if_known(updates, number, price, known);
    }
}

/// Push a single update when its number exists in the table
pub(crate) fn push_if_known(
    updates: &mut Vec<Update>,
    number: &str,
    price: f64,
    known: &dyn KnownNumbers,
) {
    if known.contains(number) {
        updates.push(Update::new(number, price));
    } else {
        trace!(number, "skipping number not present in table");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("125"), Some(125.0));
        assert_eq!(parse_price("12.75"), Some(12.75));
    }

    #[test]
    fn test_parse_price_leading_prefix() {
        assert_eq!(parse_price("12.5.3"), Some(12.5));
        assert_eq!(parse_price("40."), Some(40.0));
        assert_eq!(parse_price(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_price_rejects_non_numeric() {
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("rs50"), None);
    }

    #[test]
    fn test_pieces_drops_empty() {
        let parts: Vec<&str> = pieces(" 67,,76,, ,,08 ", ",,").collect();
        assert_eq!(parts, vec!["67", "76", "08"]);
    }
}
