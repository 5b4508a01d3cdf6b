//! Standard numbering scheme of the price table
//!
//! Slots come in three pools: every two-digit number `00`–`99`, the ten
//! three-digit repdigits `000`–`999` and the ten four-digit repdigits
//! `0000`–`9999`. Width is part of a number's identity, so `00`, `000` and
//! `0000` are three different slots.

/// Which pool a slot number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    /// `00`–`99`
    TwoDigit,
    /// `000`, `111`, … `999`
    TripleRepdigit,
    /// `0000`, `1111`, … `9999`
    QuadRepdigit,
}

/// Classify a number string, or `None` if it is outside the scheme
pub fn pool(number: &str) -> Option<Pool> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u32 = number.parse().ok()?;
    match number.len() {
        2 => Some(Pool::TwoDigit),
        3 if value % 111 == 0 => Some(Pool::TripleRepdigit),
        4 if value % 1111 == 0 => Some(Pool::QuadRepdigit),
        _ => None,
    }
}

/// Check a number against the numbering scheme
pub fn is_valid_number(number: &str) -> bool {
    pool(number).is_some()
}

/// All slot numbers in display order
pub fn standard_numbers() -> Vec<String> {
    let two_digit = (0..100).map(|i| format!("{:02}", i));
    let triple = (0..10).map(|i| format!("{:03}", i * 111));
    let quad = (0..10).map(|i| format!("{:04}", i * 1111));

    two_digit.chain(triple).chain(quad).collect()
}

/// Repeated digit of a repdigit slot (`"777"` → 7)
pub(crate) fn repdigit(number: &str) -> Option<u32> {
    number.chars().next().and_then(|c| c.to_digit(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let numbers = standard_numbers();
        assert_eq!(numbers.len(), 120);
        assert_eq!(numbers[0], "00");
        assert_eq!(numbers[99], "99");
        assert_eq!(numbers[100], "000");
        assert_eq!(numbers[101], "111");
        assert_eq!(numbers[110], "0000");
        assert_eq!(numbers[119], "9999");
    }

    #[test]
    fn test_valid_numbers() {
        let test_cases = vec![
            ("00", true),
            ("07", true),
            ("99", true),
            ("7", false),
            ("000", true),
            ("555", true),
            ("123", false),
            ("0000", true),
            ("8888", true),
            ("1234", false),
            ("11111", false),
            ("1a", false),
            ("", false),
        ];

        for (number, expected) in test_cases {
            assert_eq!(is_valid_number(number), expected, "Failed for {}", number);
        }
    }

    #[test]
    fn test_pool_classification() {
        assert_eq!(pool("42"), Some(Pool::TwoDigit));
        assert_eq!(pool("333"), Some(Pool::TripleRepdigit));
        assert_eq!(pool("3333"), Some(Pool::QuadRepdigit));
        assert_eq!(repdigit("3333"), Some(3));
    }
}
