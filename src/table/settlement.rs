use super::PriceTable;
use super::layout::{Pool, pool, repdigit};
use serde::{Deserialize, Serialize};

/// Rates used when totalling a table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Share of the grand total reported as commission
    pub commission_rate: f64,
    /// Payout factor on the open number's own slot
    pub open_multiplier: f64,
    /// Payout factor on matching repdigit slots
    pub pool_multiplier: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            commission_rate: 0.10,
            open_multiplier: 90.0,
            pool_multiplier: 9.090909,
        }
    }
}

impl TableConfig {
    pub fn commission_rate(mut self, rate: f64) -> Self {
        self.commission_rate = rate;
        self
    }

    pub fn open_multiplier(mut self, multiplier: f64) -> Self {
        self.open_multiplier = multiplier;
        self
    }

    pub fn pool_multiplier(mut self, multiplier: f64) -> Self {
        self.pool_multiplier = multiplier;
        self
    }
}

/// Totals for a table given an optional open number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    /// Open number as matched against the table, if any
    pub open: Option<String>,
    pub grand_total: f64,
    pub commission: f64,
    /// Amount paid out on the open number and its repdigit pools
    pub open_price: f64,
    /// Grand total minus the open payout; negative means a loss
    pub final_total: f64,
}

impl PriceTable {
    /// Sum of every filled slot
    pub fn grand_total(&self) -> f64 {
        self.filled().map(|(_, price)| price).sum()
    }

    pub fn commission(&self, config: &TableConfig) -> f64 {
        self.grand_total() * config.commission_rate
    }

    /// Compute the payout for an open number
    ///
    /// The open number is read as a whole number and padded to two digits
    /// (`7` and `007` both mean `07`); a blank value means no open number.
    /// Its own slot pays
    /// `open_multiplier`; each filled three-digit repdigit matching its unit
    /// digit and each filled four-digit repdigit matching its tens digit pays
    /// `pool_multiplier`. An open number outside the table pays nothing.
    pub fn settle(&self, open: Option<&str>, config: &TableConfig) -> Settlement {
        let grand_total = self.grand_total();
        let open = open
            .and_then(normalize_open)
            .filter(|o| self.slot(o).is_some());

        let open_price = open
            .as_deref()
            .map(|o| self.open_payout(o, config))
            .unwrap_or(0.0);

        Settlement {
            open,
            grand_total,
            commission: grand_total * config.commission_rate,
            open_price,
            final_total: grand_total - open_price,
        }
    }

    fn open_payout(&self, open: &str, config: &TableConfig) -> f64 {
        let mut payout = self.price(open).unwrap_or(0.0) * config.open_multiplier;

        let mut digits = open.chars().rev().filter_map(|c| c.to_digit(10));
        let unit = digits.next();
        let tens = digits.next();

        for (number, price) in self.filled() {
            let wanted = match pool(number) {
                Some(Pool::TripleRepdigit) => unit,
                Some(Pool::QuadRepdigit) => tens,
                _ => None,
            };
            if wanted.is_some() && repdigit(number) == wanted {
                payout += price * config.pool_multiplier;
            }
        }

        payout
    }
}

/// Read an open number the way it is typed into the open field
fn normalize_open(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(format!("{:02}", value.floor() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_open() {
        let test_cases = vec![
            ("7", Some("07")),
            ("007", Some("07")),
            (" 42 ", Some("42")),
            ("3.9", Some("03")),
            ("111", Some("111")),
            ("", None),
            ("   ", None),
            ("-3", None),
            ("abc", None),
        ];

        for (raw, expected) in test_cases {
            assert_eq!(
                normalize_open(raw).as_deref(),
                expected,
                "Failed for {:?}",
                raw
            );
        }
    }
}
