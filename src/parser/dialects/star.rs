use crate::parser::token::{parse_price, pieces, push_if_known};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    static ref MESSAGE: Regex = Regex::new(r"^([0-9*]+)\s+([0-9_]+)$").unwrap();
}

/// Parser for `87*72*15*60 50_50_50_100`
///
/// The whole message is one unit. Numbers and prices pair up by position, so
/// when the two lists differ in length nothing is returned at all.
pub struct StarUnderscoreParser;

impl Parser for StarUnderscoreParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        let Some(caps) = MESSAGE.captures(raw.trim()) else {
            return updates;
        };

        let numbers: Vec<&str> = pieces(&caps[1], "*").collect();
        let prices: Vec<f64> = caps[2].split('_').filter_map(parse_price).collect();

        if numbers.len() != prices.len() {
            warn!(
                numbers = numbers.len(),
                prices = prices.len(),
                "number and price counts differ, rejecting message"
            );
            return updates;
        }

        for (number, price) in numbers.into_iter().zip(prices) {
            push_if_known(&mut updates, number, price, known);
        }

        updates
    }
}
