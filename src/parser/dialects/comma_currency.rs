use crate::parser::token::{parse_price, push_known, words};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // (125₹), (125 ₹) or (125)
    static ref PRICE: Regex = Regex::new(r"\(([0-9]+(?:\.[0-9]+)?)\s*₹?\)").unwrap();
}

/// Parser for `67,,76,,08,,80,,,(125₹) 71,,32,,88,,,(50₹)`
///
/// Numbers are separated by a double comma; the price in parentheses applies
/// to every number before it.
pub struct CommaCurrencyParser;

impl Parser for CommaCurrencyParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for message in words(raw) {
            let Some(caps) = PRICE.captures(message) else {
                continue;
            };
            let Some(price) = parse_price(&caps[1]) else {
                continue;
            };

            let number_part = message.split('(').next().unwrap_or_default();
            push_known(&mut updates, number_part, ",,", price, known);
        }

        updates
    }
}
