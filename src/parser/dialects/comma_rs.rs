use crate::parser::token::{parse_price, push_known, words};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MESSAGE: Regex =
        Regex::new(r"^([0-9,]+),(?i-u:rs)([0-9]+(?:\.[0-9]+)?)$").unwrap();
}

/// Parser for `100,46,rs250 73,27,rs50`
pub struct CommaRsParser;

impl Parser for CommaRsParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for message in words(raw) {
            let Some(caps) = MESSAGE.captures(message) else {
                continue;
            };
            if let Some(price) = parse_price(&caps[2]) {
                push_known(&mut updates, &caps[1], ",", price, known);
            }
        }

        updates
    }
}
