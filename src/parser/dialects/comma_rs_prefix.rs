use crate::parser::token::{parse_price, push_known, words};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored at the start only: trailing text after the price is tolerated
    static ref MESSAGE: Regex = Regex::new(r"^([0-9,]+),(?i-u:rs)([0-9]+(?:\.[0-9]+)?)").unwrap();
}

/// Last-resort parser for `99,rs50 26,56,rs20 89,11,rs30`
///
/// Same grammar as [`CommaRsParser`](super::CommaRsParser) but a group only
/// has to start with `numbers,rsPRICE`.
pub struct CommaRsPrefixParser;

impl Parser for CommaRsPrefixParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for group in words(raw) {
            let Some(caps) = MESSAGE.captures(group) else {
                continue;
            };
            if let Some(price) = parse_price(&caps[2]) {
                push_known(&mut updates, &caps[1], ",", price, known);
            }
        }

        updates
    }
}
