use crate::parser::token::{parse_price, pieces, push_known};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MESSAGE: Regex =
        Regex::new(r"^([0-9.]+)\.?(?i-u:rs)([0-9]+(?:\.[0-9]+)?)$").unwrap();
}

/// Parser for `28.82.rs200..15.51.rs50..888.8888.rs330`
///
/// Groups are separated by `..`, numbers inside a group by a single dot.
pub struct DotRsParser;

impl Parser for DotRsParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for message in pieces(raw, "..") {
            let Some(caps) = MESSAGE.captures(message) else {
                continue;
            };
            if let Some(price) = parse_price(&caps[2]) {
                push_known(&mut updates, &caps[1], ".", price, known);
            }
        }

        updates
    }
}
