use crate::parser::token::{parse_price, pieces, push_known};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref GROUP: Regex =
        Regex::new(r"^([0-9,]+),(?i-u:ru),([0-9]+(?:\.[0-9]+)?)$").unwrap();
}

/// Parser for `15,51,77,ru,50,,59,75,79,ru,100`
///
/// Groups are separated by `,,`, so a group's own numbers may only use
/// single commas.
pub struct CommaRuParser;

impl Parser for CommaRuParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for group in pieces(raw, ",,") {
            let Some(caps) = GROUP.captures(group) else {
                continue;
            };
            if let Some(price) = parse_price(&caps[2]) {
                push_known(&mut updates, &caps[1], ",", price, known);
            }
        }

        updates
    }
}
