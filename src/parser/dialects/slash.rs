use crate::parser::token::{parse_price, push_if_known, words};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAIR: Regex = Regex::new(r"^([0-9]{2,4})/([0-9.]+)$").unwrap();
}

/// Parser for `20/100 15/100 111/40`
pub struct SlashParser;

impl Parser for SlashParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for pair in words(raw) {
            let Some(caps) = PAIR.captures(pair) else {
                continue;
            };
            if let Some(price) = parse_price(&caps[2]) {
                push_if_known(&mut updates, &caps[1], price, known);
            }
        }

        updates
    }
}
