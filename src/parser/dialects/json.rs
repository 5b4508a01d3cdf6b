use crate::parser::token::{parse_price, pieces, push_if_known};
use crate::parser::{KnownNumbers, Parser, Update};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "25":100.00 anywhere inside a `;`-separated pair
    static ref PAIR: Regex = Regex::new(r#""([0-9]+)":\s*([0-9.]+)"#).unwrap();
}

/// Parser for `"25":100.00; "49":50.00`
///
/// This is also the format produced by `PriceTable::to_text`, so a table
/// dump can be pasted straight back in.
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        let mut updates = Vec::new();

        for pair in pieces(raw, ";") {
            let Some(caps) = PAIR.captures(pair) else {
                continue;
            };
            let Some(price) = parse_price(&caps[2]) else {
                continue;
            };
            push_if_known(&mut updates, &caps[1], price, known);
        }

        updates
    }
}
