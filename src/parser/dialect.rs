use super::dialects::{
    CommaCurrencyParser, CommaParenParser, CommaRsParser, CommaRsPrefixParser, CommaRuParser,
    DotRsParser, JsonParser, SlashParser, SlashRsParser, StarUnderscoreParser,
};
use super::{KnownNumbers, ParseError, Parser, Update};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every shorthand dialect the registry can route a message to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// `"25":100.00; "49":50.00`
    Json,
    /// `90/40/30/rs25 45/54/rs100`
    SlashRs,
    /// `20/100 15/100`
    Slash,
    /// `67,,76,,08(125₹)`
    CommaCurrency,
    /// `15,51,77,ru,50,,59,75,ru,100`
    CommaRu,
    /// `87*72*15 50_50_100`
    StarUnderscore,
    /// `100,46,rs250 73,27,rs50`
    CommaRs,
    /// `32,22,99(40) 01,07(125)`
    CommaParen,
    /// `28.82.rs200..15.51.rs50`
    DotRs,
    /// `99,rs50 26,56,rs20`, prefix match only
    CommaRsPrefix,
}

impl Dialect {
    /// All dialects in dispatch priority order
    pub const PRIORITY: [Dialect; 10] = [
        Dialect::Json,
        Dialect::SlashRs,
        Dialect::Slash,
        Dialect::CommaCurrency,
        Dialect::CommaRu,
        Dialect::StarUnderscore,
        Dialect::CommaRs,
        Dialect::CommaParen,
        Dialect::DotRs,
        Dialect::CommaRsPrefix,
    ];

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Json => "json",
            Dialect::SlashRs => "slash-rs",
            Dialect::Slash => "slash",
            Dialect::CommaCurrency => "comma-currency",
            Dialect::CommaRu => "comma-ru",
            Dialect::StarUnderscore => "star-underscore",
            Dialect::CommaRs => "comma-rs",
            Dialect::CommaParen => "comma-paren",
            Dialect::DotRs => "dot-rs",
            Dialect::CommaRsPrefix => "comma-rs-prefix",
        }
    }

    /// A short sample message written in this dialect
    pub fn example(self) -> &'static str {
        match self {
            Dialect::Json => r#""25":100.00; "49":50.00"#,
            Dialect::SlashRs => "90/40/30/50/rs25 45/54/rs100",
            Dialect::Slash => "20/100 15/100",
            Dialect::CommaCurrency => "67,,76,,08,,(125₹) 71,,32,,(50₹)",
            Dialect::CommaRu => "15,51,77,ru,50,,59,75,79,ru,100",
            Dialect::StarUnderscore => "87*72*15*60 50_50_50_100",
            Dialect::CommaRs => "100,46,rs250 73,27,rs50",
            Dialect::CommaParen => "32,22,99(40) 01,07,04(125)",
            Dialect::DotRs => "28.82.rs200..15.51.rs50",
            Dialect::CommaRsPrefix => "99,rs50 26,56,rs20",
        }
    }

    fn parser(self) -> &'static dyn Parser {
        match self {
            Dialect::Json => &JsonParser,
            Dialect::SlashRs => &SlashRsParser,
            Dialect::Slash => &SlashParser,
            Dialect::CommaCurrency => &CommaCurrencyParser,
            Dialect::CommaRu => &CommaRuParser,
            Dialect::StarUnderscore => &StarUnderscoreParser,
            Dialect::CommaRs => &CommaRsParser,
            Dialect::CommaParen => &CommaParenParser,
            Dialect::DotRs => &DotRsParser,
            Dialect::CommaRsPrefix => &CommaRsPrefixParser,
        }
    }
}

impl Parser for Dialect {
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update> {
        self.parser().parse(raw, known)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::PRIORITY
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownDialect(s.to_string()))
    }
}
