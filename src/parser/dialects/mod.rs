//! One parser per shorthand dialect
//!
//! Each parser is a unit struct implementing [`Parser`](super::Parser); the
//! [`Dialect`](super::Dialect) enum picks between them.

mod comma_currency;
mod comma_paren;
mod comma_rs;
mod comma_rs_prefix;
mod comma_ru;
mod dot_rs;
mod json;
mod slash;
mod slash_rs;
mod star;

pub use comma_currency::CommaCurrencyParser;
pub use comma_paren::CommaParenParser;
pub use comma_rs::CommaRsParser;
pub use comma_rs_prefix::CommaRsPrefixParser;
pub use comma_ru::CommaRuParser;
pub use dot_rs::DotRsParser;
pub use json::JsonParser;
pub use slash::SlashParser;
pub use slash_rs::SlashRsParser;
pub use star::StarUnderscoreParser;
