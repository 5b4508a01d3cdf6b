mod dialect;
mod dialects;
mod error;
mod known;
mod registry;
mod result;
mod token;


pub use dialect::Dialect;
pub use dialects::{
    CommaCurrencyParser, CommaParenParser, CommaRsParser, CommaRsPrefixParser, CommaRuParser,
    DotRsParser, JsonParser, SlashParser, SlashRsParser, StarUnderscoreParser,
};
pub use error::ParseError;
pub use known::KnownNumbers;
pub use registry::{DispatchMode, ParserRegistry};
pub use result::{ParseResult, Update};
pub use token::parse_price;

/// Core trait that every shorthand dialect implements
pub trait Parser: Send + Sync {
    /// Extract price updates from a raw message
    ///
    /// # Arguments
    /// * `raw` - Message text as pasted by the user
    /// * `known` - Lookup of numbers that exist in the target table
    ///
    /// # Returns
    /// Updates in the order their numbers appear in `raw`. Chunks that do not
    /// match the dialect, and numbers absent from `known`, are left out.
    fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Vec<Update>;
}
