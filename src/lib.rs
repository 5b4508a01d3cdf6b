//! Numbered price table updated from shorthand text messages.
//!
//! Messages like `28.82.rs200..15.51.rs50` or `87*72*15 50_50_100` are routed
//! by [`ParserRegistry`] to one of the dialect parsers, which turn them into
//! [`Update`]s for the numbers a [`KnownNumbers`] lookup accepts.
//!
//! ```rust
//! use pricegrid::{Dialect, ParserRegistry, PriceTable};
//!
//! let mut table = PriceTable::standard();
//! let result = ParserRegistry::new()
//!     .parse("28.82.rs200..15.51.rs50", &table)
//!     .unwrap();
//!
//! assert_eq!(result.dialect, Dialect::DotRs);
//! table.apply_updates(&result.updates);
//! assert_eq!(table.price("82"), Some(200.0));
//! ```

pub mod cli;
pub mod parser;
pub mod sheet;
pub mod table;

// Re-export main types for convenience
pub use parser::{
    Dialect, DispatchMode, KnownNumbers, ParseError, ParseResult, Parser, ParserRegistry, Update,
};
pub use sheet::{Sheet, SheetHeader};
pub use table::{PriceTable, Settlement, TableConfig, TableError};
