use super::{Dialect, KnownNumbers, ParseError, ParseResult, Parser};
use tracing::debug;

/// Substrings that must all be present for a dialect to be picked, in
/// priority order. The first rule that holds wins.
const RULES: [(Dialect, &[&str]); 10] = [
    (Dialect::Json, &[":"]),
    (Dialect::SlashRs, &["/", "rs"]),
    (Dialect::Slash, &["/"]),
    (Dialect::CommaCurrency, &["₹", ",,"]),
    (Dialect::CommaRu, &["ru", ",,"]),
    (Dialect::StarUnderscore, &["*"]),
    (Dialect::CommaRs, &[",", "rs"]),
    (Dialect::CommaParen, &[","]),
    (Dialect::DotRs, &[".", "rs"]),
    (Dialect::CommaRsPrefix, &[",rs"]),
];

/// How the registry turns a message into updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Sniff the message and run only the first matching dialect
    #[default]
    Legacy,
    /// Run every dialect in priority order and keep the first non-empty result
    Strict,
}

/// Routes raw messages to the dialect parser that understands them
#[derive(Debug, Clone, Default)]
pub struct ParserRegistry {
    mode: DispatchMode,
}

impl ParserRegistry {
    /// Create a registry using legacy sniffing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with an explicit dispatch mode
    pub fn with_mode(mode: DispatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Pick a dialect from the message's surface characters
    ///
    /// Returns `None` when no rule holds. Containing both `/` and `,` always
    /// means a slash dialect, because slash rules come first.
    pub fn detect(&self, raw: &str) -> Option<Dialect> {
        let raw = raw.trim();
        RULES
            .iter()
            .find(|(_, markers)| markers.iter().all(|m| raw.contains(m)))
            .map(|(dialect, _)| *dialect)
    }

    /// Like [`detect`](Self::detect), but reports why nothing was picked
    pub fn select(&self, raw: &str) -> Result<Dialect, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::EmptyMessage);
        }
        self.detect(raw)
            .ok_or_else(|| ParseError::UnrecognizedFormat(preview(raw)))
    }

    /// Parse a message into updates for the numbers in `known`
    pub fn parse(&self, raw: &str, known: &dyn KnownNumbers) -> Result<ParseResult, ParseError> {
        let raw = raw.trim();
        let detected = self.select(raw);

        if self.mode == DispatchMode::Strict {
            for dialect in Dialect::PRIORITY {
                let updates = dialect.parse(raw, known);
                if !updates.is_empty() {
                    debug!(%dialect, updates = updates.len(), "strict dispatch matched");
                    return Ok(ParseResult { dialect, updates });
                }
            }
        }

        let dialect = detected?;
        let updates = dialect.parse(raw, known);
        debug!(%dialect, updates = updates.len(), "dispatched message");

        Ok(ParseResult { dialect, updates })
    }
}

/// Shorten a message for error display
fn preview(raw: &str) -> String {
    const MAX_CHARS: usize = 40;
    let raw = raw.trim();
    if raw.chars().count() <= MAX_CHARS {
        raw.to_string()
    } else {
        let head: String = raw.chars().take(MAX_CHARS).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_priority_order() {
        let order: Vec<Dialect> = RULES.iter().map(|(d, _)| *d).collect();
        assert_eq!(order, Dialect::PRIORITY.to_vec());
    }

    #[test]
    fn test_empty_message() {
        let registry = ParserRegistry::new();
        let known: &[&str] = &["10"];
        assert_eq!(
            registry.parse("   ", &known).unwrap_err(),
            ParseError::EmptyMessage
        );
    }

    #[test]
    fn test_unrecognized_message() {
        let registry = ParserRegistry::new();
        assert_eq!(registry.detect("hello there"), None);
        assert!(matches!(
            registry.select("hello there"),
            Err(ParseError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_preview_truncates_long_messages() {
        let long = "x".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), 41);
        assert!(shown.ends_with('…'));
    }
}
