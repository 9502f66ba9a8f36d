//! Text ↔ Morse conversion.
//!
//! Output format, consumed unchanged by the sequencer:
//! - symbols of one word are joined by a single space
//! - a space in the text becomes [`WORD_SEPARATOR`], joined like any other
//!   symbol, so two words end up five spaces apart
//!
//! Unknown characters (encode) and unknown symbols (decode) are skipped and
//! reported with one warning per call.

use std::sync::Arc;

use crate::error::{collect_invalid, MorseError, Result};
use crate::table::SymbolTable;

/// Marker for a word boundary.
pub const WORD_SEPARATOR: &str = "   ";

/// Characters allowed in a Morse string.
#[inline]
pub fn is_morse_char(c: char) -> bool {
    matches!(c, '.' | '-' | ' ')
}

/// Every character of `s` outside `{'.', '-', ' '}`, deduplicated.
pub fn invalid_morse_chars(s: &str) -> Vec<char> {
    collect_invalid(s, is_morse_char)
}

/// Check a Morse string's lexical form: non-empty, dots, dashes and spaces only.
pub fn validate_morse(s: &str) -> Result<()> {
    if s.is_empty() {
        return Err(MorseError::input("morse_string cannot be empty"));
    }
    let invalid = invalid_morse_chars(s);
    if !invalid.is_empty() {
        return Err(MorseError::invalid_chars("morse_string", invalid));
    }
    Ok(())
}

/// Bidirectional converter bound to one symbol table.
#[derive(Debug, Clone)]
pub struct SymbolCodec {
    variant: String,
    table: Arc<SymbolTable>,
}

impl SymbolCodec {
    pub fn new(variant: impl Into<String>, table: Arc<SymbolTable>) -> Self {
        Self {
            variant: variant.into(),
            table,
        }
    }

    /// Codec over the built-in international table.
    pub fn international() -> Self {
        Self::new(
            crate::table::INTERNATIONAL_NAME,
            Arc::new(SymbolTable::international()),
        )
    }

    /// Name of the table this codec was created for.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Convert text to a Morse string.
    ///
    /// Case-insensitive. Characters missing from the table are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_morse_player::codec::SymbolCodec;
    ///
    /// let codec = SymbolCodec::international();
    /// assert_eq!(codec.encode("sos").unwrap(), "... --- ...");
    /// ```
    pub fn encode(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Err(MorseError::input("input_string cannot be empty"));
        }

        let mut symbols: Vec<&str> = Vec::with_capacity(text.len());
        let mut skipped: Vec<char> = Vec::new();

        for c in text.chars() {
            if c == ' ' {
                symbols.push(WORD_SEPARATOR);
            } else if let Some(symbol) = self.table.symbol(c) {
                symbols.push(symbol);
            } else if !skipped.contains(&c) {
                skipped.push(c);
            }
        }

        if !skipped.is_empty() {
            tracing::warn!(
                variant = %self.variant,
                skipped = %skipped.iter().collect::<String>(),
                "characters not in symbol table were ignored"
            );
        }

        Ok(symbols.join(" "))
    }

    /// Convert a Morse string to uppercase text.
    ///
    /// Rejects anything but dots, dashes and spaces, naming every offending
    /// character. Runs of fewer than three spaces separate symbols, longer
    /// runs separate words. Unknown symbols are skipped.
    pub fn decode(&self, morse: &str) -> Result<String> {
        validate_morse(morse)?;

        let mut text = String::with_capacity(morse.len() / 2);
        let mut skipped: Vec<&str> = Vec::new();

        for run in Runs::new(morse) {
            match run {
                Run::Spaces(len) if len >= WORD_SEPARATOR.len() => {
                    text.extend(core::iter::repeat(' ').take(word_breaks(len)));
                }
                Run::Spaces(_) => {}
                Run::Symbol(token) => match self.table.character(token) {
                    Some(c) => text.push(c),
                    None => {
                        if !skipped.contains(&token) {
                            skipped.push(token);
                        }
                    }
                },
            }
        }

        if !skipped.is_empty() {
            tracing::warn!(
                variant = %self.variant,
                skipped = %skipped.join(", "),
                "unknown morse symbols were ignored"
            );
        }

        Ok(text)
    }
}

/// Number of word breaks a run of `len` spaces stands for.
///
/// Encoding `k` consecutive spaces yields a run of `4k + 1` spaces between
/// symbols (`4k` at either end of the string); a bare three-space separator
/// is one break.
#[inline]
fn word_breaks(len: usize) -> usize {
    ((len + 1) / 4).max(1)
}

/// Lexical unit of a validated Morse string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Symbol(&'a str),
    Spaces(usize),
}

/// Splits a Morse string into alternating symbol and space runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let is_space = first == ' ';
        let len = self
            .rest
            .find(|c: char| (c == ' ') != is_space)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Some(if is_space {
            Run::Spaces(head.len())
        } else {
            Run::Symbol(head)
        })
    }
}
