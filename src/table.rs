//! Character ↔ symbol string tables.
//!
//! A [`SymbolTable`] is immutable once built. Both directions are kept so
//! decode never has to invert the map per call.

use std::collections::{BTreeMap, HashMap};

use crate::error::{MorseError, Result};
use crate::timing::Element;

/// ITU table plus the common `!` extension.
const INTERNATIONAL: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// Name of the built-in table.
pub const INTERNATIONAL_NAME: &str = "international";

/// Injective mapping between uppercase characters and symbol strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    forward: BTreeMap<char, String>,
    reverse: HashMap<String, char>,
}

impl SymbolTable {
    /// Build a table from `(character, symbol)` pairs.
    ///
    /// Keys must be exactly one character and are upper-cased. Symbols must
    /// be non-empty dot/dash strings. Two characters may not share a symbol
    /// and a character may not appear twice.
    pub fn new<K, V, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut forward = BTreeMap::new();
        let mut reverse = HashMap::new();

        for (key, symbol) in entries {
            let key = key.as_ref();
            let symbol = symbol.as_ref();

            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(c), None) => upper(c),
                _ => {
                    return Err(MorseError::type_mismatch(format!(
                        "symbol table key must be a single character, got {key:?}"
                    )))
                }
            };

            if ch.is_whitespace() {
                return Err(MorseError::configuration(format!(
                    "symbol table key {ch:?} is whitespace, which is reserved for separators"
                )));
            }

            if symbol.is_empty() || !symbol.chars().all(|c| Element::from_char(c).is_some()) {
                return Err(MorseError::configuration(format!(
                    "symbol for {ch:?} must be a non-empty string of '.' and '-', got {symbol:?}"
                )));
            }

            if let Some(other) = reverse.get(symbol) {
                return Err(MorseError::configuration(format!(
                    "symbol {symbol:?} is assigned to both {other:?} and {ch:?}"
                )));
            }

            if forward.contains_key(&ch) {
                return Err(MorseError::configuration(format!(
                    "character {ch:?} is defined more than once"
                )));
            }

            forward.insert(ch, symbol.to_string());
            reverse.insert(symbol.to_string(), ch);
        }

        if forward.is_empty() {
            return Err(MorseError::configuration("symbol table is empty"));
        }

        tracing::debug!(entries = forward.len(), "symbol table built");
        Ok(Self { forward, reverse })
    }

    /// The built-in international table.
    pub fn international() -> Self {
        let forward: BTreeMap<char, String> = INTERNATIONAL
            .iter()
            .map(|&(c, s)| (c, s.to_string()))
            .collect();
        let reverse = INTERNATIONAL
            .iter()
            .map(|&(c, s)| (s.to_string(), c))
            .collect();
        Self { forward, reverse }
    }

    /// Symbol string for a character. Lookup is case-insensitive.
    pub fn symbol(&self, c: char) -> Option<&str> {
        self.forward.get(&upper(c)).map(String::as_str)
    }

    /// Character for a symbol string.
    pub fn character(&self, symbol: &str) -> Option<char> {
        self.reverse.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Entries in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.forward.iter().map(|(c, s)| (*c, s.as_str()))
    }
}

/// Single-character uppercase; characters whose uppercase form expands
/// (e.g. `ß`) are left as they are and will simply not be found.
fn upper(c: char) -> char {
    let mut up = c.to_uppercase();
    match (up.next(), up.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
