//! Error taxonomy shared by the codec, the sequencer and configuration.
//!
//! Four kinds, each with a short code for console output:
//!
//! | Code | Kind            | Meaning                                        |
//! |------|-----------------|------------------------------------------------|
//! | E01  | TypeMismatch    | wrong argument shape, never coerced            |
//! | E02  | Input           | well-formed but invalid content                |
//! | E03  | Audio           | device acquisition, synthesis or playback      |
//! | E04  | Configuration   | bad timing/audio parameters, unknown variant   |

use core::fmt;

/// Error kind without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    Input,
    Audio,
    Configuration,
}

impl ErrorKind {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "E01",
            Self::Input => "E02",
            Self::Audio => "E03",
            Self::Configuration => "E04",
        }
    }

    /// Human readable kind name
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "Type",
            Self::Input => "Input",
            Self::Audio => "Audio",
            Self::Configuration => "Configuration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.name())
    }
}

/// Main error type for codec, sequencer and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum MorseError {
    /// Wrong argument shape.
    #[error("Type Error: {0}")]
    TypeMismatch(String),

    /// Empty input or semantically invalid content.
    #[error("Input Error: {message}")]
    Input {
        message: String,
        /// Offending characters, deduplicated, in first-seen order.
        invalid: Vec<char>,
    },

    /// Audio subsystem failure.
    #[error("Audio Error: {0}")]
    Audio(String),

    /// Invalid parameters or unknown symbol table.
    #[error("Configuration Error: {0}")]
    Configuration(String),
}

/// Convenience type alias for Results with MorseError.
pub type Result<T> = core::result::Result<T, MorseError>;

impl MorseError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Input error that does not name particular characters.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input {
            message: msg.into(),
            invalid: Vec::new(),
        }
    }

    /// Input error naming every offending character.
    pub fn invalid_chars(what: &str, invalid: Vec<char>) -> Self {
        let listed = invalid
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::Input {
            message: format!(
                "{what} contains invalid characters: {listed}. \
                 Only dots (.), dashes (-), and spaces are allowed."
            ),
            invalid,
        }
    }

    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::Input { .. } => ErrorKind::Input,
            Self::Audio(_) => ErrorKind::Audio,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Characters named by an input error; empty for every other kind.
    pub fn invalid(&self) -> &[char] {
        match self {
            Self::Input { invalid, .. } => invalid,
            _ => &[],
        }
    }

    /// Content-level errors are reported to the user and recovered from.
    ///
    /// Type mismatches and audio failures are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Input | ErrorKind::Configuration)
    }
}

/// Collect characters rejected by `allowed`, deduplicated in first-seen order.
pub(crate) fn collect_invalid(s: &str, allowed: impl Fn(char) -> bool) -> Vec<char> {
    let mut invalid: Vec<char> = Vec::new();
    for c in s.chars().filter(|&c| !allowed(c)) {
        if !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}
