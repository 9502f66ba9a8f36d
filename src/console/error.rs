//! Console error types

use std::io;

use crate::error::MorseError;

/// Console error with code and message
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// E01..E04: codec, sequencer or configuration failure
    #[error(transparent)]
    Morse(#[from] MorseError),

    /// E05: terminal read/write failure
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Morse(e) => e.code(),
            Self::Io(_) => "E05",
        }
    }

    /// Whether the menu reports the error and keeps going
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Morse(e) => e.is_recoverable(),
            Self::Io(_) => false,
        }
    }

    /// Console line: `"<code> <message>"`
    pub fn report(&self) -> String {
        format!("{} {}", self.code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_prefixes_code() {
        let err = ConsoleError::from(MorseError::input("input_string cannot be empty"));
        assert_eq!(err.report(), "E02 Input Error: input_string cannot be empty");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_is_fatal() {
        let err = ConsoleError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.code(), "E05");
        assert!(!err.is_recoverable());
    }
}
