//! Interactive console for converting and playing Morse code
//!
//! Sits outside the codec and sequencer: it only passes raw strings in and
//! reports whatever comes back.

pub mod actions;
pub mod error;
pub mod menu;
pub mod progress;
pub mod prompt;

pub use actions::{action_choices, find_action, MenuAction, ACTIONS};
pub use error::ConsoleError;
pub use menu::{Menu, VERSION};
pub use progress::render_progress;
pub use prompt::{parse_choice, parse_yes_no};

use crate::error::Result;

/// Run `op`, returning `default` if it fails.
///
/// The failure is logged at error level and otherwise dropped.
pub fn run_safely<T, F>(op: F, default: T) -> T
where
    F: FnOnce() -> Result<T>,
{
    match op() {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "operation failed, using default");
            default
        }
    }
}
