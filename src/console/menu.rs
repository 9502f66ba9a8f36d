//! Interactive four-action menu
//!
//! Reads replies line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so a terminal and an in-memory script drive it
//! the same way. End of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use super::actions::{action_choices, MenuAction, ACTIONS};
use super::error::ConsoleError;
use super::progress::render_progress;
use super::prompt::{ask, parse_choice, parse_yes_no, NO_REPLIES, YES_REPLIES};
use crate::audio::{AudioSink, ToneSequencer};
use crate::codec::SymbolCodec;

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

pub const WELCOME_MESSAGE: &str = "Welcome to the International Morse Code Converter and Player";
pub const GOODBYE_MESSAGE: &str = "Thank you for using the Morse Code Converter and Player!";

const PLAY_PROMPT: &str = "Do you want to play the Morse code sound? (Yes/No): ";

/// Menu session over one codec and one sequencer
pub struct Menu<S: AudioSink> {
    codec: SymbolCodec,
    sequencer: ToneSequencer<S>,
    show_progress: bool,
}

impl<S: AudioSink> Menu<S> {
    pub fn new(codec: SymbolCodec, sequencer: ToneSequencer<S>) -> Self {
        Self {
            codec,
            sequencer,
            show_progress: false,
        }
    }

    /// Draw a progress bar on `out` while playing.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn codec(&self) -> &SymbolCodec {
        &self.codec
    }

    pub fn sequencer(&self) -> &ToneSequencer<S> {
        &self.sequencer
    }

    /// Run until Exit or end of input.
    ///
    /// Input and configuration errors are printed as `"<code> <message>"`
    /// and the menu continues. Other errors end the session and are
    /// returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<(), ConsoleError> {
        writeln!(out, "{WELCOME_MESSAGE}")?;
        writeln!(out, "{VERSION} ({} table)", self.codec.variant())?;

        loop {
            writeln!(out)?;
            writeln!(out, "Options:")?;
            for action in ACTIONS {
                writeln!(out, "{action}")?;
            }

            let Some(action) = self.read_choice(input, out)? else {
                break;
            };
            tracing::debug!(?action, "menu choice");
            if action == MenuAction::Exit {
                break;
            }

            match self.perform(action, input, out) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::error!(code = e.code(), error = %e, "menu action failed");
                    writeln!(out, "{}", e.report())?;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(out, "{GOODBYE_MESSAGE}")?;
        Ok(())
    }

    /// Returns false when input ran out.
    fn perform<R: BufRead, W: Write>(
        &mut self,
        action: MenuAction,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool, ConsoleError> {
        match action {
            MenuAction::EncodeText => {
                let Some(text) = ask(input, out, "Write your message to convert to Morse Code: ")? else {
                    return Ok(false);
                };
                let morse = self.codec.encode(&text)?;
                writeln!(out, "Your Morse code: {morse}")?;
                if morse.is_empty() {
                    return Ok(true);
                }
                self.offer_playback(&morse, input, out)
            }
            MenuAction::DecodeMorse => {
                let Some(morse) = ask(input, out, "Enter Morse Code to convert to Text: ")? else {
                    return Ok(false);
                };
                let text = self.codec.decode(&morse)?;
                writeln!(out, "Your text message: {text}")?;
                self.offer_playback(&morse, input, out)
            }
            MenuAction::PlayMorse => {
                let Some(morse) = ask(input, out, "Enter Morse Code to play as sound: ")? else {
                    return Ok(false);
                };
                self.play(&morse, out)?;
                Ok(true)
            }
            MenuAction::Exit => Ok(false),
        }
    }

    fn offer_playback<R: BufRead, W: Write>(
        &mut self,
        morse: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool, ConsoleError> {
        match read_yes_no(input, out, PLAY_PROMPT)? {
            None => Ok(false),
            Some(false) => Ok(true),
            Some(true) => {
                self.play(morse, out)?;
                Ok(true)
            }
        }
    }

    fn play<W: Write>(&mut self, morse: &str, out: &mut W) -> Result<(), ConsoleError> {
        if self.show_progress {
            self.sequencer.play_with_progress(morse, |p| {
                let _ = write!(out, "\r{}", render_progress(&p));
                let _ = out.flush();
            })?;
            writeln!(out)?;
        } else {
            self.sequencer.play(morse)?;
        }
        Ok(())
    }

    fn read_choice<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<MenuAction>, ConsoleError> {
        let first = action_choices().next().unwrap_or_default();
        let last = action_choices().last().unwrap_or_default();
        let prompt = format!("Choose an option ({first}-{last}): ");

        loop {
            let Some(line) = ask(input, out, &prompt)? else {
                return Ok(None);
            };
            match parse_choice(&line) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(
                    out,
                    "Invalid option, please choose a number between {first} and {last}."
                )?,
            }
        }
    }
}

/// Ask until the reply is yes or no; `None` at end of input.
fn read_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<bool>, ConsoleError> {
    loop {
        let Some(line) = ask(input, out, prompt)? else {
            return Ok(None);
        };
        if let Some(answer) = parse_yes_no(&line) {
            return Ok(Some(answer));
        }
        writeln!(out, "Please answer with '{}' or '{}'.", YES_REPLIES[1], NO_REPLIES[1])?;
    }
}
