//! System clipboard over OSC 52, so copy works through SSH and multiplexers.

use std::io::{self, Write};
use thiserror::Error;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX: &str = "\x07";

// tmux and screen only forward escapes wrapped in a DCS passthrough.
const TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const SCREEN_PREFIX: &str = "\x1bP\x1b]52;c;";
const DCS_SUFFIX: &str = "\x07\x1b\\";

/// Many terminals drop longer sequences silently.
pub const OSC52_MAX_BYTES: usize = 100 * 1024;

#[derive(Debug, Error)]
pub enum Osc52Error {
    #[error("selection too large for the clipboard ({} KB, limit {} KB)", .bytes / 1024, OSC52_MAX_BYTES / 1024)]
    TooLarge { bytes: usize },
    #[error("cannot write clipboard sequence: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Multiplexer {
    #[default]
    None,
    Tmux,
    Screen,
}

impl Multiplexer {
    pub fn detect() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        Self::from_env(std::env::var_os("TMUX").is_some(), &term)
    }

    pub fn from_env(in_tmux: bool, term: &str) -> Self {
        if in_tmux {
            Multiplexer::Tmux
        } else if term.starts_with("screen") {
            Multiplexer::Screen
        } else {
            Multiplexer::None
        }
    }
}

pub fn build_sequence(text: &str, mux: Multiplexer) -> Result<String, Osc52Error> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(Osc52Error::TooLarge { bytes: bytes.len() });
    }

    let payload = base64_encode(bytes);
    Ok(match mux {
        Multiplexer::None => format!("{OSC52_PREFIX}{payload}{OSC52_SUFFIX}"),
        Multiplexer::Tmux => format!("{TMUX_PREFIX}{payload}{DCS_SUFFIX}"),
        Multiplexer::Screen => format!("{SCREEN_PREFIX}{payload}{DCS_SUFFIX}"),
    })
}

pub fn write_sequence<W: Write>(mut w: W, text: &str, mux: Multiplexer) -> Result<(), Osc52Error> {
    let seq = build_sequence(text, mux)?;
    w.write_all(seq.as_bytes())?;
    w.flush()?;
    Ok(())
}

pub fn copy_to_clipboard(text: &str) -> Result<(), Osc52Error> {
    write_sequence(io::stdout(), text, Multiplexer::detect())
}

fn base64_encode(bytes: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |n, (i, &b)| n | (u32::from(b) << (16 - 8 * i)));
        for i in 0..4 {
            if i <= chunk.len() {
                out.push(TABLE[((n >> (18 - 6 * i)) & 0x3f) as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tui/osc52.rs"]
mod tests;
