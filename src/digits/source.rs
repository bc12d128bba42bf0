use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rand::{Rng as _, SeedableRng as _};

use crate::{
    digits::{constants::Constant, stream::DigitStream},
    foundation::error::WalkaResult,
};

/// Upper bound (exclusive) for the integer whose square root a lucky walk uses.
pub const LUCKY_MAX: u32 = 10_000;

/// Where the digits of a walk come from.
///
/// Sources are collaborators of the engine: they turn some input into text and the text
/// into a [`DigitStream`]. Parse problems never reach the engine; it only ever sees a
/// (possibly empty) replacement stream.
#[derive(Clone, Debug, PartialEq)]
pub enum DigitSource {
    /// Digits of a built-in constant.
    Constant(Constant),
    /// Any text file; non-digit characters are discarded.
    File(PathBuf),
    /// Inline text; non-digit characters are discarded.
    Text(String),
    /// Digits of `sqrt(N)` for a random `N` in `[1, LUCKY_MAX)`.
    Lucky {
        /// Seed for reproducible picks; `None` draws from the thread RNG.
        seed: Option<u64>,
    },
}

/// A freshly loaded stream with a human-readable description of where it came from.
#[derive(Clone, Debug)]
pub struct LoadedDigits {
    /// Short description, e.g. `pi` or `sqrt(1234)`.
    pub label: String,
    /// Parsed digits.
    pub stream: DigitStream,
}

impl DigitSource {
    /// Produce the digit stream. `digit_count` bounds generated constants; file and text
    /// sources keep every digit they contain.
    pub fn load(&self, digit_count: usize) -> WalkaResult<LoadedDigits> {
        let loaded = match self {
            Self::Constant(c) => LoadedDigits {
                label: c.name().to_string(),
                stream: DigitStream::from_digits(c.digits(digit_count))?,
            },
            Self::File(path) => LoadedDigits {
                label: path.display().to_string(),
                stream: DigitStream::parse(&read_digit_text(path)?),
            },
            Self::Text(text) => LoadedDigits {
                label: "text".to_string(),
                stream: DigitStream::parse(text),
            },
            Self::Lucky { seed } => {
                let n = match seed {
                    Some(seed) => rand::rngs::StdRng::seed_from_u64(*seed).random_range(1..LUCKY_MAX),
                    None => rand::rng().random_range(1..LUCKY_MAX),
                };
                LoadedDigits {
                    label: format!("sqrt({n})"),
                    stream: DigitStream::parse(&lucky_sqrt_text(n)),
                }
            }
        };

        tracing::info!(
            source = %loaded.label,
            digits = loaded.stream.len(),
            "loaded digit stream"
        );
        Ok(loaded)
    }
}

/// Square root of `n` with 14 fractional digits, decimal point removed.
pub fn lucky_sqrt_text(n: u32) -> String {
    format!("{:.14}", f64::from(n).sqrt()).replace('.', "")
}

fn read_digit_text(path: &Path) -> WalkaResult<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read digit file '{}'", path.display()))?;
    Ok(text)
}

#[cfg(test)]
#[path = "../../tests/unit/digits/source.rs"]
mod tests;
