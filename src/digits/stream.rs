use std::sync::Arc;

use crate::foundation::error::{WalkaError, WalkaResult};

/// Ordered, cyclic, read-only sequence of decimal digits that drives the walk.
///
/// Cloning is cheap; the digits are shared. A stream is an immutable snapshot: loading a
/// new source replaces the whole stream between ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitStream {
    digits: Arc<[u8]>,
}

impl DigitStream {
    /// Stream with no digits. Stepping over it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse arbitrary text, keeping ASCII digits in order and discarding everything else.
    pub fn parse(text: &str) -> Self {
        let digits: Vec<u8> = text
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        Self {
            digits: digits.into(),
        }
    }

    /// Build a stream from already-split digits, rejecting values above 9.
    pub fn from_digits(digits: impl Into<Vec<u8>>) -> WalkaResult<Self> {
        let digits = digits.into();
        if let Some(bad) = digits.iter().find(|&&d| d > 9) {
            return Err(WalkaError::digit_source(format!(
                "digit stream value {bad} is not a single decimal digit"
            )));
        }
        Ok(Self {
            digits: digits.into(),
        })
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the stream has no digits.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `cursor`, wrapping modulo the stream length. `None` for an empty stream.
    pub fn get(&self, cursor: usize) -> Option<u8> {
        if self.digits.is_empty() {
            return None;
        }
        Some(self.digits[cursor % self.digits.len()])
    }

    /// Cursor position after `cursor`, wrapping to 0 at the end. Returns 0 for an empty stream.
    pub fn advance(&self, cursor: usize) -> usize {
        if self.digits.is_empty() {
            return 0;
        }
        (cursor + 1) % self.digits.len()
    }

    /// All digits in order.
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }
}

#[cfg(test)]
#[path = "../../tests/unit/digits/stream.rs"]
mod tests;
