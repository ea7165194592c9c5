//! # Codec Errors
//!
//! Both directions of the codec fail loudly: nothing in the core falls back
//! to returning the input untouched. Whether a failure leaves the caller's
//! text unchanged is up to the host.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The text is not well-formed XML character data.
    #[error("parse error{}: {reason}", at(.position))]
    Parse {
        /// Byte offset into the decoded text, when the parser could tell.
        position: Option<usize>,
        reason: String,
    },
    /// The text holds a character XML 1.0 cannot carry, not even escaped.
    #[error(
        "character U+{:04X} at byte {position} cannot be represented in XML",
        code(.character)
    )]
    Unrepresentable { character: char, position: usize },
}

fn at(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" at byte {pos}"),
        None => String::new(),
    }
}

fn code(character: &char) -> u32 {
    u32::from(*character)
}

impl CodecError {
    pub fn parse(position: Option<usize>, reason: impl Into<String>) -> Self {
        CodecError::Parse {
            position,
            reason: reason.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CodecError::Parse { .. })
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            CodecError::Parse { position, .. } => *position,
            CodecError::Unrepresentable { position, .. } => Some(*position),
        }
    }
}
