//! # Encoding
//!
//! Escapes raw character data so it can be pasted into an XML document.
//! The markup characters are always replaced by their predefined entities;
//! quotes follow the configured [`QuoteStyle`].

use tracing::debug;
use xmlcodec_common::config::QuoteStyle;
use xmlcodec_common::error::CodecError;

use crate::chars;

enum Segment {
    Literal(char),
    Escape(&'static str),
}

impl Segment {
    fn from_char(c: char, quotes: QuoteStyle) -> Self {
        match c {
            '&' => Self::Escape("&amp;"),
            '<' => Self::Escape("&lt;"),
            '>' => Self::Escape("&gt;"),
            '"' if quotes.escapes_double() => Self::Escape("&quot;"),
            '\'' if quotes.escapes_single() => Self::Escape("&apos;"),
            _ => Self::Literal(c),
        }
    }
}

/// Escapes `text` as XML character data.
///
/// Fails with [`CodecError::Unrepresentable`] on the first character XML 1.0
/// has no way to carry (C0 controls other than tab, newline and carriage
/// return, U+FFFE, U+FFFF). Everything that is not markup passes through
/// unchanged, including non-ASCII text and any entity references already in
/// the input, whose `&` gets escaped like any other.
pub fn encode(text: &str, quotes: QuoteStyle) -> Result<String, CodecError> {
    if let Some((position, character)) = chars::find_unrepresentable(text) {
        return Err(CodecError::Unrepresentable {
            character,
            position,
        });
    }

    let mut output: String = String::with_capacity(text.len());
    for c in text.chars() {
        match Segment::from_char(c, quotes) {
            Segment::Literal(c) => output.push(c),
            Segment::Escape(esc) => output.push_str(esc),
        }
    }

    debug!(input_len = text.len(), output_len = output.len(), "encoded text");
    Ok(output)
}
