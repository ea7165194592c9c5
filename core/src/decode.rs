//! # Decoding
//!
//! Resolves entity and character references in escaped text.
//!
//! The text is wrapped in a throwaway element and handed to `quick-xml`, so
//! reference resolution and well-formedness follow the XML grammar instead
//! of a local entity table. Only character data and CDATA sections may sit
//! inside the wrapper; any other markup means the input was not escaped
//! text to begin with.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use xmlcodec_common::error::CodecError;

use crate::chars;

const WRAPPER_OPEN: &str = "<x>";
const WRAPPER_CLOSE: &str = "</x>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    BeforeWrapper,
    InWrapper,
    AfterWrapper,
}

/// Decodes escaped XML character data back to literal text.
///
/// Named entities (`&lt;`, `&amp;`, ...) and numeric references (`&#65;`,
/// `&#x41;`) are resolved, CDATA sections are taken verbatim and line endings
/// are left as they are. Anything that would not be well-formed content of a
/// single element is a [`CodecError::Parse`], with the byte offset into
/// `text` where the parser gave up.
pub fn decode(text: &str) -> Result<String, CodecError> {
    if let Some((position, character)) = chars::find_unrepresentable(text) {
        return Err(CodecError::parse(
            Some(position),
            format!("character U+{:04X} is not allowed in XML", u32::from(character)),
        ));
    }

    let wrapped: String = format!("{WRAPPER_OPEN}{text}{WRAPPER_CLOSE}");
    let mut reader = Reader::from_str(&wrapped);
    let mut output: String = String::with_capacity(text.len());
    let mut state: State = State::BeforeWrapper;

    loop {
        let offset: usize = locate(reader.buffer_position() as usize, text);
        let event = reader.read_event().map_err(|err| {
            CodecError::parse(
                Some(locate(reader.error_position() as usize, text)),
                err.to_string(),
            )
        })?;

        match (state, event) {
            (State::BeforeWrapper, Event::Start(_)) => state = State::InWrapper,
            (State::InWrapper, Event::Text(raw)) => {
                if let Some(idx) = raw.windows(3).position(|w| w == b"]]>") {
                    return Err(CodecError::parse(
                        Some(offset + idx),
                        "the sequence ']]>' is not allowed in character data",
                    ));
                }

                let unescaped = raw
                    .unescape()
                    .map_err(|err| CodecError::parse(Some(offset), err.to_string()))?;

                if let Some((_, character)) = chars::find_unrepresentable(&unescaped) {
                    return Err(CodecError::parse(
                        Some(offset),
                        format!(
                            "character reference to U+{:04X} is not allowed in XML",
                            u32::from(character)
                        ),
                    ));
                }

                output.push_str(&unescaped);
            }
            (State::InWrapper, Event::CData(cdata)) => {
                let content: &str = std::str::from_utf8(&cdata)
                    .map_err(|err| CodecError::parse(Some(offset), err.to_string()))?;
                output.push_str(content);
            }
            (State::InWrapper, Event::End(_)) => state = State::AfterWrapper,
            (State::AfterWrapper, Event::Eof) => break,
            (_, Event::Eof) => {
                return Err(CodecError::parse(
                    Some(text.len()),
                    "unexpected end of input",
                ));
            }
            (State::AfterWrapper, _) => {
                return Err(CodecError::parse(
                    Some(offset),
                    "unexpected content after a closing tag",
                ));
            }
            (_, _) => {
                return Err(CodecError::parse(
                    Some(offset),
                    "markup is not allowed in character data",
                ));
            }
        }
    }

    debug!(input_len = text.len(), output_len = output.len(), "decoded text");
    Ok(output)
}

/// Maps an offset in the wrapped document back onto the caller's text.
fn locate(wrapped_pos: usize, text: &str) -> usize {
    wrapped_pos.saturating_sub(WRAPPER_OPEN.len()).min(text.len())
}
