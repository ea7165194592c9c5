use xmlcodec_common::config::QuoteStyle;
use xmlcodec_common::error::CodecError;
use xmlcodec_core::{decode, encode};

#[test]
fn unbalanced_tag_is_a_parse_error() {
    let err = decode("<a").unwrap_err();
    assert!(err.is_parse(), "{err:?}");
}

#[test]
fn bare_ampersand_is_a_parse_error() {
    for text in ["a & b", "&", "&;", "&#;", "&#xZZ;", "&unknown;"] {
        let err = decode(text).unwrap_err();
        assert!(err.is_parse(), "{text:?} gave {err:?}");
    }
}

#[test]
fn parse_error_positions_stay_inside_input() {
    for text in ["<a", "abc & def", "x</x>y", "ok]]>", "tail<"] {
        let err = decode(text).unwrap_err();
        if let Some(pos) = err.position() {
            assert!(pos <= text.len(), "{text:?}: position {pos}");
        }
    }
}

#[test]
fn unrepresentable_characters_fail_encode() {
    for (text, character, position) in [
        ("\u{0}", '\u{0}', 0),
        ("abc\u{8}", '\u{8}', 3),
        ("é\u{FFFE}", '\u{FFFE}', 2),
    ] {
        assert_eq!(
            encode(text, QuoteStyle::Double),
            Err(CodecError::Unrepresentable {
                character,
                position
            })
        );
    }
}

/// Escaped input is decoded once, never twice.
#[test]
fn no_double_unescaping() {
    assert_eq!(decode("&amp;lt;").unwrap(), "&lt;");
    assert_eq!(decode("&amp;#65;").unwrap(), "&#65;");
}
