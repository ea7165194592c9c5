/// The XML 1.0 `Char` production.
///
/// Surrogates cannot appear in a `char`, so only the C0 controls and the two
/// non-characters at the top of the BMP need rejecting.
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Returns the byte offset and value of the first character outside [`is_xml_char`].
pub fn find_unrepresentable(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|(_, c)| !is_xml_char(*c))
}
