use xmlcodec_common::config::{Config, QuoteStyle};
use xmlcodec_core::{Action, decode, encode};

const SAMPLES: &[&str] = &[
    "",
    "plain",
    "<a>&b</a>",
    "&amp; is already escaped",
    "&#65; stays literal",
    r#"<tag attr="v" other='w'>"#,
    "café, naïve, 日本語, 🦀",
    "tabs\tand\nnewlines\r\nand CRs\r",
    "]]> outside CDATA",
    "   leading and trailing   ",
    "<![CDATA[not really cdata]]>",
    "</x>",
];

/// Decoding what was encoded gives back the input, whatever the quote style.
#[test]
fn round_trip_all_quote_styles() {
    for quotes in [QuoteStyle::Double, QuoteStyle::All, QuoteStyle::None] {
        for sample in SAMPLES {
            let encoded = encode(sample, quotes).unwrap();
            let decoded = decode(&encoded)
                .unwrap_or_else(|err| panic!("decoding {encoded:?} ({quotes}): {err}"));
            assert_eq!(&decoded, sample, "quote style {quotes}");
        }
    }
}

#[test]
fn empty_is_empty_both_ways() {
    assert_eq!(encode("", QuoteStyle::Double).unwrap(), "");
    assert_eq!(decode("").unwrap(), "");
}

#[test]
fn literal_escaping() {
    assert_eq!(
        encode("<a>&b</a>", QuoteStyle::Double).unwrap(),
        "&lt;a&gt;&amp;b&lt;/a&gt;"
    );
}

#[test]
fn entity_resolution() {
    assert_eq!(decode("&lt;a&gt;&amp;b&lt;/a&gt;").unwrap(), "<a>&b</a>");
    assert_eq!(decode("&#65;").unwrap(), "A");
}

#[test]
fn unicode_passthrough() {
    assert_eq!(encode("café", QuoteStyle::Double).unwrap(), "café");
    assert_eq!(decode("café").unwrap(), "café");
}

/// Encoded output never contains raw markup characters.
#[test]
fn encoded_output_has_no_markup() {
    for sample in SAMPLES {
        let encoded = encode(sample, QuoteStyle::All).unwrap();
        assert!(!encoded.contains('<'), "{encoded:?}");
        assert!(!encoded.contains('>'), "{encoded:?}");
        assert!(!encoded.contains('"'), "{encoded:?}");
        assert!(!encoded.contains('\''), "{encoded:?}");
        let stray_amp = encoded
            .match_indices('&')
            .any(|(i, _)| !encoded[i..].starts_with("&amp;")
                && !encoded[i..].starts_with("&lt;")
                && !encoded[i..].starts_with("&gt;")
                && !encoded[i..].starts_with("&quot;")
                && !encoded[i..].starts_with("&apos;"));
        assert!(!stray_amp, "{encoded:?}");
    }
}

/// Both actions go through the same entry points a host calls.
#[test]
fn actions_match_free_functions() {
    let cfg = Config::default();
    for sample in SAMPLES {
        let encoded = Action::Encode.apply(sample, &cfg).unwrap();
        assert_eq!(encoded, encode(sample, cfg.quotes).unwrap());
        assert_eq!(Action::Decode.apply(&encoded, &cfg).unwrap(), *sample);
    }
}

/// Calls share no state, so they can run side by side.
#[test]
fn concurrent_calls_are_independent() -> anyhow::Result<()> {
    let handles: Vec<_> = SAMPLES
        .iter()
        .map(|sample| {
            std::thread::spawn(move || -> anyhow::Result<bool> {
                let encoded = encode(sample, QuoteStyle::Double)?;
                Ok(decode(&encoded)? == *sample)
            })
        })
        .collect();

    for handle in handles {
        let ok = handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))??;
        assert!(ok);
    }
    Ok(())
}
