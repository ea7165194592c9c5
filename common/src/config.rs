use std::fmt;
use std::str::FromStr;

pub struct Config {
    /// Which quote characters `encode` turns into entity references.
    pub quotes: QuoteStyle,
    /// 0 prints headers and status, 1 only status, 2 and above only errors.
    pub quiet: u8,
    /// Writes the result back over the input file instead of stdout.
    ///
    /// The file is only touched once the transformation has succeeded.
    pub in_place: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quotes: QuoteStyle::Double,
            quiet: 0,
            in_place: false,
        }
    }
}

/// Quote handling for encoded text.
///
/// `&`, `<` and `>` are always escaped; quotes only matter when the encoded
/// text ends up inside an attribute value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"` becomes `&quot;`, `'` is left alone.
    #[default]
    Double,
    /// Both `"` and `'` are escaped.
    All,
    /// Quotes pass through untouched.
    None,
}

impl QuoteStyle {
    pub fn escapes_double(self) -> bool {
        matches!(self, QuoteStyle::Double | QuoteStyle::All)
    }

    pub fn escapes_single(self) -> bool {
        matches!(self, QuoteStyle::All)
    }
}

impl FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "double" => Ok(QuoteStyle::Double),
            "all" => Ok(QuoteStyle::All),
            "none" => Ok(QuoteStyle::None),
            _ => Err(format!("invalid quote style: {s} (expected double, all or none)")),
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuoteStyle::Double => "double",
            QuoteStyle::All => "all",
            QuoteStyle::None => "none",
        };
        f.write_str(name)
    }
}
