//! Named actions a host offers its users, one per direction of the codec.

use std::fmt;
use std::str::FromStr;

use xmlcodec_common::config::Config;
use xmlcodec_common::error::CodecError;

use crate::{decode, encode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Decode,
    Encode,
}

impl Action {
    /// Every action, in the order a menu lists them.
    pub const ALL: [Action; 2] = [Action::Decode, Action::Encode];

    /// Stable identifier, suitable for keybindings and scripting.
    pub fn name(self) -> &'static str {
        match self {
            Action::Decode => "XmlDecodeAction",
            Action::Encode => "XmlEncodeAction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Decode => "XML Decode",
            Action::Encode => "XML Encode",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::Decode => "XML-decode the current selection",
            Action::Encode => "XML-encode the current selection",
        }
    }

    /// Runs the action over `text`.
    ///
    /// The input is never modified; on error the caller still holds the
    /// original text and decides what to do with it.
    pub fn apply(self, text: &str, cfg: &Config) -> Result<String, CodecError> {
        match self {
            Action::Decode => decode(text),
            Action::Encode => encode(text, cfg.quotes),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    /// Accepts `decode`/`encode` or an action name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        Action::ALL
            .into_iter()
            .find(|action| {
                lower == action.name().to_ascii_lowercase()
                    || lower == format!("{action:?}").to_ascii_lowercase()
            })
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}
