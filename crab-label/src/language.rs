//! Printer command languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Target printer command language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CommandLanguage {
    /// Zebra Programming Language (text)
    Zpl,
    /// Eltron Programming Language (text)
    Epl,
    /// ESC/POS (binary)
    EscPos,
}

impl CommandLanguage {
    pub const ALL: [CommandLanguage; 3] = [Self::Zpl, Self::Epl, Self::EscPos];

    /// File extension for saved command streams
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Zpl => "zpl",
            Self::Epl => "epl",
            Self::EscPos => "bin",
        }
    }

    /// Whether the output is printable text
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::EscPos)
    }
}

impl fmt::Display for CommandLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zpl => "ZPL",
            Self::Epl => "EPL",
            Self::EscPos => "ESC/POS",
        })
    }
}

impl FromStr for CommandLanguage {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zpl" => Ok(Self::Zpl),
            "epl" => Ok(Self::Epl),
            "escpos" | "esc/pos" | "esc-pos" => Ok(Self::EscPos),
            _ => Err(LabelError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for CommandLanguage {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
