//! Barcode symbologies and their data rules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, LabelResult};

/// Supported barcode symbologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Symbology {
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "CODE128A")]
    Code128A,
    #[serde(rename = "CODE128B")]
    Code128B,
    #[serde(rename = "CODE128C")]
    Code128C,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "EAN8")]
    Ean8,
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "CODE39")]
    Code39,
    #[serde(rename = "ITF14")]
    Itf14,
    #[serde(rename = "MSI")]
    Msi,
    #[serde(rename = "pharmacode")]
    Pharmacode,
    #[serde(rename = "codabar")]
    Codabar,
    #[serde(rename = "CODE11")]
    Code11,
    #[serde(rename = "CODE93")]
    Code93,
}

impl Symbology {
    /// Every symbology, in display order
    pub const ALL: [Symbology; 14] = [
        Self::Code128,
        Self::Code128A,
        Self::Code128B,
        Self::Code128C,
        Self::Ean13,
        Self::Ean8,
        Self::Upc,
        Self::Code39,
        Self::Itf14,
        Self::Msi,
        Self::Pharmacode,
        Self::Codabar,
        Self::Code11,
        Self::Code93,
    ];

    /// Identifier used on the wire and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Code128A => "CODE128A",
            Self::Code128B => "CODE128B",
            Self::Code128C => "CODE128C",
            Self::Ean13 => "EAN13",
            Self::Ean8 => "EAN8",
            Self::Upc => "UPC",
            Self::Code39 => "CODE39",
            Self::Itf14 => "ITF14",
            Self::Msi => "MSI",
            Self::Pharmacode => "pharmacode",
            Self::Codabar => "codabar",
            Self::Code11 => "CODE11",
            Self::Code93 => "CODE93",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Code128A => "CODE128 A",
            Self::Code128B => "CODE128 B",
            Self::Code128C => "CODE128 C",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
            Self::Upc => "UPC-A",
            Self::Code39 => "CODE39",
            Self::Itf14 => "ITF-14",
            Self::Msi => "MSI",
            Self::Pharmacode => "Pharmacode",
            Self::Codabar => "Codabar",
            Self::Code11 => "CODE11",
            Self::Code93 => "CODE93",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Code128 => "Full ASCII support, most common",
            Self::Code128A => "Uppercase letters and control codes",
            Self::Code128B => "Upper and lowercase letters",
            Self::Code128C => "Numeric data only",
            Self::Ean13 => "13-digit product codes",
            Self::Ean8 => "8-digit product codes",
            Self::Upc => "12-digit product codes",
            Self::Code39 => "Alphanumeric, uppercase",
            Self::Itf14 => "14-digit shipping codes",
            Self::Msi => "Numeric, used in libraries",
            Self::Pharmacode => "Pharmaceutical packaging",
            Self::Codabar => "Used in libraries and blood banks",
            Self::Code11 => "Numeric with dash",
            Self::Code93 => "Extended CODE39",
        }
    }

    /// Any of the CODE128 variants
    pub fn is_code128(&self) -> bool {
        matches!(
            self,
            Self::Code128 | Self::Code128A | Self::Code128B | Self::Code128C
        )
    }

    /// Check `data` against this symbology's character and length rules.
    ///
    /// Leading/trailing whitespace is ignored.
    pub fn validate(&self, data: &str) -> LabelResult<()> {
        let text = data.trim();
        if text.is_empty() {
            return Err(LabelError::InvalidInput(
                "Barcode text cannot be empty".to_string(),
            ));
        }

        let invalid = |reason| {
            Err(LabelError::InvalidBarcode {
                symbology: *self,
                reason,
            })
        };

        match self {
            Self::Ean13 if !is_digits(text, Some(13)) => {
                invalid("EAN-13 requires exactly 13 digits")
            }
            Self::Ean8 if !is_digits(text, Some(8)) => invalid("EAN-8 requires exactly 8 digits"),
            Self::Upc if !is_digits(text, Some(12)) => {
                invalid("UPC-A requires exactly 12 digits")
            }
            Self::Itf14 if !is_digits(text, Some(14)) => {
                invalid("ITF-14 requires exactly 14 digits")
            }
            Self::Code39 if !text.chars().all(is_code39_char) => invalid(
                "CODE39 only supports uppercase letters, numbers, and specific symbols",
            ),
            Self::Msi if !is_digits(text, None) => invalid("MSI only supports digits"),
            Self::Pharmacode => match text.parse::<u32>() {
                Ok(n) if is_digits(text, None) && (1..=131_070).contains(&n) => Ok(()),
                _ => invalid("Pharmacode must be a number between 1 and 131070"),
            },
            _ => Ok(()),
        }
    }
}

fn is_digits(s: &str, len: Option<usize>) -> bool {
    s.bytes().all(|b| b.is_ascii_digit()) && len.is_none_or(|n| s.len() == n)
}

fn is_code39_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '-' | '.' | '$' | '/' | '+' | '%')
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbology {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|sym| sym.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| LabelError::UnknownSymbology(s.to_string()))
    }
}

impl TryFrom<String> for Symbology {
    type Error = LabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
