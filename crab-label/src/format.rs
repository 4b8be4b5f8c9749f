//! Symbology to command-language type code mapping
//!
//! Lookup is permissive: symbologies a language has no native command for
//! fall back to that language's CODE128 code instead of failing.

use std::fmt;

use tracing::warn;

use crate::language::CommandLanguage;
use crate::symbology::Symbology;

/// ZPL fallback (`^BC`, Code 128)
pub const ZPL_FALLBACK: &str = "BC";
/// EPL fallback (`b`, Code 128)
pub const EPL_FALLBACK: &str = "b";
/// ESC/POS fallback (`GS k` m = 73, Code 128)
pub const ESCPOS_FALLBACK: u8 = 73;

/// Language-specific barcode type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    /// ZPL barcode command name, emitted as `^<code>`
    Zpl(&'static str),
    /// EPL barcode command prefix
    Epl(&'static str),
    /// ESC/POS `GS k` type byte
    EscPos(u8),
}

impl FormatCode {
    /// Text form for the text languages
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            Self::Zpl(code) | Self::Epl(code) => Some(code),
            Self::EscPos(_) => None,
        }
    }

    /// Byte form for ESC/POS
    pub fn as_byte(&self) -> Option<u8> {
        match self {
            Self::EscPos(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for FormatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zpl(code) | Self::Epl(code) => f.write_str(code),
            Self::EscPos(code) => write!(f, "{}", code),
        }
    }
}

/// Resolve the type code for `symbology` in `language`. Never fails.
pub fn map_symbology(symbology: Symbology, language: CommandLanguage) -> FormatCode {
    match language {
        CommandLanguage::Zpl => FormatCode::Zpl(zpl_code(symbology).unwrap_or_else(|| {
            warn_fallback(symbology, language, ZPL_FALLBACK);
            ZPL_FALLBACK
        })),
        CommandLanguage::Epl => FormatCode::Epl(epl_code(symbology).unwrap_or_else(|| {
            warn_fallback(symbology, language, EPL_FALLBACK);
            EPL_FALLBACK
        })),
        CommandLanguage::EscPos => {
            FormatCode::EscPos(escpos_code(symbology).unwrap_or_else(|| {
                warn_fallback(symbology, language, ESCPOS_FALLBACK);
                ESCPOS_FALLBACK
            }))
        }
    }
}

fn zpl_code(symbology: Symbology) -> Option<&'static str> {
    match symbology {
        s if s.is_code128() => Some("BC"),
        Symbology::Ean13 | Symbology::Ean8 => Some("BE"),
        Symbology::Upc => Some("BU"),
        Symbology::Code39 => Some("B3"),
        Symbology::Itf14 => Some("BI"),
        _ => None,
    }
}

fn epl_code(symbology: Symbology) -> Option<&'static str> {
    match symbology {
        s if s.is_code128() => Some("b"),
        Symbology::Ean13 | Symbology::Ean8 | Symbology::Upc => Some("B"),
        Symbology::Code39 => Some("3"),
        Symbology::Itf14 => Some("I"),
        _ => None,
    }
}

fn escpos_code(symbology: Symbology) -> Option<u8> {
    match symbology {
        s if s.is_code128() => Some(73),
        Symbology::Ean13 => Some(67),
        Symbology::Ean8 => Some(68),
        Symbology::Upc => Some(65),
        Symbology::Code39 => Some(69),
        Symbology::Itf14 => Some(70),
        _ => None,
    }
}

fn warn_fallback(symbology: Symbology, language: CommandLanguage, fallback: impl fmt::Display) {
    warn!(
        %symbology,
        %language,
        %fallback,
        "No native barcode command, falling back to CODE128"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zpl_table() {
        let zpl = |s| map_symbology(s, CommandLanguage::Zpl);
        for s in [
            Symbology::Code128,
            Symbology::Code128A,
            Symbology::Code128B,
            Symbology::Code128C,
        ] {
            assert_eq!(zpl(s), FormatCode::Zpl("BC"));
        }
        assert_eq!(zpl(Symbology::Ean13), FormatCode::Zpl("BE"));
        assert_eq!(zpl(Symbology::Ean8), FormatCode::Zpl("BE"));
        assert_eq!(zpl(Symbology::Upc), FormatCode::Zpl("BU"));
        assert_eq!(zpl(Symbology::Code39), FormatCode::Zpl("B3"));
        assert_eq!(zpl(Symbology::Itf14), FormatCode::Zpl("BI"));
    }

    #[test]
    fn test_epl_table() {
        let epl = |s| map_symbology(s, CommandLanguage::Epl);
        assert_eq!(epl(Symbology::Code128B), FormatCode::Epl("b"));
        assert_eq!(epl(Symbology::Ean13), FormatCode::Epl("B"));
        assert_eq!(epl(Symbology::Ean8), FormatCode::Epl("B"));
        assert_eq!(epl(Symbology::Upc), FormatCode::Epl("B"));
        assert_eq!(epl(Symbology::Code39), FormatCode::Epl("3"));
        assert_eq!(epl(Symbology::Itf14), FormatCode::Epl("I"));
    }

    #[test]
    fn test_escpos_table() {
        let pos = |s| map_symbology(s, CommandLanguage::EscPos);
        assert_eq!(pos(Symbology::Code128C), FormatCode::EscPos(73));
        assert_eq!(pos(Symbology::Ean13), FormatCode::EscPos(67));
        assert_eq!(pos(Symbology::Ean8), FormatCode::EscPos(68));
        assert_eq!(pos(Symbology::Upc), FormatCode::EscPos(65));
        assert_eq!(pos(Symbology::Code39), FormatCode::EscPos(69));
        assert_eq!(pos(Symbology::Itf14), FormatCode::EscPos(70));
    }

    #[test]
    fn test_unmapped_falls_back() {
        for s in [
            Symbology::Msi,
            Symbology::Pharmacode,
            Symbology::Codabar,
            Symbology::Code11,
            Symbology::Code93,
        ] {
            assert_eq!(map_symbology(s, CommandLanguage::Zpl), FormatCode::Zpl("BC"));
            assert_eq!(map_symbology(s, CommandLanguage::Epl), FormatCode::Epl("b"));
            assert_eq!(
                map_symbology(s, CommandLanguage::EscPos),
                FormatCode::EscPos(73)
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FormatCode::Zpl("B3").to_string(), "B3");
        assert_eq!(FormatCode::EscPos(70).to_string(), "70");
        assert_eq!(FormatCode::EscPos(70).as_byte(), Some(70));
        assert_eq!(FormatCode::Epl("I").as_text(), Some("I"));
    }
}
