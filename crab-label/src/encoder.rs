//! Encoder selection
//!
//! Each command language implements `LabelEncoder`; `Encoder` dispatches to
//! the right one from a `CommandLanguage`.

use enum_dispatch::enum_dispatch;

use crate::epl::EplEncoder;
use crate::escpos::EscPosEncoder;
use crate::geometry::ResolvedGeometry;
use crate::language::CommandLanguage;
use crate::request::BarcodeRequest;
use crate::zpl::ZplEncoder;

/// Single-label command encoder
///
/// Encoders are pure: the same request and geometry always produce the
/// same bytes.
#[enum_dispatch]
pub trait LabelEncoder {
    /// Language this encoder emits
    fn language(&self) -> CommandLanguage;

    /// Encode exactly one label
    fn encode_label(&self, request: &BarcodeRequest, geometry: &ResolvedGeometry) -> Vec<u8>;

    /// Bytes placed between consecutive labels of a batch
    fn separator(&self) -> &'static [u8];
}

/// Encoder for any supported language
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(LabelEncoder)]
#[derive(Debug, Clone, Copy)]
pub enum Encoder {
    Zpl(ZplEncoder),
    Epl(EplEncoder),
    EscPos(EscPosEncoder),
}

/// This is the only place that matches on `CommandLanguage` to pick an encoder.
impl From<CommandLanguage> for Encoder {
    fn from(language: CommandLanguage) -> Self {
        match language {
            CommandLanguage::Zpl => Encoder::Zpl(ZplEncoder),
            CommandLanguage::Epl => Encoder::Epl(EplEncoder),
            CommandLanguage::EscPos => Encoder::EscPos(EscPosEncoder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_language() {
        for language in CommandLanguage::ALL {
            assert_eq!(Encoder::from(language).language(), language);
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(Encoder::from(CommandLanguage::Zpl).separator(), b"\n");
        assert_eq!(Encoder::from(CommandLanguage::Epl).separator(), b"\n");
        assert_eq!(Encoder::from(CommandLanguage::EscPos).separator(), &[0x0A]);
    }
}
