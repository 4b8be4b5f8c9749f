//! ESC/POS label encoding
//!
//! `EscPosBuilder` is a fluent byte builder for the barcode subset of
//! ESC/POS; `EscPosEncoder` lays one label out with it.

use tracing::debug;

use crate::encoder::LabelEncoder;
use crate::format::map_symbology;
use crate::geometry::ResolvedGeometry;
use crate::language::CommandLanguage;
use crate::request::BarcodeRequest;

/// Widest paper (in dots) the `GS W` print area command is sent for
pub const MAX_PRINT_AREA_DOTS: u32 = 576;

/// Upper bound of the `GS w` module width parameter
pub const MAX_MODULE_WIDTH: u8 = 6;

/// HRI (human readable interpretation) placement for `GS H`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HriPosition {
    None = 0,
    Above = 1,
    Below = 2,
    Both = 3,
}

/// ESC/POS command builder
///
/// Builds raw ESC/POS byte sequences. Every numeric parameter saturates to
/// the range the command accepts; nothing here can fail.
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    /// Create a new builder, starting with the initialize command
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(64);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self { buf }
    }

    /// Set print area width in dots (GS W nL nH)
    pub fn print_area_width(&mut self, dots: u16) -> &mut Self {
        let [lo, hi] = dots.to_le_bytes();
        self.buf.extend_from_slice(&[0x1D, 0x57, lo, hi]);
        self
    }

    /// Print and feed n lines (ESC d n)
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x64, lines]);
        self
    }

    // === Barcode ===

    /// Barcode height in dots (GS h n), 1-255
    pub fn barcode_height(&mut self, dots: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x68, dots.max(1)]);
        self
    }

    /// Barcode module width (GS w n), 1-6
    pub fn barcode_width(&mut self, module: u8) -> &mut Self {
        self.buf
            .extend_from_slice(&[0x1D, 0x77, module.clamp(1, MAX_MODULE_WIDTH)]);
        self
    }

    /// HRI character position (GS H n)
    pub fn hri_position(&mut self, position: HriPosition) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x48, position as u8]);
        self
    }

    /// Print a barcode (GS k m n d1...dn)
    ///
    /// One byte per character of `data`; payloads longer than 255 bytes are
    /// truncated so the length byte stays accurate.
    pub fn barcode(&mut self, kind: u8, data: &[u8]) -> &mut Self {
        let len = data.len().min(u8::MAX as usize);
        if len < data.len() {
            debug!(len = data.len(), "Barcode data truncated to 255 bytes");
        }
        self.buf.extend_from_slice(&[0x1D, 0x6B, kind, len as u8]);
        self.buf.extend_from_slice(&data[..len]);
        self
    }

    // === Paper Control ===

    /// Cut paper (GS V 0)
    pub fn cut(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x00]);
        self
    }

    /// Take the finished byte buffer
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Saturate a dot count into one parameter byte
fn saturate_u8(value: u32, min: u8) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX).max(min)
}

/// ESC/POS label encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct EscPosEncoder;

impl LabelEncoder for EscPosEncoder {
    fn language(&self) -> CommandLanguage {
        CommandLanguage::EscPos
    }

    fn encode_label(&self, request: &BarcodeRequest, geometry: &ResolvedGeometry) -> Vec<u8> {
        let kind = map_symbology(request.symbology(), CommandLanguage::EscPos)
            .as_byte()
            .unwrap_or(crate::format::ESCPOS_FALLBACK);

        let mut b = EscPosBuilder::new();

        // Narrow printers only; wider stock keeps the printer's own width
        if geometry.width <= MAX_PRINT_AREA_DOTS {
            b.print_area_width(geometry.width as u16);
        } else {
            debug!(width = geometry.width, "Label wider than 576 dots, print area not set");
        }

        if geometry.margin_top > 0 {
            b.feed(saturate_u8(geometry.margin_top, 0));
        }

        b.barcode_height(saturate_u8(geometry.barcode_height, 1))
            .barcode_width(saturate_u8(geometry.module_width, 1))
            .hri_position(HriPosition::Below)
            .barcode(kind, request.data().as_bytes());

        let bottom = geometry
            .height
            .saturating_sub(geometry.barcode_height)
            .saturating_sub(geometry.margin_top);
        b.feed(saturate_u8(bottom, 0)).cut();

        b.build()
    }

    fn separator(&self) -> &'static [u8] {
        b"\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::LabelGeometry;
    use crate::symbology::Symbology;

    fn encode(data: &str, symbology: Symbology, geometry: LabelGeometry) -> Vec<u8> {
        let req = BarcodeRequest::new(data, symbology).unwrap();
        EscPosEncoder.encode_label(&req, &geometry.resolve())
    }

    #[test]
    fn test_builder_commands() {
        let mut b = EscPosBuilder::new();
        b.print_area_width(406)
            .feed(16)
            .barcode_height(120)
            .barcode_width(9)
            .hri_position(HriPosition::Below)
            .barcode(73, b"AB")
            .cut();

        assert_eq!(
            b.build(),
            vec![
                0x1B, 0x40, // init
                0x1D, 0x57, 0x96, 0x01, // width 406
                0x1B, 0x64, 16, // feed
                0x1D, 0x68, 120, // height
                0x1D, 0x77, 6, // module width clamped
                0x1D, 0x48, 0x02, // HRI below
                0x1D, 0x6B, 73, 2, b'A', b'B', // barcode
                0x1D, 0x56, 0x00, // cut
            ]
        );
    }

    #[test]
    fn test_default_label() {
        // 406 x 203 dots, margin 16, barcode height 120, module 4
        let data = encode("123456789012", Symbology::Code128, LabelGeometry::default());

        let mut expected = vec![0x1B, 0x40, 0x1D, 0x57, 0x96, 0x01, 0x1B, 0x64, 16];
        expected.extend_from_slice(&[0x1D, 0x68, 120, 0x1D, 0x77, 4, 0x1D, 0x48, 0x02]);
        expected.extend_from_slice(&[0x1D, 0x6B, 73, 12]);
        expected.extend_from_slice(b"123456789012");
        expected.extend_from_slice(&[0x1B, 0x64, 67, 0x1D, 0x56, 0x00]);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_wide_label_omits_width() {
        // 101.6mm @ 203dpi = 812 dots
        let data = encode("X", Symbology::Code128, LabelGeometry::new(101.6, 25.4));
        assert!(!data.windows(2).any(|w| w == [0x1D, 0x57]));

        // 72mm @ 203dpi = 575 dots
        let data = encode("X", Symbology::Code128, LabelGeometry::new(72.0, 25.4));
        assert!(data.windows(2).any(|w| w == [0x1D, 0x57]));
    }

    #[test]
    fn test_zero_margin_skips_top_feed() {
        let g = LabelGeometry::default().with_margins(0.0, 0.0);
        let data = encode("X", Symbology::Code128, g);
        // init, width, then straight to barcode height
        assert_eq!(&data[6..8], &[0x1D, 0x68]);
    }

    #[test]
    fn test_clamping() {
        // 100mm barcode @ 600dpi = 2362 dots high, module width 10
        let g = LabelGeometry::new(50.8, 50.8)
            .with_dpi(600)
            .with_margins(20.0, 0.0)
            .with_barcode_size(100.0, 100.0);
        let data = encode("4006381333931", Symbology::Ean13, g);

        let pos = |cmd: [u8; 2]| data.windows(2).position(|w| w == cmd).unwrap();
        assert_eq!(data[pos([0x1B, 0x64]) + 2], 255); // margin 472 dots
        assert_eq!(data[pos([0x1D, 0x68]) + 2], 255);
        assert_eq!(data[pos([0x1D, 0x77]) + 2], 6);
        assert_eq!(data[pos([0x1D, 0x6B]) + 2], 67);

        // label shorter than barcode + margin: bottom feed saturates at 0
        let tail = &data[data.len() - 6..];
        assert_eq!(tail, &[0x1B, 0x64, 0, 0x1D, 0x56, 0x00]);
    }

    #[test]
    fn test_long_data_truncated() {
        let long = "A".repeat(300);
        let data = encode(&long, Symbology::Code128, LabelGeometry::default());
        let pos = data.windows(2).position(|w| w == [0x1D, 0x6B]).unwrap();
        assert_eq!(data[pos + 3], 255);
        assert_eq!(data.len(), pos + 4 + 255 + 6);
    }
}
