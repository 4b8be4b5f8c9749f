//! ZPL label encoding

use crate::encoder::LabelEncoder;
use crate::format::{ZPL_FALLBACK, map_symbology};
use crate::geometry::ResolvedGeometry;
use crate::language::CommandLanguage;
use crate::request::BarcodeRequest;

/// Wide-to-narrow bar ratio passed to `^BY`
const WIDE_BAR_RATIO: u32 = 3;

/// ZPL label encoder
///
/// Barcode data goes into `^FD` verbatim. `^` and `~` in the data are not
/// escaped and will be read by the printer as command prefixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZplEncoder;

impl ZplEncoder {
    /// Render one `^XA ... ^XZ` block
    pub fn render(&self, request: &BarcodeRequest, g: &ResolvedGeometry) -> String {
        let code = map_symbology(request.symbology(), CommandLanguage::Zpl)
            .as_text()
            .unwrap_or(ZPL_FALLBACK);

        [
            "^XA".to_string(),
            format!("^PW{}", g.width),
            format!("^LL{}", g.height),
            format!("^FO{},{}", g.barcode_x, g.barcode_y),
            format!("^BY{},{},{}", g.module_width, WIDE_BAR_RATIO, g.barcode_height),
            format!("^{}N,{},Y,N,N", code, g.barcode_height),
            format!("^FD{}^FS", request.data()),
            "^XZ".to_string(),
        ]
        .join("\n")
    }
}

impl LabelEncoder for ZplEncoder {
    fn language(&self) -> CommandLanguage {
        CommandLanguage::Zpl
    }

    fn encode_label(&self, request: &BarcodeRequest, geometry: &ResolvedGeometry) -> Vec<u8> {
        self.render(request, geometry).into_bytes()
    }

    fn separator(&self) -> &'static [u8] {
        b"\n"
    }
}
