//! EPL label encoding

use crate::encoder::LabelEncoder;
use crate::format::{EPL_FALLBACK, map_symbology};
use crate::geometry::{Orientation, ResolvedGeometry};
use crate::language::CommandLanguage;
use crate::request::BarcodeRequest;

/// EPL label encoder
///
/// Data is wrapped in double quotes without escaping; a `"` inside the
/// payload ends the field early.
#[derive(Debug, Clone, Copy, Default)]
pub struct EplEncoder;

impl EplEncoder {
    /// Render one `N ... P1` block
    pub fn render(&self, request: &BarcodeRequest, g: &ResolvedGeometry) -> String {
        let code = map_symbology(request.symbology(), CommandLanguage::Epl)
            .as_text()
            .unwrap_or(EPL_FALLBACK);

        let orientation = match g.orientation {
            Orientation::Portrait => "O",
            Orientation::Landscape => "R",
        };

        // B/b p1,p2,p3(rotation),p4(type sel),p5(narrow),p6(wide),p7(height),p8(HRI),"data"
        [
            "N".to_string(),
            orientation.to_string(),
            format!("q{}", g.width),
            format!("D{}", g.height),
            format!(
                "{}{},{},0,1,{},{},{},B,\"{}\"",
                code,
                g.barcode_x,
                g.barcode_y,
                g.module_width,
                g.module_width,
                g.barcode_height,
                request.data()
            ),
            "P1".to_string(),
        ]
        .join("\n")
    }
}

impl LabelEncoder for EplEncoder {
    fn language(&self) -> CommandLanguage {
        CommandLanguage::Epl
    }

    fn encode_label(&self, request: &BarcodeRequest, geometry: &ResolvedGeometry) -> Vec<u8> {
        self.render(request, geometry).into_bytes()
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

    #[test]
    fn test_default_label() {
        let req = BarcodeRequest::new("123456789012", Symbology::Code128).unwrap();
        let epl = EplEncoder.render(&req, &LabelGeometry::default().resolve());

        assert_eq!(
            epl,
            "N\nO\nq406\nD203\nb40,40,0,1,4,4,120,B,\"123456789012\"\nP1"
        );
    }

    #[test]
    fn test_landscape() {
        let req = BarcodeRequest::new("10012345678902", Symbology::Itf14).unwrap();
        let g = LabelGeometry::default().with_orientation(Orientation::Landscape);
        let epl = EplEncoder.render(&req, &g.resolve());

        let lines: Vec<&str> = epl.lines().collect();
        assert_eq!(lines[1], "R");
        assert!(lines[4].starts_with("I40,40,"));
    }

    #[test]
    fn test_ean_codes_share_b() {
        let g = LabelGeometry::default().resolve();
        for (data, sym) in [
            ("4006381333931", Symbology::Ean13),
            ("96385074", Symbology::Ean8),
            ("036000291452", Symbology::Upc),
        ] {
            let req = BarcodeRequest::new(data, sym).unwrap();
            let epl = EplEncoder.render(&req, &g);
            assert!(epl.contains(&format!("B40,40,0,1,4,4,120,B,\"{}\"", data)));
        }
    }
}
