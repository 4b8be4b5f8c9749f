//! Label geometry
//!
//! `LabelGeometry` is built once per print action with all defaults applied
//! and malformed values coerced, so encoders never see a missing or negative
//! field. `LabelGeometryInput` is the partial, deserializable form that
//! configuration files and front ends hand in.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::units::{mm_to_dots, module_width};

pub const DEFAULT_WIDTH_MM: f64 = 50.8;
pub const DEFAULT_HEIGHT_MM: f64 = 25.4;
pub const DEFAULT_MARGIN_TOP_MM: f64 = 2.0;
pub const DEFAULT_MARGIN_LEFT_MM: f64 = 2.0;
pub const DEFAULT_BARCODE_X_MM: f64 = 5.0;
pub const DEFAULT_BARCODE_Y_MM: f64 = 5.0;
pub const DEFAULT_BARCODE_WIDTH_MM: f64 = 40.0;
pub const DEFAULT_BARCODE_HEIGHT_MM: f64 = 15.0;
pub const DEFAULT_DPI: u32 = 203;
pub const DEFAULT_QUANTITY: u32 = 1;

/// Resolutions offered for thermal label printers
pub const SUPPORTED_DPI: [u32; 3] = [203, 300, 600];

/// Label orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Physical description of one label (millimetres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LabelGeometryInput", into = "LabelGeometryInput")]
pub struct LabelGeometry {
    width_mm: f64,
    height_mm: f64,
    margin_top_mm: f64,
    margin_left_mm: f64,
    barcode_x_mm: f64,
    barcode_y_mm: f64,
    barcode_width_mm: f64,
    barcode_height_mm: f64,
    dpi: u32,
    quantity: u32,
    orientation: Orientation,
}

impl Default for LabelGeometry {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            margin_top_mm: DEFAULT_MARGIN_TOP_MM,
            margin_left_mm: DEFAULT_MARGIN_LEFT_MM,
            barcode_x_mm: DEFAULT_BARCODE_X_MM,
            barcode_y_mm: DEFAULT_BARCODE_Y_MM,
            barcode_width_mm: DEFAULT_BARCODE_WIDTH_MM,
            barcode_height_mm: DEFAULT_BARCODE_HEIGHT_MM,
            dpi: DEFAULT_DPI,
            quantity: DEFAULT_QUANTITY,
            orientation: Orientation::Portrait,
        }
    }
}

/// Clamp a millimetre value: NaN/inf take the default, negatives become 0
fn coerce_mm(field: &'static str, value: f64, default: f64) -> f64 {
    if !value.is_finite() {
        debug!(field, value, default, "Non-finite length, using default");
        default
    } else if value < 0.0 {
        debug!(field, value, "Negative length clamped to 0");
        0.0
    } else {
        value
    }
}

impl LabelGeometry {
    /// Label of the given size with every other field at its default
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self::default().with_size(width_mm, height_mm)
    }

    pub fn with_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.width_mm = coerce_mm("width_mm", width_mm, DEFAULT_WIDTH_MM);
        self.height_mm = coerce_mm("height_mm", height_mm, DEFAULT_HEIGHT_MM);
        self
    }

    pub fn with_margins(mut self, top_mm: f64, left_mm: f64) -> Self {
        self.margin_top_mm = coerce_mm("margin_top_mm", top_mm, DEFAULT_MARGIN_TOP_MM);
        self.margin_left_mm = coerce_mm("margin_left_mm", left_mm, DEFAULT_MARGIN_LEFT_MM);
        self
    }

    pub fn with_barcode_position(mut self, x_mm: f64, y_mm: f64) -> Self {
        self.barcode_x_mm = coerce_mm("barcode_x_mm", x_mm, DEFAULT_BARCODE_X_MM);
        self.barcode_y_mm = coerce_mm("barcode_y_mm", y_mm, DEFAULT_BARCODE_Y_MM);
        self
    }

    pub fn with_barcode_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.barcode_width_mm =
            coerce_mm("barcode_width_mm", width_mm, DEFAULT_BARCODE_WIDTH_MM);
        self.barcode_height_mm =
            coerce_mm("barcode_height_mm", height_mm, DEFAULT_BARCODE_HEIGHT_MM);
        self
    }

    /// Set resolution; 0 falls back to 203 dpi
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = if dpi == 0 { DEFAULT_DPI } else { dpi };
        self
    }

    /// Set label count; 0 falls back to 1
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn margin_top_mm(&self) -> f64 {
        self.margin_top_mm
    }

    pub fn margin_left_mm(&self) -> f64 {
        self.margin_left_mm
    }

    pub fn barcode_x_mm(&self) -> f64 {
        self.barcode_x_mm
    }

    pub fn barcode_y_mm(&self) -> f64 {
        self.barcode_y_mm
    }

    pub fn barcode_width_mm(&self) -> f64 {
        self.barcode_width_mm
    }

    pub fn barcode_height_mm(&self) -> f64 {
        self.barcode_height_mm
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Convert every length to printer dots at this geometry's DPI
    pub fn resolve(&self) -> ResolvedGeometry {
        let dots = |mm| mm_to_dots(mm, self.dpi);
        ResolvedGeometry {
            width: dots(self.width_mm),
            height: dots(self.height_mm),
            margin_top: dots(self.margin_top_mm),
            margin_left: dots(self.margin_left_mm),
            barcode_x: dots(self.barcode_x_mm),
            barcode_y: dots(self.barcode_y_mm),
            barcode_width: dots(self.barcode_width_mm),
            barcode_height: dots(self.barcode_height_mm),
            module_width: module_width(self.barcode_width_mm),
            orientation: self.orientation,
        }
    }
}

/// One label in printer dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGeometry {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_left: u32,
    pub barcode_x: u32,
    pub barcode_y: u32,
    pub barcode_width: u32,
    pub barcode_height: u32,
    /// Narrow bar width in dots
    pub module_width: u32,
    pub orientation: Orientation,
}

/// Partially specified geometry, as received from configuration or JSON.
///
/// Absent fields take the documented defaults on conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelGeometryInput {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_left: Option<f64>,
    pub barcode_x: Option<f64>,
    pub barcode_y: Option<f64>,
    pub barcode_width: Option<f64>,
    pub barcode_height: Option<f64>,
    pub dpi: Option<u32>,
    pub quantity: Option<u32>,
    pub orientation: Option<Orientation>,
}

impl From<LabelGeometryInput> for LabelGeometry {
    fn from(input: LabelGeometryInput) -> Self {
        LabelGeometry::default()
            .with_size(
                input.width.unwrap_or(DEFAULT_WIDTH_MM),
                input.height.unwrap_or(DEFAULT_HEIGHT_MM),
            )
            .with_margins(
                input.margin_top.unwrap_or(DEFAULT_MARGIN_TOP_MM),
                input.margin_left.unwrap_or(DEFAULT_MARGIN_LEFT_MM),
            )
            .with_barcode_position(
                input.barcode_x.unwrap_or(DEFAULT_BARCODE_X_MM),
                input.barcode_y.unwrap_or(DEFAULT_BARCODE_Y_MM),
            )
            .with_barcode_size(
                input.barcode_width.unwrap_or(DEFAULT_BARCODE_WIDTH_MM),
                input.barcode_height.unwrap_or(DEFAULT_BARCODE_HEIGHT_MM),
            )
            .with_dpi(input.dpi.unwrap_or(DEFAULT_DPI))
            .with_quantity(input.quantity.unwrap_or(DEFAULT_QUANTITY))
            .with_orientation(input.orientation.unwrap_or_default())
    }
}

impl From<LabelGeometry> for LabelGeometryInput {
    fn from(g: LabelGeometry) -> Self {
        Self {
            width: Some(g.width_mm),
            height: Some(g.height_mm),
            margin_top: Some(g.margin_top_mm),
            margin_left: Some(g.margin_left_mm),
            barcode_x: Some(g.barcode_x_mm),
            barcode_y: Some(g.barcode_y_mm),
            barcode_width: Some(g.barcode_width_mm),
            barcode_height: Some(g.barcode_height_mm),
            dpi: Some(g.dpi),
            quantity: Some(g.quantity),
            orientation: Some(g.orientation),
        }
    }
}

/// A common label stock size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPreset {
    pub name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl LabelPreset {
    pub const ALL: [LabelPreset; 12] = [
        preset("1x2", 25.4, 50.8),
        preset("1.5x1", 38.1, 25.4),
        preset("2x1", 50.8, 25.4),
        preset("2x2", 50.8, 50.8),
        preset("2x3", 50.8, 76.2),
        preset("2x4", 50.8, 101.6),
        preset("3x1", 76.2, 25.4),
        preset("3x2", 76.2, 50.8),
        preset("4x2", 101.6, 50.8),
        preset("4x3", 101.6, 76.2),
        preset("4x6", 101.6, 152.4),
        preset("a4", 210.0, 297.0),
    ];

    /// Look up a preset by name (case-insensitive)
    pub fn find(name: &str) -> Option<LabelPreset> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Preset whose size is within 0.1mm of the given size
    pub fn matching(width_mm: f64, height_mm: f64) -> Option<LabelPreset> {
        Self::ALL.into_iter().find(|p| {
            (p.width_mm - width_mm).abs() < 0.1 && (p.height_mm - height_mm).abs() < 0.1
        })
    }

    /// Default geometry sized to this preset
    pub fn geometry(&self) -> LabelGeometry {
        LabelGeometry::new(self.width_mm, self.height_mm)
    }
}

const fn preset(name: &'static str, width_mm: f64, height_mm: f64) -> LabelPreset {
    LabelPreset {
        name,
        width_mm,
        height_mm,
    }
}
