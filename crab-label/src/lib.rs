//! # crab-label
//!
//! Barcode label command generation for thermal label printers.
//!
//! ## Scope
//!
//! This crate turns "print this barcode on a label of this size" into a
//! printer command stream:
//! - ZPL and EPL (text)
//! - ESC/POS (binary)
//!
//! It also covers the pieces around that: millimetre to dot conversion,
//! symbology validation, label presets, and delivery to a file or a raw
//! TCP printer.
//!
//! Encoding is permissive. Out-of-range geometry is clamped and symbologies
//! a language cannot print fall back to CODE128; only blank data and unknown
//! language tags are errors.
//!
//! ## Example
//!
//! ```ignore
//! use crab_label::{
//!     BarcodeRequest, CommandLanguage, LabelGeometry, LabelSink, NetworkPrinter, Symbology,
//!     render_labels,
//! };
//!
//! let request = BarcodeRequest::new("123456789012", Symbology::Code128)?;
//! let geometry = LabelGeometry::default().with_quantity(3);
//!
//! let job = render_labels(&request, &geometry, CommandLanguage::Zpl)?;
//! assert!(job.as_text().unwrap().starts_with("^XA"));
//!
//! // Send to network printer
//! let printer = NetworkPrinter::from_addr("192.168.1.100:9100")?;
//! printer.send(&job).await?;
//! ```

mod encoder;
mod epl;
mod error;
mod escpos;
mod format;
mod geometry;
mod language;
mod printer;
mod repeater;
mod request;
mod sink;
mod symbology;
mod units;
mod zpl;

// Re-exports
pub use encoder::{Encoder, LabelEncoder};
pub use epl::EplEncoder;
pub use error::{LabelError, LabelResult};
pub use escpos::{EscPosBuilder, EscPosEncoder, HriPosition, MAX_PRINT_AREA_DOTS};
pub use format::{FormatCode, map_symbology};
pub use geometry::{
    LabelGeometry, LabelGeometryInput, LabelPreset, Orientation, ResolvedGeometry, SUPPORTED_DPI,
};
pub use language::CommandLanguage;
pub use printer::{DEFAULT_PORT, NetworkPrinter};
pub use repeater::{PrintJob, repeat_labels};
pub use request::BarcodeRequest;
pub use sink::{FileSink, LabelSink, suggested_file_name};
pub use symbology::Symbology;
pub use units::{mm_to_dots, module_width};
pub use zpl::ZplEncoder;

/// Encode `geometry.quantity()` labels for `request` in `language`.
pub fn render_labels(
    request: &BarcodeRequest,
    geometry: &LabelGeometry,
    language: CommandLanguage,
) -> LabelResult<PrintJob> {
    repeat_labels(&Encoder::from(language), request, geometry)
}
