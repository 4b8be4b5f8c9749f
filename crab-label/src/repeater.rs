//! Batch assembly
//!
//! Repeats a single-label block `quantity` times into one print job.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::encoder::LabelEncoder;
use crate::error::LabelResult;
use crate::geometry::LabelGeometry;
use crate::language::CommandLanguage;
use crate::request::BarcodeRequest;
use crate::sink::suggested_file_name;

/// Encoded command stream for a batch of identical labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintJob {
    language: CommandLanguage,
    label_count: u32,
    file_name: String,
    #[serde(skip)]
    bytes: Vec<u8>,
}

impl PrintJob {
    pub fn language(&self) -> CommandLanguage {
        self.language
    }

    /// Number of label blocks in the stream
    pub fn label_count(&self) -> u32 {
        self.label_count
    }

    /// Suggested file name, `barcode-labels-<prefix>.<ext>`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Raw command bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Command text, for ZPL and EPL jobs
    pub fn as_text(&self) -> Option<&str> {
        if self.language.is_text() {
            std::str::from_utf8(&self.bytes).ok()
        } else {
            None
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encode `geometry.quantity()` labels and join them with the encoder's
/// separator. No separator follows the last label.
///
/// Blank data is rejected with `InvalidInput` before anything is encoded.
#[instrument(
    skip_all,
    fields(language = %encoder.language(), quantity = geometry.quantity())
)]
pub fn repeat_labels<E: LabelEncoder>(
    encoder: &E,
    request: &BarcodeRequest,
    geometry: &LabelGeometry,
) -> LabelResult<PrintJob> {
    request.ensure_data()?;

    let resolved = geometry.resolve();
    let quantity = geometry.quantity().max(1);
    let separator = encoder.separator();

    let mut bytes = Vec::new();
    for index in 0..quantity {
        if index > 0 {
            bytes.extend_from_slice(separator);
        }
        bytes.extend_from_slice(&encoder.encode_label(request, &resolved));
    }

    debug!(bytes = bytes.len(), "Labels encoded");

    Ok(PrintJob {
        language: encoder.language(),
        label_count: quantity,
        file_name: suggested_file_name(request.data(), encoder.language()),
        bytes,
    })
}
