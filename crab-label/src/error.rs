//! Error types for the label library

use thiserror::Error;

use crate::symbology::Symbology;

/// Label rendering and delivery errors
///
/// Geometry problems never show up here: out-of-range values are clamped
/// and unmapped symbologies fall back to a default code.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Barcode data is empty or blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Command language tag is not ZPL, EPL or ESC/POS
    #[error("Unsupported command language: {0}")]
    UnsupportedLanguage(String),

    /// Symbology tag is not one of the known symbologies
    #[error("Unknown symbology: {0}")]
    UnknownSymbology(String),

    /// Data does not satisfy the symbology's character/length rules
    #[error("Invalid {symbology} data: {reason}")]
    InvalidBarcode {
        symbology: Symbology,
        reason: &'static str,
    },

    /// Network connection error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for printer
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid sink configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for label operations
pub type LabelResult<T> = Result<T, LabelError>;
