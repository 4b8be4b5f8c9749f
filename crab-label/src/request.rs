//! Barcode content to encode

use serde::{Deserialize, Serialize};

use crate::error::{LabelError, LabelResult};
use crate::symbology::Symbology;

/// Barcode payload and symbology
///
/// Data is kept verbatim. Symbology rules are checked separately with
/// [`BarcodeRequest::validate`]; only emptiness is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeRequest {
    data: String,
    symbology: Symbology,
}

impl BarcodeRequest {
    /// Create a request, rejecting empty or whitespace-only data
    pub fn new(data: impl Into<String>, symbology: Symbology) -> LabelResult<Self> {
        let request = Self {
            data: data.into(),
            symbology,
        };
        request.ensure_data()?;
        Ok(request)
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Check the data against the symbology's rules
    pub fn validate(&self) -> LabelResult<()> {
        self.symbology.validate(&self.data)
    }

    /// Fails with `InvalidInput` if the data is blank.
    ///
    /// Deserialized requests bypass `new`, so encoding entry points call this too.
    pub(crate) fn ensure_data(&self) -> LabelResult<()> {
        if self.data.trim().is_empty() {
            return Err(LabelError::InvalidInput(
                "Barcode data cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
