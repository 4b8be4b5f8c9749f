//! Millimetre to device unit conversion

/// Millimetres per inch
const MM_PER_INCH: f64 = 25.4;

/// Convert millimetres to printer dots at the given resolution.
///
/// Computes `round(mm * dpi / 25.4)`, rounding half away from zero.
/// Negative or NaN input saturates to 0.
pub fn mm_to_dots(mm: f64, dpi: u32) -> u32 {
    let dots = (mm * f64::from(dpi) / MM_PER_INCH).round();
    if dots.is_nan() || dots <= 0.0 {
        0
    } else if dots >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        dots as u32
    }
}

/// Bar module width used by the ZPL/EPL/ESC-POS barcode commands.
///
/// One module per 10 mm of barcode width, at least 1.
pub fn module_width(barcode_width_mm: f64) -> u32 {
    let w = (barcode_width_mm / 10.0).round();
    if w.is_nan() || w < 1.0 {
        1
    } else if w >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        w as u32
    }
}
