pub mod cache;
pub mod rates;

use cambio_core::CambioError;

/// Reject an empty base before any side effect; surrounding whitespace is dropped.
pub(crate) fn validate_base(base: &str) -> Result<&str, CambioError> {
    let base = base.trim();
    if base.is_empty() {
        return Err(CambioError::invalid_arg("base currency must not be empty"));
    }
    Ok(base)
}

/// Absent, empty and blank filters all mean "no filter".
pub(crate) fn normalize_symbols(symbols: Option<&str>) -> Option<&str> {
    symbols.map(str::trim).filter(|s| !s.is_empty())
}
