//! Marker token validation

use crate::error::ReconcileError;

/// Validate a shadow marker token
///
/// A marker ends up embedded in filenames, so it must be non-empty and
/// must not contain dots (they would shift the recognized extension),
/// whitespace, or path separators.
///
/// # Errors
///
/// Returns [`ReconcileError::InvalidMarker`] for unusable tokens.
pub fn validate_marker(marker: &str) -> Result<(), ReconcileError> {
    let unusable = marker.is_empty()
        || marker
            .chars()
            .any(|c| c == '.' || c == '/' || c == '\\' || c.is_whitespace());

    if unusable {
        return Err(ReconcileError::InvalidMarker(marker.to_string()));
    }

    Ok(())
}
