//! Manifest extraction from free-form OLS answers
//!
//! Textual heuristic only: everything from the first `apiVersion: ` on is
//! treated as the manifest. No YAML parsing happens here.

/// Marker that starts a Kubernetes manifest
pub const MANIFEST_MARKER: &str = "apiVersion: ";

/// Strip the prose in front of the manifest
///
/// Returns the suffix starting at the first marker, or `""` if there is none.
pub fn extract_yaml(response: &str) -> &str {
    match response.find(MANIFEST_MARKER) {
        Some(idx) => &response[idx..],
        None => "",
    }
}
