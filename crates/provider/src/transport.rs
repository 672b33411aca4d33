//! Live-versus-simulated transport selection.

/// Marker carried by placeholder credentials that were never configured.
pub const UNSET_CREDENTIAL_MARKER: &str = "DEFAULT_WARNING";

/// Where a provider sends its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// Call the real provider endpoint over HTTP.
    Live,
    /// Hand the payload to the in-process simulated responder.
    Simulated,
}

impl TransportMode {
    /// Decide the transport for one send.
    ///
    /// The explicit `simulate` flag is checked first. Otherwise a missing
    /// credential, or one still carrying [`UNSET_CREDENTIAL_MARKER`], also
    /// selects simulation.
    pub fn select(simulate: bool, api_key: &str) -> Self {
        if simulate || !has_usable_credential(api_key) {
            Self::Simulated
        } else {
            Self::Live
        }
    }
}

/// Returns `true` if `api_key` is non-empty and not a placeholder.
pub fn has_usable_credential(api_key: &str) -> bool {
    !api_key.is_empty() && !api_key.contains(UNSET_CREDENTIAL_MARKER)
}

/// The credential value handed to a simulated responder, with the
/// placeholder suffix stripped.
pub fn simulator_credential(api_key: &str) -> String {
    api_key.replace(&format!("_{UNSET_CREDENTIAL_MARKER}"), "")
}
