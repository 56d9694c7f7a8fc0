//! Domain-level constants.
//!
//! Fixed messages shared by every layer that talks about these entities.

// =============================================================================
// Resources
// =============================================================================

/// Human name of the user resource
pub const RESOURCE_USER: &str = "User";

/// Human name of the deck resource
pub const RESOURCE_DECK: &str = "Deck";

/// Human name of the card resource
pub const RESOURCE_CARD: &str = "Card";

// =============================================================================
// Messages
// =============================================================================

/// Static greeting returned by the root liveness endpoint
pub const ROOT_MESSAGE: &str = "Porcana backend";

/// Reported when a deck code is not base64-encoded UTF-8 text
pub const INVALID_DECK_CODE_MESSAGE: &str = "Invalid deck code";

/// Build the 404 message for a resource, e.g. "Deck not found"
pub fn not_found_message(resource: &str) -> String {
    format!("{} not found", resource)
}
