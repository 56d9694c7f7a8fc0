//! Common shape of every stored record.

use uuid::Uuid;

use crate::constants::not_found_message;

/// A record owned by a store and identified by a store-assigned id.
///
/// Each entity type names the payload it is created from. The store pairs a
/// freshly generated id with that payload via [`Entity::from_create`]; the id
/// is never reassigned afterwards.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Creation payload: every field of the entity except its id.
    type Create: Send + 'static;

    /// Human name of the resource, used in client-facing messages.
    const RESOURCE: &'static str;

    /// Store-assigned identifier.
    fn id(&self) -> Uuid;

    /// Build the entity from a generated id and a creation payload.
    fn from_create(id: Uuid, data: Self::Create) -> Self;

    /// Message reported when a lookup by id finds nothing.
    fn not_found_message() -> String {
        not_found_message(Self::RESOURCE)
    }
}
