//! User entity and its creation payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::RESOURCE_USER;
use crate::entity::Entity;

/// User entity
///
/// Neither `username` nor `email` is required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    /// Email address (not validated)
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
}

/// User creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    #[cfg_attr(feature = "openapi", schema(example = "alice"))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub email: String,
}

impl Entity for User {
    type Create = CreateUser;

    const RESOURCE: &'static str = RESOURCE_USER;

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_create(id: Uuid, data: CreateUser) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
        }
    }
}
