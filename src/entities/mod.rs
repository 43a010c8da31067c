mod bookmark;
mod entity_service;
mod folder;
mod tag;

pub use bookmark::Bookmark;
pub use entity_service::EntityService;
pub use folder::Folder;
pub use tag::Tag;

use crate::errors::LarderError;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// The operations the remote API can perform on an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Retrieve all instances across all pages.
    FetchAll,
    /// Retrieve a single instance by id.
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match &self {
            Operation::FetchAll => "fetch all",
            Operation::Fetch => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        write!(f, "{}", operation_name)
    }
}

/// A typed entity living on the Larder API.
///
/// Implementors declare the endpoint they live under and which operations
/// the API structurally supports for them; unsupported operations are
/// rejected before any network call is made.
pub trait RemoteEntity: Serialize + DeserializeOwned + Send + Sync {
    /// The endpoint path segment for this entity type.
    const ENDPOINT: &'static str;

    /// The display name used in errors.
    const NAME: &'static str;

    /// The server-assigned id, if this entity has been persisted.
    fn id(&self) -> Option<&str>;

    /// Check entity-level preconditions before any network call is made.
    fn validate(&self) -> Result<(), LarderError> {
        Ok(())
    }

    /// Whether the API supports `operation` for this entity type.
    fn supports(operation: Operation) -> bool;
}
