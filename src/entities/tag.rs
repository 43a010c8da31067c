use super::{Operation, RemoteEntity};
use crate::errors::LarderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag attached to bookmarks.
///
/// A tag cannot be looked up by name; to edit a tag you didn't create,
/// fetch all tags first and search in there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<String>,
    /// Required for creation.
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl RemoteEntity for Tag {
    const ENDPOINT: &'static str = "tags";
    const NAME: &'static str = "tag";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<(), LarderError> {
        if self.name.as_ref().is_some_and(|name| !name.is_empty()) {
            Ok(())
        } else {
            Err(LarderError::Validation {
                entity: Self::NAME,
                reason: "a tag requires a name".to_owned(),
            })
        }
    }

    // A tag cannot be retrieved by name or id.
    fn supports(operation: Operation) -> bool {
        !matches!(operation, Operation::Fetch)
    }
}
