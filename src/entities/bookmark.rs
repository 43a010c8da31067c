use super::{Operation, RemoteEntity, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// A bookmark in a Larder folder.
///
/// Bookmarks are owned by the folder that fetched them; there is no
/// cross-folder sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub url: Url,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub domain: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Open key/value metadata the server attaches to the bookmark.
    #[serde(default)]
    pub meta: Map<String, Value>,
}

impl Bookmark {
    /// A bookmark that has not been persisted yet.
    pub fn new(url: Url, title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            url,
            description: String::new(),
            domain: None,
            created: None,
            modified: None,
            tags: Vec::new(),
            meta: Map::new(),
        }
    }
}

impl RemoteEntity for Bookmark {
    const ENDPOINT: &'static str = "links";
    const NAME: &'static str = "bookmark";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // A bookmark cannot be retrieved by id; get bookmarks from folders
    // instead. This is a limitation of the API.
    fn supports(operation: Operation) -> bool {
        !matches!(operation, Operation::Fetch)
    }
}
