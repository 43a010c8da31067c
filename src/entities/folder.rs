use super::{Bookmark, Operation, RemoteEntity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A folder in a Larder account.
///
/// The folder listing embeds subfolders eagerly, while the contained
/// bookmarks are loaded lazily through [`FolderLoader`](crate::FolderLoader):
/// `bookmarks` is valid only once [`Folder::loaded`] returns true, which
/// distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// The id of the parent folder, if this is a subfolder.
    #[serde(default)]
    pub parent: Option<String>,
    /// The number of bookmarks the server reports for this folder.
    #[serde(default)]
    pub links: u64,
    /// Subfolders embedded in the folder's page.
    ///
    /// The API allows for subfolders to exist, although the web interface
    /// currently cannot create them.
    #[serde(default)]
    pub folders: Vec<Folder>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(skip)]
    loaded: bool,
}

impl Folder {
    /// Whether the bookmarks of this folder have been fetched.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn subfolders(&self) -> &[Folder] {
        &self.folders
    }

    /// Replace the folder's bookmarks after a successful fetch.
    pub(crate) fn set_bookmarks(&mut self, bookmarks: Vec<Bookmark>) {
        self.bookmarks = bookmarks;
        self.loaded = true;
    }

    /// Drop the bookmark state so the next load fetches again.
    pub(crate) fn invalidate(&mut self) {
        self.bookmarks.clear();
        self.loaded = false;
    }
}

impl RemoteEntity for Folder {
    const ENDPOINT: &'static str = "folders";
    const NAME: &'static str = "folder";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // The folder's canonical url returns the bookmarks it contains, so a
    // single folder cannot be fetched by id; the folder cache covers that.
    fn supports(operation: Operation) -> bool {
        !matches!(operation, Operation::Fetch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_subfolders() {
        let folder = serde_json::from_value::<Folder>(json!({
            "id": "f1",
            "name": "dev",
            "parent": null,
            "links": 2,
            "folders": [{"id": "f2", "name": "rust", "parent": "f1"}],
            "created": "2019-01-01T12:00:00Z",
            "modified": "2019-06-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(folder.id.as_deref(), Some("f1"));
        assert_eq!(folder.name, "dev");
        assert_eq!(folder.links, 2);
        assert_eq!(folder.subfolders().len(), 1);
        assert_eq!(folder.subfolders()[0].parent.as_deref(), Some("f1"));
        assert!(!folder.loaded());
        assert!(folder.bookmarks.is_empty());
    }

    #[test]
    fn test_loaded_after_set_bookmarks() {
        let mut folder = Folder::default();
        assert!(!folder.loaded());

        // An empty fetch result still counts as loaded.
        folder.set_bookmarks(Vec::new());
        assert!(folder.loaded());

        folder.invalidate();
        assert!(!folder.loaded());
    }
}
