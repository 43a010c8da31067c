use crate::{
    client::RestApi,
    entities::{Bookmark, EntityService, Folder},
    errors::LarderError,
    pagination,
};
use log::debug;
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// An explicit cache of folders keyed by id.
///
/// The loader owns it and keeps it current on every fetch; a refresh
/// invalidates the per-folder bookmark state before reloading.
#[derive(Debug, Default, Clone)]
pub struct FolderCache {
    folders: Arc<Mutex<HashMap<String, Folder>>>,
}

impl FolderCache {
    pub fn get(&self, id: &str) -> Option<Folder> {
        let folders = self.folders.lock();
        folders.get(id).cloned()
    }

    pub fn store(&self, folder: &Folder) {
        if let Some(id) = &folder.id {
            let mut folders = self.folders.lock();
            folders.insert(id.clone(), folder.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.folders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.lock().is_empty()
    }
}

/// A lazy bookmark loader for folders.
///
/// Loading is idempotent once a folder's bookmarks have been fetched; no
/// further network access happens until `refresh_bookmarks` discards the
/// loaded state.
#[derive(Clone)]
pub struct FolderLoader<A: RestApi> {
    service: EntityService<A>,
    cache: FolderCache,
}

impl<A: RestApi> FolderLoader<A> {
    pub fn new(service: EntityService<A>) -> Self {
        Self {
            service,
            cache: FolderCache::default(),
        }
    }

    pub fn cache(&self) -> &FolderCache {
        &self.cache
    }

    pub fn service(&self) -> &EntityService<A> {
        &self.service
    }

    /// Fetch the full folder list for the account, in server order.
    pub async fn fetch_folders(&self) -> Result<Vec<Folder>, LarderError> {
        let folders = self.service.fetch_all::<Folder>().await?;

        for folder in &folders {
            self.cache.store(folder);
        }

        Ok(folders)
    }

    /// The folder-scoped bookmark listing endpoint.
    fn bookmarks_url(&self, folder_id: &str) -> String {
        format!("{}{}/", self.service.endpoint_url::<Folder>(), folder_id)
    }

    /// Get the folder's bookmarks, fetching them only if not loaded yet.
    pub async fn get_bookmarks<'a>(
        &self,
        folder: &'a mut Folder,
    ) -> Result<&'a [Bookmark], LarderError> {
        if !folder.loaded() {
            let folder_id = folder.id.clone().ok_or(LarderError::MissingId)?;
            debug!("Fetching bookmarks for {}", folder.name);

            let bookmarks = pagination::fetch_all_pages::<Bookmark, _>(
                self.service.api(),
                &self.bookmarks_url(&folder_id),
                self.service.throttling(),
            )
            .await?;

            folder.set_bookmarks(bookmarks);
            self.cache.store(folder);
            debug!("Done fetching bookmarks for {}", folder.name);
        }

        Ok(&folder.bookmarks)
    }

    /// Discard the folder's bookmark state and reload it.
    pub async fn refresh_bookmarks(&self, folder: &mut Folder) -> Result<(), LarderError> {
        folder.invalidate();
        self.get_bookmarks(folder).await?;
        Ok(())
    }
}
