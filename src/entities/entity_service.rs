use super::{Operation, RemoteEntity};
use crate::{client::RestApi, errors::LarderError, pagination};
use tokio::time::Duration;

/// A thin CRUD layer over the per-entity endpoints.
///
/// Which operations are available is declared by the entity type itself;
/// an unsupported operation and a failed validation are both rejected
/// before any network call is made.
#[derive(Clone)]
pub struct EntityService<A: RestApi> {
    api: A,
    api_url: String,
    throttling: Duration,
}

impl<A: RestApi> EntityService<A> {
    pub fn new(api: A, api_url: &str, throttling: Duration) -> Self {
        Self {
            api,
            api_url: api_url.trim_end_matches('/').to_owned(),
            throttling,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn throttling(&self) -> Duration {
        self.throttling
    }

    /// The base url for an entity type, e.g. `https://larder.io/api/1/@me/folders/`.
    pub fn endpoint_url<T: RemoteEntity>(&self) -> String {
        format!("{}/@me/{}/", self.api_url, T::ENDPOINT)
    }

    fn check_supported<T: RemoteEntity>(operation: Operation) -> Result<(), LarderError> {
        if T::supports(operation) {
            Ok(())
        } else {
            Err(LarderError::Unsupported {
                entity: T::NAME,
                operation: operation.to_string(),
            })
        }
    }

    /// Retrieve all instances of an entity type across all pages.
    pub async fn fetch_all<T: RemoteEntity>(&self) -> Result<Vec<T>, LarderError> {
        Self::check_supported::<T>(Operation::FetchAll)?;
        pagination::fetch_all_pages(&self.api, &self.endpoint_url::<T>(), self.throttling).await
    }

    /// Retrieve a single instance by id.
    pub async fn fetch<T: RemoteEntity>(&self, id: &str) -> Result<T, LarderError> {
        Self::check_supported::<T>(Operation::Fetch)?;
        let url = format!("{}{}/", self.endpoint_url::<T>(), id);
        let body = self.api.get(&url).await?;
        serde_json::from_value(body).map_err(LarderError::DeserializeJson)
    }

    /// Create or update an entity.
    ///
    /// A missing id means the entity has never been persisted and is
    /// created; the server response replaces the in-memory state, so the
    /// server-assigned id and timestamps become visible to the caller.
    pub async fn save<T: RemoteEntity>(&self, entity: &mut T) -> Result<(), LarderError> {
        entity.validate()?;

        let url = match entity.id() {
            None => {
                Self::check_supported::<T>(Operation::Create)?;
                format!("{}add/", self.endpoint_url::<T>())
            }
            Some(id) => {
                Self::check_supported::<T>(Operation::Update)?;
                format!("{}{}/edit/", self.endpoint_url::<T>(), id)
            }
        };

        let body = serde_json::to_value(&*entity).map_err(LarderError::SerializeJson)?;
        let response = self.api.post(&url, &body).await?;
        *entity = serde_json::from_value(response).map_err(LarderError::DeserializeJson)?;

        Ok(())
    }

    /// Delete a persisted entity.
    pub async fn delete<T: RemoteEntity>(&self, entity: &T) -> Result<(), LarderError> {
        Self::check_supported::<T>(Operation::Delete)?;
        let id = entity.id().ok_or(LarderError::MissingId)?;
        let url = format!("{}{}/delete/", self.endpoint_url::<T>(), id);
        self.api.delete(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::MockRestApi,
        entities::{Bookmark, Folder, Tag},
    };
    use assert_matches::assert_matches;
    use serde_json::json;

    const API_URL: &str = "https://larder.io/api/1";

    fn service() -> EntityService<MockRestApi> {
        EntityService::new(MockRestApi::new(), API_URL, Duration::from_millis(0))
    }

    #[test]
    fn test_endpoint_urls() {
        let service = service();
        assert_eq!(
            service.endpoint_url::<Folder>(),
            "https://larder.io/api/1/@me/folders/"
        );
        assert_eq!(
            service.endpoint_url::<Bookmark>(),
            "https://larder.io/api/1/@me/links/"
        );
        assert_eq!(
            service.endpoint_url::<Tag>(),
            "https://larder.io/api/1/@me/tags/"
        );
    }

    #[tokio::test]
    async fn test_fetch_single_is_unsupported() {
        let service = service();

        let res = service.fetch::<Bookmark>("b1").await;
        assert_matches!(res, Err(LarderError::Unsupported { entity: "bookmark", .. }));

        let res = service.fetch::<Tag>("t1").await;
        assert_matches!(res, Err(LarderError::Unsupported { entity: "tag", .. }));

        // Rejected before any network call.
        assert!(service.api().requests().is_empty());
    }

    #[tokio::test]
    async fn test_save_invalid_tag_makes_no_network_call() {
        let service = service();
        let mut tag = Tag::default();

        let res = service.save(&mut tag).await;
        assert_matches!(res, Err(LarderError::Validation { entity: "tag", .. }));
        assert!(service.api().requests().is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_tag_and_assigns_id() {
        let service = service();
        service.api().add(
            "https://larder.io/api/1/@me/tags/add/",
            json!({
                "id": "t1",
                "name": "rust",
                "color": "#b7410e",
                "created": "2019-01-01T12:00:00Z",
                "modified": "2019-01-01T12:00:00Z"
            }),
        );
        let mut tag = Tag::new("rust");

        service.save(&mut tag).await.unwrap();

        assert_eq!(tag.id.as_deref(), Some("t1"));
        assert_eq!(tag.name.as_deref(), Some("rust"));
        assert!(tag.created.is_some());
        assert!(tag.modified.is_some());
    }

    #[tokio::test]
    async fn test_save_updates_persisted_tag() {
        let service = service();
        service.api().add(
            "https://larder.io/api/1/@me/tags/t1/edit/",
            json!({"id": "t1", "name": "renamed"}),
        );
        let mut tag = Tag {
            id: Some("t1".to_owned()),
            name: Some("renamed".to_owned()),
            ..Default::default()
        };

        service.save(&mut tag).await.unwrap();

        assert_eq!(tag.id.as_deref(), Some("t1"));
        assert_eq!(tag.name.as_deref(), Some("renamed"));
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let service = service();
        let tag = Tag::new("rust");

        let res = service.delete(&tag).await;
        assert_matches!(res, Err(LarderError::MissingId));
        assert!(service.api().requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_persisted_tag() {
        let service = service();
        let tag = Tag {
            id: Some("t1".to_owned()),
            name: Some("rust".to_owned()),
            ..Default::default()
        };

        service.delete(&tag).await.unwrap();

        assert_eq!(
            service.api().requests(),
            ["https://larder.io/api/1/@me/tags/t1/delete/"]
        );
    }
}
