use crate::{client::RestApi, errors::LarderError};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize};
use tokio::time::{self, Duration};

/// A single page of the API's paginated list envelope.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// The total number of records the server reports across all pages.
    #[serde(default)]
    pub count: Option<u64>,
    /// The url of the next page, or null when this is the last page.
    pub next: Option<String>,
    /// The records of this page, in server-assigned order.
    pub results: Vec<T>,
}

/// Walk the page cursor starting at `start_url` until the API reports no
/// further page, accumulating the decoded records in server order.
///
/// Consecutive page requests are separated by `throttling` to respect the
/// remote rate limit. Any transport or decode error aborts the whole fetch;
/// records accumulated so far are discarded.
pub async fn fetch_all_pages<T, A>(
    api: &A,
    start_url: &str,
    throttling: Duration,
) -> Result<Vec<T>, LarderError>
where
    T: DeserializeOwned,
    A: RestApi,
{
    let mut records = Vec::new();
    let mut next_url = Some(start_url.to_owned());

    while let Some(url) = next_url {
        debug!("Fetch page {url}");
        let body = api.get(&url).await?;
        let page =
            serde_json::from_value::<Page<T>>(body).map_err(LarderError::DeserializeJson)?;
        records.extend(page.results);
        next_url = page.next;

        if next_url.is_some() {
            time::sleep(throttling).await;
        }
    }

    Ok(records)
}
