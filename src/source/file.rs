use crate::model::{Listing, ListingDetail, ListingId, ListingSnapshot, SourceError};
use crate::source::traits::ListingSource;
use std::path::PathBuf;

/// Reads listings from a local JSON array, e.g. seed data for offline runs.
/// The file is re-read on every fetch.
pub struct FileListingSource {
    path: PathBuf,
}

impl FileListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_listings(&self) -> Result<Vec<Listing>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait::async_trait]
impl ListingSource for FileListingSource {
    async fn fetch_listings(&self) -> Result<ListingSnapshot, SourceError> {
        Ok(ListingSnapshot::new(self.read_listings().await?))
    }

    async fn fetch_listing(&self, id: &ListingId) -> Result<ListingDetail, SourceError> {
        let listing = self
            .read_listings()
            .await?
            .into_iter()
            .find(|l| &l.id == id)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))?;

        Ok(ListingDetail {
            listing,
            user: None,
            unavailable_dates: Vec::new(),
        })
    }
}
