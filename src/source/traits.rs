use crate::model::{ListingDetail, ListingId, ListingSnapshot, SourceError};
use futures::future::join_all;

#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<ListingSnapshot, SourceError>;
    async fn fetch_listing(&self, id: &ListingId) -> Result<ListingDetail, SourceError>;
}

/// Fetches several listing details concurrently. Results keep the order of `ids`.
pub async fn fetch_details<S>(
    source: &S,
    ids: &[ListingId],
) -> Vec<Result<ListingDetail, SourceError>>
where
    S: ListingSource + ?Sized,
{
    join_all(ids.iter().map(|id| source.fetch_listing(id))).await
}
