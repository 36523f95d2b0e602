use crate::model::{Listing, ListingDetail, ListingId, ListingSnapshot, SourceError};
use crate::source::traits::ListingSource;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Reads listings from the marketplace HTTP API.
pub struct HttpListingSource {
    client: Client,
    base_url: String,
}

impl HttpListingSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(concat!("rental-finder/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self::from_client(client, base_url))
    }

    pub fn from_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn listings_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn listing_url(&self, id: &ListingId) -> String {
        format!("{}/listings/{}", self.base_url, id)
    }

    async fn get_text(&self, url: &str) -> Result<(StatusCode, String), SourceError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_listings(&self) -> Result<ListingSnapshot, SourceError> {
        let (status, body) = self.get_text(&self.listings_url()).await?;
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let listings: Vec<Listing> = serde_json::from_str(&body)?;
        Ok(ListingSnapshot::new(listings))
    }

    async fn fetch_listing(&self, id: &ListingId) -> Result<ListingDetail, SourceError> {
        let (status, body) = self.get_text(&self.listing_url(id)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    type Route = (&'static str, u16, &'static str);

    /// Serves canned responses by request path; unknown paths get a 404.
    async fn serve(routes: Vec<Route>) -> HttpListingSource {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    while read < buf.len() {
                        let n = stream.read(&mut buf[read..]).await.unwrap_or(0);
                        if n == 0 {
                            break;
                        }
                        read += n;
                        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let request = String::from_utf8_lossy(&buf[..read]);
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|(p, _, _)| *p == path)
                        .map(|(_, status, body)| (*status, *body))
                        .unwrap_or((404, r#"{"detail": "Listing not found"}"#));

                    let response = format!(
                        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        let client = Client::builder().no_proxy().build().unwrap();
        HttpListingSource::from_client(client, &format!("http://{}", addr))
    }

    #[test]
    fn urls_tolerate_trailing_slashes() {
        let source =
            HttpListingSource::new("http://localhost:8000//", Duration::from_secs(5)).unwrap();
        assert_eq!(source.listings_url(), "http://localhost:8000/");
        assert_eq!(
            source.listing_url(&ListingId::Num(42)),
            "http://localhost:8000/listings/42"
        );
        assert_eq!(
            source.listing_url(&ListingId::Text("abc".into())),
            "http://localhost:8000/listings/abc"
        );
    }

    #[tokio::test]
    async fn fetches_listings_and_details() {
        let source = serve(vec![
            (
                "/",
                200,
                r#"[{"id": 1, "title": "Kayak", "price": 30, "tags": ["kayak"]},
                    {"id": 2, "title": "Drill", "price": 25, "tags": null}]"#,
            ),
            (
                "/listings/1",
                200,
                r#"{"id": 1, "title": "Kayak", "price": 30, "tags": ["kayak"],
                    "user": "Sam Rivera",
                    "unavailable_dates": [{"start": "2025-07-01", "end": "2025-07-03"}]}"#,
            ),
        ])
        .await;

        let snapshot = source.fetch_listings().await.unwrap();
        assert_eq!(snapshot.listings.len(), 2);
        assert!(snapshot.listings[1].tags.is_empty());

        let detail = source.fetch_listing(&ListingId::Num(1)).await.unwrap();
        assert_eq!(detail.user.as_deref(), Some("Sam Rivera"));
        assert_eq!(detail.unavailable_dates.len(), 1);
    }

    #[tokio::test]
    async fn maps_error_statuses() {
        let source = serve(vec![("/listings/3", 500, r#"{"detail": "boom"}"#)]).await;

        let missing = source.fetch_listing(&ListingId::Num(2)).await;
        assert!(matches!(missing, Err(SourceError::NotFound(ref id)) if id == "2"));

        let broken = source.fetch_listing(&ListingId::Num(3)).await;
        assert!(matches!(broken, Err(SourceError::Status(500))));

        // "/" is not routed either, but only detail lookups map 404 to NotFound
        let listings = source.fetch_listings().await;
        assert!(matches!(listings, Err(SourceError::Status(404))));
    }

    #[tokio::test]
    async fn bad_body_is_a_decode_error() {
        let source = serve(vec![
            ("/", 200, "<html>maintenance</html>"),
            ("/listings/1", 200, r#"{"id": 1}"#),
        ])
        .await;

        assert!(matches!(source.fetch_listings().await, Err(SourceError::Decode(_))));
        assert!(matches!(
            source.fetch_listing(&ListingId::Num(1)).await,
            Err(SourceError::Decode(_))
        ));
    }
}
