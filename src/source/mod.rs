// Listing sources: marketplace HTTP API and local JSON files.

pub mod file;
pub mod http;
pub mod traits;

pub use file::FileListingSource;
pub use http::HttpListingSource;
pub use traits::{ListingSource, fetch_details};
